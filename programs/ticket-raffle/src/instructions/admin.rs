use anchor_lang::prelude::*;

use crate::error::RaffleError;
use crate::events::RaffleMigrated;
use crate::layout::repair_claim_flag;
use crate::program::TicketRaffle;

/// Accounts required to repair a raffle record written by an earlier layout.
///
/// Restricted to the program's upgrade authority; raffle creators cannot call it.
#[derive(Accounts)]
pub struct MigrateRaffle<'info> {
    pub authority: Signer<'info>,

    /// CHECK: Cannot be typed as `Account<Raffle>` because it does not decode; the
    /// handler validates the raw bytes.
    #[account(mut, owner = crate::ID)]
    pub old_raffle: UncheckedAccount<'info>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ RaffleError::Unauthorized
    )]
    pub program: Program<'info, TicketRaffle>,

    #[account(
        constraint = program_data.upgrade_authority_address == Some(authority.key()) @ RaffleError::Unauthorized
    )]
    pub program_data: Account<'info, ProgramData>,
}

/// Rewrites an invalid `prize_claimed` byte to `false` in place.
///
/// Fails with `MigrationNotRequired` on a record that already decodes, and with the
/// matching decode error when anything besides that byte is wrong.
pub fn process_migrate_raffle(ctx: Context<MigrateRaffle>) -> Result<()> {
    let raffle_info = ctx.accounts.old_raffle.to_account_info();
    let replaced_byte = {
        let mut data = raffle_info.try_borrow_mut_data()?;
        repair_claim_flag(&mut data)?
    };

    msg!("Migrated raffle: {}", raffle_info.key());
    msg!("Replaced prize_claimed byte: {}", replaced_byte);

    emit!(RaffleMigrated {
        raffle: raffle_info.key(),
        authority: ctx.accounts.authority.key(),
        replaced_byte,
    });

    Ok(())
}
