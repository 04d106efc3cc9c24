use anchor_lang::prelude::*;

use crate::constants::{RAFFLE_SEED, VAULT_SEED};
use crate::error::RaffleError;
use crate::events::RaffleInitialized;
use crate::state::{rent_shortfall, Raffle};
use crate::utils::{create_pda_account, is_program_account, transfer_lamports};

/// Accounts required to open a raffle.
///
/// The raffle record is created by hand rather than with `init` so that an
/// occupied address surfaces as `AlreadyExists` instead of a system program error.
#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    /// Creator of the raffle; pays rent for the record and the vault.
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Raffle record PDA, one per creator.
    /// CHECK: Address is pinned by the seeds; contents are written in the handler.
    #[account(
        mut,
        seeds = [RAFFLE_SEED, creator.key().as_ref()],
        bump,
    )]
    pub raffle: UncheckedAccount<'info>,

    /// Escrow vault PDA holding ticket proceeds.
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Opens a raffle for the signing creator.
///
/// # Arguments
/// * `ticket_price` - Price of one ticket in lamports, must be non-zero
/// * `end_time` - Unix timestamp when sales stop, must be in the future
pub fn process_initialize_raffle(
    ctx: Context<InitializeRaffle>,
    ticket_price: u64,
    end_time: i64,
) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_info = ctx.accounts.raffle.to_account_info();

    require!(
        !is_program_account(&raffle_info),
        RaffleError::AlreadyExists
    );

    let creator = ctx.accounts.creator.key();
    let record = Raffle::new(
        creator,
        ticket_price,
        end_time,
        clock.unix_timestamp,
        ctx.bumps.raffle,
    )?;

    let raffle_seeds: &[&[u8]] = &[RAFFLE_SEED, creator.as_ref(), &[ctx.bumps.raffle]];
    create_pda_account(
        &ctx.accounts.creator.to_account_info(),
        &raffle_info,
        &ctx.accounts.system_program.to_account_info(),
        8 + Raffle::INIT_SPACE,
        raffle_seeds,
    )?;

    {
        let mut data = raffle_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        record.try_serialize(&mut writer)?;
    }

    // The vault keeps a zero-data rent floor so it survives the claim.
    let vault_floor = Rent::get()?.minimum_balance(0);
    let vault_topup = rent_shortfall(vault_floor, ctx.accounts.vault.lamports());
    if vault_topup > 0 {
        transfer_lamports(
            &ctx.accounts.creator.to_account_info(),
            &ctx.accounts.vault.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            vault_topup,
        )?;
    }

    msg!("Raffle: {}", raffle_info.key());
    msg!("Ticket price: {}", ticket_price);
    msg!("End time: {}", end_time);

    emit!(RaffleInitialized {
        raffle: raffle_info.key(),
        creator,
        ticket_price,
        end_time,
    });

    Ok(())
}
