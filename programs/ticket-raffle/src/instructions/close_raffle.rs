use anchor_lang::prelude::*;

use crate::constants::{RAFFLE_SEED, VAULT_SEED};
use crate::events::RaffleClosed;
use crate::state::Raffle;
use crate::utils::transfer_from_vault;

#[derive(Accounts)]
pub struct CloseRaffle<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Closed to the creator once the handler succeeds.
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.creator.as_ref()],
        bump = raffle.bump,
        close = creator,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Closes an ended raffle, returning the vault and the record's rent to the creator.
///
/// The vault is drained completely, rent floor included, which removes it.
pub fn process_close_raffle(ctx: Context<CloseRaffle>) -> Result<()> {
    let clock = Clock::get()?;
    let creator = ctx.accounts.creator.key();
    let raffle = &ctx.accounts.raffle;

    raffle.ensure_closable(&creator, clock.unix_timestamp)?;

    let prize_orphaned = raffle.prize_pending();
    if prize_orphaned {
        msg!(
            "Closing with unclaimed prize for ticket {:?}",
            raffle.winner.ticket_number()
        );
    }

    let raffle_key = raffle.key();
    let vault_lamports = ctx.accounts.vault.lamports();
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, raffle_key.as_ref(), &[ctx.bumps.vault]];
    transfer_from_vault(
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.creator.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        vault_seeds,
        vault_lamports,
    )?;

    msg!("Raffle closed, {} lamports returned from vault", vault_lamports);

    emit!(RaffleClosed {
        raffle: raffle_key,
        creator,
        vault_lamports_returned: vault_lamports,
        prize_orphaned,
    });

    Ok(())
}
