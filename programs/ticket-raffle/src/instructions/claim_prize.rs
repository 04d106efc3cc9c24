use anchor_lang::prelude::*;

use crate::constants::{RAFFLE_SEED, TICKET_SEED, VAULT_SEED};
use crate::error::RaffleError;
use crate::events::PrizeClaimed;
use crate::state::{disbursable, Raffle, Ticket};
use crate::utils::transfer_from_vault;

/// Accounts required for claiming the raffle prize.
///
/// Ensures:
/// 1. The ticket belongs to this raffle and sits at its canonical address.
/// 2. The vault is the raffle's escrow.
#[derive(Accounts)]
pub struct ClaimPrize<'info> {
    /// Holder of the winning ticket; receives the prize.
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.creator.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The ticket presented as the winner.
    #[account(
        seeds = [TICKET_SEED, raffle.key().as_ref(), ticket.ticket_number.to_le_bytes().as_ref()],
        bump = ticket.bump,
        has_one = raffle @ RaffleError::NotTicketOwner,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Pays out the escrow to the holder of the winning ticket.
///
/// Everything above the vault's rent floor goes to the claimant; the floor stays
/// so the vault remains a valid account until the raffle is closed.
pub fn process_claim_prize(ctx: Context<ClaimPrize>) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    ctx.accounts
        .raffle
        .record_claim(&claimant, &ctx.accounts.ticket)?;

    let rent_floor = Rent::get()?.minimum_balance(0);
    let prize_amount = disbursable(ctx.accounts.vault.lamports(), rent_floor);

    let raffle_key = ctx.accounts.raffle.key();
    let vault_seeds: &[&[u8]] = &[VAULT_SEED, raffle_key.as_ref(), &[ctx.bumps.vault]];
    transfer_from_vault(
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.claimant.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        vault_seeds,
        prize_amount,
    )?;

    msg!("Prize of {} lamports claimed by {}", prize_amount, claimant);

    emit!(PrizeClaimed {
        raffle: raffle_key,
        winner: claimant,
        ticket_number: ctx.accounts.ticket.ticket_number,
        amount: prize_amount,
    });

    Ok(())
}
