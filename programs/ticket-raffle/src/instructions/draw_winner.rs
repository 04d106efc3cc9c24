use anchor_lang::prelude::*;
use solana_program::sysvar::slot_hashes;

use crate::constants::RAFFLE_SEED;
use crate::events::WinnerDrawn;
use crate::randomness::{draw_entropy, newest_slot_hash};
use crate::state::Raffle;

/// Accounts required to draw a raffle winner.
///
/// This ensures that:
/// 1. Only the raffle creator can draw.
/// 2. The raffle deadline has passed.
/// 3. At least one ticket was sold.
/// 4. A winner hasn't already been drawn.
#[derive(Accounts)]
pub struct DrawWinner<'info> {
    pub creator: Signer<'info>,

    /// The raffle to draw.
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.creator.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// CHECK: SlotHashes sysvar, read raw because it is too large to deserialize.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

pub fn process_draw_winner(ctx: Context<DrawWinner>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();
    let creator = ctx.accounts.creator.key();

    ctx.accounts
        .raffle
        .ensure_drawable(&creator, clock.unix_timestamp)?;

    let slot_hash = {
        let data = ctx.accounts.slot_hashes.try_borrow_data()?;
        newest_slot_hash(&data).unwrap_or_default()
    };
    let random = draw_entropy(&slot_hash, &clock, &raffle_key);

    let raffle = &mut ctx.accounts.raffle;
    let winning_ticket = raffle.record_draw(&creator, clock.unix_timestamp, random)?;

    msg!("Current slot: {}", clock.slot);
    msg!("Ticket count: {}", raffle.ticket_count);
    msg!("Winner ticket number: {}", winning_ticket);

    emit!(WinnerDrawn {
        raffle: raffle_key,
        winning_ticket,
        ticket_count: raffle.ticket_count,
        slot: clock.slot,
    });

    Ok(())
}
