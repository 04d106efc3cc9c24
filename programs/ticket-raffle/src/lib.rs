#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

/// Seeds, account sizes and byte offsets of the persisted layouts.
pub mod constants;

/// Custom error codes returned by the raffle instructions.
pub mod error;

/// Events emitted on every raffle state transition.
pub mod events;

/// Instruction handlers: initialize, buy, draw, claim, close and migrate.
pub mod instructions;

/// Raw byte reader and repair for raffle accounts.
pub mod layout;

/// Derived addresses of raffles, vaults and tickets.
pub mod pda;

/// On-chain entropy for the winner draw.
pub mod randomness;

/// Filters and decoders for listing raffles and tickets off-chain.
pub mod scan;

/// The `Raffle` and `Ticket` account definitions and their state rules.
pub mod state;

mod utils;

declare_id!("Gxi64mihQTXmwW4PXGpNV7inGKBxrx2i9nPpUKL2iNkH");

#[program]
pub mod ticket_raffle {
    use super::*;

    pub fn initialize_raffle(
        ctx: Context<InitializeRaffle>,
        ticket_price: u64,
        end_time: i64,
    ) -> Result<()> {
        process_initialize_raffle(ctx, ticket_price, end_time)
    }

    pub fn buy_ticket(ctx: Context<BuyTicket>) -> Result<()> {
        process_buy_ticket(ctx)
    }

    pub fn draw_winner(ctx: Context<DrawWinner>) -> Result<()> {
        process_draw_winner(ctx)
    }

    pub fn claim_prize(ctx: Context<ClaimPrize>) -> Result<()> {
        process_claim_prize(ctx)
    }

    pub fn close_raffle(ctx: Context<CloseRaffle>) -> Result<()> {
        process_close_raffle(ctx)
    }

    /// Administrative repair for raffle records with an invalid `prize_claimed` byte.
    pub fn migrate_raffle(ctx: Context<MigrateRaffle>) -> Result<()> {
        process_migrate_raffle(ctx)
    }
}
