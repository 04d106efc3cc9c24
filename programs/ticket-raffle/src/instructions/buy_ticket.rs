use anchor_lang::prelude::*;

use crate::constants::{RAFFLE_SEED, TICKET_SEED, VAULT_SEED};
use crate::error::RaffleError;
use crate::events::TicketPurchased;
use crate::state::{ensure_affordable, rent_shortfall, Raffle, Ticket};
use crate::utils::{create_pda_account, is_program_account, transfer_lamports};

/// Accounts required to buy a raffle ticket.
///
/// The ticket address is derived from the raffle's current `ticket_count`, so a
/// buyer that read a stale count fails the seeds check and has to re-read.
#[derive(Accounts)]
pub struct BuyTicket<'info> {
    /// The account paying for the ticket.
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Raffle the ticket is bought for.
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.creator.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Ticket record for the next ticket number.
    /// CHECK: Address is pinned by the seeds; contents are written in the handler.
    #[account(
        mut,
        seeds = [TICKET_SEED, raffle.key().as_ref(), raffle.ticket_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub ticket: UncheckedAccount<'info>,

    /// Escrow vault receiving the ticket price.
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Buys the next ticket of a raffle for the caller.
///
/// Steps performed:
/// 1. Check the raffle still accepts purchases and the ticket slot is free.
/// 2. Check the buyer can pay the price plus the ticket's rent.
/// 3. Create the ticket record and move the price into the vault.
/// 4. Increment the raffle's ticket counter.
pub fn process_buy_ticket(ctx: Context<BuyTicket>) -> Result<()> {
    let clock = Clock::get()?;
    let ticket_info = ctx.accounts.ticket.to_account_info();
    let ticket_space = 8 + Ticket::INIT_SPACE;

    ctx.accounts.raffle.ensure_open(clock.unix_timestamp)?;
    require!(
        !is_program_account(&ticket_info),
        RaffleError::TicketAlreadyExists
    );

    let ticket_price = ctx.accounts.raffle.ticket_price;
    let ticket_rent = rent_shortfall(
        Rent::get()?.minimum_balance(ticket_space),
        ticket_info.lamports(),
    );
    ensure_affordable(ctx.accounts.buyer.lamports(), ticket_price, ticket_rent)?;

    let raffle_key = ctx.accounts.raffle.key();
    let buyer = ctx.accounts.buyer.key();
    let ticket_number = ctx.accounts.raffle.issue_ticket(clock.unix_timestamp)?;
    let ticket_number_bytes = ticket_number.to_le_bytes();
    let ticket_seeds: &[&[u8]] = &[
        TICKET_SEED,
        raffle_key.as_ref(),
        ticket_number_bytes.as_ref(),
        &[ctx.bumps.ticket],
    ];

    create_pda_account(
        &ctx.accounts.buyer.to_account_info(),
        &ticket_info,
        &ctx.accounts.system_program.to_account_info(),
        ticket_space,
        ticket_seeds,
    )?;

    let record = Ticket {
        raffle: raffle_key,
        buyer,
        ticket_number,
        bump: ctx.bumps.ticket,
    };
    {
        let mut data = ticket_info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        record.try_serialize(&mut writer)?;
    }

    transfer_lamports(
        &ctx.accounts.buyer.to_account_info(),
        &ctx.accounts.vault.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        ticket_price,
    )?;

    msg!("Ticket num: {}", ticket_number);

    emit!(TicketPurchased {
        raffle: raffle_key,
        ticket: ticket_info.key(),
        buyer,
        ticket_number,
        ticket_count_after: ctx.accounts.raffle.ticket_count,
        vault_lamports_after: ctx.accounts.vault.lamports(),
    });

    Ok(())
}
