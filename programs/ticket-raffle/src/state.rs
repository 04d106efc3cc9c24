use anchor_lang::prelude::*;
use std::io::{Read, Write};

use crate::constants::WINNER_SLOT_LEN;
use crate::error::RaffleError;

/// Outcome of the draw for a raffle.
///
/// Always encoded as five bytes (tag, then a little-endian u32 that is zero while
/// undrawn) so the fields stored after it sit at fixed offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Winner {
    #[default]
    Undrawn,
    Drawn(u32),
}

impl Winner {
    pub fn ticket_number(&self) -> Option<u32> {
        match self {
            Winner::Undrawn => None,
            Winner::Drawn(number) => Some(*number),
        }
    }

    pub fn is_drawn(&self) -> bool {
        matches!(self, Winner::Drawn(_))
    }
}

impl AnchorSerialize for Winner {
    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let (tag, number) = match self {
            Winner::Undrawn => (0u8, 0u32),
            Winner::Drawn(number) => (1u8, *number),
        };
        writer.write_all(&[tag])?;
        writer.write_all(&number.to_le_bytes())
    }
}

impl AnchorDeserialize for Winner {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let mut slot = [0u8; WINNER_SLOT_LEN];
        reader.read_exact(&mut slot)?;
        let number = u32::from_le_bytes([slot[1], slot[2], slot[3], slot[4]]);
        match slot[0] {
            0 => Ok(Winner::Undrawn),
            1 => Ok(Winner::Drawn(number)),
            tag => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid winner tag {}", tag),
            )),
        }
    }
}

impl anchor_lang::Space for Winner {
    const INIT_SPACE: usize = WINNER_SLOT_LEN;
}

#[cfg(feature = "idl-build")]
impl anchor_lang::IdlBuild for Winner {}

/// Where a raffle sits in its lifecycle at a given instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RafflePhase {
    Open,
    EndedUndrawn,
    EndedDrawn,
    EndedClaimed,
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Raffle {
    /// Account allowed to draw the winner and close the raffle.
    pub creator: Pubkey,

    /// Price of one ticket in lamports. Fixed at creation.
    pub ticket_price: u64,

    /// Unix timestamp after which purchases stop and the draw opens.
    pub end_time: i64,

    /// Number of tickets sold. The next ticket gets this number.
    pub ticket_count: u32,

    pub winner: Winner,

    /// Set once the winner has withdrawn the escrow.
    pub prize_claimed: bool,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

impl Raffle {
    pub fn new(
        creator: Pubkey,
        ticket_price: u64,
        end_time: i64,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(ticket_price > 0, RaffleError::InvalidPrice);
        require!(end_time > now, RaffleError::InvalidDeadline);

        Ok(Self {
            creator,
            ticket_price,
            end_time,
            ticket_count: 0,
            winner: Winner::Undrawn,
            prize_claimed: false,
            bump,
        })
    }

    pub fn phase(&self, now: i64) -> RafflePhase {
        if now < self.end_time {
            RafflePhase::Open
        } else if self.prize_claimed {
            RafflePhase::EndedClaimed
        } else if self.winner.is_drawn() {
            RafflePhase::EndedDrawn
        } else {
            RafflePhase::EndedUndrawn
        }
    }

    pub fn has_ended(&self, now: i64) -> bool {
        now >= self.end_time
    }

    /// Purchases are accepted strictly before `end_time`.
    pub fn ensure_open(&self, now: i64) -> Result<()> {
        require!(!self.has_ended(now), RaffleError::RaffleEnded);
        Ok(())
    }

    /// Hands out the next ticket number and advances the counter.
    pub fn issue_ticket(&mut self, now: i64) -> Result<u32> {
        self.ensure_open(now)?;
        let ticket_number = self.ticket_count;
        self.ticket_count = ticket_number
            .checked_add(1)
            .ok_or(RaffleError::ArithmeticOverflow)?;
        Ok(ticket_number)
    }

    pub fn ensure_drawable(&self, caller: &Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(self.creator, *caller, RaffleError::Unauthorized);
        require!(self.has_ended(now), RaffleError::RaffleNotEnded);
        require!(self.ticket_count > 0, RaffleError::NoTicketsSold);
        require!(!self.winner.is_drawn(), RaffleError::WinnerAlreadyDrawn);
        Ok(())
    }

    /// Fixes the winner from `random`. Irreversible.
    pub fn record_draw(&mut self, caller: &Pubkey, now: i64, random: u64) -> Result<u32> {
        self.ensure_drawable(caller, now)?;
        let winning_ticket = (random % u64::from(self.ticket_count)) as u32;
        self.winner = Winner::Drawn(winning_ticket);
        Ok(winning_ticket)
    }

    pub fn ensure_claimable(&self, claimant: &Pubkey, ticket: &Ticket) -> Result<()> {
        let winning_ticket = self
            .winner
            .ticket_number()
            .ok_or(RaffleError::WinnerNotDrawn)?;
        require!(!self.prize_claimed, RaffleError::PrizeAlreadyClaimed);
        require!(
            ticket.ticket_number == winning_ticket,
            RaffleError::NotTicketOwner
        );
        require_keys_eq!(ticket.buyer, *claimant, RaffleError::NotTicketOwner);
        Ok(())
    }

    pub fn record_claim(&mut self, claimant: &Pubkey, ticket: &Ticket) -> Result<()> {
        self.ensure_claimable(claimant, ticket)?;
        self.prize_claimed = true;
        Ok(())
    }

    pub fn ensure_closable(&self, caller: &Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(self.creator, *caller, RaffleError::Unauthorized);
        require!(self.has_ended(now), RaffleError::RaffleNotEnded);
        Ok(())
    }

    /// A drawn prize nobody has collected yet.
    pub fn prize_pending(&self) -> bool {
        self.winner.is_drawn() && !self.prize_claimed
    }
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Ticket {
    pub raffle: Pubkey,
    pub buyer: Pubkey,
    pub ticket_number: u32,
    pub bump: u8,
}

/// Lamports the vault can pay out while keeping `rent_floor` behind.
pub fn disbursable(vault_lamports: u64, rent_floor: u64) -> u64 {
    vault_lamports.saturating_sub(rent_floor)
}

/// Lamports still needed to bring an address holding `current` up to `rent_floor`.
///
/// Derived addresses can be pre-funded by anyone, so the payer only covers the gap.
pub fn rent_shortfall(rent_floor: u64, current: u64) -> u64 {
    rent_floor.saturating_sub(current)
}

/// Checks the buyer can fund the ticket price and the ticket record's rent.
pub fn ensure_affordable(balance: u64, ticket_price: u64, ticket_rent: u64) -> Result<()> {
    let required = ticket_price
        .checked_add(ticket_rent)
        .ok_or(RaffleError::ArithmeticOverflow)?;
    require!(balance >= required, RaffleError::InsufficientFunds);
    Ok(())
}
