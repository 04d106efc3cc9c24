use anchor_lang::prelude::*;

#[event]
pub struct RaffleInitialized {
    pub raffle: Pubkey,
    pub creator: Pubkey,
    pub ticket_price: u64,
    pub end_time: i64,
}

#[event]
pub struct TicketPurchased {
    pub raffle: Pubkey,
    pub ticket: Pubkey,
    pub buyer: Pubkey,
    pub ticket_number: u32,
    pub ticket_count_after: u32,
    pub vault_lamports_after: u64,
}

#[event]
pub struct WinnerDrawn {
    pub raffle: Pubkey,
    pub winning_ticket: u32,
    pub ticket_count: u32,
    pub slot: u64,
}

#[event]
pub struct PrizeClaimed {
    pub raffle: Pubkey,
    pub winner: Pubkey,
    pub ticket_number: u32,
    pub amount: u64,
}

#[event]
pub struct RaffleClosed {
    pub raffle: Pubkey,
    pub creator: Pubkey,
    pub vault_lamports_returned: u64,
    /// A winner was drawn but never claimed before the close.
    pub prize_orphaned: bool,
}

#[event]
pub struct RaffleMigrated {
    pub raffle: Pubkey,
    pub authority: Pubkey,
    pub replaced_byte: u8,
}
