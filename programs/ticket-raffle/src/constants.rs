/// Seed prefix for the per-creator raffle record.
pub const RAFFLE_SEED: &[u8] = b"raffle_v2";

/// Seed prefix for the escrow vault of a raffle.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix for a single ticket record.
pub const TICKET_SEED: &[u8] = b"ticket_v2";

/// Anchor account discriminator length.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Encoded size of the winner slot: one tag byte plus a u32, always written in full.
pub const WINNER_SLOT_LEN: usize = 1 + 4;

// Byte offsets inside a raffle account, discriminator included.
pub const RAFFLE_CREATOR_OFFSET: usize = DISCRIMINATOR_LEN;
pub const RAFFLE_TICKET_PRICE_OFFSET: usize = RAFFLE_CREATOR_OFFSET + 32;
pub const RAFFLE_END_TIME_OFFSET: usize = RAFFLE_TICKET_PRICE_OFFSET + 8;
pub const RAFFLE_TICKET_COUNT_OFFSET: usize = RAFFLE_END_TIME_OFFSET + 8;
pub const RAFFLE_WINNER_OFFSET: usize = RAFFLE_TICKET_COUNT_OFFSET + 4;
pub const RAFFLE_PRIZE_CLAIMED_OFFSET: usize = RAFFLE_WINNER_OFFSET + WINNER_SLOT_LEN;
pub const RAFFLE_BUMP_OFFSET: usize = RAFFLE_PRIZE_CLAIMED_OFFSET + 1;
pub const RAFFLE_ACCOUNT_LEN: usize = RAFFLE_BUMP_OFFSET + 1;

// Byte offsets inside a ticket account, discriminator included.
pub const TICKET_RAFFLE_OFFSET: usize = DISCRIMINATOR_LEN;
pub const TICKET_BUYER_OFFSET: usize = TICKET_RAFFLE_OFFSET + 32;
pub const TICKET_NUMBER_OFFSET: usize = TICKET_BUYER_OFFSET + 32;
pub const TICKET_ACCOUNT_LEN: usize = TICKET_NUMBER_OFFSET + 4 + 1;
