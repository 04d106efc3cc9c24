//! Draw entropy taken from ledger state at execution time.
//!
//! This is not a verifiable randomness source. The most recent slot hash is known
//! before the draw lands, so a creator who chooses when to submit can bias which
//! slot hash gets used.

use anchor_lang::prelude::*;
use solana_program::hash::hashv;

/// Slot hash count (u64) followed by (slot: u64, hash: [u8; 32]) entries, newest first.
const SLOT_HASHES_NEWEST_HASH: std::ops::Range<usize> = 16..48;

/// Newest slot hash from raw SlotHashes sysvar data, if any entry exists.
pub fn newest_slot_hash(slot_hashes_data: &[u8]) -> Option<[u8; 32]> {
    let bytes = slot_hashes_data.get(SLOT_HASHES_NEWEST_HASH)?;
    let mut hash = [0u8; 32];
    hash.copy_from_slice(bytes);
    Some(hash)
}

/// Mixes the slot hash with the clock and the raffle address into a u64.
pub fn draw_entropy(slot_hash: &[u8; 32], clock: &Clock, raffle: &Pubkey) -> u64 {
    let digest = hashv(&[
        slot_hash.as_ref(),
        clock.slot.to_le_bytes().as_ref(),
        clock.unix_timestamp.to_le_bytes().as_ref(),
        raffle.as_ref(),
    ]);
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.to_bytes()[..8]);
    u64::from_le_bytes(head)
}
