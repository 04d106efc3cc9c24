//! Byte-level reader for raffle accounts.
//!
//! Used where the Anchor deserializer is too coarse: bulk scans that must report
//! why a record was skipped, and the repair of records written by an earlier
//! build whose `prize_claimed` byte may hold a value other than 0 or 1.

use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::constants::*;
use crate::error::RaffleError;
use crate::state::{Raffle, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    SliceTooShort,
    DiscriminatorMismatch,
    InvalidWinnerTag { tag: u8 },
    InvalidBool { offset: usize, value: u8 },
}

impl From<LayoutError> for RaffleError {
    fn from(err: LayoutError) -> Self {
        match err {
            LayoutError::SliceTooShort => RaffleError::AccountTooSmall,
            LayoutError::DiscriminatorMismatch => RaffleError::DiscriminatorMismatch,
            LayoutError::InvalidWinnerTag { .. } => RaffleError::InvalidWinnerEncoding,
            LayoutError::InvalidBool { .. } => RaffleError::InvalidBoolEncoding,
        }
    }
}

impl From<LayoutError> for anchor_lang::error::Error {
    fn from(err: LayoutError) -> Self {
        RaffleError::from(err).into()
    }
}

pub fn has_raffle_discriminator(data: &[u8]) -> bool {
    data.len() >= DISCRIMINATOR_LEN && data[..DISCRIMINATOR_LEN] == Raffle::DISCRIMINATOR[..]
}

/// Decodes a raffle account strictly, naming the first defect found.
pub fn read_raffle(data: &[u8]) -> std::result::Result<Raffle, LayoutError> {
    if !has_raffle_discriminator(data) {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(LayoutError::SliceTooShort);
        }
        return Err(LayoutError::DiscriminatorMismatch);
    }
    if data.len() < RAFFLE_ACCOUNT_LEN {
        return Err(LayoutError::SliceTooShort);
    }

    let winner = match data[RAFFLE_WINNER_OFFSET] {
        0 => Winner::Undrawn,
        1 => Winner::Drawn(read_u32(data, RAFFLE_WINNER_OFFSET + 1)),
        tag => return Err(LayoutError::InvalidWinnerTag { tag }),
    };
    let prize_claimed = read_bool(data, RAFFLE_PRIZE_CLAIMED_OFFSET)?;

    Ok(Raffle {
        creator: read_pubkey(data, RAFFLE_CREATOR_OFFSET),
        ticket_price: read_u64(data, RAFFLE_TICKET_PRICE_OFFSET),
        end_time: read_u64(data, RAFFLE_END_TIME_OFFSET) as i64,
        ticket_count: read_u32(data, RAFFLE_TICKET_COUNT_OFFSET),
        winner,
        prize_claimed,
        bump: data[RAFFLE_BUMP_OFFSET],
    })
}

/// True when the only thing keeping `data` from decoding is its `prize_claimed` byte.
pub fn needs_claim_flag_repair(data: &[u8]) -> bool {
    matches!(
        read_raffle(data),
        Err(LayoutError::InvalidBool { offset, .. }) if offset == RAFFLE_PRIZE_CLAIMED_OFFSET
    )
}

/// Resets an invalid `prize_claimed` byte to `false`, leaving every other byte as is.
///
/// Returns the byte that was replaced.
pub fn repair_claim_flag(data: &mut [u8]) -> Result<u8> {
    match read_raffle(data) {
        Ok(_) => err!(RaffleError::MigrationNotRequired),
        Err(LayoutError::InvalidBool { offset, value }) if offset == RAFFLE_PRIZE_CLAIMED_OFFSET => {
            data[offset] = 0;
            Ok(value)
        }
        Err(other) => Err(other.into()),
    }
}

fn read_bool(data: &[u8], offset: usize) -> std::result::Result<bool, LayoutError> {
    match data[offset] {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(LayoutError::InvalidBool { offset, value }),
    }
}

fn read_pubkey(data: &[u8], offset: usize) -> Pubkey {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&data[offset..offset + 32]);
    Pubkey::new_from_array(bytes)
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    u64::from_le_bytes(bytes)
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_raffle() -> Raffle {
        Raffle {
            creator: Pubkey::new_unique(),
            ticket_price: 1_000_000,
            end_time: 1_700_000_123,
            ticket_count: 9,
            winner: Winner::Drawn(4),
            prize_claimed: false,
            bump: 253,
        }
    }

    fn encode(raffle: &Raffle) -> Vec<u8> {
        let mut data = Vec::new();
        raffle.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn test_serialized_offsets() {
        let raffle = sample_raffle();
        let data = encode(&raffle);

        assert_eq!(data.len(), RAFFLE_ACCOUNT_LEN);
        assert_eq!(&data[..8], &Raffle::DISCRIMINATOR[..]);
        assert_eq!(&data[8..40], raffle.creator.as_ref());
        assert_eq!(&data[40..48], &1_000_000u64.to_le_bytes());
        assert_eq!(&data[48..56], &1_700_000_123i64.to_le_bytes());
        assert_eq!(&data[56..60], &9u32.to_le_bytes());
        assert_eq!(&data[60..65], &[1, 4, 0, 0, 0]);
        assert_eq!(data[65], 0);
        assert_eq!(data[66], 253);
    }

    #[test]
    fn test_undrawn_raffle_keeps_claim_flag_offset() {
        let mut raffle = sample_raffle();
        raffle.winner = Winner::Undrawn;
        raffle.prize_claimed = true;
        let data = encode(&raffle);
        assert_eq!(data.len(), RAFFLE_ACCOUNT_LEN);
        assert_eq!(data[RAFFLE_PRIZE_CLAIMED_OFFSET], 1);
    }

    #[test]
    fn test_read_matches_anchor_decoding() {
        let raffle = sample_raffle();
        let data = encode(&raffle);
        assert_eq!(read_raffle(&data).unwrap(), raffle);
        assert_eq!(Raffle::try_deserialize(&mut data.as_slice()).unwrap(), raffle);
    }

    #[test]
    fn test_read_reports_defects() {
        let data = encode(&sample_raffle());

        assert_eq!(read_raffle(&data[..4]), Err(LayoutError::SliceTooShort));
        assert_eq!(read_raffle(&data[..60]), Err(LayoutError::SliceTooShort));

        let mut foreign = data.clone();
        foreign[0] ^= 0xff;
        assert_eq!(read_raffle(&foreign), Err(LayoutError::DiscriminatorMismatch));

        let mut bad_tag = data.clone();
        bad_tag[RAFFLE_WINNER_OFFSET] = 9;
        assert_eq!(
            read_raffle(&bad_tag),
            Err(LayoutError::InvalidWinnerTag { tag: 9 })
        );
    }

    #[test]
    fn test_repair_patches_only_claim_flag() {
        let raffle = sample_raffle();
        let mut data = encode(&raffle);
        data[RAFFLE_PRIZE_CLAIMED_OFFSET] = 0xa7;
        assert!(Raffle::try_deserialize(&mut data.as_slice()).is_err());
        assert!(needs_claim_flag_repair(&data));

        let before = data.clone();
        assert_eq!(repair_claim_flag(&mut data).unwrap(), 0xa7);

        for (index, (old, new)) in before.iter().zip(data.iter()).enumerate() {
            if index != RAFFLE_PRIZE_CLAIMED_OFFSET {
                assert_eq!(old, new, "byte {} changed", index);
            }
        }
        assert_eq!(read_raffle(&data).unwrap(), raffle);
        assert!(!needs_claim_flag_repair(&data));
    }

    #[test]
    fn test_repair_refuses_healthy_or_foreign_records() {
        let mut healthy = encode(&sample_raffle());
        assert_eq!(
            repair_claim_flag(&mut healthy).unwrap_err(),
            RaffleError::MigrationNotRequired.into()
        );

        let mut bad_tag = encode(&sample_raffle());
        bad_tag[RAFFLE_WINNER_OFFSET] = 3;
        bad_tag[RAFFLE_PRIZE_CLAIMED_OFFSET] = 3;
        assert_eq!(
            repair_claim_flag(&mut bad_tag).unwrap_err(),
            RaffleError::InvalidWinnerEncoding.into()
        );
        assert_eq!(bad_tag[RAFFLE_PRIZE_CLAIMED_OFFSET], 3);
    }
}
