//! Program-derived addresses for raffle, vault and ticket accounts.
//!
//! Clients recompute these from the creator key alone, so no registry lookup is
//! needed to locate any account of a raffle.

use anchor_lang::prelude::*;

use crate::constants::{RAFFLE_SEED, TICKET_SEED, VAULT_SEED};

pub fn raffle_address(creator: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[RAFFLE_SEED, creator.as_ref()], &crate::ID)
}

pub fn vault_address(raffle: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, raffle.as_ref()], &crate::ID)
}

pub fn ticket_address(raffle: &Pubkey, ticket_number: u32) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TICKET_SEED, raffle.as_ref(), &ticket_number.to_le_bytes()],
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        let creator = Pubkey::new_unique();
        let (raffle, bump) = raffle_address(&creator);
        assert_eq!(raffle_address(&creator), (raffle, bump));
        assert_eq!(vault_address(&raffle), vault_address(&raffle));
        assert_eq!(ticket_address(&raffle, 7), ticket_address(&raffle, 7));
    }

    #[test]
    fn test_addresses_are_distinct() {
        let creator = Pubkey::new_unique();
        let (raffle, _) = raffle_address(&creator);
        let (vault, _) = vault_address(&raffle);
        let (first, _) = ticket_address(&raffle, 0);
        let (second, _) = ticket_address(&raffle, 1);

        assert_ne!(raffle, vault);
        assert_ne!(first, second);
        assert_ne!(raffle_address(&Pubkey::new_unique()).0, raffle);
        assert_ne!(ticket_address(&vault, 0).0, first);
    }

    #[test]
    fn test_addresses_are_off_curve() {
        let (raffle, _) = raffle_address(&Pubkey::new_unique());
        assert!(!raffle.is_on_curve());
        assert!(!vault_address(&raffle).0.is_on_curve());
        assert!(!ticket_address(&raffle, 42).0.is_on_curve());
    }

    #[test]
    fn test_ticket_seed_uses_four_byte_number() {
        let (raffle, _) = raffle_address(&Pubkey::new_unique());
        let expected = Pubkey::find_program_address(
            &[b"ticket_v2", raffle.as_ref(), &[3, 0, 0, 0]],
            &crate::ID,
        );
        assert_eq!(ticket_address(&raffle, 3), expected);
    }
}
