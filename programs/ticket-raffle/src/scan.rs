//! Read-side helpers for clients listing raffles and tickets.
//!
//! These build `getProgramAccounts` memcmp filters and decode the returned
//! accounts. They never touch the network; callers bring their own RPC client.

use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::constants::{
    DISCRIMINATOR_LEN, RAFFLE_CREATOR_OFFSET, TICKET_BUYER_OFFSET, TICKET_RAFFLE_OFFSET,
};
use crate::layout::{self, LayoutError};
use crate::pda;
use crate::state::{Raffle, Ticket};

/// A `memcmp` filter: account data at `offset` must equal `bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemcmpFilter {
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl MemcmpFilter {
    pub fn new(offset: usize, bytes: &[u8]) -> Self {
        Self {
            offset,
            bytes: bytes.to_vec(),
        }
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.offset + self.bytes.len()) == Some(self.bytes.as_slice())
    }
}

/// Every raffle account of the program.
pub fn raffle_filters() -> Vec<MemcmpFilter> {
    vec![MemcmpFilter::new(0, &Raffle::DISCRIMINATOR[..])]
}

pub fn raffle_filters_for_creator(creator: &Pubkey) -> Vec<MemcmpFilter> {
    let mut filters = raffle_filters();
    filters.push(MemcmpFilter::new(RAFFLE_CREATOR_OFFSET, creator.as_ref()));
    filters
}

pub fn ticket_filters_for_raffle(raffle: &Pubkey) -> Vec<MemcmpFilter> {
    vec![
        MemcmpFilter::new(0, &Ticket::DISCRIMINATOR[..]),
        MemcmpFilter::new(TICKET_RAFFLE_OFFSET, raffle.as_ref()),
    ]
}

pub fn ticket_filters_for_buyer(buyer: &Pubkey) -> Vec<MemcmpFilter> {
    vec![
        MemcmpFilter::new(0, &Ticket::DISCRIMINATOR[..]),
        MemcmpFilter::new(TICKET_BUYER_OFFSET, buyer.as_ref()),
    ]
}

#[derive(Debug, Default)]
pub struct RaffleScan {
    pub raffles: Vec<(Pubkey, Raffle)>,
    pub skipped: Vec<(Pubkey, LayoutError)>,
}

/// Decodes the result of a raffle bulk scan record by record.
///
/// Records that fail to decode land in `skipped` with the reason; they never
/// abort the scan.
pub fn decode_raffles<'a, I>(accounts: I) -> RaffleScan
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    let mut scan = RaffleScan::default();
    for (address, data) in accounts {
        match layout::read_raffle(data) {
            Ok(raffle) => scan.raffles.push((address, raffle)),
            Err(err) => scan.skipped.push((address, err)),
        }
    }
    scan
}

/// Raffle accounts whose only defect is an invalid `prize_claimed` byte.
pub fn migration_candidates<'a, I>(accounts: I) -> Vec<Pubkey>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    accounts
        .into_iter()
        .filter(|(_, data)| layout::needs_claim_flag_repair(data))
        .map(|(address, _)| address)
        .collect()
}

/// Finds the first decodable raffle whose base58 address starts with `prefix`.
pub fn find_raffle<'a, I>(accounts: I, prefix: &str) -> Option<(Pubkey, Raffle)>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    decode_raffles(accounts)
        .raffles
        .into_iter()
        .find(|(address, _)| address.to_string().starts_with(prefix))
}

/// Accounts a creator passes to `close_raffle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseTarget {
    pub creator: Pubkey,
    pub raffle: Pubkey,
    pub vault: Pubkey,
}

pub fn close_targets(wallets: &[Pubkey]) -> Vec<CloseTarget> {
    wallets
        .iter()
        .map(|creator| {
            let (raffle, _) = pda::raffle_address(creator);
            let (vault, _) = pda::vault_address(&raffle);
            CloseTarget {
                creator: *creator,
                raffle,
                vault,
            }
        })
        .collect()
}

/// Ticket accounts among `accounts`, decoded. Anything else is ignored.
pub fn decode_tickets<'a, I>(accounts: I) -> Vec<(Pubkey, Ticket)>
where
    I: IntoIterator<Item = (Pubkey, &'a [u8])>,
{
    accounts
        .into_iter()
        .filter(|(_, data)| data.len() > DISCRIMINATOR_LEN)
        .filter_map(|(address, data)| {
            let mut buf = data;
            Ticket::try_deserialize(&mut buf)
                .ok()
                .map(|ticket| (address, ticket))
        })
        .collect()
}
