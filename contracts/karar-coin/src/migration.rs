//! Import of the per-item vote markers written before the vote ledger
//! existed.
//!
//! Keys look like `vote_<id>_<address>` for boycotts and
//! `vote_protest_<id>_<address>` for protests. Values are either the bare
//! vote type (`positive` / `negative`) or a JSON object such as
//! `{"type":"negative","count":3,"timestamp":"..."}`.

use crate::ledger::VoteLedger;
use crate::store::ItemStore;
use crate::types::{Error, ItemKind, LegacyVoteMarker, VoteRecord, VoteType};
use crate::wallet::WalletSimulator;
use soroban_sdk::{log, symbol_short, Address, Bytes, Env, Vec};

const BOYCOTT_PREFIX: &[u8] = b"vote_";
const PROTEST_PREFIX: &[u8] = b"vote_protest_";
const POSITIVE: &[u8] = b"positive";
const NEGATIVE: &[u8] = b"negative";

/// A marker key after parsing
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarkerKey {
    pub kind: ItemKind,
    pub item_id: u32,
    pub address: Bytes,
}

pub struct LegacyMigrator;

impl LegacyMigrator {
    /// Import `markers` for `user` and return how many were recorded.
    ///
    /// Markers that belong to another wallet, point at an unknown item,
    /// duplicate an existing record or fail to parse are skipped. Tallies are
    /// left alone because the old flow already counted these votes.
    pub fn migrate(env: &Env, user: &Address, markers: Vec<LegacyVoteMarker>) -> Result<u32, Error> {
        let wallet = WalletSimulator::get(env, user)?;
        let now = env.ledger().timestamp();
        let mut imported = 0u32;

        for marker in markers.iter() {
            let Some(key) = parse_key(&marker.key) else {
                log!(env, "skipping unparseable legacy vote key", marker.key);
                continue;
            };

            if key.address != wallet.address {
                continue;
            }

            let Some((vote_type, count)) = parse_value(&marker.value) else {
                log!(env, "skipping unparseable legacy vote value", marker.value);
                continue;
            };

            if !ItemStore::exists(env, key.kind, key.item_id)? {
                log!(env, "skipping legacy vote for unknown item", key.item_id);
                continue;
            }

            let record = VoteRecord {
                kind: key.kind,
                item_id: key.item_id,
                vote_type,
                count,
                timestamp: now,
            };
            if VoteLedger::import(env, user, record) {
                imported += 1;
            } else {
                log!(env, "legacy vote already on record", key.item_id);
            }
        }

        env.events().publish(
            (symbol_short!("vote"), symbol_short!("migrated")),
            (user.clone(), imported),
        );

        Ok(imported)
    }
}

pub fn parse_key(key: &Bytes) -> Option<MarkerKey> {
    let (kind, mut pos) = if starts_with(key, PROTEST_PREFIX) {
        (ItemKind::Protest, PROTEST_PREFIX.len() as u32)
    } else if starts_with(key, BOYCOTT_PREFIX) {
        (ItemKind::Boycott, BOYCOTT_PREFIX.len() as u32)
    } else {
        return None;
    };

    let (item_id, end) = parse_number(key, pos)?;
    pos = end;

    if key.get(pos) != Some(b'_') {
        return None;
    }

    let address = key.slice(pos + 1..);
    if address.is_empty() {
        return None;
    }

    Some(MarkerKey {
        kind,
        item_id,
        address,
    })
}

pub fn parse_value(value: &Bytes) -> Option<(VoteType, u32)> {
    if let Some(vote_type) = vote_type_at(value, 0, value.len()) {
        return Some((vote_type, 1));
    }

    if value.get(0) != Some(b'{') {
        return None;
    }

    // "type": "<word>"
    let mut pos = find(value, b"\"type\"", 0)? + 6;
    pos = skip_separator(value, pos)?;
    if value.get(pos) != Some(b'"') {
        return None;
    }
    let start = pos + 1;
    let end = find(value, b"\"", start)?;
    let vote_type = vote_type_at(value, start, end)?;

    // "count": <digits>, optional; zero counts as one
    let count = match find(value, b"\"count\"", 0) {
        Some(at) => {
            let pos = skip_separator(value, at + 7)?;
            parse_number(value, pos)?.0.max(1)
        }
        None => 1,
    };

    Some((vote_type, count))
}

fn vote_type_at(bytes: &Bytes, start: u32, end: u32) -> Option<VoteType> {
    if matches_at(bytes, start, end, POSITIVE) {
        Some(VoteType::Positive)
    } else if matches_at(bytes, start, end, NEGATIVE) {
        Some(VoteType::Negative)
    } else {
        None
    }
}

fn matches_at(bytes: &Bytes, start: u32, end: u32, expected: &[u8]) -> bool {
    if end < start || (end - start) as usize != expected.len() {
        return false;
    }
    expected
        .iter()
        .enumerate()
        .all(|(i, b)| bytes.get(start + i as u32) == Some(*b))
}

fn starts_with(bytes: &Bytes, prefix: &[u8]) -> bool {
    bytes.len() as usize >= prefix.len() && matches_at(bytes, 0, prefix.len() as u32, prefix)
}

fn find(haystack: &Bytes, needle: &[u8], from: u32) -> Option<u32> {
    let last = haystack.len().checked_sub(needle.len() as u32)?;
    (from..=last).find(|&at| matches_at(haystack, at, at + needle.len() as u32, needle))
}

// Skip `\s* : \s*` and return the position after it
fn skip_separator(bytes: &Bytes, mut pos: u32) -> Option<u32> {
    while bytes.get(pos) == Some(b' ') {
        pos += 1;
    }
    if bytes.get(pos) != Some(b':') {
        return None;
    }
    pos += 1;
    while bytes.get(pos) == Some(b' ') {
        pos += 1;
    }
    Some(pos)
}

// At least one ASCII digit; returns the value and the position after it
fn parse_number(bytes: &Bytes, mut pos: u32) -> Option<(u32, u32)> {
    let start = pos;
    let mut value = 0u32;
    while let Some(b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.checked_mul(10)?.checked_add((b - b'0') as u32)?;
        pos += 1;
    }
    if pos == start {
        return None;
    }
    Some((value, pos))
}
