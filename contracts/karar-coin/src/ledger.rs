use crate::admin::AdminModule;
use crate::store::ItemStore;
use crate::types::{DataKey, Error, Item, ItemKind, VoteOutcome, VoteRecord, VoteType};
use crate::wallet::WalletSimulator;
use soroban_sdk::{symbol_short, Address, Env, Vec};

pub struct VoteLedger;

impl VoteLedger {
    /// Record `user`'s vote on an item and keep the item's tallies in step.
    ///
    /// A previous record for the same item is withdrawn from its bucket
    /// before the new count is added, so each user contributes exactly one
    /// record to the tallies. Recasting an identical vote is not
    /// short-circuited here; it rewrites the record and nets to zero.
    pub fn cast_vote(
        env: &Env,
        user: &Address,
        kind: ItemKind,
        item_id: u32,
        vote_type: VoteType,
        count: u32,
    ) -> Result<Item, Error> {
        if count == 0 {
            return Err(Error::InvalidVoteCount);
        }

        let mut item = ItemStore::get(env, kind, item_id)?;
        let mut votes = Self::get_user_votes(env, user);

        let record = VoteRecord {
            kind,
            item_id,
            vote_type,
            count,
            timestamp: env.ledger().timestamp(),
        };

        match Self::position(&votes, kind, item_id) {
            Some(index) => {
                let previous = votes.get_unchecked(index);
                Self::withdraw(&mut item, previous.vote_type, previous.count);
                votes.set(index, record);
            }
            None => votes.push_back(record),
        }

        Self::tally(&mut item, vote_type, count)?;

        ItemStore::save(env, &item);
        env.storage()
            .persistent()
            .set(&DataKey::UserVotes(user.clone()), &votes);

        env.events().publish(
            (symbol_short!("vote"), symbol_short!("cast")),
            (user.clone(), kind, item_id, vote_type, count),
        );

        Ok(item)
    }

    /// The fee-gated flow behind the vote buttons.
    ///
    /// Repeating the vote already on record is free and changes nothing.
    /// Otherwise `count * vote_fee` is debited before the vote is cast; an
    /// insufficient balance aborts the whole invocation.
    pub fn vote(
        env: &Env,
        user: &Address,
        kind: ItemKind,
        item_id: u32,
        vote_type: VoteType,
        count: u32,
    ) -> Result<VoteOutcome, Error> {
        if count == 0 {
            return Err(Error::InvalidVoteCount);
        }

        // Check the item before charging for it
        if !ItemStore::exists(env, kind, item_id)? {
            return Err(Error::ItemNotFound);
        }

        let previous = Self::get_vote(env, user, kind, item_id);
        if let Some(previous) = &previous {
            if previous.vote_type == vote_type && previous.count == count {
                return Ok(VoteOutcome::Unchanged);
            }
        }

        let config = AdminModule::get_config(env)?;
        let fee = config
            .vote_fee
            .checked_mul(count as i128)
            .ok_or(Error::InvalidAmount)?;
        WalletSimulator::spend(env, user, fee)?;

        Self::cast_vote(env, user, kind, item_id, vote_type, count)?;

        Ok(match previous {
            Some(_) => VoteOutcome::Changed,
            None => VoteOutcome::Recorded,
        })
    }

    pub fn get_user_votes(env: &Env, user: &Address) -> Vec<VoteRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::UserVotes(user.clone()))
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn get_vote(env: &Env, user: &Address, kind: ItemKind, item_id: u32) -> Option<VoteRecord> {
        let votes = Self::get_user_votes(env, user);
        Self::position(&votes, kind, item_id).map(|index| votes.get_unchecked(index))
    }

    /// Store a record without touching tallies. Returns false when the user
    /// already has a record for that item.
    pub(crate) fn import(env: &Env, user: &Address, record: VoteRecord) -> bool {
        let mut votes = Self::get_user_votes(env, user);
        if Self::position(&votes, record.kind, record.item_id).is_some() {
            return false;
        }

        votes.push_back(record);
        env.storage()
            .persistent()
            .set(&DataKey::UserVotes(user.clone()), &votes);
        true
    }

    fn position(votes: &Vec<VoteRecord>, kind: ItemKind, item_id: u32) -> Option<u32> {
        votes
            .iter()
            .position(|vote| vote.kind == kind && vote.item_id == item_id)
            .map(|index| index as u32)
    }

    fn withdraw(item: &mut Item, vote_type: VoteType, count: u32) {
        match vote_type {
            VoteType::Positive => item.positive_votes = item.positive_votes.saturating_sub(count),
            VoteType::Negative => item.negative_votes = item.negative_votes.saturating_sub(count),
        }
    }

    fn tally(item: &mut Item, vote_type: VoteType, count: u32) -> Result<(), Error> {
        let bucket = match vote_type {
            VoteType::Positive => &mut item.positive_votes,
            VoteType::Negative => &mut item.negative_votes,
        };
        *bucket = bucket.checked_add(count).ok_or(Error::TallyOverflow)?;
        Ok(())
    }
}
