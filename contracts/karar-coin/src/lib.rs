#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod admin;
pub mod dates;
pub mod ledger;
pub mod migration;
pub mod moderation;
pub mod search;
pub mod seed;
pub mod stats;
pub mod store;
pub mod types;
pub mod wallet;

use admin::AdminModule;
use ledger::VoteLedger;
use migration::LegacyMigrator;
use moderation::ModerationWorkflow;
use search::ItemSearch;
use stats::StatsManager;
use store::ItemStore;
use types::{
    Config, Error, EventItem, Item, ItemDraft, ItemFilter, ItemKind, LegacyVoteMarker,
    PendingApproval, SearchResults, SiteStats, VoteOutcome, VoteRecord, VoteType, Wallet,
};
use wallet::WalletSimulator;

/// Main contract trait defining all available functions
pub trait KararCoinTrait {
    // Admin functions
    fn initialize(env: Env, admin: Address, config: Config) -> Result<(), Error>;
    fn get_config(env: Env) -> Result<Config, Error>;
    fn set_config(env: Env, config: Config) -> Result<(), Error>;
    fn set_admin(env: Env, new_admin: Address) -> Result<(), Error>;

    // Item store
    fn list_items(env: Env, kind: ItemKind) -> Result<Vec<Item>, Error>;
    fn get_item(env: Env, kind: ItemKind, id: u32) -> Result<Item, Error>;
    fn propose(env: Env, proposer: Address, draft: ItemDraft) -> Result<Item, Error>;
    fn add_item(env: Env, draft: ItemDraft) -> Result<Item, Error>;
    fn update_item(env: Env, item: Item) -> Result<(), Error>;
    fn remove_item(env: Env, kind: ItemKind, id: u32) -> Result<(), Error>;
    fn search(env: Env, query: String) -> Result<SearchResults, Error>;
    fn filter_items(env: Env, kind: ItemKind, filter: ItemFilter) -> Result<Vec<Item>, Error>;

    // Moderation
    fn approve(env: Env, kind: ItemKind, id: u32) -> Result<Item, Error>;
    fn reject(env: Env, kind: ItemKind, id: u32) -> Result<Item, Error>;
    fn pending_approvals(env: Env) -> Result<Vec<PendingApproval>, Error>;

    // Vote ledger
    fn cast_vote(
        env: Env,
        user: Address,
        kind: ItemKind,
        item_id: u32,
        vote_type: VoteType,
        count: u32,
    ) -> Result<Item, Error>;
    fn vote(
        env: Env,
        user: Address,
        kind: ItemKind,
        item_id: u32,
        vote_type: VoteType,
        count: u32,
    ) -> Result<VoteOutcome, Error>;
    fn get_user_votes(env: Env, user: Address) -> Vec<VoteRecord>;
    fn get_vote(env: Env, user: Address, kind: ItemKind, item_id: u32) -> Option<VoteRecord>;
    fn migrate_legacy_votes(
        env: Env,
        user: Address,
        markers: Vec<LegacyVoteMarker>,
    ) -> Result<u32, Error>;

    // Wallet simulator
    fn connect_wallet(env: Env, user: Address) -> Result<Wallet, Error>;
    fn disconnect_wallet(env: Env, user: Address) -> Result<(), Error>;
    fn get_wallet(env: Env, user: Address) -> Result<Wallet, Error>;
    fn spend(env: Env, user: Address, amount: i128) -> Result<i128, Error>;

    // Site statistics
    fn record_visit(env: Env) -> u32;
    fn visit_count(env: Env) -> u32;
    fn stats(env: Env) -> Result<SiteStats, Error>;
    fn upcoming_events(env: Env) -> Result<Vec<EventItem>, Error>;
}

#[contract]
pub struct KararCoin;

#[contractimpl]
impl KararCoinTrait for KararCoin {
    // Admin functions
    fn initialize(env: Env, admin: Address, config: Config) -> Result<(), Error> {
        AdminModule::init(&env, &admin, &config)
    }

    fn get_config(env: Env) -> Result<Config, Error> {
        AdminModule::get_config(&env)
    }

    fn set_config(env: Env, config: Config) -> Result<(), Error> {
        AdminModule::set_config(&env, &config)
    }

    fn set_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        AdminModule::update_admin(&env, &new_admin)
    }

    // Item store
    fn list_items(env: Env, kind: ItemKind) -> Result<Vec<Item>, Error> {
        ItemStore::list(&env, kind)
    }

    fn get_item(env: Env, kind: ItemKind, id: u32) -> Result<Item, Error> {
        ItemStore::get(&env, kind, id)
    }

    fn propose(env: Env, proposer: Address, draft: ItemDraft) -> Result<Item, Error> {
        proposer.require_auth();

        let config = AdminModule::get_config(&env)?;
        WalletSimulator::spend(&env, &proposer, config.proposal_fee)?;

        ItemStore::add(&env, draft, Some(proposer))
    }

    fn add_item(env: Env, draft: ItemDraft) -> Result<Item, Error> {
        AdminModule::verify_admin(&env)?;
        ItemStore::add(&env, draft, None)
    }

    fn update_item(env: Env, item: Item) -> Result<(), Error> {
        AdminModule::verify_admin(&env)?;
        ItemStore::update(&env, &item)
    }

    fn remove_item(env: Env, kind: ItemKind, id: u32) -> Result<(), Error> {
        AdminModule::verify_admin(&env)?;
        ItemStore::remove(&env, kind, id)
    }

    fn search(env: Env, query: String) -> Result<SearchResults, Error> {
        ItemSearch::search(&env, &query)
    }

    fn filter_items(env: Env, kind: ItemKind, filter: ItemFilter) -> Result<Vec<Item>, Error> {
        ItemSearch::filter(&env, kind, &filter)
    }

    // Moderation
    fn approve(env: Env, kind: ItemKind, id: u32) -> Result<Item, Error> {
        AdminModule::verify_admin(&env)?;
        ModerationWorkflow::approve(&env, kind, id)
    }

    fn reject(env: Env, kind: ItemKind, id: u32) -> Result<Item, Error> {
        AdminModule::verify_admin(&env)?;
        ModerationWorkflow::reject(&env, kind, id)
    }

    fn pending_approvals(env: Env) -> Result<Vec<PendingApproval>, Error> {
        ModerationWorkflow::pending_approvals(&env)
    }

    // Vote ledger
    fn cast_vote(
        env: Env,
        user: Address,
        kind: ItemKind,
        item_id: u32,
        vote_type: VoteType,
        count: u32,
    ) -> Result<Item, Error> {
        user.require_auth();
        VoteLedger::cast_vote(&env, &user, kind, item_id, vote_type, count)
    }

    fn vote(
        env: Env,
        user: Address,
        kind: ItemKind,
        item_id: u32,
        vote_type: VoteType,
        count: u32,
    ) -> Result<VoteOutcome, Error> {
        user.require_auth();
        VoteLedger::vote(&env, &user, kind, item_id, vote_type, count)
    }

    fn get_user_votes(env: Env, user: Address) -> Vec<VoteRecord> {
        VoteLedger::get_user_votes(&env, &user)
    }

    fn get_vote(env: Env, user: Address, kind: ItemKind, item_id: u32) -> Option<VoteRecord> {
        VoteLedger::get_vote(&env, &user, kind, item_id)
    }

    fn migrate_legacy_votes(
        env: Env,
        user: Address,
        markers: Vec<LegacyVoteMarker>,
    ) -> Result<u32, Error> {
        user.require_auth();
        LegacyMigrator::migrate(&env, &user, markers)
    }

    // Wallet simulator
    fn connect_wallet(env: Env, user: Address) -> Result<Wallet, Error> {
        user.require_auth();
        WalletSimulator::connect(&env, &user)
    }

    fn disconnect_wallet(env: Env, user: Address) -> Result<(), Error> {
        user.require_auth();
        WalletSimulator::disconnect(&env, &user)
    }

    fn get_wallet(env: Env, user: Address) -> Result<Wallet, Error> {
        WalletSimulator::get(&env, &user)
    }

    fn spend(env: Env, user: Address, amount: i128) -> Result<i128, Error> {
        user.require_auth();
        WalletSimulator::spend(&env, &user, amount)
    }

    // Site statistics
    fn record_visit(env: Env) -> u32 {
        StatsManager::record_visit(&env)
    }

    fn visit_count(env: Env) -> u32 {
        StatsManager::visit_count(&env)
    }

    fn stats(env: Env) -> Result<SiteStats, Error> {
        StatsManager::site_stats(&env)
    }

    fn upcoming_events(env: Env) -> Result<Vec<EventItem>, Error> {
        StatsManager::upcoming_events(&env)
    }
}
