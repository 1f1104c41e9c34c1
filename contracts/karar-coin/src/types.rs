use soroban_sdk::{contracterror, contracttype, Address, Bytes, String, Vec};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                // Contract administrator
    Config,               // Deployment configuration
    Seeded(ItemKind),     // Default catalogue already written for a kind
    ItemIds(ItemKind),    // Kind -> Vec<u32> of ids, insertion order
    Item(ItemKind, u32),  // (Kind, ID) -> Item
    UserVotes(Address),   // User -> Vec<VoteRecord>
    Wallet(Address),      // User -> simulated wallet
    Visits,               // Site visit counter
}

/// Which of the two item families a record belongs to
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemKind {
    Boycott,
    Protest,
}

impl ItemKind {
    /// Display name shown next to the item in admin lists
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Boycott => "Boykot",
            ItemKind::Protest => "Protesto",
        }
    }
}

/// Moderation status of an item
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ItemStatus {
    Active,          // Aktif
    PendingApproval, // Onay Bekliyor
    Rejected,        // Reddedildi
    Ended,           // Sona Erdi, never assigned by the contract
}

/// The variant-specific field of an item.
///
/// A boycott names its target, a protest names where it takes place. An empty
/// protest location means the protest is held online.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ItemSubject {
    Target(String),
    Location(String),
}

impl ItemSubject {
    pub fn text(&self) -> &String {
        match self {
            ItemSubject::Target(text) | ItemSubject::Location(text) => text,
        }
    }
}

/// A boycott or protest record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub start_date: String,       // DD.MM.YYYY
    pub end_date: Option<String>, // DD.MM.YYYY
    pub participants: u32,
    pub positive_votes: u32,
    pub negative_votes: u32,
    pub status: ItemStatus,
    pub image: Option<String>,
    pub creator: Option<Address>,
    pub tags: Vec<String>,
    pub subject: ItemSubject,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self.subject {
            ItemSubject::Target(_) => ItemKind::Boycott,
            ItemSubject::Location(_) => ItemKind::Protest,
        }
    }

    pub fn total_votes(&self) -> u32 {
        self.positive_votes.saturating_add(self.negative_votes)
    }
}

/// Everything a proposer supplies; id, status and tallies are assigned on insert
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub participants: u32,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub subject: ItemSubject,
}

impl ItemDraft {
    pub fn kind(&self) -> ItemKind {
        match self.subject {
            ItemSubject::Target(_) => ItemKind::Boycott,
            ItemSubject::Location(_) => ItemKind::Protest,
        }
    }
}

/// Direction of a vote
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteType {
    Positive, // Destekliyorum
    Negative, // Desteklemiyorum
}

/// A user's active vote on one item
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteRecord {
    pub kind: ItemKind,
    pub item_id: u32,
    pub vote_type: VoteType,
    pub count: u32,
    pub timestamp: u64,
}

/// Result of the fee-gated vote flow
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteOutcome {
    Recorded,  // First vote on the item
    Changed,   // Previous vote replaced
    Unchanged, // Same vote already on record, nothing charged
}

/// Simulated wallet bound to a user
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Wallet {
    pub address: Bytes, // "0x" followed by 40 lowercase hex digits
    pub balance: i128,
    pub connected_at: u64,
}

/// Deployment configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub proposal_fee: i128,         // Charged once per proposal
    pub vote_fee: i128,             // Charged per counted vote
    pub min_starting_balance: i128, // Inclusive
    pub max_starting_balance: i128, // Exclusive
    pub seed_defaults: bool,        // Write the default catalogue on first use
    pub recent_window_days: u32,    // Window for the dashboard change percentages
}

/// Admin panel entry for an item awaiting moderation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingApproval {
    pub kind: ItemKind,
    pub type_label: String, // Boykot / Protesto
    pub id: u32,
    pub title: String,
    pub requester: Option<Address>,
    pub date: String,
}

/// Dashboard entry for an active item that has not started yet
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventItem {
    pub kind: ItemKind,
    pub type_label: String, // Boykot / Protesto
    pub id: u32,
    pub title: String,
    pub location: String,
    pub date: String,
    pub participants: u32,
}

/// Admin dashboard figures
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SiteStats {
    pub total_boycotts: u32,
    pub total_protests: u32,
    pub total_visits: u32,
    pub total_token_transactions: u32,
    pub boycott_change_pct: u32,
    pub protest_change_pct: u32,
}

/// Admin list filter; `None` fields match everything
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemFilter {
    pub status: Option<ItemStatus>,
    pub category: Option<String>,
    pub query: Option<String>, // Matched against title and target/location
}

/// Site-wide search hits, grouped by kind
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchResults {
    pub boycotts: Vec<Item>,
    pub protests: Vec<Item>,
}

/// A pre-ledger vote entry, as found under `vote_<id>_<address>` keys
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LegacyVoteMarker {
    pub key: Bytes,
    pub value: Bytes,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,          // Contract not initialized
    AlreadyInitialized = 2,      // Contract already setup
    InvalidConfig = 3,           // Fees or balance range out of bounds
    ItemNotFound = 4,            // No item with that kind and id
    EmptyField = 5,              // A required text field is empty
    InvalidDate = 6,             // Date is not a valid DD.MM.YYYY
    InvalidStatusTransition = 7, // Moderation transition not allowed
    InvalidVoteCount = 8,        // Vote count must be at least one
    TallyOverflow = 9,           // Vote counter would overflow
    WalletNotConnected = 10,     // User has no simulated wallet
    InsufficientBalance = 11,    // Wallet balance below the amount
    InvalidAmount = 12,          // Non-positive amount
    TextTooLong = 13,            // Text field or query over the length limit
}
