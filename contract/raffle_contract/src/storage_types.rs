use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Config,
    RecentPurchases,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    CollectionIndex,
    Collection(String),
    Tickets(String, Address), // (CollectionID, Holder) -> purchased tickets
    Ranking(String),          // Top holders, most tickets first
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CollectionStatus {
    Upcoming,
    Active,
    Ended,
}

impl CollectionStatus {
    /// Position in the raffle lifecycle; transitions only move forward.
    pub fn rank(&self) -> u32 {
        match self {
            CollectionStatus::Upcoming => 0,
            CollectionStatus::Active => 1,
            CollectionStatus::Ended => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Step {
    pub id: u32,
    pub name: String,
    pub status: StepStatus,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub status: CollectionStatus,
    pub ticket_price: i128,
    pub supply: u32,
    pub tickets_sold: u32,
    pub end_time: u64,   // Epoch milliseconds
    pub created_at: u64, // Epoch milliseconds
}

impl Collection {
    /// Share of supply sold, as a whole percentage rounded half up and capped at 100
    pub fn progress(&self) -> u32 {
        if self.supply == 0 {
            return 0;
        }
        let sold = self.tickets_sold as u64;
        let supply = self.supply as u64;
        let percent = (sold * 200 + supply) / (2 * supply);
        percent.min(100) as u32
    }
}

// Arguments for creating a collection
#[derive(Clone, Debug)]
#[contracttype]
pub struct CollectionParams {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub status: CollectionStatus,
    pub ticket_price: i128,
    pub supply: u32,
    pub tickets_sold: u32,
    pub end_time: u64,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Eligibility {
    pub ticket_balance: u32,
    pub is_whitelisted: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum WhitelistBadge {
    Unknown,
    PendingRaffle,
    Whitelisted,
    NotSelected,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Purchase {
    pub collection_id: String,
    pub buyer: Address,
    pub tickets: u32,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LeaderboardEntry {
    pub account: Address,
    pub tickets: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct WinnerEntry {
    pub account: Address,
    pub tickets_bought: u32,
    pub tickets_won: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RaffleConfig {
    pub active_baseline: u32, // Tickets credited to every account while a raffle runs
    pub ended_baseline: u32,  // Tickets credited to every account once it resolves
    pub max_tickets_per_purchase: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RaffleError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CollectionExists = 3,
    CollectionNotFound = 4,
    InvalidPrice = 5,
    InvalidSupply = 6,
    InvalidAmount = 7,
    RaffleNotActive = 8,
    RaffleClosed = 9,
    RaffleStillOpen = 10,
    InvalidTransition = 11,
    SoldOut = 12,
    InvalidConfig = 13,
    Overflow = 14,
    RaffleNotEnded = 15,
}

// Constants
pub const STEP_TICKET_PURCHASE: &str = "Ticket Purchase";
pub const STEP_WINNER_ANNOUNCEMENT: &str = "Winner Announcement";
pub const STEP_DISTRIBUTION: &str = "Distribution";

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

pub const DEFAULT_ACTIVE_BASELINE: u32 = 3;
pub const DEFAULT_ENDED_BASELINE: u32 = 5;
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 100;

pub const MAX_RECENT_PURCHASES: u32 = 50;
pub const LEADERBOARD_PAGE_SIZE: u32 = 10;
pub const LEADERBOARD_CAPACITY: u32 = 10 * LEADERBOARD_PAGE_SIZE;

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
