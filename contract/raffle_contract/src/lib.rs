#![no_std]

mod countdown;
mod eligibility;
mod events;
mod steps;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};
use storage_types::*;

pub use storage_types::{
    Collection, CollectionParams, CollectionStatus, Eligibility, LeaderboardEntry, Purchase,
    RaffleConfig, RaffleError, Step, StepStatus, TimeLeft, WhitelistBadge, WinnerEntry,
};

#[contract]
pub struct RaffleContract;

#[contractimpl]
impl RaffleContract {
    /// Initialize the contract with the admin and the token tickets are paid in
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), RaffleError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RaffleError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Config, &utils::default_config());
        utils::extend_instance(&env);

        log!(&env, "raffle contract initialized", admin);
        Ok(())
    }

    pub fn update_config(env: Env, config: RaffleConfig) -> Result<(), RaffleError> {
        let admin = utils::get_admin(&env)?;
        admin.require_auth();
        utils::validate_config(&config)?;

        env.storage().instance().set(&DataKey::Config, &config);
        utils::extend_instance(&env);

        events::emit_config_updated(&env, config);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<RaffleConfig, RaffleError> {
        utils::get_config(&env)
    }

    /// Register a collection. Its steps are derived from `params.status`.
    pub fn create_collection(env: Env, params: CollectionParams) -> Result<String, RaffleError> {
        let admin = utils::get_admin(&env)?;
        admin.require_auth();
        utils::validate_params(&params)?;

        if env
            .storage()
            .persistent()
            .has(&PersistentKey::Collection(params.id.clone()))
        {
            return Err(RaffleError::CollectionExists);
        }

        let collection = Collection {
            id: params.id.clone(),
            name: params.name,
            artist: params.artist,
            status: params.status,
            ticket_price: params.ticket_price,
            supply: params.supply,
            tickets_sold: params.tickets_sold,
            end_time: params.end_time,
            created_at: countdown::now_millis(&env),
        };
        utils::save_collection(&env, &collection);

        utils::index_collection(&env, &collection.id);
        utils::extend_instance(&env);

        events::emit_collection_created(
            &env,
            events::CollectionCreatedEvent {
                collection_id: collection.id.clone(),
                supply: collection.supply,
                end_time: collection.end_time,
            },
        );

        Ok(collection.id)
    }

    /// Open ticket sales for an upcoming collection
    pub fn start_raffle(env: Env, collection_id: String) -> Result<(), RaffleError> {
        let admin = utils::get_admin(&env)?;
        admin.require_auth();

        let mut collection = utils::load_collection(&env, &collection_id)?;
        if countdown::is_closed(&env, collection.end_time) {
            return Err(RaffleError::RaffleClosed);
        }
        Self::advance(&env, &mut collection, CollectionStatus::Active)?;

        events::emit_raffle_started(
            &env,
            events::RaffleStartedEvent {
                collection_id,
                end_time: collection.end_time,
            },
        );
        Ok(())
    }

    /// Resolve a raffle whose end time has passed. Callable by anyone.
    pub fn end_raffle(env: Env, collection_id: String) -> Result<(), RaffleError> {
        let mut collection = utils::load_collection(&env, &collection_id)?;
        if collection.status != CollectionStatus::Active {
            return Err(RaffleError::InvalidTransition);
        }
        if !countdown::is_closed(&env, collection.end_time) {
            return Err(RaffleError::RaffleStillOpen);
        }
        Self::advance(&env, &mut collection, CollectionStatus::Ended)?;

        events::emit_raffle_ended(
            &env,
            events::RaffleEndedEvent {
                collection_id,
                tickets_sold: collection.tickets_sold,
                ended_at: countdown::now_millis(&env),
            },
        );
        Ok(())
    }

    /// Buy raffle tickets, paying `ticket_price * amount` to the admin.
    /// Returns the buyer's eligibility after the purchase.
    pub fn buy_tickets(
        env: Env,
        buyer: Address,
        collection_id: String,
        amount: u32,
    ) -> Result<Eligibility, RaffleError> {
        buyer.require_auth();

        let config = utils::get_config(&env)?;
        let mut collection = utils::load_collection(&env, &collection_id)?;

        if collection.status != CollectionStatus::Active {
            return Err(RaffleError::RaffleNotActive);
        }
        if countdown::is_closed(&env, collection.end_time) {
            return Err(RaffleError::RaffleClosed);
        }
        if amount == 0 || amount > config.max_tickets_per_purchase {
            return Err(RaffleError::InvalidAmount);
        }

        let tickets_sold = collection
            .tickets_sold
            .checked_add(amount)
            .ok_or(RaffleError::Overflow)?;
        if tickets_sold > collection.supply {
            return Err(RaffleError::SoldOut);
        }

        let cost = utils::ticket_cost(collection.ticket_price, amount)?;
        let token_client = token::Client::new(&env, &utils::get_token(&env)?);
        token_client.transfer(&buyer, &utils::get_admin(&env)?, &cost);

        collection.tickets_sold = tickets_sold;
        utils::save_collection(&env, &collection);

        let purchased = utils::add_purchased_tickets(&env, &collection_id, &buyer, amount)?;
        utils::record_purchase(
            &env,
            Purchase {
                collection_id: collection_id.clone(),
                buyer: buyer.clone(),
                tickets: amount,
                timestamp: countdown::now_millis(&env),
            },
        );
        utils::extend_instance(&env);

        log!(&env, "tickets purchased", buyer, amount, tickets_sold);
        events::emit_tickets_purchased(
            &env,
            events::TicketsPurchasedEvent {
                collection_id,
                buyer,
                tickets: amount,
                cost,
            },
        );

        Ok(eligibility::resolve(&config, collection.status, purchased))
    }

    pub fn get_collection(env: Env, collection_id: String) -> Result<Collection, RaffleError> {
        utils::load_collection(&env, &collection_id)
    }

    /// All collections in creation order
    pub fn list_collections(env: Env) -> Vec<Collection> {
        let mut collections = Vec::new(&env);
        for id in utils::collection_index(&env).iter() {
            if let Ok(collection) = utils::load_collection(&env, &id) {
                collections.push_back(collection);
            }
        }
        collections
    }

    pub fn steps(env: Env, collection_id: String) -> Result<Vec<Step>, RaffleError> {
        let collection = utils::load_collection(&env, &collection_id)?;
        Ok(steps::progression(&env, collection.status))
    }

    /// Time remaining until the raffle closes, measured against the ledger clock
    pub fn time_left(env: Env, collection_id: String) -> Result<TimeLeft, RaffleError> {
        let collection = utils::load_collection(&env, &collection_id)?;
        Ok(TimeLeft::between(countdown::now_millis(&env), collection.end_time))
    }

    pub fn eligibility(
        env: Env,
        account: Address,
        collection_id: String,
    ) -> Result<Eligibility, RaffleError> {
        let collection = utils::load_collection(&env, &collection_id)?;
        eligibility::resolve_for(&env, &account, &collection)
    }

    pub fn whitelist_badge(
        env: Env,
        account: Option<Address>,
        collection_id: String,
    ) -> Result<WhitelistBadge, RaffleError> {
        let collection = utils::load_collection(&env, &collection_id)?;
        eligibility::badge(&env, account, &collection)
    }

    /// Most recent purchases across all collections, newest first
    pub fn recent_purchases(env: Env) -> Vec<Purchase> {
        utils::recent_purchases(&env)
    }

    /// Percentage of supply sold, rounded and capped at 100
    pub fn progress(env: Env, collection_id: String) -> Result<u32, RaffleError> {
        Ok(utils::load_collection(&env, &collection_id)?.progress())
    }

    /// Holders ranked by purchased tickets, `LEADERBOARD_PAGE_SIZE` per page.
    /// Pages are zero-based; a page past the end is empty. Only the top
    /// `LEADERBOARD_CAPACITY` holders are ranked.
    pub fn leaderboard(
        env: Env,
        collection_id: String,
        page: u32,
    ) -> Result<Vec<LeaderboardEntry>, RaffleError> {
        utils::load_collection(&env, &collection_id)?;
        Ok(utils::ranking_page(&env, &collection_id, page))
    }

    /// Resolved raffle outcome per holder, in leaderboard order
    pub fn winners(
        env: Env,
        collection_id: String,
        page: u32,
    ) -> Result<Vec<WinnerEntry>, RaffleError> {
        let collection = utils::load_collection(&env, &collection_id)?;
        if collection.status != CollectionStatus::Ended {
            return Err(RaffleError::RaffleNotEnded);
        }
        let config = utils::get_config(&env)?;

        let mut winners = Vec::new(&env);
        for entry in utils::ranking_page(&env, &collection_id, page).iter() {
            let outcome = eligibility::resolve(&config, collection.status, entry.tickets);
            winners.push_back(WinnerEntry {
                account: entry.account,
                tickets_bought: entry.tickets,
                tickets_won: if outcome.is_whitelisted { entry.tickets } else { 0 },
            });
        }
        Ok(winners)
    }
}

impl RaffleContract {
    fn advance(
        env: &Env,
        collection: &mut Collection,
        to: CollectionStatus,
    ) -> Result<(), RaffleError> {
        if to.rank() != collection.status.rank() + 1 {
            return Err(RaffleError::InvalidTransition);
        }

        collection.status = to;
        utils::save_collection(env, collection);

        let step = steps::active_step(to).unwrap_or(0);
        log!(env, "raffle advanced", collection.id.clone(), step);
        Ok(())
    }
}
