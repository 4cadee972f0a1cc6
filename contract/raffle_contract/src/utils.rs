use soroban_sdk::{Address, Env, String, Vec};

use crate::storage_types::*;

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn get_admin(env: &Env) -> Result<Address, RaffleError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(RaffleError::NotInitialized)
}

pub fn get_token(env: &Env) -> Result<Address, RaffleError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(RaffleError::NotInitialized)
}

pub fn get_config(env: &Env) -> Result<RaffleConfig, RaffleError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RaffleError::NotInitialized)
}

pub fn default_config() -> RaffleConfig {
    RaffleConfig {
        active_baseline: DEFAULT_ACTIVE_BASELINE,
        ended_baseline: DEFAULT_ENDED_BASELINE,
        max_tickets_per_purchase: DEFAULT_MAX_TICKETS_PER_PURCHASE,
    }
}

/// Every status past upcoming must credit at least one ticket.
pub fn validate_config(config: &RaffleConfig) -> Result<(), RaffleError> {
    if config.active_baseline == 0
        || config.ended_baseline == 0
        || config.max_tickets_per_purchase == 0
    {
        return Err(RaffleError::InvalidConfig);
    }
    Ok(())
}

pub fn validate_params(params: &CollectionParams) -> Result<(), RaffleError> {
    if params.ticket_price <= 0 {
        return Err(RaffleError::InvalidPrice);
    }
    if params.supply == 0 || params.tickets_sold > params.supply {
        return Err(RaffleError::InvalidSupply);
    }
    Ok(())
}

pub fn load_collection(env: &Env, collection_id: &String) -> Result<Collection, RaffleError> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Collection(collection_id.clone()))
        .ok_or(RaffleError::CollectionNotFound)
}

pub fn save_collection(env: &Env, collection: &Collection) {
    let key = PersistentKey::Collection(collection.id.clone());
    env.storage().persistent().set(&key, collection);
    extend_persistent(env, &key);
}

pub fn collection_index(env: &Env) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&PersistentKey::CollectionIndex)
        .unwrap_or_else(|| Vec::new(env))
}

pub fn index_collection(env: &Env, collection_id: &String) {
    let mut index = collection_index(env);
    index.push_back(collection_id.clone());
    env.storage().persistent().set(&PersistentKey::CollectionIndex, &index);
    extend_persistent(env, &PersistentKey::CollectionIndex);
}

/// Tickets `holder` bought in `collection_id`, excluding any baseline credit
pub fn purchased_tickets(env: &Env, collection_id: &String, holder: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&PersistentKey::Tickets(collection_id.clone(), holder.clone()))
        .unwrap_or(0)
}

pub fn add_purchased_tickets(
    env: &Env,
    collection_id: &String,
    holder: &Address,
    amount: u32,
) -> Result<u32, RaffleError> {
    let key = PersistentKey::Tickets(collection_id.clone(), holder.clone());
    let current: u32 = env.storage().persistent().get(&key).unwrap_or(0);
    let updated = current.checked_add(amount).ok_or(RaffleError::Overflow)?;

    env.storage().persistent().set(&key, &updated);
    extend_persistent(env, &key);

    update_ranking(env, collection_id, holder, updated);
    Ok(updated)
}

pub fn ranking(env: &Env, collection_id: &String) -> Vec<LeaderboardEntry> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Ranking(collection_id.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

/// Moves `holder` to its place for `tickets`, behind holders that reached the
/// same count earlier. Only the top `LEADERBOARD_CAPACITY` holders are kept;
/// balances only grow, so a holder that drops out re-enters on its next purchase
/// if it ranks again.
fn update_ranking(env: &Env, collection_id: &String, holder: &Address, tickets: u32) {
    let key = PersistentKey::Ranking(collection_id.clone());
    let mut ranked = ranking(env, collection_id);

    if let Some(i) = ranked.iter().position(|entry| entry.account == *holder) {
        ranked.remove(i as u32);
    }

    let mut pos = ranked.len();
    for (i, entry) in ranked.iter().enumerate() {
        if entry.tickets < tickets {
            pos = i as u32;
            break;
        }
    }
    if pos >= LEADERBOARD_CAPACITY {
        return;
    }

    ranked.insert(
        pos,
        LeaderboardEntry {
            account: holder.clone(),
            tickets,
        },
    );
    while ranked.len() > LEADERBOARD_CAPACITY {
        ranked.pop_back();
    }
    env.storage().persistent().set(&key, &ranked);
    extend_persistent(env, &key);
}

/// One zero-based page of the ranking; pages past the end are empty.
pub fn ranking_page(env: &Env, collection_id: &String, page: u32) -> Vec<LeaderboardEntry> {
    let ranked = ranking(env, collection_id);
    let mut entries = Vec::new(env);
    let start = match page.checked_mul(LEADERBOARD_PAGE_SIZE) {
        Some(start) => start,
        None => return entries,
    };
    let end = start.saturating_add(LEADERBOARD_PAGE_SIZE).min(ranked.len());
    for i in start..end {
        if let Some(entry) = ranked.get(i) {
            entries.push_back(entry);
        }
    }
    entries
}

pub fn recent_purchases(env: &Env) -> Vec<Purchase> {
    env.storage()
        .instance()
        .get(&DataKey::RecentPurchases)
        .unwrap_or_else(|| Vec::new(env))
}

/// Newest first, capped at `MAX_RECENT_PURCHASES`
pub fn record_purchase(env: &Env, purchase: Purchase) {
    let mut purchases = recent_purchases(env);
    purchases.push_front(purchase);
    while purchases.len() > MAX_RECENT_PURCHASES {
        purchases.pop_back();
    }
    env.storage().instance().set(&DataKey::RecentPurchases, &purchases);
}

pub fn ticket_cost(price: i128, amount: u32) -> Result<i128, RaffleError> {
    price.checked_mul(amount as i128).ok_or(RaffleError::Overflow)
}
