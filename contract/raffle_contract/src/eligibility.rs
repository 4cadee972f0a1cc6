use soroban_sdk::{Address, Env};

use crate::countdown;
use crate::storage_types::*;
use crate::utils;

/// Ticket balance and whitelist outcome for a holder of `purchased` tickets
/// in a collection currently in `status`.
///
/// Upcoming raffles hold no tickets. Running raffles credit the active
/// baseline on top of purchases and have no outcome yet. Resolved raffles
/// credit the ended baseline and whitelist every holder.
pub fn resolve(config: &RaffleConfig, status: CollectionStatus, purchased: u32) -> Eligibility {
    match status {
        CollectionStatus::Upcoming => Eligibility {
            ticket_balance: 0,
            is_whitelisted: false,
        },
        CollectionStatus::Active => Eligibility {
            ticket_balance: config.active_baseline.saturating_add(purchased),
            is_whitelisted: false,
        },
        CollectionStatus::Ended => Eligibility {
            ticket_balance: config.ended_baseline.saturating_add(purchased),
            is_whitelisted: true,
        },
    }
}

pub fn resolve_for(
    env: &Env,
    account: &Address,
    collection: &Collection,
) -> Result<Eligibility, RaffleError> {
    let config = utils::get_config(env)?;
    let purchased = utils::purchased_tickets(env, &collection.id, account);
    Ok(resolve(&config, collection.status, purchased))
}

pub fn badge(env: &Env, account: Option<Address>, collection: &Collection) -> Result<WhitelistBadge, RaffleError> {
    let account = match account {
        Some(account) => account,
        None => return Ok(WhitelistBadge::Unknown),
    };

    let eligibility = resolve_for(env, &account, collection)?;
    if eligibility.is_whitelisted {
        return Ok(WhitelistBadge::Whitelisted);
    }

    let raffle_over = collection.status == CollectionStatus::Ended
        || countdown::is_closed(env, collection.end_time);
    if raffle_over {
        Ok(WhitelistBadge::NotSelected)
    } else {
        Ok(WhitelistBadge::PendingRaffle)
    }
}
