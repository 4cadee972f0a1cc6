use soroban_sdk::{contracttype, Address, Env, String, Symbol};

use crate::storage_types::RaffleConfig;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectionCreatedEvent {
    pub collection_id: String,
    pub supply: u32,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaffleStartedEvent {
    pub collection_id: String,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaffleEndedEvent {
    pub collection_id: String,
    pub tickets_sold: u32,
    pub ended_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TicketsPurchasedEvent {
    pub collection_id: String,
    pub buyer: Address,
    pub tickets: u32,
    pub cost: i128,
}

pub fn emit_collection_created(env: &Env, event: CollectionCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "collection_created"),),
        event,
    );
}

pub fn emit_raffle_started(env: &Env, event: RaffleStartedEvent) {
    env.events().publish(
        (Symbol::new(env, "raffle_started"),),
        event,
    );
}

pub fn emit_raffle_ended(env: &Env, event: RaffleEndedEvent) {
    env.events().publish(
        (Symbol::new(env, "raffle_ended"),),
        event,
    );
}

pub fn emit_tickets_purchased(env: &Env, event: TicketsPurchasedEvent) {
    env.events().publish(
        (Symbol::new(env, "tickets_purchased"),),
        event,
    );
}

pub fn emit_config_updated(env: &Env, config: RaffleConfig) {
    env.events().publish(
        (Symbol::new(env, "config_updated"),),
        config,
    );
}
