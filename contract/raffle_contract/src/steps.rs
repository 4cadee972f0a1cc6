use soroban_sdk::{Env, String, Vec};

use crate::storage_types::{
    CollectionStatus, Step, StepStatus, STEP_DISTRIBUTION, STEP_TICKET_PURCHASE,
    STEP_WINNER_ANNOUNCEMENT,
};

/// Status of the ticket purchase, winner announcement and distribution
/// steps, in that order, for a collection in `status`.
pub fn step_statuses(status: CollectionStatus) -> [StepStatus; 3] {
    match status {
        CollectionStatus::Upcoming => [StepStatus::Pending, StepStatus::Pending, StepStatus::Pending],
        CollectionStatus::Active => [StepStatus::Active, StepStatus::Pending, StepStatus::Pending],
        CollectionStatus::Ended => [StepStatus::Completed, StepStatus::Completed, StepStatus::Active],
    }
}

pub fn progression(env: &Env, status: CollectionStatus) -> Vec<Step> {
    let names = [STEP_TICKET_PURCHASE, STEP_WINNER_ANNOUNCEMENT, STEP_DISTRIBUTION];
    let statuses = step_statuses(status);

    let mut steps = Vec::new(env);
    for (i, (name, status)) in names.iter().zip(statuses.iter()).enumerate() {
        steps.push_back(Step {
            id: i as u32 + 1,
            name: String::from_str(env, name),
            status: *status,
        });
    }
    steps
}

pub fn active_step(status: CollectionStatus) -> Option<u32> {
    step_statuses(status)
        .iter()
        .position(|s| *s == StepStatus::Active)
        .map(|i| i as u32 + 1)
}
