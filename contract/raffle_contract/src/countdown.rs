use soroban_sdk::Env;

use crate::storage_types::{TimeLeft, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};

impl TimeLeft {
    /// Breaks the span from `now_ms` to `end_ms` into days, hours, minutes
    /// and seconds. A deadline at or before `now_ms` yields all zeros.
    pub fn between(now_ms: u64, end_ms: u64) -> TimeLeft {
        if end_ms <= now_ms {
            return TimeLeft::default();
        }

        let difference = end_ms - now_ms;
        TimeLeft {
            days: difference / MS_PER_DAY,
            hours: ((difference % MS_PER_DAY) / MS_PER_HOUR) as u32,
            minutes: ((difference % MS_PER_HOUR) / MS_PER_MINUTE) as u32,
            seconds: ((difference % MS_PER_MINUTE) / MS_PER_SECOND) as u32,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == TimeLeft::default()
    }

    /// Milliseconds covered by the breakdown, truncated to whole seconds.
    pub fn as_millis(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours as u64 * MS_PER_HOUR
            + self.minutes as u64 * MS_PER_MINUTE
            + self.seconds as u64 * MS_PER_SECOND
    }
}

/// Ledger time in epoch milliseconds
pub fn now_millis(env: &Env) -> u64 {
    env.ledger().timestamp().saturating_mul(MS_PER_SECOND)
}

/// Check if the deadline has been reached
pub fn is_closed(env: &Env, end_time: u64) -> bool {
    now_millis(env) >= end_time
}
