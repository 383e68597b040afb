//! Time remaining until the ceremony.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Days, hours, minutes and seconds left before a target instant.
///
/// Never negative: once the target has passed every field is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Time from `now` until `target`, saturating at zero.
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let remaining = (target - now).num_seconds().max(0) as u64;
        Self::from_seconds(remaining)
    }

    /// Split a second count into its display units.
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
        }
    }

    /// Whole seconds remaining.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    /// Whether the target has been reached.
    pub fn is_elapsed(&self) -> bool {
        self.total_seconds() == 0
    }

    /// `(value, unit label)` pairs in display order.
    pub fn units(&self) -> [(u64, &'static str); 4] {
        [
            (self.days, "Days"),
            (self.hours, "Hours"),
            (self.minutes, "Minutes"),
            (self.seconds, "Seconds"),
        ]
    }
}
