//! Cycle scheduling helpers

use std::time::Duration;

/// Convert the interval argument (minutes) into the sleep period between cycles
pub fn cycle_period(interval_minutes: u64) -> Duration {
    Duration::from_secs(interval_minutes * 60)
}
