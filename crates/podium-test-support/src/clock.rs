//! Pinned clock so rendered footers carry a known copyright year.

use chrono::{DateTime, Utc};
use podium_core::clock::Clock;

/// A clock frozen at one instant; every render sees the same year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
