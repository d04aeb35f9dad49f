//! Clock abstraction so page renders are reproducible.

use chrono::{DateTime, Datelike, Utc};

/// Source of the current time, read once per render for the footer's
/// copyright year.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// The year printed in the site footer.
    fn copyright_year(&self) -> i32 {
        self.now().year()
    }
}

/// Wall-clock time, used when serving real requests.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
