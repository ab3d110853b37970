//! Deterministic clock for service tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a fixed instant.
pub(crate) struct FixtureClock {
    pub(crate) utc_now: DateTime<Utc>,
}

impl FixtureClock {
    pub(crate) fn at(year: i32, month: u32, day: u32) -> Self {
        let utc_now = Utc
            .with_ymd_and_hms(year, month, day, 8, 30, 0)
            .single()
            .expect("valid fixture instant");
        Self { utc_now }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}
