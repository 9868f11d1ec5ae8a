//! Clock pinned to a single instant.

use chrono::{DateTime, Local, NaiveTime, TimeZone, Utc};
use mockable::Clock;

use crate::task::domain::CalendarDate;

/// A [`Clock`] that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Pins the clock to `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }

    /// Pins the clock to local noon of `date`.
    ///
    /// Returns `None` if noon does not exist on that day in the local zone.
    #[must_use]
    pub fn at_noon(date: CalendarDate) -> Option<Self> {
        let noon = NaiveTime::from_hms_opt(12, 0, 0)?;
        Local
            .from_local_datetime(&date.as_naive().and_time(noon))
            .earliest()
            .map(Self::new)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.instant
    }

    fn utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }
}
