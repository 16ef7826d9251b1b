//! Time source and calendar-day derivation.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

/// Which calendar a plan's `date` is taken from.
///
/// `Utc` truncates the instant in UTC, which is how previously stored
/// collections were dated. `Local` uses the system time zone instead.
/// Whichever is chosen must be used for both writing and filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayBoundary {
    #[default]
    Utc,
    Local,
}

impl DayBoundary {
    fn time_zone(&self) -> TimeZone {
        match self {
            DayBoundary::Utc => TimeZone::UTC,
            DayBoundary::Local => TimeZone::system(),
        }
    }

    /// Calendar date of `instant` under this boundary.
    pub fn date_of(&self, instant: Timestamp) -> Date {
        instant.to_zoned(self.time_zone()).date()
    }
}
