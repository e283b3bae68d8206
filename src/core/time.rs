//! Clock abstraction for testable time-dependent logic

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};

/// Abstraction over the system clock.
///
/// Version derivation needs both the current UTC instant (build number) and
/// the local wall-clock time for the same instant (revision number), so the
/// two views are exposed separately.
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc>;

    /// Local wall-clock time for the current instant
    fn now_local(&self) -> NaiveDateTime;
}

/// Production clock using system time and the process's local time zone
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Deterministic clock pinned to a fixed instant and a fixed UTC offset
/// standing in for the local time zone.
///
/// Public so integration tests can drive the generator without depending on
/// the host time zone.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: DateTime<Utc>,
    offset: FixedOffset,
}

impl FixedClock {
    /// Create a fixed clock at the given instant with the given local offset
    pub fn new(instant: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { instant, offset }
    }

    /// Fixed clock whose local zone is UTC itself
    pub fn utc(instant: DateTime<Utc>) -> Self {
        Self::new(instant, Utc.fix())
    }

    /// Advance the pinned instant by the given duration
    pub fn advance(&mut self, duration: chrono::Duration) {
        self.instant += duration;
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.instant
    }

    fn now_local(&self) -> NaiveDateTime {
        self.instant.with_timezone(&self.offset).naive_local()
    }
}
