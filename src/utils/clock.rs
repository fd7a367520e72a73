use chrono::{Local, NaiveDateTime, SubsecRound};

/// Source of "now" for the session logger. Swapped for a fixed clock in tests.
pub trait Clock {
    /// Local wall-clock time, truncated to whole seconds so that what gets
    /// written to the log is exactly what is read back.
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Always returns the same instant.
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
