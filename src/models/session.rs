use chrono::{NaiveDateTime, TimeDelta};

/// Hours between the simulated clock-in and clock-out of a single run.
pub const SESSION_OFFSET_HOURS: i64 = 2;

/// In-memory state of one invocation. Only the records derived from it are
/// ever persisted.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub time_in: NaiveDateTime,
    pub time_out: NaiveDateTime,
}

impl Session {
    pub fn starting_at(time_in: NaiveDateTime) -> Self {
        Self {
            time_in,
            time_out: time_in + TimeDelta::hours(SESSION_OFFSET_HOURS),
        }
    }
}
