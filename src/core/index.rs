//! Day index over the log: built in one forward pass, then used to pair a
//! clock-out with its clock-in.

use crate::models::record::LogRecord;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct DayIndex {
    last_in_by_day: HashMap<NaiveDate, LogRecord>,
    newest: Option<LogRecord>,
}

impl DayIndex {
    pub fn build(records: &[LogRecord]) -> Self {
        let mut index = Self::default();
        for rec in records {
            if rec.event.is_in() {
                index.last_in_by_day.insert(rec.day, rec.clone());
            }
            index.newest = Some(rec.clone());
        }
        index
    }

    /// Last TIME_IN written on `day`.
    pub fn last_time_in(&self, day: &NaiveDate) -> Option<&LogRecord> {
        self.last_in_by_day.get(day)
    }

    /// Most recent record of the whole log.
    pub fn newest(&self) -> Option<&LogRecord> {
        self.newest.as_ref()
    }

    /// The newest record, if it is a TIME_IN nobody has clocked out of yet.
    pub fn open_time_in(&self) -> Option<&LogRecord> {
        self.newest.as_ref().filter(|r| r.event.is_in())
    }

    /// TIME_IN a clock-out at `time_out` belongs to.
    ///
    /// Same-day TIME_IN first. A still-open TIME_IN from the previous day
    /// covers sessions that ran past midnight. Never returns a TIME_IN later
    /// than `time_out`.
    pub fn match_time_out(&self, time_out: NaiveDateTime) -> Option<&LogRecord> {
        let day = time_out.date();

        if let Some(rec) = self.last_time_in(&day)
            && rec.timestamp() <= time_out
        {
            return Some(rec);
        }

        self.open_time_in().filter(|rec| {
            Some(rec.day) == day.pred_opt() && rec.timestamp() <= time_out
        })
    }
}
