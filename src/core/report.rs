use crate::errors::{AppError, AppResult};
use crate::models::record::LogRecord;
use chrono::{NaiveDate, TimeDelta};

/// Records of `day`, or all of them.
pub fn filter_by_day(records: Vec<LogRecord>, day: Option<NaiveDate>) -> Vec<LogRecord> {
    match day {
        Some(d) => records.into_iter().filter(|r| r.day == d).collect(),
        None => records,
    }
}

/// Sum of `time_worked` over the TIME_OUT rows.
pub fn total_worked(records: &[LogRecord]) -> AppResult<TimeDelta> {
    records
        .iter()
        .filter(|r| r.event.is_out())
        .filter_map(|r| r.time_worked)
        .try_fold(TimeDelta::zero(), |acc, d| acc.checked_add(&d))
        .ok_or_else(|| AppError::InvalidDuration("total worked time out of range".to_string()))
}
