//! Clock-time helpers for the `time` column (HH:MM:SS, 24-hour).

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const TIME_FMT: &str = "%H:%M:%S";

pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), TIME_FMT).map_err(|_| AppError::InvalidTime(t.to_string()))
}

pub fn format_time(t: &NaiveTime) -> String {
    t.format(TIME_FMT).to_string()
}
