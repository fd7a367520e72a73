//! Calendar-day helpers for the `day` column (DD/MM/YYYY).

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub const DAY_FMT: &str = "%d/%m/%Y";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DAY_FMT).map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn format_day(d: &NaiveDate) -> String {
    d.format(DAY_FMT).to_string()
}
