use super::event_kind::EventKind;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{format_day, parse_day};
use crate::utils::duration::{NOT_APPLICABLE, format_worked, parse_worked};
use crate::utils::time::{format_time, parse_time};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Canonical first row of every log file.
pub const HEADER: [&str; 4] = ["day", "time", "event", "time_worked"];

/// One row of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub day: NaiveDate,                 // ⇔ day (DD/MM/YYYY)
    pub time: NaiveTime,                // ⇔ time (HH:MM:SS)
    pub event: EventKind,               // ⇔ event (TIME_IN | TIME_OUT)
    pub time_worked: Option<TimeDelta>, // ⇔ time_worked (H:MM:SS | N/A)
}

impl LogRecord {
    pub fn time_in(at: NaiveDateTime) -> Self {
        Self {
            day: at.date(),
            time: at.time(),
            event: EventKind::TimeIn,
            time_worked: None,
        }
    }

    pub fn time_out(at: NaiveDateTime, worked: TimeDelta) -> Self {
        Self {
            day: at.date(),
            time: at.time(),
            event: EventKind::TimeOut,
            time_worked: Some(worked),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.day.and_time(self.time)
    }

    pub fn day_str(&self) -> String {
        format_day(&self.day)
    }

    pub fn time_str(&self) -> String {
        format_time(&self.time)
    }

    pub fn worked_str(&self) -> String {
        self.time_worked
            .map(format_worked)
            .unwrap_or_else(|| NOT_APPLICABLE.to_string())
    }

    pub fn to_row(&self) -> [String; 4] {
        [
            self.day_str(),
            self.time_str(),
            self.event.as_str().to_string(),
            self.worked_str(),
        ]
    }

    /// Parse a data row. `line` is the 1-based line number used in error messages.
    pub fn from_row(line: usize, row: &[String]) -> AppResult<Self> {
        let [day, time, event, worked] = row else {
            return Err(AppError::InvalidRecord {
                line,
                reason: format!("expected 4 fields, found {}", row.len()),
            });
        };

        let at_line = |e: AppError| AppError::InvalidRecord {
            line,
            reason: e.to_string(),
        };

        let event = EventKind::from_log_str(event)
            .ok_or_else(|| at_line(AppError::InvalidEvent(event.clone())))?;

        Ok(Self {
            day: parse_day(day).map_err(at_line)?,
            time: parse_time(time).map_err(at_line)?,
            event,
            time_worked: parse_worked(worked).map_err(at_line)?,
        })
    }
}

/// True when `row` is exactly the canonical header.
pub fn is_header(row: &[String]) -> bool {
    row.len() == HEADER.len() && row.iter().zip(HEADER).all(|(a, b)| a == b)
}
