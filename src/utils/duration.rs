//! `time_worked` rendering: `H:MM:SS`, with a `N day(s), ` prefix for
//! spans of a day or more. Negative spans use floored days, so one second
//! short of zero reads `-1 day, 23:59:59`.

use crate::errors::{AppError, AppResult};
use chrono::TimeDelta;

/// Sentinel stored in place of a duration on TIME_IN rows.
pub const NOT_APPLICABLE: &str = "N/A";

const SECS_PER_DAY: i64 = 86_400;

pub fn format_worked(worked: TimeDelta) -> String {
    let total = worked.num_seconds();
    let days = total.div_euclid(SECS_PER_DAY);
    let rem = total.rem_euclid(SECS_PER_DAY);

    let clock = format!("{}:{:02}:{:02}", rem / 3600, rem % 3600 / 60, rem % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        _ => format!("{} days, {}", days, clock),
    }
}

/// Parse a stored `time_worked` field. `N/A` yields `None`.
/// Fractional seconds are accepted and dropped.
pub fn parse_worked(s: &str) -> AppResult<Option<TimeDelta>> {
    let s = s.trim();
    if s == NOT_APPLICABLE {
        return Ok(None);
    }

    let invalid = || AppError::InvalidDuration(s.to_string());

    let (days, clock) = match s.split_once(", ") {
        Some((prefix, rest)) => {
            let n = prefix
                .strip_suffix(" days")
                .or_else(|| prefix.strip_suffix(" day"))
                .ok_or_else(invalid)?;
            (n.parse::<i64>().map_err(|_| invalid())?, rest)
        }
        None => (0, s),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    let [h, m, sec] = parts.as_slice() else {
        return Err(invalid());
    };

    let whole_sec = sec.split_once('.').map(|(w, _)| w).unwrap_or(*sec);
    if m.len() != 2 || whole_sec.len() != 2 {
        return Err(invalid());
    }

    let h: i64 = h.parse().map_err(|_| invalid())?;
    let m: i64 = m.parse().map_err(|_| invalid())?;
    let sec: i64 = whole_sec.parse().map_err(|_| invalid())?;
    if !(0..24).contains(&h) || !(0..60).contains(&m) || !(0..60).contains(&sec) {
        return Err(invalid());
    }

    let total = days
        .checked_mul(SECS_PER_DAY)
        .and_then(|d| d.checked_add(h * 3600 + m * 60 + sec))
        .ok_or_else(invalid)?;

    TimeDelta::try_seconds(total).map(Some).ok_or_else(invalid)
}
