//! Time utilities: parsing HH:MM, minute-of-day conversions, formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_or_err(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Minutes since midnight for a time value (seconds truncated).
pub fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Inverse of [`minute_of_day`]. The caller must pass a value in [0, 1439].
pub fn time_from_minute(m: i64) -> NaiveTime {
    let m = m.clamp(0, 1439) as u32;
    NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or(NaiveTime::MIN)
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
