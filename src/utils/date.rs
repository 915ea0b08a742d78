use chrono::{Datelike, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// ISO week label used as the quota reset boundary, e.g. "2026-W35".
/// The ISO year can differ from the calendar year around January 1st.
pub fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Week label for UTC "now"; quotas reset on UTC week boundaries,
/// not on the device-local calendar.
pub fn current_week_label() -> String {
    week_label(Utc::now().date_naive())
}
