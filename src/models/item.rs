use super::item_kind::ItemKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One entry on a day's timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleItem {
    /// Stable identifier. Derived items use "meal-{index}-{name}" /
    /// "workout-{offset}-{name}" so a rebuild can match them against the
    /// stored day list; manual events use "event-{unix_millis}".
    pub id: String,
    pub title: String,
    /// Absolute date + time of the entry. Stored as an ISO string in the
    /// plan file, parsed back on load.
    pub at: NaiveDateTime,
    pub kind: ItemKind,
    /// Back-reference to the originating meal/workout row, if any.
    /// Always None for manual events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ScheduleItem {
    pub fn new(
        id: String,
        title: String,
        date: NaiveDate,
        time: NaiveTime,
        kind: ItemKind,
        source: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            at: date.and_time(time),
            kind,
            source,
        }
    }

    pub fn time_str(&self) -> String {
        self.at.format("%H:%M").to_string()
    }

    pub fn date_str(&self) -> String {
        self.at.format("%Y-%m-%d").to_string()
    }
}
