//! JSON plan store: the whole day→items map, serialized on every change and
//! reloaded at startup.
//!
//! Read failures are not surfaced: a missing or unreadable file loads as an
//! empty plan, and a day entry that no longer parses is dropped. The data
//! loss is accepted; the derived part of the timeline is recomputed anyway.

use crate::errors::{AppError, AppResult};
use crate::models::item::ScheduleItem;
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub type DayMap = BTreeMap<NaiveDate, Vec<ScheduleItem>>;

pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the full plan. Corruption at any level degrades to "empty":
    /// file level → empty map, day level → that day dropped.
    pub fn load(&self) -> DayMap {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return DayMap::new();
        };
        let Ok(value) = serde_json::from_str::<Value>(&content) else {
            return DayMap::new();
        };
        let Value::Object(days) = value else {
            return DayMap::new();
        };

        let mut map = DayMap::new();
        for (key, entry) in days {
            let Some(day) = parse_date(&key) else {
                continue;
            };
            let Ok(items) = serde_json::from_value::<Vec<ScheduleItem>>(entry) else {
                continue;
            };
            map.insert(day, items);
        }
        map
    }

    pub fn save(&self, days: &DayMap) -> AppResult<()> {
        let keyed: BTreeMap<String, &Vec<ScheduleItem>> = days
            .iter()
            .map(|(day, items)| (day.format("%Y-%m-%d").to_string(), items))
            .collect();

        let json = serde_json::to_string_pretty(&keyed)
            .map_err(|e| AppError::Store(format!("serialize plan: {e}")))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        Ok(())
    }
}
