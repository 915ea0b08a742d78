//! The planner owns the day→items map and persists it through [`PlanStore`]
//! after every mutation. It is constructed and passed explicitly by the
//! caller; nothing here is global.

use super::drag::{dragged_time, time_at_pixel};
use super::rebuild::{RebuildContext, rebuild_day};
use super::store::{DayMap, PlanStore};
use crate::errors::{AppError, AppResult};
use crate::models::item::ScheduleItem;
use crate::models::item_kind::ItemKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

pub struct Planner {
    days: DayMap,
    store: PlanStore,
}

impl Planner {
    /// Open the plan store and load whatever state it holds.
    pub fn open(store: PlanStore) -> Self {
        let days = store.load();
        Self { days, store }
    }

    pub fn items(&self, day: NaiveDate) -> &[ScheduleItem] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    fn persist(&self) -> AppResult<()> {
        self.store.save(&self.days)
    }

    /// Recompute `day` from the plans and replace the stored list.
    /// Runs whenever the active day, the meal list, the workout list or the
    /// time preferences change.
    pub fn rebuild(&mut self, day: NaiveDate, ctx: &RebuildContext) -> AppResult<&[ScheduleItem]> {
        let existing = self.days.get(&day).map(Vec::as_slice).unwrap_or(&[]);
        let rebuilt = rebuild_day(day, ctx, existing);
        self.days.insert(day, rebuilt);
        self.persist()?;
        Ok(self.items(day))
    }

    /// Add a manual event at an explicit time.
    pub fn add_event(
        &mut self,
        day: NaiveDate,
        time: NaiveTime,
        title: &str,
    ) -> AppResult<ScheduleItem> {
        let item = ScheduleItem::new(
            event_id(),
            title.to_string(),
            day,
            time,
            ItemKind::Event,
            None,
        );
        self.insert_sorted(day, item.clone());
        self.persist()?;
        Ok(item)
    }

    /// Long-press on empty timeline space: create a provisional event at the
    /// pressed vertical position. The caller opens the detail view with the
    /// returned item; [`Planner::cancel_creation`] discards it if the view
    /// is dismissed without saving.
    pub fn create_event_at(
        &mut self,
        day: NaiveDate,
        y_px: f64,
        pixels_per_hour: f64,
    ) -> AppResult<ScheduleItem> {
        let time = time_at_pixel(y_px, pixels_per_hour);
        self.add_event(day, time, "New event")
    }

    /// Detail-view "save" hook: replace the stored item with the edited one.
    pub fn update_item(&mut self, day: NaiveDate, item: ScheduleItem) -> AppResult<()> {
        let list = self
            .days
            .get_mut(&day)
            .ok_or_else(|| AppError::ItemNotFound(day.to_string(), item.id.clone()))?;
        let slot = list
            .iter_mut()
            .find(|e| e.id == item.id)
            .ok_or_else(|| AppError::ItemNotFound(day.to_string(), item.id.clone()))?;
        *slot = item;
        list.sort_by(|a, b| a.at.cmp(&b.at).then_with(|| a.id.cmp(&b.id)));
        self.persist()
    }

    /// Detail-view "delete" hook.
    pub fn delete_item(&mut self, day: NaiveDate, item_id: &str) -> AppResult<()> {
        let list = self
            .days
            .get_mut(&day)
            .ok_or_else(|| AppError::ItemNotFound(day.to_string(), item_id.to_string()))?;
        let before = list.len();
        list.retain(|e| e.id != item_id);
        if list.len() == before {
            return Err(AppError::ItemNotFound(day.to_string(), item_id.to_string()));
        }
        self.persist()
    }

    /// Detail-view "cancel" hook for a provisional event: same removal as
    /// delete, but tolerates the item already being gone.
    pub fn cancel_creation(&mut self, day: NaiveDate, item_id: &str) -> AppResult<()> {
        if let Some(list) = self.days.get_mut(&day) {
            list.retain(|e| e.id != item_id);
        }
        self.persist()
    }

    /// Commit a finished drag: convert the pixel offset to a snapped,
    /// clamped time and re-sort the day. Returns the new timestamp.
    pub fn commit_drag(
        &mut self,
        day: NaiveDate,
        item_id: &str,
        offset_px: f64,
        pixels_per_hour: f64,
    ) -> AppResult<NaiveDateTime> {
        let list = self
            .days
            .get_mut(&day)
            .ok_or_else(|| AppError::ItemNotFound(day.to_string(), item_id.to_string()))?;
        let item = list
            .iter_mut()
            .find(|e| e.id == item_id)
            .ok_or_else(|| AppError::ItemNotFound(day.to_string(), item_id.to_string()))?;

        let moved = dragged_time(item.at, offset_px, pixels_per_hour);
        item.at = moved;
        list.sort_by(|a, b| a.at.cmp(&b.at).then_with(|| a.id.cmp(&b.id)));
        self.persist()?;
        Ok(moved)
    }

    fn insert_sorted(&mut self, day: NaiveDate, item: ScheduleItem) {
        let list = self.days.entry(day).or_default();
        list.push(item);
        list.sort_by(|a, b| a.at.cmp(&b.at).then_with(|| a.id.cmp(&b.id)));
    }
}

/// Timestamp-derived event id, bumped past the previous one so two events
/// created within the same millisecond still get distinct ids.
fn event_id() -> String {
    static LAST: AtomicI64 = AtomicI64::new(0);
    let now = Utc::now().timestamp_millis();
    let mut prev = LAST.load(Ordering::Relaxed);
    loop {
        let next = now.max(prev + 1);
        match LAST.compare_exchange(prev, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return format!("event-{next}"),
            Err(observed) => prev = observed,
        }
    }
}
