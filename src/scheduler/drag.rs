//! Drag-to-reschedule gesture state and timeline geometry.
//!
//! The gesture is an explicit state machine instead of ad hoc flags:
//! a long-press arms one item, pointer movement accumulates a visual pixel
//! offset (no timeline mutation), release either commits the move or — when
//! the pointer never moved — opens the item's detail view. At most one
//! gesture is active; the host suspends timeline scrolling while
//! [`DragState::is_active`] holds.

use crate::utils::time::{minute_of_day, time_from_minute};
use chrono::{NaiveDateTime, NaiveTime};

/// Snap quantum in minutes.
pub const GRID_MINUTES: i64 = 15;
/// Minutes in a day; valid committed times are [0, DAY_MINUTES - GRID_MINUTES].
pub const DAY_MINUTES: i64 = 1440;

#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    /// Long-press fired on an item; no movement seen yet.
    Armed { item_id: String },
    /// Pointer moving; `offset_px` is the accumulated vertical delta.
    Dragging { item_id: String, offset_px: f64 },
}

/// What the host should do after a release.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// Released without movement: show the item's detail view.
    OpenDetail { item_id: String },
    /// Released after movement: commit the item at this pixel offset.
    Commit { item_id: String, offset_px: f64 },
    /// Nothing was armed.
    None,
}

impl DragState {
    pub fn new() -> Self {
        DragState::Idle
    }

    /// True while a gesture owns the pointer (scrolling stays suspended).
    pub fn is_active(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    /// Long-press on an item. Ignored if a gesture is already running.
    pub fn arm(&mut self, item_id: &str) {
        if matches!(self, DragState::Idle) {
            *self = DragState::Armed {
                item_id: item_id.to_string(),
            };
        }
    }

    /// Pointer moved by `dy` pixels. A no-op unless armed or dragging.
    pub fn pointer_move(&mut self, dy: f64) {
        match std::mem::replace(self, DragState::Idle) {
            DragState::Armed { item_id } => {
                *self = DragState::Dragging {
                    item_id,
                    offset_px: dy,
                };
            }
            DragState::Dragging { item_id, offset_px } => {
                *self = DragState::Dragging {
                    item_id,
                    offset_px: offset_px + dy,
                };
            }
            DragState::Idle => {}
        }
    }

    /// Pointer released; the machine returns to `Idle` either way.
    pub fn release(&mut self) -> DragOutcome {
        match std::mem::replace(self, DragState::Idle) {
            DragState::Idle => DragOutcome::None,
            DragState::Armed { item_id } => DragOutcome::OpenDetail { item_id },
            DragState::Dragging { item_id, offset_px } => DragOutcome::Commit { item_id, offset_px },
        }
    }

    /// Gesture cancelled by the host (e.g. navigation away).
    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }
}

impl Default for DragState {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a vertical pixel delta to minutes at the given timeline scale.
pub fn pixels_to_minutes(offset_px: f64, pixels_per_hour: f64) -> i64 {
    if pixels_per_hour <= 0.0 {
        return 0;
    }
    (offset_px / pixels_per_hour * 60.0).round() as i64
}

/// Snap a raw minute-of-day onto the 15-minute grid and clamp it into the
/// day. Sub-grid remainders snap upward (a 37-minute drag from 09:00 lands
/// on 09:45), so the clamp ceiling is the last grid line, 23:45.
pub fn snap_minute(raw: i64) -> i64 {
    let clamped = raw.clamp(0, DAY_MINUTES - 1);
    let snapped = (clamped as u64).div_ceil(GRID_MINUTES as u64) as i64 * GRID_MINUTES;
    snapped.min(DAY_MINUTES - GRID_MINUTES)
}

/// New timestamp for an item dragged by `offset_px` pixels.
pub fn dragged_time(original: NaiveDateTime, offset_px: f64, pixels_per_hour: f64) -> NaiveDateTime {
    let raw = minute_of_day(original.time()) + pixels_to_minutes(offset_px, pixels_per_hour);
    original.date().and_time(time_from_minute(snap_minute(raw)))
}

/// Timeline position (vertical pixel) to a snapped time-of-day, used when a
/// long-press on empty space creates a new event.
pub fn time_at_pixel(y_px: f64, pixels_per_hour: f64) -> NaiveTime {
    time_from_minute(snap_minute(pixels_to_minutes(y_px, pixels_per_hour)))
}
