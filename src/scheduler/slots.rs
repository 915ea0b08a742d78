//! Slot assignment for derived items.
//!
//! A "slot" is an exact time already assigned to another derived item on the
//! same day. Meals probe their preferred slot, then the remaining preference
//! slots in the fixed rotation order starting after the preferred one, then
//! the first free hourly slot of the 24, and finally fall back to midnight.
//! Workouts skip the rotation and go straight from the preferred slot to the
//! hourly scan.

use super::prefs::TimePrefs;
use chrono::NaiveTime;
use std::collections::BTreeSet;

fn first_free_hour(taken: &BTreeSet<NaiveTime>) -> Option<NaiveTime> {
    (0..24)
        .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
        .find(|t| !taken.contains(t))
}

pub fn assign_meal_slot(
    preferred: NaiveTime,
    prefs: &TimePrefs,
    taken: &BTreeSet<NaiveTime>,
) -> NaiveTime {
    if !taken.contains(&preferred) {
        return preferred;
    }

    let rotation = prefs.rotation();
    if let Some(pos) = rotation.iter().position(|t| *t == preferred) {
        for step in 1..rotation.len() {
            let candidate = rotation[(pos + step) % rotation.len()];
            if !taken.contains(&candidate) {
                return candidate;
            }
        }
    }

    first_free_hour(taken).unwrap_or(NaiveTime::MIN)
}

pub fn assign_workout_slot(preferred: NaiveTime, taken: &BTreeSet<NaiveTime>) -> NaiveTime {
    if !taken.contains(&preferred) {
        return preferred;
    }
    first_free_hour(taken).unwrap_or(NaiveTime::MIN)
}
