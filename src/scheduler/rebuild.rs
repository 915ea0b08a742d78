//! Pure recomputation of a day's timeline from the meal/workout plans.
//!
//! Derived items are recomputed every time; they are not the source of
//! truth. A manually dragged time survives recomputation because the merge
//! step matches derived ids against the stored day list and keeps the stored
//! timestamp. Manual `event` items pass through untouched.

use super::prefs::TimePrefs;
use super::slots::{assign_meal_slot, assign_workout_slot};
use crate::models::item::ScheduleItem;
use crate::models::item_kind::ItemKind;
use crate::models::meal::Meal;
use crate::models::workout::Workout;
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub struct RebuildContext<'a> {
    pub today: NaiveDate,
    /// Today's meal plan, in order. Only contributes when the rebuilt day
    /// is `today`.
    pub meals: &'a [Meal],
    /// The 7-day workout plan; index = day offset from `today`.
    pub workouts: &'a [Workout],
    pub prefs: &'a TimePrefs,
}

pub fn derived_meal_id(index: usize, name: &str) -> String {
    format!("meal-{}-{}", index, name)
}

pub fn derived_workout_id(offset: i64, name: &str) -> String {
    format!("workout-{}-{}", offset, name)
}

/// Recompute the timeline for `day`. `existing` is the currently stored day
/// list; the result replaces it.
pub fn rebuild_day(
    day: NaiveDate,
    ctx: &RebuildContext,
    existing: &[ScheduleItem],
) -> Vec<ScheduleItem> {
    let mut taken: BTreeSet<chrono::NaiveTime> = BTreeSet::new();
    let mut derived: Vec<ScheduleItem> = Vec::new();

    // 1. Meals only apply to the current day.
    if day == ctx.today {
        for (index, meal) in ctx.meals.iter().enumerate() {
            let slot = assign_meal_slot(ctx.prefs.meal_slot(meal.kind), ctx.prefs, &taken);
            taken.insert(slot);
            derived.push(ScheduleItem::new(
                derived_meal_id(index, &meal.name),
                meal.name.clone(),
                day,
                slot,
                ItemKind::Meal,
                Some(meal.id.to_string()),
            ));
        }
    }

    // 2. The workout for this day's offset within the 7-day plan.
    let offset = (day - ctx.today).num_days();
    if (0..7).contains(&offset) {
        if let Some(workout) = ctx.workouts.get(offset as usize) {
            let slot = assign_workout_slot(ctx.prefs.workout, &taken);
            taken.insert(slot);
            derived.push(ScheduleItem::new(
                derived_workout_id(offset, &workout.name),
                workout.name.clone(),
                day,
                slot,
                ItemKind::Workout,
                Some(workout.id.to_string()),
            ));
        }
    }

    // 3. Merge: a derived id already present in the stored list keeps its
    //    stored (possibly manually dragged) timestamp.
    let mut out: Vec<ScheduleItem> = Vec::with_capacity(derived.len());
    for mut item in derived {
        if let Some(prev) = existing.iter().find(|e| e.id == item.id) {
            item.at = prev.at;
        }
        out.push(item);
    }

    // 4. Manual events pass through unchanged.
    out.extend(
        existing
            .iter()
            .filter(|e| e.kind.is_event())
            .cloned(),
    );

    // 5. Ascending by time; id breaks ties so the order is deterministic.
    out.sort_by(|a, b| a.at.cmp(&b.at).then_with(|| a.id.cmp(&b.id)));
    out
}
