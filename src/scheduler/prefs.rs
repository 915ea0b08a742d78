use crate::models::meal::MealKind;
use chrono::NaiveTime;

/// Preferred timeline slots for derived items.
/// Values come from the config file; defaults are Breakfast 09:00,
/// Lunch 12:00, Dinner 18:00, Snack 20:00, Workout 17:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimePrefs {
    pub breakfast: NaiveTime,
    pub lunch: NaiveTime,
    pub dinner: NaiveTime,
    pub snack: NaiveTime,
    pub workout: NaiveTime,
}

impl TimePrefs {
    pub fn meal_slot(&self, kind: MealKind) -> NaiveTime {
        match kind {
            MealKind::Breakfast => self.breakfast,
            MealKind::Lunch => self.lunch,
            MealKind::Dinner => self.dinner,
            MealKind::Snack => self.snack,
        }
    }

    /// Fixed probe order when a preferred meal slot is taken.
    pub fn rotation(&self) -> [NaiveTime; 4] {
        [self.breakfast, self.lunch, self.dinner, self.snack]
    }
}

impl Default for TimePrefs {
    fn default() -> Self {
        let hm = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
        Self {
            breakfast: hm(9, 0),
            lunch: hm(12, 0),
            dinner: hm(18, 0),
            snack: hm(20, 0),
            workout: hm(17, 0),
        }
    }
}
