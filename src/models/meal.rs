use serde::Serialize;

/// Meal kind, mapped to a preferred timeline slot in the config.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealKind::Breakfast),
            "lunch" => Some(MealKind::Lunch),
            "dinner" => Some(MealKind::Dinner),
            "snack" => Some(MealKind::Snack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealKind::Breakfast => "breakfast",
            MealKind::Lunch => "lunch",
            MealKind::Dinner => "dinner",
            MealKind::Snack => "snack",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::from_str(s)
    }
}

/// One entry of today's meal plan, as supplied by the plan store.
/// `id` is the backing row id; the scheduler carries it through to the
/// derived item's `source` field.
#[derive(Debug, Clone, Serialize)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub kind: MealKind,
}
