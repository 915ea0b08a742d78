use serde::{Deserialize, Serialize};

/// Origin of a timeline entry: derived from the meal plan, derived from the
/// workout plan, or created directly by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Meal,
    Workout,
    Event,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Meal => "meal",
            ItemKind::Workout => "workout",
            ItemKind::Event => "event",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "meal" => Some(ItemKind::Meal),
            "workout" => Some(ItemKind::Workout),
            "event" => Some(ItemKind::Event),
            _ => None,
        }
    }

    pub fn is_event(&self) -> bool {
        matches!(self, ItemKind::Event)
    }
}
