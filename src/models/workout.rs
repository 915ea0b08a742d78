use serde::Serialize;

/// One entry of the 7-day workout plan. The day a workout lands on is its
/// position in the ordered plan list (offset from "today"), not a field.
#[derive(Debug, Clone, Serialize)]
pub struct Workout {
    pub id: i64,
    pub name: String,
}
