pub mod drag;
pub mod planner;
pub mod prefs;
pub mod rebuild;
pub mod slots;
pub mod store;
