pub mod item;
pub mod item_kind;
pub mod meal;
pub mod user;
pub mod workout;
