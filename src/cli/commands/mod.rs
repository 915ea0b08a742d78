pub mod config;
pub mod day;
pub mod db;
pub mod del;
pub mod drag;
pub mod event;
pub mod r#gen;
pub mod init;
pub mod log;
pub mod meal;
pub mod quota;
pub mod user;
pub mod workout;
