//! SQLite connection pool wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // Concurrent invocations race on the usage counters; let a second
        // writer wait for the first transaction instead of failing fast.
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
