use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Every statement is idempotent so `init` can be re-run safely.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
             id      TEXT PRIMARY KEY,
             premium INTEGER NOT NULL DEFAULT 0,
             tester  INTEGER NOT NULL DEFAULT 0
         );

         CREATE TABLE IF NOT EXISTS usage (
             user_id TEXT NOT NULL,
             week    TEXT NOT NULL,
             meal    INTEGER NOT NULL DEFAULT 0,
             workout INTEGER NOT NULL DEFAULT 0,
             PRIMARY KEY (user_id, week)
         );

         CREATE TABLE IF NOT EXISTS meals (
             id       INTEGER PRIMARY KEY AUTOINCREMENT,
             name     TEXT NOT NULL,
             kind     TEXT NOT NULL,
             position INTEGER NOT NULL DEFAULT 0
         );

         CREATE TABLE IF NOT EXISTS workouts (
             id       INTEGER PRIMARY KEY AUTOINCREMENT,
             name     TEXT NOT NULL,
             position INTEGER NOT NULL DEFAULT 0
         );

         CREATE TABLE IF NOT EXISTS log (
             id        INTEGER PRIMARY KEY AUTOINCREMENT,
             date      TEXT NOT NULL,
             operation TEXT NOT NULL,
             target    TEXT NOT NULL,
             message   TEXT NOT NULL
         );",
    )?;
    Ok(())
}
