//! Weekly usage quota for generation features.
//!
//! Free accounts get a fixed number of gated calls per feature per ISO week.
//! Counters live in the `usage` table keyed by (user, week label); a new
//! week uses a fresh key, so old counters expire by absence and are never
//! deleted. Premium and tester accounts bypass the counter entirely.

use crate::db::pool::DbPool;
use crate::db::queries::load_profile;
use crate::errors::{AppError, AppResult};
use rusqlite::{OptionalExtension, TransactionBehavior, params};

/// Gated calls allowed per feature per week for non-privileged users.
pub const WEEKLY_LIMIT: u32 = 3;

/// The features whose invocation is quota-gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Meal,
    Workout,
}

impl Feature {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "meal" => Some(Feature::Meal),
            "workout" => Some(Feature::Workout),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Meal => "meal",
            Feature::Workout => "workout",
        }
    }

    /// Counter column in the `usage` table.
    fn column(&self) -> &'static str {
        match self {
            Feature::Meal => "meal",
            Feature::Workout => "workout",
        }
    }
}

/// Outcome of a successful gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consumed {
    /// Privileged account; no counter was touched.
    Exempt,
    /// Counter incremented to this value (1-based, at most [`WEEKLY_LIMIT`]).
    Counted(u32),
}

/// Gate one invocation of `feature` for the given session identity.
///
/// `user` is the current session's user id; `None` means no authenticated
/// session and the call fails before touching the store. `week` is the ISO
/// week label the counter is keyed by (callers normally pass
/// [`crate::utils::date::current_week_label`]).
///
/// On success the caller may proceed with the gated action; on
/// [`AppError::LimitReached`] it must not, and nothing was mutated.
pub fn check_or_consume(
    pool: &mut DbPool,
    user: Option<&str>,
    feature: Feature,
    week: &str,
) -> AppResult<Consumed> {
    let user_id = user.ok_or(AppError::Unauthenticated)?;

    let profile = load_profile(&pool.conn, user_id)?;
    if profile.is_exempt() {
        return Ok(Consumed::Exempt);
    }

    // Read-modify-write under one IMMEDIATE transaction: the write lock is
    // taken up front, so two racing calls at count = limit - 1 serialize
    // and the loser re-reads the committed counter.
    let tx = pool
        .conn
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let col = feature.column();
    let count: u32 = tx
        .query_row(
            &format!("SELECT {col} FROM usage WHERE user_id = ?1 AND week = ?2"),
            params![user_id, week],
            |row| row.get(0),
        )
        .optional()?
        .unwrap_or(0);

    if count >= WEEKLY_LIMIT {
        // No mutation on the failure path; the open transaction is dropped.
        return Err(AppError::LimitReached(feature.as_str().to_string()));
    }

    tx.execute(
        &format!(
            "INSERT INTO usage (user_id, week, {col}) VALUES (?1, ?2, 1)
             ON CONFLICT(user_id, week) DO UPDATE SET {col} = {col} + 1"
        ),
        params![user_id, week],
    )?;
    tx.commit()?;

    Ok(Consumed::Counted(count + 1))
}

/// Current-week usage for display: (meal, workout) counters.
pub fn usage_for(pool: &mut DbPool, user: Option<&str>, week: &str) -> AppResult<(u32, u32)> {
    let user_id = user.ok_or(AppError::Unauthenticated)?;
    crate::db::queries::load_usage(&pool.conn, user_id, week)
}
