use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_profile;
use crate::errors::{AppError, AppResult};
use crate::limiter::{self, WEEKLY_LIMIT};
use crate::utils::date::current_week_label;

/// Show the current week's generation usage for a user.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quota { user, week } = cmd {
        let user_id = user.as_deref().ok_or(AppError::Unauthenticated)?;
        let week = week.clone().unwrap_or_else(current_week_label);

        let mut pool = DbPool::new(&cfg.database)?;
        let profile = load_profile(&pool.conn, user_id)?;
        let (meal, workout) = limiter::usage_for(&mut pool, Some(user_id), &week)?;

        println!("Usage for '{}' in {}:", user_id, week);
        if profile.is_exempt() {
            println!("  account is quota exempt (premium or tester)");
        }
        println!("  meal:    {meal} of {WEEKLY_LIMIT}");
        println!("  workout: {workout} of {WEEKLY_LIMIT}");
    }

    Ok(())
}
