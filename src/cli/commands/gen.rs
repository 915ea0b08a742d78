use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::limiter::{self, Consumed, Feature, WEEKLY_LIMIT};
use crate::ui::messages;
use crate::utils::date::current_week_label;

/// The gated generation flow: pass the weekly quota gate, then hand off to
/// the (external) generation backend. The gate must run first; on failure
/// the generation request is never issued.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gen {
        feature,
        user,
        week,
    } = cmd
    {
        let feature =
            Feature::from_str(feature).ok_or_else(|| AppError::InvalidFeature(feature.clone()))?;
        let week = week.clone().unwrap_or_else(current_week_label);

        let mut pool = DbPool::new(&cfg.database)?;

        let outcome = limiter::check_or_consume(&mut pool, user.as_deref(), feature, &week);

        match outcome {
            Ok(Consumed::Exempt) => {
                audit(
                    &pool.conn,
                    "gen",
                    user.as_deref().unwrap_or("-"),
                    &format!("{} allowed (exempt, {week})", feature.as_str()),
                )?;
                messages::success(format!(
                    "{} generation allowed (account is quota exempt)",
                    feature.as_str()
                ));
            }
            Ok(Consumed::Counted(n)) => {
                audit(
                    &pool.conn,
                    "gen",
                    user.as_deref().unwrap_or("-"),
                    &format!("{} allowed ({n}/{WEEKLY_LIMIT}, {week})", feature.as_str()),
                )?;
                messages::success(format!(
                    "{} generation allowed ({n} of {WEEKLY_LIMIT} used in {week})",
                    feature.as_str()
                ));
            }
            Err(e) => {
                if let AppError::LimitReached(_) = &e {
                    audit(
                        &pool.conn,
                        "gen",
                        user.as_deref().unwrap_or("-"),
                        &format!("{} rejected (limit, {week})", feature.as_str()),
                    )?;
                }
                return Err(e);
            }
        }
    }

    Ok(())
}
