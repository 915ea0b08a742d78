use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::scheduler::planner::Planner;
use crate::scheduler::store::PlanStore;
use crate::ui::messages;
use crate::utils::date;

/// Delete a timeline item by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date: date_str, id } = cmd {
        let day =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let mut planner = Planner::open(PlanStore::new(&cfg.plan_file));
        planner.delete_item(day, id)?;

        let pool = DbPool::new(&cfg.database)?;
        audit(&pool.conn, "del", id, &format!("removed from {day}"))?;

        messages::success(format!("Item '{}' removed from {}", id, day));
    }

    Ok(())
}
