use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::scheduler::planner::Planner;
use crate::scheduler::store::PlanStore;
use crate::ui::messages;
use crate::utils::{date, time};

/// Add a manual event to a day's timeline.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Event {
        date: date_str,
        time: time_str,
        title,
    } = cmd
    {
        let day =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let at = time::parse_time_or_err(time_str)?;

        let mut planner = Planner::open(PlanStore::new(&cfg.plan_file));
        let item = planner.add_event(day, at, title)?;

        let pool = DbPool::new(&cfg.database)?;
        audit(&pool.conn, "event", &item.id, &format!("added on {day} at {time_str}"))?;

        messages::success(format!("Event '{}' added on {} ({})", title, day, item.id));
    }

    Ok(())
}
