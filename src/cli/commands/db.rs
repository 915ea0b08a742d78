use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *check {
            let status: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if status == "ok" {
                messages::success("Database integrity: ok");
            } else {
                messages::warning(format!("Database integrity: {status}"));
            }
        }

        if *info {
            let count = |table: &str| -> AppResult<i64> {
                Ok(pool.conn.query_row(
                    &format!("SELECT COUNT(*) FROM {table}"),
                    [],
                    |row| row.get(0),
                )?)
            };

            println!("Database:  {}", cfg.database);
            println!("users:     {}", count("users")?);
            println!("usage:     {}", count("usage")?);
            println!("meals:     {}", count("meals")?);
            println!("workouts:  {}", count("workouts")?);
            println!("log:       {}", count("log")?);
        }
    }

    Ok(())
}
