use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = {
        let mut cfg = Config::load();
        if let Some(custom) = &cli.db {
            cfg.database = custom.clone();
        }
        if let Some(custom) = &cli.plan {
            cfg.plan_file = custom.clone();
        }
        cfg
    };

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    crate::ui::messages::success("Initialization complete");
    Ok(())
}
