use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_profile;
use crate::errors::AppResult;
use crate::models::user::UserProfile;
use crate::ui::messages;

/// Register or update a local user profile.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::User {
        id,
        premium,
        tester,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let profile = UserProfile {
            id: id.clone(),
            premium: *premium,
            tester: *tester,
        };
        upsert_profile(&pool.conn, &profile)?;

        audit(
            &pool.conn,
            "user",
            id,
            &format!("premium={} tester={}", premium, tester),
        )?;

        let status = if profile.is_exempt() {
            "quota exempt"
        } else {
            "standard"
        };
        messages::success(format!("User '{}' saved ({})", id, status));
    }

    Ok(())
}
