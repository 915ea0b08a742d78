use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| crate::errors::AppError::Config(e.to_string()))?;
            println!("{yaml}");
        }

        if *check {
            // time_prefs() parses every configured time; a malformed entry
            // surfaces here instead of at first scheduler use.
            cfg.time_prefs()?;
            messages::success(format!(
                "Configuration OK (db: {}, plan: {})",
                cfg.database, cfg.plan_file
            ));
        }
    }

    Ok(())
}
