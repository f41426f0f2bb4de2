use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Handle the `init` command: write the default configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let target = cli.config.clone().unwrap_or_else(Config::config_file);

        if target.exists() && !*force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                target.display()
            )));
        }

        let path = Config::init(Some(&target))?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
