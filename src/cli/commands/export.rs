use crate::cli::commands::{build_filter, load_analysis};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_rows;
use crate::ui::messages::warning;

/// Handle the `export` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        filter,
        format,
        file,
        force,
    } = &cli.command
    {
        let analysis = load_analysis(input, cli.now.as_deref(), cfg)?;
        let rows = build_filter(filter)?.apply(&analysis.rows);

        if rows.is_empty() {
            warning(format!(
                "No rows match the filters; writing an empty {} file.",
                format.as_str()
            ));
        }

        export_rows(*format, &rows, file, &cfg.sheet_name, *force)?;
    }
    Ok(())
}
