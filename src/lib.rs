//! change-analyzer library root.
//!
//! The pipeline is a chain of plain functions:
//! [`ingest`] (raw text / CSV / spreadsheet → table → records),
//! [`core::annotate`] (derived fields), [`core::filter`], [`core::aggregate`],
//! then [`export`] or [`ui::report`] for output.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` and `config --edit` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        Commands::Config {
            edit_config: true,
            print_config: false,
            ..
        } => Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
            warning(format!("{e} (opening the editor to fix it)"));
            Config::default()
        }),
        _ => Config::load(cli.config.as_deref())?,
    };

    dispatch(&cli, &cfg)
}
