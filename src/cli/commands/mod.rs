pub mod analyze;
pub mod config;
pub mod export;
pub mod init;

use crate::cli::parser::{FilterArgs, InputArgs};
use crate::config::Config;
use crate::core::filter::RowFilter;
use crate::core::pipeline::{Analysis, analyze};
use crate::errors::{AppError, AppResult};
use crate::ingest::{self, InputFormat};
use crate::models::column::Column;
use crate::models::raw_table::ParsedTable;
use crate::ui::messages::{info, warning};
use crate::utils::date;
use chrono::NaiveDateTime;
use std::io::{self, IsTerminal, Read};

/// Read the input (file or stdin), parse it and annotate the rows.
pub(crate) fn load_analysis(
    input: &InputArgs,
    now: Option<&str>,
    cfg: &Config,
) -> AppResult<Analysis> {
    let now = resolve_now(now)?;
    let weekend = cfg.weekend_policy(input.weekend)?;
    let parsed = read_input(input, cfg)?;

    let analysis = analyze(parsed, now, weekend);
    report_parse_issues(&analysis);
    Ok(analysis)
}

pub(crate) fn build_filter(args: &FilterArgs) -> AppResult<RowFilter> {
    RowFilter::from_options(
        args.period.as_deref(),
        args.customer.as_deref(),
        args.status.as_deref(),
        args.weekend_only,
    )
}

fn resolve_now(now: Option<&str>) -> AppResult<NaiveDateTime> {
    match now {
        None => Ok(date::now()),
        Some(s) => date::parse_now(s).ok_or_else(|| AppError::InvalidPeriod(format!("--now {s}"))),
    }
}

fn read_input(input: &InputArgs, cfg: &Config) -> AppResult<ParsedTable> {
    let policy = cfg.parse_policy();

    match &input.input {
        Some(path) if path.as_os_str() != "-" => {
            info(format!("Reading {}", path.display()));
            ingest::ingest_path(path, input.input_format, input.sheet.as_deref(), &policy)
        }
        _ => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                info("Paste the table, then press Ctrl-D (Ctrl-Z on Windows):");
            }
            let mut raw = String::new();
            stdin.lock().read_to_string(&mut raw)?;
            let format = match input.input_format {
                InputFormat::Auto => InputFormat::Text,
                f => f,
            };
            ingest::ingest_text(&raw, format, &policy)
        }
    }
}

fn report_parse_issues(a: &Analysis) {
    let r = &a.report;

    if let Some(fallback) = r.header_fallback {
        warning(format!(
            "Header line was split on {}: check the detected columns.",
            fallback.describe()
        ));
    }
    if r.padded > 0 {
        warning(format!(
            "{} row(s) had missing fields and were padded with blanks.",
            r.padded
        ));
    }
    if r.truncated > 0 {
        warning(format!(
            "{} row(s) had extra fields that were dropped.",
            r.truncated
        ));
    }
    if !a.missing_columns.is_empty() {
        let names: Vec<&str> = a.missing_columns.iter().map(Column::header).collect();
        warning(format!(
            "Columns not found: {} (detected: {})",
            names.join(", "),
            a.headers.join(", ")
        ));
    }
    let unparsed = a.unparsed_dates();
    if unparsed > 0 {
        warning(format!(
            "{unparsed} row(s) have an unreadable Start/End Date; their duration is empty."
        ));
    }
}
