// src/export/mod.rs

pub mod chart;
mod csv_export;
mod fs_utils;
mod json;
mod model;
mod xlsx;

pub use chart::ChartFormat;
pub use csv_export::write_csv;
pub use model::RecordExport;

use crate::core::aggregate::{
    Dimension, average_duration_per_customer, changes_per, weekend_changes_per_customer,
};
use crate::errors::AppResult;
use crate::models::record::AnnotatedRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Common helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the (already filtered) rows to `path`.
///
/// # Errors
///
/// Fails if the file exists and may not be overwritten, or on any write error.
pub fn export_rows(
    format: ExportFormat,
    rows: &[AnnotatedRecord],
    path: &Path,
    sheet_name: &str,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv_export::export_csv(rows, path),
        ExportFormat::Xlsx => xlsx::export_xlsx(rows, path, sheet_name),
        ExportFormat::Json => json::export_json(rows, path),
    }
}

/// Render every summary chart into `dir`; returns the files written.
pub fn export_charts(
    rows: &[AnnotatedRecord],
    dir: &Path,
    format: ChartFormat,
    size: (u32, u32),
) -> AppResult<Vec<PathBuf>> {
    fs_utils::ensure_dir(dir)?;

    let per_customer = chart::counts_series(&changes_per(rows, Dimension::Customer));
    let per_status = chart::counts_series(&changes_per(rows, Dimension::Status));
    let avg = chart::average_series(&average_duration_per_customer(rows));
    let weekend = chart::counts_series(&weekend_changes_per_customer(rows));

    let bars = [
        ("changes_by_customer", "Changes by Customer", "Number of Changes", &per_customer),
        ("changes_by_status", "Changes by Status", "Number of Changes", &per_status),
        ("avg_duration_by_customer", "Average Duration per Customer", "Hours", &avg),
        ("weekend_changes_by_customer", "Weekend Changes by Customer", "Number of Changes", &weekend),
    ];

    let file = |stem: &str| dir.join(format!("{stem}.{}", format.extension()));
    let mut written = Vec::new();

    for (stem, title, y_desc, data) in bars {
        let path = file(stem);
        chart::bar_chart(&path, format, title, y_desc, data, size)?;
        written.push(path);
    }

    let path = file("status_share");
    chart::pie_chart(&path, format, "Status Share", &per_status, size)?;
    written.push(path);

    for p in &written {
        notify_export_success("Chart", p);
    }

    Ok(written)
}
