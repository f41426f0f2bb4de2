//! Tabular ingestion: raw text, CSV bytes or a spreadsheet sheet into a
//! [`ParsedTable`], then into typed [`Record`]s.

pub mod dates;
pub mod delimited;
pub mod sheet;
pub mod text;

use crate::errors::{AppError, AppResult};
use crate::models::column::Column;
use crate::models::raw_table::{ParsedTable, RawTable};
use crate::models::record::Record;
use clap::ValueEnum;
use dates::parse_day_first;
use std::fs;
use std::path::Path;
use text::ParsePolicy;

/// How to interpret the input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Decide from the file extension (stdin is always text)
    #[default]
    Auto,
    /// Pasted table: tabs or runs of spaces
    Text,
    /// Delimited file, delimiter is sniffed
    Csv,
    /// Spreadsheet workbook
    Xlsx,
}

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xls", "xlsm", "xlsb", "ods"];

impl InputFormat {
    /// Resolve `Auto` against a file extension.
    pub fn resolve(self, path: Option<&Path>) -> InputFormat {
        if self != InputFormat::Auto {
            return self;
        }

        let ext = path
            .and_then(|p| p.extension())
            .map(|e| e.to_string_lossy().to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => InputFormat::Csv,
            Some(e) if SPREADSHEET_EXTENSIONS.contains(&e) => InputFormat::Xlsx,
            _ => InputFormat::Text,
        }
    }
}

/// Ingest a file from disk.
///
/// # Errors
///
/// I/O failures, [`AppError::EmptyInput`] / [`AppError::HeaderParse`] from the
/// parsers, CSV or spreadsheet decoding errors.
pub fn ingest_path(
    path: &Path,
    format: InputFormat,
    sheet_name: Option<&str>,
    policy: &ParsePolicy,
) -> AppResult<ParsedTable> {
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("input file not found: {}", path.display()),
        )));
    }

    match format.resolve(Some(path)) {
        InputFormat::Xlsx => sheet::parse_sheet(path, sheet_name),
        InputFormat::Csv => delimited::parse_csv(&fs::read(path)?),
        InputFormat::Text | InputFormat::Auto => {
            let bytes = fs::read(path)?;
            text::parse_text(&String::from_utf8_lossy(&bytes), policy)
        }
    }
}

/// Ingest in-memory content (pasted text or stdin).
///
/// # Errors
///
/// Same as the underlying parser; spreadsheets cannot be read from memory.
pub fn ingest_text(raw: &str, format: InputFormat, policy: &ParsePolicy) -> AppResult<ParsedTable> {
    match format {
        InputFormat::Csv => delimited::parse_csv(raw.as_bytes()),
        InputFormat::Xlsx => Err(AppError::UnsupportedFormat(
            "spreadsheets must be read from a file".to_string(),
        )),
        InputFormat::Text | InputFormat::Auto => text::parse_text(raw, policy),
    }
}

/// Map a raw table onto the canonical schema and coerce the date columns.
///
/// Columns are located by header name; a column missing from the input leaves
/// the field empty (or `None` for dates and `Ctask`).
pub fn records(table: &RawTable) -> Vec<Record> {
    let idx: Vec<Option<usize>> = Column::ALL
        .iter()
        .map(|c| table.column_index(*c))
        .collect();

    let text = |row: &[String], col: Column| -> String {
        idx.get(col as usize)
            .copied()
            .flatten()
            .and_then(|i| row.get(i))
            .cloned()
            .unwrap_or_default()
    };

    table
        .rows()
        .iter()
        .map(|row| {
            let ctask = text(row, Column::Ctask);
            Record {
                customer: text(row, Column::Customer),
                change: text(row, Column::Change),
                ctask: (!ctask.is_empty()).then_some(ctask),
                description: text(row, Column::Description),
                summary: text(row, Column::Summary),
                start_date: parse_day_first(&text(row, Column::StartDate)),
                end_date: parse_day_first(&text(row, Column::EndDate)),
                status: text(row, Column::Status),
            }
        })
        .collect()
}
