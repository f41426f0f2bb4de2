//! Spreadsheet ingestion (`.xlsx`, `.xls`, `.xlsm`, `.xlsb`, `.ods`) via calamine.

use crate::errors::{AppError, AppResult};
use crate::ingest::dates::format_timestamp;
use crate::models::raw_table::{ParsedTable, name_headers};
use crate::utils::excel_date::excel_serial_to_datetime;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Read one sheet of a workbook into a [`ParsedTable`].
///
/// - Picks `sheet_name` if provided, otherwise the first sheet.
/// - The first non-empty row is the header row.
/// - Every cell is stringified; date cells become `YYYY-MM-DD HH:MM:SS` so the
///   day-first coercion reads them unambiguously.
pub fn parse_sheet(path: impl AsRef<Path>, sheet_name: Option<&str>) -> AppResult<ParsedTable> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = match sheet_name {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| AppError::UnsupportedFormat("workbook has no sheets".to_string()))?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    let mut rows = range
        .rows()
        .map(|r| r.iter().map(cell_to_string).collect::<Vec<_>>())
        .skip_while(|r| r.iter().all(|c| c.trim().is_empty()));

    let mut headers = rows.next().ok_or(AppError::EmptyInput)?;
    while headers.last().is_some_and(|h| h.trim().is_empty()) {
        headers.pop();
    }

    let body: Vec<Vec<String>> = rows
        .filter(|r| r.iter().any(|c| !c.trim().is_empty()))
        .map(trim_trailing_blanks)
        .collect();

    Ok(ParsedTable::from_rows(name_headers(headers), body))
}

/// calamine reports the used range, so rows are as wide as the widest one.
/// Dropping trailing empty cells keeps the padded/truncated counters honest.
fn trim_trailing_blanks(mut row: Vec<String>) -> Vec<String> {
    while row.last().is_some_and(|c| c.is_empty()) {
        row.pop();
    }
    row
}

fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format_timestamp(excel_serial_to_datetime(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}
