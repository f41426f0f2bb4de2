// src/export/model.rs

use crate::ingest::dates::format_timestamp;
use crate::models::column::Column;
use crate::models::record::AnnotatedRecord;
use crate::utils::date::weekday_name;
use chrono::NaiveDateTime;
use serde::Serialize;

pub(crate) const DURATION_HEADER: &str = "Duration (hrs)";
pub(crate) const DAY_HEADER: &str = "Day";
pub(crate) const WEEKEND_HEADER: &str = "Weekend Window";

/// Flat row used by the JSON export; field names match the CSV/XLSX headers.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Change")]
    pub change: String,
    #[serde(rename = "Ctask")]
    pub ctask: Option<String>,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Start Date")]
    pub start_date: Option<String>,
    #[serde(rename = "End Date")]
    pub end_date: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Duration (hrs)")]
    pub duration_hours: Option<f64>,
    #[serde(rename = "Day")]
    pub day: Option<String>,
    #[serde(rename = "Weekend Window")]
    pub weekend_window: bool,
}

impl From<&AnnotatedRecord> for RecordExport {
    fn from(r: &AnnotatedRecord) -> Self {
        let rec = &r.record;
        Self {
            customer: rec.customer.clone(),
            change: rec.change.clone(),
            ctask: rec.ctask.clone(),
            description: rec.description.clone(),
            summary: rec.summary.clone(),
            start_date: rec.start_date.map(|d| format_timestamp(Some(d))),
            end_date: rec.end_date.map(|d| format_timestamp(Some(d))),
            status: rec.status.clone(),
            duration_hours: r.duration_hours,
            day: r.day.map(|d| weekday_name(d).to_string()),
            weekend_window: r.is_weekend_window,
        }
    }
}

/// A typed cell, so XLSX can write native dates and numbers.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Bool(bool),
    Empty,
}

impl Cell {
    fn text(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }

    /// Text form used by CSV and the terminal.
    pub(crate) fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format!("{n}"),
            Cell::Date(d) => format_timestamp(Some(*d)),
            Cell::Bool(b) => b.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// Header for CSV / XLSX: the canonical columns, then the derived ones.
pub(crate) fn get_headers() -> Vec<&'static str> {
    Column::ALL
        .iter()
        .map(|c| c.header())
        .chain([DURATION_HEADER, DAY_HEADER, WEEKEND_HEADER])
        .collect()
}

/// Cells of one row, in [`get_headers`] order.
pub(crate) fn record_to_cells(r: &AnnotatedRecord) -> Vec<Cell> {
    let rec = &r.record;
    vec![
        Cell::text(&rec.customer),
        Cell::text(&rec.change),
        Cell::text(rec.ctask.as_deref().unwrap_or("")),
        Cell::text(&rec.description),
        Cell::text(&rec.summary),
        rec.start_date.map_or(Cell::Empty, Cell::Date),
        rec.end_date.map_or(Cell::Empty, Cell::Date),
        Cell::text(&rec.status),
        r.duration_hours.map_or(Cell::Empty, Cell::Number),
        r.day.map_or(Cell::Empty, |d| Cell::Text(weekday_name(d).to_string())),
        Cell::Bool(r.is_weekend_window),
    ]
}
