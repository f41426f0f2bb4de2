//! Untyped table produced by the ingestors, before column coercion.

use crate::ingest::text::SplitFallback;
use crate::models::column::Column;

/// How a source row was fitted to the header width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFit {
    Exact,
    Padded,
    Truncated,
}

/// Header plus string rows.
///
/// Every row holds exactly `headers.len()` fields: rows are only added through
/// [`RawTable::push_row`], which pads or truncates them on the right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a row, normalising it to the header width.
    pub fn push_row(&mut self, mut fields: Vec<String>) -> RowFit {
        let width = self.width();
        let fit = match fields.len() {
            n if n < width => {
                fields.resize(width, String::new());
                RowFit::Padded
            }
            n if n > width => {
                fields.truncate(width);
                RowFit::Truncated
            }
            _ => RowFit::Exact,
        };
        self.rows.push(fields);
        fit
    }

    /// Position of the first header that resolves to `column`.
    pub fn column_index(&self, column: Column) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| Column::from_header(h) == Some(column))
    }

    /// Canonical columns with no matching header.
    pub fn missing_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| self.column_index(*c).is_none())
            .collect()
    }
}

/// Counters collected while building a [`RawTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub rows: usize,
    pub padded: usize,
    pub truncated: usize,
    /// Fallback split the header line needed, if any.
    pub header_fallback: Option<SplitFallback>,
}

impl ParseReport {
    pub fn record(&mut self, fit: RowFit) {
        self.rows += 1;
        match fit {
            RowFit::Padded => self.padded += 1,
            RowFit::Truncated => self.truncated += 1,
            RowFit::Exact => {}
        }
    }
}

/// Output of every ingestor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    pub table: RawTable,
    pub report: ParseReport,
}

impl ParsedTable {
    /// Build a table from a header and raw rows, recording how each row was fitted.
    pub fn from_rows<I>(headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut table = RawTable::new(headers);
        let mut report = ParseReport::default();
        for row in rows {
            report.record(table.push_row(row));
        }
        Self { table, report }
    }
}

/// Name header cells the way spreadsheet tools do: blank cells become `Unnamed: <index>`.
pub(crate) fn name_headers<I>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    cells
        .into_iter()
        .enumerate()
        .map(|(i, h)| {
            let h = h.trim();
            if h.is_empty() {
                format!("Unnamed: {i}")
            } else {
                h.to_string()
            }
        })
        .collect()
}
