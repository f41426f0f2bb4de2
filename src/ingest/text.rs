//! Parser for tables copy-pasted from spreadsheets, mail clients or ticketing tools.
//!
//! Pasted tables are rarely clean: some tools emit tabs, some emit runs of
//! spaces, and header rows are often delimited differently from data rows.
//! The parser never rejects a row for having the wrong number of fields;
//! it pads or truncates it to the header width instead.

use crate::errors::{AppError, AppResult};
use crate::models::raw_table::{ParseReport, ParsedTable, RawTable, name_headers};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// A tab with the spaces around it, or a run of two or more spaces.
// Consecutive tabs are left alone: each one delimits a (possibly empty) cell.
static DELIMITER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\t *| {2,}").expect("static regex"));

static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("static regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Secondary split applied when splitting on tabs yields too few fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitFallback {
    /// Split on runs of two or more spaces. With `collapse_space_runs` on,
    /// those runs are already tabs, so this only changes anything when it is off.
    DoubleSpace,
    /// Split on any run of whitespace (also breaks `Start Date` in two).
    WhitespaceRun,
    /// Keep the tab split.
    #[serde(rename = "none")]
    Disabled,
}

impl SplitFallback {
    fn split(self, line: &str) -> Option<Vec<String>> {
        match self {
            SplitFallback::DoubleSpace => {
                Some(SPACE_RUN.split(line.trim()).map(clean_field).collect())
            }
            SplitFallback::WhitespaceRun => Some(
                WHITESPACE_RUN
                    .split(line.trim())
                    .map(clean_field)
                    .collect(),
            ),
            SplitFallback::Disabled => None,
        }
    }

    /// What the line was split on, for diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            SplitFallback::DoubleSpace => "runs of two or more spaces",
            SplitFallback::WhitespaceRun => "whitespace",
            SplitFallback::Disabled => "tabs",
        }
    }
}

/// Delimiter heuristics used by [`parse_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePolicy {
    /// A header with fewer tab-separated names than this triggers `header_fallback`.
    pub expected_columns: usize,
    /// Turn runs of two or more spaces into tabs before splitting.
    pub collapse_space_runs: bool,
    pub header_fallback: SplitFallback,
    pub row_fallback: SplitFallback,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        Self {
            expected_columns: 8,
            collapse_space_runs: true,
            header_fallback: SplitFallback::WhitespaceRun,
            row_fallback: SplitFallback::Disabled,
        }
    }
}

/// Parse a pasted text table.
///
/// The first non-blank line is the header. Every following non-blank line
/// becomes a row of exactly the header's width.
///
/// # Errors
///
/// - [`AppError::EmptyInput`] if `raw` is empty after trimming.
/// - [`AppError::HeaderParse`] if the header line has no non-empty field.
pub fn parse_text(raw: &str, policy: &ParsePolicy) -> AppResult<ParsedTable> {
    let raw = raw.trim_start_matches('\u{feff}');
    if raw.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let mut lines = raw
        .lines()
        .map(|l| preprocess_line(l, policy.collapse_space_runs))
        .filter(|l| !l.trim().is_empty());

    let header_line = lines.next().ok_or(AppError::EmptyInput)?;
    let (headers, header_fallback) = split_header(&header_line, policy)?;

    let mut table = RawTable::new(headers);
    let mut report = ParseReport {
        header_fallback,
        ..ParseReport::default()
    };

    for line in lines {
        let fields = split_row(&line, table.width(), policy);
        report.record(table.push_row(fields));
    }

    Ok(ParsedTable { table, report })
}

/// Strip carriage returns and, when `collapse` is set, turn every run of two
/// or more spaces (and the spaces around a tab) into a single tab.
/// Single spaces inside a field survive; so do empty tab-delimited cells.
fn preprocess_line(line: &str, collapse: bool) -> String {
    let line = line.replace('\r', "");
    let line = line.trim_matches(' ');
    if collapse {
        DELIMITER_RUN.replace_all(line, "\t").into_owned()
    } else {
        line.to_string()
    }
}

fn split_header(
    line: &str,
    policy: &ParsePolicy,
) -> AppResult<(Vec<String>, Option<SplitFallback>)> {
    let mut fields = split_tabs(line);
    let mut used_fallback = None;

    if count_non_empty(&fields) < policy.expected_columns {
        if let Some(alt) = policy.header_fallback.split(line) {
            if count_non_empty(&alt) > count_non_empty(&fields) {
                fields = alt;
                used_fallback = Some(policy.header_fallback);
            }
        }
    }

    // Trailing blanks come from a trailing delimiter, not from a real column.
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }

    if fields.is_empty() {
        return Err(AppError::HeaderParse(format!(
            "no column names found in '{}'",
            line.trim()
        )));
    }

    Ok((name_headers(fields), used_fallback))
}

fn split_row(line: &str, width: usize, policy: &ParsePolicy) -> Vec<String> {
    let fields = split_tabs(line);
    if fields.len() >= width {
        return fields;
    }

    match policy.row_fallback.split(line) {
        Some(alt) if alt.len() > fields.len() => alt,
        _ => fields,
    }
}

fn split_tabs(line: &str) -> Vec<String> {
    line.split('\t').map(clean_field).collect()
}

fn count_non_empty(fields: &[String]) -> usize {
    fields.iter().filter(|f| !f.is_empty()).count()
}

/// Trim a field and strip the quote characters around it.
fn clean_field(field: &str) -> String {
    field
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'')
        .trim()
        .to_string()
}
