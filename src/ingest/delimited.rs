//! CSV ingestion with delimiter sniffing.
//!
//! Exports saved from Excel in European locales use `;`, others use `,` or
//! tabs, so the delimiter is guessed from the header line.

use crate::errors::{AppError, AppResult};
use crate::models::raw_table::{ParsedTable, name_headers};
use csv::{ReaderBuilder, Trim};

const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Parse CSV bytes into a [`ParsedTable`].
///
/// The first non-empty record is the header; short and long records are
/// padded / truncated to its width.
///
/// # Errors
///
/// [`AppError::EmptyInput`] when there is no non-blank line,
/// [`AppError::HeaderParse`] when the header has no name at all,
/// [`AppError::Csv`] on malformed quoting or invalid UTF-8 framing.
pub fn parse_csv(bytes: &[u8]) -> AppResult<ParsedTable> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim_start_matches('\u{feff}');

    let header_line = text
        .lines()
        .find(|l| !l.trim().is_empty())
        .ok_or(AppError::EmptyInput)?;
    let delimiter = sniff_delimiter(header_line);

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = rdr.records();

    // The header is the first line with any delimiter or text on it, so a
    // header of blank names (`,,,`) is reported instead of skipped.
    let mut headers = None;
    for rec in records.by_ref() {
        let rec = rec?;
        if !is_blank_line(&rec) {
            headers = Some(rec.iter().map(str::to_string).collect::<Vec<_>>());
            break;
        }
    }
    let mut headers = headers.ok_or(AppError::EmptyInput)?;

    while headers.last().is_some_and(|h| h.is_empty()) {
        headers.pop();
    }
    if headers.is_empty() {
        return Err(AppError::HeaderParse(format!(
            "no column names found in '{}'",
            header_line.trim()
        )));
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    for rec in records {
        let rec = rec?;
        if rec.iter().all(str::is_empty) {
            continue;
        }
        rows.push(rec.iter().map(str::to_string).collect());
    }

    Ok(ParsedTable::from_rows(name_headers(headers), rows))
}

fn is_blank_line(rec: &csv::StringRecord) -> bool {
    rec.is_empty() || (rec.len() == 1 && rec.get(0).is_some_and(str::is_empty))
}

/// Pick the candidate delimiter occurring most often outside quotes.
/// Ties and lines without any candidate fall back to `,`.
pub fn sniff_delimiter(line: &str) -> u8 {
    let mut counts = [0usize; CANDIDATES.len()];
    let mut in_quotes = false;

    for b in line.bytes() {
        if b == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(i) = CANDIDATES.iter().position(|c| *c == b) {
            counts[i] += 1;
        }
    }

    let mut best = 0;
    for (i, n) in counts.iter().enumerate() {
        if *n > counts[best] {
            best = i;
        }
    }

    CANDIDATES[best]
}
