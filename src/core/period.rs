//! Parse `--period` expressions into an inclusive day range.
//!
//! Supported:
//! - YYYY
//! - YYYY-MM
//! - YYYY-MM-DD
//! - YYYY:YYYY
//! - YYYY-MM:YYYY-MM
//! - YYYY-MM-DD:YYYY-MM-DD

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Inclusive `(first_day, last_day)` covered by a period expression.
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{p}: start and end must have the same format"
            )));
        }
        let (first, _) = bounds(start)?;
        let (_, last) = bounds(end)?;
        if first > last {
            return Err(AppError::InvalidPeriod(format!("{p}: start is after end")));
        }
        return Ok((first, last));
    }

    bounds(p)
}

fn bounds(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(s.to_string());

    match s.len() {
        // YYYY
        4 => {
            let y: i32 = s.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            Ok((d1, month_last_day(d1).ok_or_else(invalid)?))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
