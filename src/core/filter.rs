//! Row masks applied before aggregation and export.

use crate::core::period::parse_period;
use crate::errors::AppResult;
use crate::models::record::AnnotatedRecord;
use chrono::NaiveDate;

/// Conjunction of optional row predicates. The default keeps every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    /// Inclusive start-date range.
    pub period: Option<(NaiveDate, NaiveDate)>,
    pub customer: Option<String>,
    pub status: Option<String>,
    pub weekend_only: bool,
}

impl RowFilter {
    /// Build a filter from CLI-style options; `period` uses the `--period` syntax.
    pub fn from_options(
        period: Option<&str>,
        customer: Option<&str>,
        status: Option<&str>,
        weekend_only: bool,
    ) -> AppResult<Self> {
        let period = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_period(p)?),
        };

        Ok(Self {
            period,
            customer: customer.map(str::to_string),
            status: status.map(str::to_string),
            weekend_only,
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, row: &AnnotatedRecord) -> bool {
        if self.weekend_only && !row.is_weekend_window {
            return false;
        }

        if let Some((from, to)) = self.period {
            match row.start_date() {
                Some(start) if (from..=to).contains(&start.date()) => {}
                _ => return false,
            }
        }

        if let Some(c) = &self.customer {
            if !row.customer().eq_ignore_ascii_case(c.trim()) {
                return false;
            }
        }

        if let Some(s) = &self.status {
            if !row.status().eq_ignore_ascii_case(s.trim()) {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, rows: &[AnnotatedRecord]) -> Vec<AnnotatedRecord> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Rows inside the weekend window.
pub fn weekend_subset(rows: &[AnnotatedRecord]) -> Vec<AnnotatedRecord> {
    rows.iter().filter(|r| r.is_weekend_window).cloned().collect()
}
