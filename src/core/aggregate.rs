//! Group-by summaries over annotated records.

use crate::core::filter::weekend_subset;
use crate::models::record::AnnotatedRecord;
use clap::ValueEnum;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Dimension {
    Customer,
    Status,
}

impl Dimension {
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Customer => "Customer",
            Dimension::Status => "Status",
        }
    }

    fn key<'a>(&self, row: &'a AnnotatedRecord) -> &'a str {
        match self {
            Dimension::Customer => row.customer(),
            Dimension::Status => row.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AverageRow {
    pub key: String,
    /// `None` when no row of the group has a duration.
    pub hours: Option<f64>,
}

/// Number of distinct non-empty `Change` ids per key, ordered by key.
///
/// Rows with an empty key are skipped; a key whose rows all lack a change id
/// is still listed, with a count of zero.
pub fn changes_per(rows: &[AnnotatedRecord], dim: Dimension) -> Vec<CountRow> {
    let mut groups: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for row in rows {
        let key = dim.key(row);
        if key.is_empty() {
            continue;
        }
        let changes = groups.entry(key).or_default();
        if !row.change().is_empty() {
            changes.insert(row.change());
        }
    }

    groups
        .into_iter()
        .map(|(key, changes)| CountRow {
            key: key.to_string(),
            count: changes.len(),
        })
        .collect()
}

/// Mean `DurationHours` per customer, ignoring rows without a duration.
pub fn average_duration_per_customer(rows: &[AnnotatedRecord]) -> Vec<AverageRow> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for row in rows {
        if row.customer().is_empty() {
            continue;
        }
        let (sum, n) = groups.entry(row.customer()).or_insert((0.0, 0));
        if let Some(h) = row.duration_hours {
            *sum += h;
            *n += 1;
        }
    }

    groups
        .into_iter()
        .map(|(key, (sum, n))| AverageRow {
            key: key.to_string(),
            hours: (n > 0).then(|| sum / n as f64),
        })
        .collect()
}

/// Distinct changes per customer restricted to the weekend window.
pub fn weekend_changes_per_customer(rows: &[AnnotatedRecord]) -> Vec<CountRow> {
    changes_per(&weekend_subset(rows), Dimension::Customer)
}

/// Headline figures shown above the detailed tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub rows: usize,
    pub distinct_changes: usize,
    pub customers: usize,
    pub weekend_rows: usize,
    pub missing_start: usize,
    pub missing_end: usize,
    pub total_hours: f64,
    pub mean_hours: Option<f64>,
}

pub fn overview(rows: &[AnnotatedRecord]) -> Overview {
    let changes: HashSet<&str> = rows
        .iter()
        .map(|r| r.change())
        .filter(|c| !c.is_empty())
        .collect();
    let customers: HashSet<&str> = rows
        .iter()
        .map(|r| r.customer())
        .filter(|c| !c.is_empty())
        .collect();

    let durations: Vec<f64> = rows.iter().filter_map(|r| r.duration_hours).collect();
    let total_hours: f64 = durations.iter().sum();

    Overview {
        rows: rows.len(),
        distinct_changes: changes.len(),
        customers: customers.len(),
        weekend_rows: rows.iter().filter(|r| r.is_weekend_window).count(),
        missing_start: rows.iter().filter(|r| r.record.start_date.is_none()).count(),
        missing_end: rows.iter().filter(|r| r.record.end_date.is_none()).count(),
        total_hours,
        mean_hours: (!durations.is_empty()).then(|| total_hours / durations.len() as f64),
    }
}
