//! Terminal rendering of an analysis: one titled table per section.

use crate::core::aggregate::{AverageRow, CountRow, Overview};
use crate::ingest::dates::format_timestamp;
use crate::models::record::AnnotatedRecord;
use crate::utils::colors::{CYAN, GREEN, YELLOW, paint};
use crate::utils::date::weekday_name;
use crate::utils::formatting::{bar, hours};
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 30;

/// Record table, derived fields included.
pub fn records_table(rows: &[AnnotatedRecord]) -> String {
    let mut table = Table::new(vec![
        Column::left("Customer").with_max_width(24),
        Column::left("Change").with_max_width(16),
        Column::left("Ctask").with_max_width(16),
        Column::left("Summary").with_max_width(36),
        Column::left("Start Date"),
        Column::left("End Date"),
        Column::left("Status").with_max_width(16),
        Column::right("Duration (hrs)"),
        Column::left("Day"),
        Column::left("Weekend"),
    ]);

    for r in rows {
        let rec = &r.record;
        table.add_row(vec![
            rec.customer.clone(),
            rec.change.clone(),
            rec.ctask.clone().unwrap_or_default(),
            rec.summary.clone(),
            format_timestamp(rec.start_date),
            format_timestamp(rec.end_date),
            rec.status.clone(),
            hours(r.duration_hours),
            r.day.map(weekday_name).unwrap_or_default().to_string(),
            if r.is_weekend_window { "yes" } else { "" }.to_string(),
        ]);
    }

    table.render()
}

/// Counts table with a bar column.
pub fn counts_table(key_header: &str, value_header: &str, rows: &[CountRow]) -> String {
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0) as f64;

    let mut table = Table::new(vec![
        Column::left(key_header),
        Column::right(value_header),
        Column::left("").with_max_width(BAR_WIDTH),
    ]);
    for r in rows {
        table.add_row(vec![
            r.key.clone(),
            r.count.to_string(),
            bar(r.count as f64, max, BAR_WIDTH),
        ]);
    }
    table.render()
}

pub fn average_table(rows: &[AverageRow]) -> String {
    let max = rows.iter().filter_map(|r| r.hours).fold(0.0_f64, f64::max);

    let mut table = Table::new(vec![
        Column::left("Customer"),
        Column::right("Avg Duration (hrs)"),
        Column::left("").with_max_width(BAR_WIDTH),
    ]);
    for r in rows {
        table.add_row(vec![
            r.key.clone(),
            hours(r.hours),
            r.hours.map(|h| bar(h, max, BAR_WIDTH)).unwrap_or_default(),
        ]);
    }
    table.render()
}

pub fn overview_block(o: &Overview) -> String {
    let mut out = String::new();
    let mut line = |label: &str, value: String| {
        out.push_str(&format!("{} {value}\n", paint(CYAN, format!("• {label}:"))));
    };

    line("Rows", paint(GREEN, o.rows));
    line("Distinct changes", o.distinct_changes.to_string());
    line("Customers", o.customers.to_string());
    line("Weekend-window rows", paint(YELLOW, o.weekend_rows));
    line("Total duration (hrs)", format!("{:.2}", o.total_hours));
    line("Mean duration (hrs)", hours(o.mean_hours));
    if o.missing_start > 0 || o.missing_end > 0 {
        line(
            "Unreadable dates",
            format!("{} start / {} end", o.missing_start, o.missing_end),
        );
    }
    out
}
