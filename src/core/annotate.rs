use crate::core::weekend::WeekendPolicy;
use crate::models::record::{AnnotatedRecord, Record};
use chrono::{Datelike, NaiveDateTime};

/// Append the derived fields to every record.
///
/// `now` is the moment of analysis; it only matters for the rolling weekend window.
pub fn annotate(
    records: Vec<Record>,
    now: NaiveDateTime,
    policy: &WeekendPolicy,
) -> Vec<AnnotatedRecord> {
    records
        .into_iter()
        .map(|record| {
            let duration_hours = duration_hours(record.start_date, record.end_date);
            let day = record.start_date.map(|d| d.weekday());
            let is_weekend_window = policy.contains(record.start_date, now);
            AnnotatedRecord {
                record,
                duration_hours,
                day,
                is_weekend_window,
            }
        })
        .collect()
}

/// `end - start` in fractional hours. Negative when the dates are swapped.
pub fn duration_hours(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Option<f64> {
    let (start, end) = (start?, end?);
    Some((end - start).num_seconds() as f64 / 3600.0)
}
