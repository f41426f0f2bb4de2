//! Conversion between chrono timestamps and Excel serial dates
//! (days since 1899-12-30, fractional part = time of day).

use chrono::{Duration, NaiveDate, NaiveDateTime};

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

pub fn datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let duration = *dt - excel_epoch();

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}

/// Inverse of [`datetime_to_excel_serial`], rounded to the nearest second.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let secs = (serial * 86400.0).round() as i64;
    excel_epoch().checked_add_signed(Duration::try_seconds(secs)?)
}
