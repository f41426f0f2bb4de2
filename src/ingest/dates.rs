//! Day-first date parsing for the `Start Date` / `End Date` columns.
//!
//! Exports come from tools configured with European locales, so `05/03/2024`
//! means 5 March. A value that cannot be a day-first date but is a valid
//! month-first one (`03/25/2024`) is still accepted, read month-first.
//! Anything else yields `None` and never an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

// dd/mm/yyyy, dd-mm-yy, dd.mm.yyyy with an optional time part
static NUMERIC_DMY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d{1,2})[/.\-](\d{1,2})[/.\-](\d{4}|\d{2})(?:[ T]+(\d{1,2}):(\d{2})(?::(\d{2})(?:\.\d+)?)?\s*([ap]\.?m\.?)?)?$",
    )
    .expect("static regex")
});

// yyyy-mm-dd, yyyy/mm/dd with an optional time part
static NUMERIC_YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d{4})[/.\-](\d{1,2})[/.\-](\d{1,2})(?:[ T]+(\d{1,2}):(\d{2})(?::(\d{2})(?:\.\d+)?)?\s*([ap]\.?m\.?)?)?$",
    )
    .expect("static regex")
});

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

const NAMED_MONTH_DATETIME: [&str; 8] = [
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%b %d, %Y %H:%M",
    "%B %d, %Y %H:%M",
];

const NAMED_MONTH_DATE: [&str; 6] = [
    "%d %b %Y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%d-%B-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Parse a timestamp, interpreting ambiguous numeric dates day-first.
pub fn parse_day_first(raw: &str) -> Option<NaiveDateTime> {
    let s = SPACES.replace_all(raw.trim(), " ");
    let s = s.as_ref();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = NUMERIC_YMD.captures(s) {
        let y = caps.get(1)?.as_str().parse().ok()?;
        let m = caps.get(2)?.as_str().parse().ok()?;
        let d = caps.get(3)?.as_str().parse().ok()?;
        let date = NaiveDate::from_ymd_opt(y, m, d)?;
        return Some(date.and_time(time_from_captures(&caps)?));
    }

    if let Some(caps) = NUMERIC_DMY.captures(s) {
        let first: u32 = caps.get(1)?.as_str().parse().ok()?;
        let second: u32 = caps.get(2)?.as_str().parse().ok()?;
        let year = expand_year(caps.get(3)?.as_str())?;
        let date = NaiveDate::from_ymd_opt(year, second, first)
            .or_else(|| NaiveDate::from_ymd_opt(year, first, second))?;
        return Some(date.and_time(time_from_captures(&caps)?));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in NAMED_MONTH_DATETIME {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    NAMED_MONTH_DATE
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Two-digit years belong to this century.
fn expand_year(raw: &str) -> Option<i32> {
    let y: i32 = raw.parse().ok()?;
    Some(if raw.len() == 2 { 2000 + y } else { y })
}

/// Time groups are 4..=7 in both numeric patterns; a missing time is midnight.
fn time_from_captures(caps: &regex::Captures<'_>) -> Option<NaiveTime> {
    let Some(hour) = caps.get(4) else {
        return Some(NaiveTime::MIN);
    };

    let mut h: u32 = hour.as_str().parse().ok()?;
    let m: u32 = caps.get(5)?.as_str().parse().ok()?;
    let sec: u32 = match caps.get(6) {
        Some(v) => v.as_str().parse().ok()?,
        None => 0,
    };

    if let Some(meridiem) = caps.get(7) {
        if h == 0 || h > 12 {
            return None;
        }
        let pm = meridiem.as_str().to_ascii_lowercase().starts_with('p');
        h = match (pm, h) {
            (false, 12) => 0,
            (true, 12) => 12,
            (true, h) => h + 12,
            (false, h) => h,
        };
    }

    NaiveTime::from_hms_opt(h, m, sec)
}

/// Format used when a timestamp is written back as text (CSV, JSON, terminal).
pub fn format_timestamp(dt: Option<NaiveDateTime>) -> String {
    dt.map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
