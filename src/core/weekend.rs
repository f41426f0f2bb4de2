//! Weekend-window membership.
//!
//! Two definitions exist: a rolling window covering the coming Friday through
//! Sunday, and a fixed set of weekdays regardless of the calendar week.

use crate::utils::date::weekday_name;
use chrono::{Datelike, Days, NaiveDateTime, NaiveTime, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WeekendMode {
    /// Next Friday 00:00 up to (excluding) the following Monday 00:00
    Rolling,
    /// Any start date on one of the configured weekdays
    Days,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WeekendPolicy {
    Rolling,
    Days(Vec<Weekday>),
}

/// Half-open interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekendWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WeekendWindow {
    pub fn contains(&self, dt: NaiveDateTime) -> bool {
        dt >= self.start && dt < self.end
    }
}

/// Window starting on the next Friday (today, when `now` is a Friday).
/// On Saturday and Sunday the window of the following week is returned.
pub fn rolling_window(now: NaiveDateTime) -> WeekendWindow {
    let today = now.date();
    let ahead = (Weekday::Fri.num_days_from_monday() + 7
        - today.weekday().num_days_from_monday())
        % 7;

    let friday = today
        .checked_add_days(Days::new(u64::from(ahead)))
        .unwrap_or(today);
    let monday = friday.checked_add_days(Days::new(3)).unwrap_or(friday);

    WeekendWindow {
        start: friday.and_time(NaiveTime::MIN),
        end: monday.and_time(NaiveTime::MIN),
    }
}

impl WeekendPolicy {
    /// Whether a change starting at `start` falls in the weekend window as
    /// seen at `now`. Changes without a start date never do.
    pub fn contains(&self, start: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
        let Some(start) = start else {
            return false;
        };
        match self {
            WeekendPolicy::Rolling => rolling_window(now).contains(start),
            WeekendPolicy::Days(days) => days.contains(&start.weekday()),
        }
    }

    /// Human-readable description used as a section title.
    pub fn describe(&self, now: NaiveDateTime) -> String {
        match self {
            WeekendPolicy::Rolling => {
                let w = rolling_window(now);
                format!(
                    "Weekend window {} → {}",
                    w.start.format("%a %Y-%m-%d %H:%M"),
                    w.end.format("%a %Y-%m-%d %H:%M")
                )
            }
            WeekendPolicy::Days(days) => {
                let names: Vec<&str> = days.iter().map(|d| weekday_name(*d)).collect();
                format!("Weekend changes ({})", names.join(", "))
            }
        }
    }
}
