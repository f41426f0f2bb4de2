use chrono::{NaiveDateTime, Weekday};

/// One change entry with the eight primary fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub customer: String,
    pub change: String,
    pub ctask: Option<String>,
    pub description: String,
    pub summary: String,
    pub start_date: Option<NaiveDateTime>, // None when the text did not parse
    pub end_date: Option<NaiveDateTime>,
    pub status: String,
}

/// A [`Record`] plus the fields derived from its dates.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecord {
    pub record: Record,
    /// `end_date - start_date` in hours, `None` if either date is missing.
    pub duration_hours: Option<f64>,
    /// Weekday of `start_date`.
    pub day: Option<Weekday>,
    pub is_weekend_window: bool,
}

impl AnnotatedRecord {
    pub fn customer(&self) -> &str {
        &self.record.customer
    }

    pub fn change(&self) -> &str {
        &self.record.change
    }

    pub fn status(&self) -> &str {
        &self.record.status
    }

    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.record.start_date
    }
}
