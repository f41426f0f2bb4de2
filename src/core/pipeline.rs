use crate::core::annotate::annotate;
use crate::core::weekend::WeekendPolicy;
use crate::ingest;
use crate::models::column::Column;
use crate::models::raw_table::{ParseReport, ParsedTable};
use crate::models::record::AnnotatedRecord;
use chrono::NaiveDateTime;

/// Result of one parse → coerce → annotate pass.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub headers: Vec<String>,
    /// Canonical columns the input did not provide.
    pub missing_columns: Vec<Column>,
    pub report: ParseReport,
    pub rows: Vec<AnnotatedRecord>,
    pub weekend: WeekendPolicy,
    pub now: NaiveDateTime,
}

pub fn analyze(parsed: ParsedTable, now: NaiveDateTime, weekend: WeekendPolicy) -> Analysis {
    let ParsedTable { table, report } = parsed;

    let records = ingest::records(&table);
    let rows = annotate(records, now, &weekend);

    Analysis {
        headers: table.headers().to_vec(),
        missing_columns: table.missing_columns(),
        report,
        rows,
        weekend,
        now,
    }
}

impl Analysis {
    /// Rows whose date text could not be read; their durations are empty.
    pub fn unparsed_dates(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| r.record.start_date.is_none() || r.record.end_date.is_none())
            .count()
    }
}
