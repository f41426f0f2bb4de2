use crate::errors::AppResult;
use crate::export::model::{get_headers, record_to_cells};
use crate::export::notify_export_success;
use crate::models::record::AnnotatedRecord;
use crate::ui::messages::info;
use csv::Writer;
use std::io::Write;
use std::path::Path;

/// Export CSV: UTF-8, comma-delimited, header row always present.
pub(crate) fn export_csv(rows: &[AnnotatedRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let wtr = Writer::from_path(path)?;
    write_csv(wtr, rows)?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Write the annotated rows to any CSV writer.
pub fn write_csv<W: Write>(mut wtr: Writer<W>, rows: &[AnnotatedRecord]) -> AppResult<()> {
    wtr.write_record(get_headers())?;

    for r in rows {
        let values: Vec<String> = record_to_cells(r).iter().map(|c| c.as_text()).collect();
        wtr.write_record(&values)?;
    }

    wtr.flush()?;
    Ok(())
}
