use crate::errors::{AppError, AppResult};
use crate::export::model::RecordExport;
use crate::export::notify_export_success;
use crate::models::record::AnnotatedRecord;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed (array of objects keyed by column header).
pub(crate) fn export_json(rows: &[AnnotatedRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let items: Vec<RecordExport> = rows.iter().map(RecordExport::from).collect();
    let json = serde_json::to_string_pretty(&items)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}
