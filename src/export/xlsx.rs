// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{Cell, get_headers, record_to_cells};
use crate::export::notify_export_success;
use crate::models::record::AnnotatedRecord;
use crate::ui::messages::info;
use crate::utils::excel_date::datetime_to_excel_serial;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const BAND_1: Color = Color::RGB(0xEAF3FB);
const BAND_2: Color = Color::RGB(0xFFFFFF);
const WEEKEND_BAND: Color = Color::RGB(0xFFF2CC);

/// Export a single styled sheet named `sheet_name`, with auto-width columns.
pub(crate) fn export_xlsx(rows: &[AnnotatedRecord], path: &Path, sheet_name: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if r.is_weekend_window {
            WEEKEND_BAND
        } else if row_index % 2 == 0 {
            BAND_1
        } else {
            BAND_2
        };

        for (col, cell) in record_to_cells(r).iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band)?;

            let shown = match cell {
                Cell::Date(_) => "yyyy-mm-dd hh:mm".len(),
                other => UnicodeWidthStr::width(other.as_text().as_str()),
            };
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(shown);
            }
        }
    }

    if !rows.is_empty() {
        worksheet.autofilter(0, 0, rows.len() as u32, (headers.len() - 1) as u16)?;
    }

    for (c, w) in col_widths.iter().enumerate() {
        // very long descriptions would make the sheet unreadable
        let w = (*w).min(60);
        worksheet.set_column_width(c as u16, w as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Write one typed cell with the band colour of its row.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Date(dt) => {
            let fmt = base.set_num_format("yyyy-mm-dd hh:mm");
            worksheet.write_with_format(row, col, datetime_to_excel_serial(dt), &fmt)?;
        }
        Cell::Number(n) => {
            let fmt = base.set_num_format("0.00").set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)?;
        }
        Cell::Bool(b) => {
            worksheet.write_with_format(row, col, *b, &base)?;
        }
        Cell::Text(s) => {
            worksheet.write_with_format(row, col, s.as_str(), &base)?;
        }
        Cell::Empty => {
            worksheet.write_blank(row, col, &base)?;
        }
    }

    Ok(())
}
