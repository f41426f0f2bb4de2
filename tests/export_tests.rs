mod common;
use calamine::{Data, Reader, open_workbook_auto};
use change_analyzer::core::pipeline::{Analysis, analyze};
use change_analyzer::core::weekend::WeekendPolicy;
use change_analyzer::export::{
    ChartFormat, ExportFormat, RecordExport, export_charts, export_rows, write_csv,
};
use change_analyzer::ingest::sheet::parse_sheet;
use change_analyzer::ingest::text::{ParsePolicy, parse_text};
use change_analyzer::ingest::records;
use change_analyzer::utils::excel_date::datetime_to_excel_serial;
use chrono::NaiveDate;
use common::{SAMPLE, temp_dir, temp_path};
use rust_xlsxwriter::{Format, Workbook};
use std::fs;

fn sample_analysis() -> Analysis {
    let parsed = parse_text(SAMPLE, &ParsePolicy::default()).expect("parse sample");
    let now = NaiveDate::from_ymd_opt(2024, 2, 28)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("valid now");
    analyze(parsed, now, WeekendPolicy::Rolling)
}

#[test]
fn test_write_csv_header_and_derived_columns() {
    let a = sample_analysis();
    let mut buf: Vec<u8> = Vec::new();
    write_csv(csv::Writer::from_writer(&mut buf), &a.rows).expect("write csv");

    let out = String::from_utf8(buf).expect("utf8");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "Customer,Change,Ctask,Description,Summary,Start Date,End Date,Status,Duration (hrs),Day,Weekend Window"
    );
    assert_eq!(
        lines[1],
        "Acme,CHG001,CTASK1,desc,sum,2024-03-01 10:00:00,2024-03-01 12:00:00,Completed,2,Friday,true"
    );
    assert!(lines[3].starts_with("Globex,CHG003,"));
    assert!(lines[3].ends_with(",Scheduled,1.5,Tuesday,false"));
}

#[test]
fn test_write_csv_empty_rows_still_has_header() {
    let mut buf: Vec<u8> = Vec::new();
    write_csv(csv::Writer::from_writer(&mut buf), &[]).expect("write csv");

    let out = String::from_utf8(buf).expect("utf8");
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("Customer,Change,"));
}

#[test]
fn test_record_export_json_shape() {
    let a = sample_analysis();
    let item = RecordExport::from(&a.rows[1]);
    let value = serde_json::to_value(&item).expect("serialize");

    assert_eq!(value["Customer"], "Acme");
    assert_eq!(value["Start Date"], "2024-03-02 22:00:00");
    assert_eq!(value["Duration (hrs)"], 4.0);
    assert_eq!(value["Day"], "Saturday");
    assert_eq!(value["Weekend Window"], true);
}

#[test]
fn test_xlsx_export_single_named_sheet() {
    let a = sample_analysis();
    let out = temp_path("xlsx_single_sheet", "xlsx");

    export_rows(ExportFormat::Xlsx, &a.rows, &out, "FilteredData", false).expect("export xlsx");

    let mut wb = open_workbook_auto(&out).expect("open exported workbook");
    assert_eq!(wb.sheet_names(), vec!["FilteredData".to_string()]);

    let range = wb.worksheet_range("FilteredData").expect("sheet");
    assert_eq!(range.height(), 5);
    assert_eq!(range.get((0, 0)), Some(&Data::String("Customer".to_string())));
    assert_eq!(range.get((1, 0)), Some(&Data::String("Acme".to_string())));
    assert!(matches!(range.get((1, 5)), Some(Data::DateTime(_))));
}

#[test]
fn test_xlsx_export_reads_back_with_same_dates() {
    let a = sample_analysis();
    let out = temp_path("xlsx_read_back", "xlsx");
    export_rows(ExportFormat::Xlsx, &a.rows, &out, "FilteredData", false).expect("export xlsx");

    let parsed = parse_sheet(&out, None).expect("parse exported workbook");
    let recs = records(&parsed.table);

    assert_eq!(recs.len(), 4);
    for (orig, back) in a.rows.iter().zip(&recs) {
        assert_eq!(orig.record.start_date, back.start_date);
        assert_eq!(orig.record.end_date, back.end_date);
        assert_eq!(orig.record.customer, back.customer);
    }
}

#[test]
fn test_forced_export_overwrites_existing_file() {
    let a = sample_analysis();
    let out = temp_path("existing_file", "csv");
    fs::write(&out, "old").expect("seed file");

    export_rows(ExportFormat::Csv, &a.rows, &out, "FilteredData", true).expect("forced export");
    assert!(fs::read_to_string(&out).expect("read").starts_with("Customer,"));
}

#[test]
fn test_export_into_missing_directory_fails() {
    let a = sample_analysis();
    let out = temp_dir("no_such_dir").join("out.csv");

    assert!(export_rows(ExportFormat::Csv, &a.rows, &out, "FilteredData", true).is_err());
}

#[test]
fn test_parse_sheet_with_text_and_native_dates() {
    let path = temp_path("sheet_input", "xlsx");
    let start = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .expect("valid date");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.set_name("Changes").expect("sheet name");
    let headers = ["Customer", "Change", "Start Date", "End Date", "Status"];
    for (c, h) in headers.iter().enumerate() {
        ws.write_string(0, c as u16, *h).expect("header");
    }
    ws.write_string(1, 0, "Acme").expect("cell");
    ws.write_string(1, 1, "CHG001").expect("cell");
    let date_fmt = Format::new().set_num_format("dd/mm/yyyy hh:mm");
    ws.write_number_with_format(1, 2, datetime_to_excel_serial(&start), &date_fmt)
        .expect("date cell");
    ws.write_string(1, 3, "01/03/2024 12:00").expect("cell");
    ws.write_string(1, 4, "Completed").expect("cell");
    ws.write_string(2, 0, "Globex").expect("cell");
    wb.save(&path).expect("save workbook");

    let parsed = parse_sheet(&path, Some("Changes")).expect("parse sheet");
    assert_eq!(parsed.table.headers(), headers);
    assert_eq!(parsed.report.padded, 1);

    let recs = records(&parsed.table);
    assert_eq!(recs[0].start_date, Some(start));
    assert_eq!(
        recs[0].end_date,
        start.checked_add_signed(chrono::TimeDelta::hours(2))
    );
    assert_eq!(recs[1].customer, "Globex");
    assert_eq!(recs[1].start_date, None);

    assert!(parse_sheet(&path, Some("Missing")).is_err());
}

#[test]
fn test_charts_written_as_png() {
    let a = sample_analysis();
    let dir = temp_dir("charts_png");

    let files = export_charts(&a.rows, &dir, ChartFormat::Png, (640, 480)).expect("charts");

    assert_eq!(files.len(), 5);
    for f in &files {
        let bytes = fs::read(f).expect("read png");
        assert!(bytes.starts_with(b"\x89PNG"), "{}", f.display());
    }
    assert!(dir.join("status_share.png").exists());
}

#[test]
fn test_charts_written_as_svg() {
    let a = sample_analysis();
    let dir = temp_dir("charts_svg");

    let files = export_charts(&a.rows, &dir, ChartFormat::Svg, (640, 480)).expect("charts");

    assert_eq!(files.len(), 5);
    for f in &files {
        let svg = fs::read_to_string(f).expect("read svg");
        assert!(svg.contains("<svg"), "{}", f.display());
    }
    let pie = fs::read_to_string(dir.join("status_share.svg")).expect("read pie");
    assert!(pie.contains("Completed"));
}

#[test]
fn test_charts_with_no_rows() {
    let dir = temp_dir("charts_empty");
    let files = export_charts(&[], &dir, ChartFormat::Png, (640, 480)).expect("charts");
    assert_eq!(files.len(), 5);
}
