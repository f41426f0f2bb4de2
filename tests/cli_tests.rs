mod common;
use common::{NOW, SAMPLE, cag, temp_config, temp_dir, temp_path, write_input};
use predicates::prelude::*;
use predicates::str::{contains, is_match};
use std::fs;

#[test]
fn test_analyze_stdin_sections() {
    let cfg = temp_config("analyze_sections");

    cag()
        .args(["--config", &cfg, "--now", NOW, "analyze"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(contains("Overview"))
        .stdout(contains("Weekend window Fri 2024-03-01 00:00 → Mon 2024-03-04 00:00"))
        .stdout(contains("Changes per Customer"))
        .stdout(contains("Changes by Status"))
        .stdout(contains("Average Duration per Customer (hrs)"))
        .stdout(contains("Weekend Change Count"))
        .stdout(is_match(r"Acme\s+2\s").unwrap())
        .stdout(is_match(r"Globex\s+1\s").unwrap())
        .stdout(is_match(r"Scheduled\s+1\s").unwrap())
        .stdout(is_match(r"Globex\s+1\.50").unwrap())
        .stdout(contains("Raw Data").not());
}

#[test]
fn test_analyze_raw_rows() {
    let cfg = temp_config("analyze_raw");

    cag()
        .args(["--config", &cfg, "--now", NOW, "analyze", "--raw"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(contains("Raw Data"))
        .stdout(contains("Saturday"))
        .stdout(contains("Tuesday"))
        .stdout(contains("2024-03-05 09:00:00"));
}

#[test]
fn test_analyze_weekday_weekend() {
    let cfg = temp_config("analyze_days");

    cag()
        .args(["--config", &cfg, "--now", NOW, "analyze", "--weekend", "days"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(contains("Weekend changes (Friday, Saturday, Sunday)"));
}

#[test]
fn test_weekend_mode_from_config_file() {
    let cfg = temp_path("weekend_mode_config", "conf");
    fs::write(&cfg, "weekend_mode: days\nweekend_days: [Saturday]\n").expect("write config");

    cag()
        .args(["--config", cfg.to_str().unwrap(), "analyze"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(contains("Weekend changes (Saturday)"))
        .stdout(is_match(r"Weekend Changes\s*\n-+.*\nAcme\s+1\s").unwrap());
}

#[test]
fn test_analyze_filters() {
    let cfg = temp_config("analyze_filters");

    cag()
        .args([
            "--config",
            &cfg,
            "--now",
            NOW,
            "analyze",
            "--customer",
            "globex",
        ])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(contains("1 of 4 rows match the filters."))
        .stdout(contains("No changes in the weekend window."));
}

#[test]
fn test_analyze_reports_padded_rows_and_bad_dates() {
    let cfg = temp_config("analyze_warnings");
    let input = "Customer\tChange\tCtask\tDescription\tSummary\tStart Date\tEnd Date\tStatus\n\
                 Acme\tCHG1\tT1\td\ts\tsoon\n\
                 Globex\tCHG2\tT2\td\ts\t05/03/2024 10:00\t05/03/2024 14:30\tDone\n";

    cag()
        .args(["--config", &cfg, "--now", NOW, "analyze"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("1 row(s) had missing fields"))
        .stdout(contains("1 row(s) have an unreadable Start/End Date"))
        .stdout(is_match(r"Globex\s+4\.50").unwrap());
}

#[test]
fn test_analyze_csv_file() {
    let cfg = temp_config("analyze_csv_file");
    let input = write_input(
        "analyze_csv_input",
        "csv",
        "Customer;Change;Start Date;End Date;Status\n\
         Acme;CHG1;01/03/2024 10:00;01/03/2024 12:00;Done\n\
         Acme;CHG2;02/03/2024 10:00;02/03/2024 11:00;Done\n",
    );

    cag()
        .args(["--config", &cfg, "--now", NOW, "analyze", &input])
        .assert()
        .success()
        .stdout(contains("Columns not found: Ctask, Description, Summary"))
        .stdout(is_match(r"Acme\s+2\s").unwrap())
        .stdout(is_match(r"Done\s+2\s").unwrap())
        .stdout(is_match(r"Acme\s+1\.50").unwrap());
}

#[test]
fn test_empty_stdin_is_reported() {
    let cfg = temp_config("empty_stdin");

    cag()
        .args(["--config", &cfg, "analyze"])
        .write_stdin("   \n\n")
        .assert()
        .failure()
        .stdout(contains("No input data"));
}

#[test]
fn test_header_error_is_reported() {
    let cfg = temp_config("header_error");

    cag()
        .args(["--config", &cfg, "analyze"])
        .write_stdin("\"\"\nAcme\n")
        .assert()
        .failure()
        .stderr(contains("Unable to read the header line"));
}

#[test]
fn test_missing_input_file() {
    let cfg = temp_config("missing_input");
    let missing = temp_path("does_not_exist", "csv");

    cag()
        .args(["--config", &cfg, "analyze", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("input file not found"));
}

#[test]
fn test_invalid_period_is_reported() {
    let cfg = temp_config("invalid_period");

    cag()
        .args(["--config", &cfg, "analyze", "--period", "2024-13"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_export_csv_with_period() {
    let cfg = temp_config("export_csv_period");
    let out = temp_path("export_csv_period", "csv");

    cag()
        .args([
            "--config",
            &cfg,
            "--now",
            NOW,
            "export",
            "--format",
            "csv",
            "--file",
            out.to_str().unwrap(),
            "--period",
            "2024-03-01:2024-03-02",
        ])
        .write_stdin(SAMPLE)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("CHG002"));
    assert!(!content.contains("Globex"));
}

#[test]
fn test_export_json_weekend_only() {
    let cfg = temp_config("export_json_weekend");
    let out = temp_path("export_json_weekend", "json");

    cag()
        .args([
            "--config",
            &cfg,
            "--now",
            NOW,
            "export",
            "--format",
            "json",
            "--file",
            out.to_str().unwrap(),
            "--weekend-only",
        ])
        .write_stdin(SAMPLE)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i["Weekend Window"] == true));
    assert_eq!(items[0]["Duration (hrs)"], 2.0);
}

#[test]
fn test_export_existing_file_needs_force() {
    let cfg = temp_config("export_force");
    let out = temp_path("export_force", "csv");
    fs::write(&out, "old").expect("seed file");

    cag()
        .args(["--config", &cfg, "export", "--file", out.to_str().unwrap()])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "old");

    cag()
        .args([
            "--config",
            &cfg,
            "export",
            "--file",
            out.to_str().unwrap(),
            "--force",
        ])
        .write_stdin(SAMPLE)
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("Customer,"));
}

#[test]
fn test_analyze_with_exports_and_charts() {
    let cfg = temp_config("analyze_outputs");
    let csv_out = temp_path("analyze_outputs", "csv");
    let xlsx_out = temp_path("analyze_outputs", "xlsx");
    let charts = temp_dir("analyze_outputs_charts");

    cag()
        .args([
            "--config",
            &cfg,
            "--now",
            NOW,
            "analyze",
            "--export-csv",
            csv_out.to_str().unwrap(),
            "--export-xlsx",
            xlsx_out.to_str().unwrap(),
            "--charts",
            charts.to_str().unwrap(),
        ])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(contains("CSV export completed"))
        .stdout(contains("XLSX export completed"));

    assert_eq!(
        fs::read_to_string(&csv_out).expect("csv").lines().count(),
        5
    );
    assert!(xlsx_out.exists());
    for name in [
        "changes_by_customer.png",
        "changes_by_status.png",
        "status_share.png",
        "avg_duration_by_customer.png",
        "weekend_changes_by_customer.png",
    ] {
        assert!(charts.join(name).exists(), "{name}");
    }
}

#[test]
fn test_chart_format_option() {
    let cfg = temp_config("chart_format_svg");
    let charts = temp_dir("chart_format_svg_charts");

    cag()
        .args([
            "--config",
            &cfg,
            "analyze",
            "--charts",
            charts.to_str().unwrap(),
            "--chart-format",
            "svg",
        ])
        .write_stdin(SAMPLE)
        .assert()
        .success();

    assert!(charts.join("changes_by_status.svg").exists());
    assert!(!charts.join("changes_by_status.png").exists());
}

#[test]
fn test_empty_ctask_paste() {
    let cfg = temp_config("empty_ctask");
    let input = "Customer\tChange\tCtask\tDescription\tSummary\tStart Date\tEnd Date\tStatus\n\
                 Acme\tCHG001\t\tdesc\tsum\t01/03/2024 10:00\t01/03/2024 12:00\tCompleted\n";

    cag()
        .args(["--config", &cfg, "--now", NOW, "analyze"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("had missing fields").not())
        .stdout(is_match(r"Completed\s+1\s").unwrap())
        .stdout(is_match(r"Acme\s+2\.00").unwrap());
}

#[test]
fn test_header_fallback_warning_names_the_split() {
    let cfg = temp_path("header_warning_config", "conf");
    fs::write(
        &cfg,
        "collapse_space_runs: false\nheader_fallback: double_space\n",
    )
    .expect("write config");

    cag()
        .args(["--config", cfg.to_str().unwrap(), "analyze"])
        .write_stdin("Customer Name  Change  Status\nAcme\n")
        .assert()
        .success()
        .stdout(contains(
            "Header line was split on runs of two or more spaces",
        ));
}

#[cfg(unix)]
#[test]
fn test_config_edit_opens_editor_on_invalid_file() {
    let cfg = temp_path("edit_invalid_config", "conf");
    fs::write(&cfg, "weekend_days: [Funday]\n").expect("write config");

    cag()
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "config",
            "--edit",
            "--editor",
            "true",
        ])
        .assert()
        .failure()
        .stdout(contains("opening the editor"))
        .stdout(contains("edited successfully using 'true'"))
        .stderr(contains("invalid weekday in weekend_days: Funday"));

    assert_eq!(
        fs::read_to_string(&cfg).expect("read config"),
        "weekend_days: [Funday]\n"
    );
}

#[test]
fn test_init_and_print_config() {
    let cfg = temp_config("init_print");

    cag()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&cfg).expect("read config");
    assert!(content.contains("weekend_mode: rolling"));
    assert!(content.contains("header_fallback: whitespace_run"));
    assert!(content.contains("row_fallback: none"));
    assert!(content.contains("chart_format: png"));

    cag()
        .args(["--config", &cfg, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    cag()
        .args(["--config", &cfg, "init", "--force"])
        .assert()
        .success();

    cag()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("sheet_name: FilteredData"))
        .stdout(contains("expected_columns: 8"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let cfg = temp_path("invalid_config", "conf");
    fs::write(&cfg, "weekend_days: [Funday]\n").expect("write config");

    cag()
        .args(["--config", cfg.to_str().unwrap(), "analyze"])
        .write_stdin(SAMPLE)
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_no_color_output() {
    let cfg = temp_config("no_color");

    cag()
        .env("NO_COLOR", "1")
        .args(["--config", &cfg, "--now", NOW, "analyze"])
        .write_stdin(SAMPLE)
        .assert()
        .success()
        .stdout(contains("====================== Overview"))
        .stdout(contains("\x1b[").not());
}
