#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Tab-separated paste: four rows, two Acme changes (CHG001 twice), one Globex.
/// Fri 1 Mar, Sat 2 Mar and Tue 5 Mar 2024.
pub const SAMPLE: &str = "\
Customer\tChange\tCtask\tDescription\tSummary\tStart Date\tEnd Date\tStatus
Acme\tCHG001\tCTASK1\tdesc\tsum\t01/03/2024 10:00\t01/03/2024 12:00\tCompleted
Acme\tCHG002\tCTASK2\tPatch\tPatch db\t02/03/2024 22:00\t03/03/2024 02:00\tCompleted
Globex\tCHG003\tCTASK3\tUpgrade\tUpgrade mw\t05/03/2024 09:00\t05/03/2024 10:30\tScheduled
Acme\tCHG001\tCTASK4\tdesc\tsum follow-up\t01/03/2024 12:00\t01/03/2024 13:00\tCompleted
";

/// A Wednesday: the rolling window is Fri 1 Mar 00:00 → Mon 4 Mar 00:00.
pub const NOW: &str = "2024-02-28 10:00";

pub fn cag() -> Command {
    cargo_bin_cmd!("change-analyzer")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("change_analyzer_{name}.{ext}"));
    fs::remove_file(&path).ok();
    path
}

/// Config path that does not exist yet, so the defaults are used.
pub fn temp_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "conf")
        .to_string_lossy()
        .to_string()
}

/// Fresh, empty directory inside the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("change_analyzer_{name}"));
    fs::remove_dir_all(&path).ok();
    path
}

/// Write `content` to a temp file and return its path as a string.
pub fn write_input(name: &str, ext: &str, content: &str) -> String {
    let path = temp_path(name, ext);
    fs::write(&path, content).expect("write input file");
    path.to_string_lossy().to_string()
}
