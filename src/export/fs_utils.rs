// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Check whether a file can be created or overwritten.
///
/// - File does not exist → Ok
/// - File exists and `force` → Ok
/// - File exists, no `force` → ask on an interactive terminal, refuse otherwise.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            return Err(AppError::Export(format!(
                "output directory does not exist: {}",
                dir.display()
            )));
        }
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !io::stdin().is_terminal() {
        return Err(AppError::Export(
            "existing file not overwritten (use --force)".to_string(),
        ));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}

/// Create the chart directory if needed.
pub(crate) fn ensure_dir(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    if !dir.is_dir() {
        return Err(AppError::Export(format!(
            "not a directory: {}",
            dir.display()
        )));
    }
    Ok(())
}
