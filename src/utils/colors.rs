//! ANSI colours used by the report blocks and console messages.
//!
//! A non-empty `NO_COLOR` turns every colour off.

use std::sync::LazyLock;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

static ENABLED: LazyLock<bool> =
    LazyLock::new(|| std::env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()));

pub fn enabled() -> bool {
    *ENABLED
}

/// Wrap `text` in `color`, resetting afterwards.
pub fn paint(color: &str, text: impl std::fmt::Display) -> String {
    if enabled() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}
