//! Console messages: the only place the tool talks to the user outside of
//! report tables. Info, success and warnings go to stdout; errors to stderr.
//!
//! Setting `NO_COLOR` drops the ANSI codes and keeps the icons.

use crate::utils::colors::{self, BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => BLUE,
            Level::Success => GREEN,
            Level::Warning => YELLOW,
            Level::Error => RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn render(level: Level, msg: impl fmt::Display) -> String {
    if colors::enabled() {
        format!("{}{BOLD}{} {RESET}{msg}", level.color(), level.icon())
    } else {
        format!("{} {msg}", level.icon())
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, msg));
}

/// Recoverable problems: padded rows, unreadable dates, missing columns.
pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, msg));
}

/// Section title printed above each report table.
pub fn header<T: fmt::Display>(msg: T) {
    if colors::enabled() {
        println!("{}{BOLD}====================== {msg}{RESET}\n", Level::Info.color());
    } else {
        println!("====================== {msg}\n");
    }
}
