//! Unified application error type.
//! Every module (ingest, core, export, cli) returns AppError so that the
//! top-level handler can print a single consistent message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ingestion
    // ---------------------------
    #[error("No input data: paste a table or provide a CSV/Excel file")]
    EmptyInput,

    #[error("Unable to read the header line: {0}")]
    HeaderParse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Input format not supported: {0}")]
    UnsupportedFormat(String),

    // ---------------------------
    // Filters
    // ---------------------------
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Chart rendering error: {0}")]
    Chart(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
