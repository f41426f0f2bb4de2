use crate::core::weekend::WeekendMode;
use crate::export::{ChartFormat, ExportFormat};
use crate::ingest::InputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for change-analyzer
#[derive(Parser)]
#[command(
    name = "change-analyzer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze change-management exports: changes per customer and status, durations, weekend window",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Moment of analysis for the rolling weekend window (YYYY-MM-DD [HH:MM])
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Input selection shared by `analyze` and `export`.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file (.csv, .xlsx, .txt, ...). Reads pasted text from stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Force the input format instead of guessing from the extension
    #[arg(long = "input-format", value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// Worksheet to read from a workbook (default: first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Weekend definition (overrides the configuration)
    #[arg(long, value_enum)]
    pub weekend: Option<WeekendMode>,
}

/// Row filters shared by `analyze` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter by start date.
    ///
    /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD and ranges start:end in
    /// the same format (e.g. "2024-03-01:2024-03-31"). "all" disables the filter.
    #[arg(long, short)]
    pub period: Option<String>,

    /// Keep only this customer (case-insensitive)
    #[arg(long)]
    pub customer: Option<String>,

    /// Keep only this status (case-insensitive)
    #[arg(long)]
    pub status: Option<String>,

    /// Keep only changes inside the weekend window
    #[arg(long = "weekend-only")]
    pub weekend_only: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// Parse the input and print raw data, weekend changes and summaries
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Also print every parsed row
        #[arg(long)]
        raw: bool,

        /// Write the summary charts into this directory
        #[arg(long, value_name = "DIR")]
        charts: Option<PathBuf>,

        /// Chart image format (overrides the configuration)
        #[arg(long = "chart-format", value_enum)]
        chart_format: Option<ChartFormat>,

        /// Also write the filtered rows as CSV
        #[arg(long = "export-csv", value_name = "FILE")]
        export_csv: Option<PathBuf>,

        /// Also write the filtered rows as a single-sheet XLSX workbook
        #[arg(long = "export-xlsx", value_name = "FILE")]
        export_xlsx: Option<PathBuf>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the filtered, annotated rows
    Export {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
