use crate::cli::commands::{build_filter, load_analysis};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::aggregate::{
    Dimension, average_duration_per_customer, changes_per, overview, weekend_changes_per_customer,
};
use crate::core::filter::weekend_subset;
use crate::errors::AppResult;
use crate::export::{ExportFormat, export_charts, export_rows};
use crate::ui::messages::{header, info, warning};
use crate::ui::report;

/// Handle the `analyze` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyze {
        input,
        filter,
        raw,
        charts,
        chart_format,
        export_csv,
        export_xlsx,
        force,
    } = &cli.command
    {
        let analysis = load_analysis(input, cli.now.as_deref(), cfg)?;
        let row_filter = build_filter(filter)?;
        let rows = row_filter.apply(&analysis.rows);

        if !row_filter.is_empty() {
            info(format!(
                "{} of {} rows match the filters.",
                rows.len(),
                analysis.rows.len()
            ));
        }

        header("Overview");
        print!("{}", report::overview_block(&overview(&rows)));
        println!();

        if *raw {
            header("Raw Data");
            print!("{}", report::records_table(&rows));
            println!();
        }

        let weekend = weekend_subset(&rows);
        header(analysis.weekend.describe(analysis.now));
        if weekend.is_empty() {
            println!("No changes in the weekend window.");
        } else {
            print!("{}", report::records_table(&weekend));
        }
        println!();

        header("Changes per Customer");
        print!(
            "{}",
            report::counts_table(
                "Customer",
                "Number of Changes",
                &changes_per(&rows, Dimension::Customer)
            )
        );
        println!();

        header("Changes by Status");
        print!(
            "{}",
            report::counts_table(
                "Status",
                "Number of Changes",
                &changes_per(&rows, Dimension::Status)
            )
        );
        println!();

        header("Average Duration per Customer (hrs)");
        print!(
            "{}",
            report::average_table(&average_duration_per_customer(&rows))
        );
        println!();

        header("Weekend Change Count");
        print!(
            "{}",
            report::counts_table(
                "Customer",
                "Weekend Changes",
                &weekend_changes_per_customer(&rows)
            )
        );
        println!();

        if rows.is_empty() && (export_csv.is_some() || export_xlsx.is_some()) {
            warning("No rows match the filters: exported files contain only the header.");
        }
        if let Some(path) = export_csv {
            export_rows(ExportFormat::Csv, &rows, path, &cfg.sheet_name, *force)?;
        }
        if let Some(path) = export_xlsx {
            export_rows(ExportFormat::Xlsx, &rows, path, &cfg.sheet_name, *force)?;
        }
        if let Some(dir) = charts {
            let format = chart_format.unwrap_or(cfg.chart_format);
            export_charts(&rows, dir, format, (cfg.chart_width, cfg.chart_height))?;
        }
    }

    Ok(())
}
