// src/export/chart.rs

//! Charts of the summaries, drawn with plotters as PNG or SVG.
//!
//! Text is rendered with a font bundled in the binary, so no system font
//! lookup happens and both backends produce the same layout.

use crate::core::aggregate::{AverageRow, CountRow};
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::f64::consts::PI;
use std::path::Path;
use std::sync::LazyLock;

const FONT_FAMILY: &str = "sans-serif";

static FONT_READY: LazyLock<bool> = LazyLock::new(|| {
    register_font(FONT_FAMILY, FontStyle::Normal, epaint_default_fonts::UBUNTU_LIGHT).is_ok()
});

type DrawResult = Result<(), Box<dyn Error>>;

/// One bar / slice: label and value.
pub type Series = Vec<(String, f64)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
        }
    }
}

pub fn counts_series(rows: &[CountRow]) -> Series {
    rows.iter().map(|r| (r.key.clone(), r.count as f64)).collect()
}

/// Customers without any duration are left out.
pub fn average_series(rows: &[AverageRow]) -> Series {
    rows.iter()
        .filter_map(|r| r.hours.map(|h| (r.key.clone(), h)))
        .collect()
}

fn ensure_font() -> AppResult<()> {
    if *FONT_READY {
        Ok(())
    } else {
        Err(AppError::Chart("bundled chart font could not be loaded".to_string()))
    }
}

/// Vertical bar chart, one bar per label.
pub fn bar_chart(
    path: &Path,
    format: ChartFormat,
    title: &str,
    y_desc: &str,
    data: &[(String, f64)],
    size: (u32, u32),
) -> AppResult<()> {
    ensure_font()?;
    let drawn = match format {
        ChartFormat::Png => {
            draw_bars(BitMapBackend::new(path, size).into_drawing_area(), title, y_desc, data)
        }
        ChartFormat::Svg => {
            draw_bars(SVGBackend::new(path, size).into_drawing_area(), title, y_desc, data)
        }
    };
    drawn.map_err(|e| AppError::Chart(format!("{}: {e}", path.display())))
}

/// Pie chart with a legend on the right.
pub fn pie_chart(
    path: &Path,
    format: ChartFormat,
    title: &str,
    data: &[(String, f64)],
    size: (u32, u32),
) -> AppResult<()> {
    ensure_font()?;
    let drawn = match format {
        ChartFormat::Png => {
            draw_pie(BitMapBackend::new(path, size).into_drawing_area(), title, data)
        }
        ChartFormat::Svg => {
            draw_pie(SVGBackend::new(path, size).into_drawing_area(), title, data)
        }
    };
    drawn.map_err(|e| AppError::Chart(format!("{}: {e}", path.display())))
}

fn draw_bars<DB>(
    root: DrawingArea<DB, Shift>,
    title: &str,
    y_desc: &str,
    data: &[(String, f64)],
) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let n = data.len().max(1) as u32;
    let y_max = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT_FAMILY, 28))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..n).into_segmented(), 0f64..y_max)?;

    let label_of = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => data
            .get(*i as usize)
            .map(|(label, _)| label.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(data.len().max(1))
        .x_label_formatter(&label_of)
        .y_desc(y_desc)
        .label_style((FONT_FAMILY, 14))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.7).filled())
            .margin(8)
            .data(data.iter().enumerate().map(|(i, (_, v))| (i as u32, *v))),
    )?;

    root.present()?;
    Ok(())
}

fn draw_pie<DB>(root: DrawingArea<DB, Shift>, title: &str, data: &[(String, f64)]) -> DrawResult
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    let root = root.titled(title, (FONT_FAMILY, 28))?;

    let (w, h) = root.dim_in_pixel();
    let radius = (f64::from(w.min(h)) * 0.4).max(10.0);
    let center = (f64::from(w) * 0.35, f64::from(h) * 0.5);
    let total: f64 = data.iter().map(|(_, v)| v.max(0.0)).sum();

    if total > 0.0 {
        let mut angle = -PI / 2.0;
        for (i, (_, v)) in data.iter().enumerate() {
            let sweep = v.max(0.0) / total * 2.0 * PI;
            if sweep <= 0.0 {
                continue;
            }
            let steps = ((sweep / (2.0 * PI)) * 120.0).ceil().max(2.0) as usize;
            let mut points = vec![(center.0 as i32, center.1 as i32)];
            for s in 0..=steps {
                let a = angle + sweep * s as f64 / steps as f64;
                points.push((
                    (center.0 + radius * a.cos()) as i32,
                    (center.1 + radius * a.sin()) as i32,
                ));
            }
            root.draw(&Polygon::new(points, Palette99::pick(i).filled()))?;
            angle += sweep;
        }
    }

    // legend
    let legend_x = (center.0 + radius + 40.0) as i32;
    for (i, (label, v)) in data.iter().enumerate() {
        let y = 40 + i as i32 * 26;
        root.draw(&Rectangle::new(
            [(legend_x, y), (legend_x + 16, y + 16)],
            Palette99::pick(i).filled(),
        ))?;
        let share = if total > 0.0 { v / total * 100.0 } else { 0.0 };
        root.draw(&Text::new(
            format!("{label} ({v:.0}, {share:.1}%)"),
            (legend_x + 24, y + 2),
            (FONT_FAMILY, 16),
        ))?;
    }

    root.present()?;
    Ok(())
}
