//! Chart artifact rendering
//!
//! Three PNG artifacts regenerated in place on every call: a bar chart of
//! exam scores per student, a line chart of exam score over sorted study
//! hours, and a scatter of attendance against exam score colored by study
//! hours. Artifacts are written one at a time with independent write calls,
//! so earlier files survive a later failure. Failures surface to the caller
//! and are never retried.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::style::colors::colormaps::{ColorMap, ViridisRGB};
use tracing::debug;

use crate::student::StudentRecord;
use crate::{Error, Result};

/// Bar chart artifact filename (exam score per student).
pub const BAR_CHART_FILE: &str = "exam_scores_bar.png";

/// Line chart artifact filename (exam score over sorted study hours).
pub const LINE_CHART_FILE: &str = "study_hours_line.png";

/// Scatter artifact filename (attendance vs exam score, colored by study
/// hours).
pub const SCATTER_CHART_FILE: &str = "attendance_scatter.png";

/// Pixel dimensions of every artifact.
pub const CHART_SIZE: (u32, u32) = (600, 400);

// Fill color for the score bars.
const BAR_FILL: RGBColor = RGBColor(135, 206, 235);

// Percent axes get a little headroom so markers at 100 stay visible.
const PERCENT_AXIS_MAX: f64 = 105.0;

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Render all chart artifacts into `output_dir`.
///
/// Zero records produce no artifacts and no filesystem writes. Otherwise
/// the output directory is created if absent and exactly three
/// files are (re)written, overwriting any previous versions at the same
/// locations. Identical records produce identical artifacts.
///
/// Returns the artifact paths in render order.
///
/// # Errors
///
/// Returns [`Error::Io`] when the output directory cannot be created and
/// [`Error::ChartRender`] (naming the failing artifact) when drawing or
/// writing fails.
pub fn render_all(records: &[StudentRecord], output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let dir = output_dir.as_ref();
    fs::create_dir_all(dir)?;

    let bar = dir.join(BAR_CHART_FILE);
    draw_bar(records, &bar).map_err(|e| Error::ChartRender(format!("{BAR_CHART_FILE}: {e}")))?;
    debug!(path = %bar.display(), "chart artifact written");

    let line = dir.join(LINE_CHART_FILE);
    draw_line(records, &line).map_err(|e| Error::ChartRender(format!("{LINE_CHART_FILE}: {e}")))?;
    debug!(path = %line.display(), "chart artifact written");

    let scatter = dir.join(SCATTER_CHART_FILE);
    draw_scatter(records, &scatter)
        .map_err(|e| Error::ChartRender(format!("{SCATTER_CHART_FILE}: {e}")))?;
    debug!(path = %scatter.display(), "chart artifact written");

    Ok(vec![bar, line, scatter])
}

/// One bar per record, x = student name, y = exam score.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn draw_bar(records: &[StudentRecord], path: &Path) -> DrawResult {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let names: Vec<&str> = records.iter().map(StudentRecord::name).collect();
    let n = records.len() as i32;

    let mut chart = ChartBuilder::on(&root)
        .caption("Exam Scores by Student", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0..n, 0f64..PERCENT_AXIS_MAX)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(records.len())
        .x_label_formatter(&|idx| {
            usize::try_from(*idx)
                .ok()
                .and_then(|i| names.get(i))
                .map_or_else(String::new, ToString::to_string)
        })
        .y_desc("Exam Score (%)")
        .draw()?;

    chart.draw_series(records.iter().enumerate().map(|(i, record)| {
        let i = i as i32;
        Rectangle::new([(i, 0.0), (i + 1, record.exam_score())], BAR_FILL.filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Line with point markers over records sorted ascending by study hours.
fn draw_line(records: &[StudentRecord], path: &Path) -> DrawResult {
    let mut points: Vec<(f64, f64)> = records
        .iter()
        .map(|record| (record.study_hours(), record.exam_score()))
        .collect();
    // Stable sort keeps insertion order among equal study hours.
    points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    let x_max = points.last().map_or(1.0, |point| point.0).max(1.0) * 1.05;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Study Hours vs Exam Score", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, 0f64..PERCENT_AXIS_MAX)?;

    chart
        .configure_mesh()
        .x_desc("Study Hours")
        .y_desc("Exam Score (%)")
        .draw()?;

    chart.draw_series(LineSeries::new(points.clone(), &BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Scatter of attendance against exam score, colored by study hours on the
/// viridis scale, with a legend marking the color endpoints.
#[allow(clippy::cast_possible_truncation)]
fn draw_scatter(records: &[StudentRecord], path: &Path) -> DrawResult {
    let (min_hours, max_hours) = hours_range(records);
    let span = (max_hours - min_hours).max(f64::EPSILON);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Attendance vs Exam Score (color = study hours)",
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..PERCENT_AXIS_MAX, 0f64..PERCENT_AXIS_MAX)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Attendance (%)")
        .y_desc("Exam Score (%)")
        .draw()?;

    let low_color = ViridisRGB.get_color(0.0);
    let high_color = ViridisRGB.get_color(1.0);

    chart
        .draw_series(records.iter().map(|record| {
            let t = ((record.study_hours() - min_hours) / span) as f32;
            Circle::new(
                (record.attendance(), record.exam_score()),
                4,
                ViridisRGB.get_color(t).filled(),
            )
        }))?
        .label(format!("{min_hours:.1} study hours"))
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, low_color.filled()));

    chart
        .draw_series(Vec::<Circle<(f64, f64), i32>>::new())?
        .label(format!("{max_hours:.1} study hours"))
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, high_color.filled()));

    chart.configure_series_labels().border_style(&BLACK).draw()?;

    root.present()?;
    Ok(())
}

fn hours_range(records: &[StudentRecord]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        min = min.min(record.study_hours());
        max = max.max(record.study_hours());
    }
    (min, max)
}
