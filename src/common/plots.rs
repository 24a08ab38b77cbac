//! Plotting infrastructure for the exploratory figures
//!
//! This module provides functionality to create the pipeline's raster figures
//! using the [`plotters`] crate. Charts are saved as PNG files with fixed 1200x800
//! resolution.

use crate::common::records::{Condition, SubjectConditionSummary, TrialRecord};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Number of equal-width bins used for each reaction-time histogram series
const RT_HISTOGRAM_BINS: usize = 60;

/// Colors assigned to scatter series, in condition reporting order
const SERIES_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];

/// One named point series for the speed-accuracy scatter
#[derive(Debug, Clone)]
pub struct ScatterSeries {
    /// Legend label for the series
    pub label: String,
    /// (mean reaction time, accuracy) points
    pub points: Vec<(f64, f64)>,
}

/// Bins values into `bin_count` equal-width buckets over their own min..max range
///
/// Each series is binned over its own observed range, matching the behavior of
/// plotting libraries that compute bin edges per histogram call. Values equal to
/// the range maximum land in the last bin. A degenerate range (all values equal)
/// is widened by 0.5 on each side so every value still receives a bin.
///
/// # Arguments
/// * `values` - The values to bin
/// * `bin_count` - Number of equal-width bins
///
/// # Returns
/// A vector of (bin_start, bin_end, count) triples covering the full range
pub fn histogram_bins(values: &[f64], bin_count: usize) -> Vec<(f64, f64, usize)> {
    if values.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Widen a zero-width range so binning stays well defined
    if min >= max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];

    for &value in values {
        let index = ((value - min) / width) as usize;
        // Values at the range maximum belong to the last bin
        counts[index.min(bin_count - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = min + width * i as f64;
            (start, start + width, count)
        })
        .collect()
}

/// Creates the overlaid raw-vs-cleaned reaction-time histogram and saves it as a PNG file
///
/// Both series are drawn with translucent fills so the overlap between the raw
/// and cleaned distributions stays readable. Each series is binned into 60
/// equal-width buckets over its own value range.
///
/// # Arguments
/// * `raw` - Reaction times from the full synthesized table
/// * `cleaned` - Reaction times surviving the range filter
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Chart Properties
/// * Resolution: 1200x800 pixels
/// * Format: PNG
/// * X-axis: Reaction time in milliseconds, linear scale
/// * Y-axis: Trial count per bin
/// * Legend: "before" (raw) and "after" (cleaned) series
///
/// # Headless Compatibility
/// This function is designed to work in headless environments (Docker/CI) by using
/// plotters' bitmap backend with default font rendering. It avoids system font
/// dependencies that might not be available in containerized environments.
pub fn create_rt_histogram(raw: &[f64], cleaned: &[f64], output_path: &Path) -> Result<()> {
    if raw.is_empty() {
        return Err(PlotError::InvalidData(
            "Raw reaction times cannot be empty".to_string(),
        ));
    }

    let raw_bins = histogram_bins(raw, RT_HISTOGRAM_BINS);
    let cleaned_bins = histogram_bins(cleaned, RT_HISTOGRAM_BINS);

    // Axis ranges cover both series; the raw range is a superset in practice
    let x_min = raw_bins
        .iter()
        .chain(cleaned_bins.iter())
        .map(|(start, _, _)| *start)
        .fold(f64::INFINITY, f64::min);
    let x_max = raw_bins
        .iter()
        .chain(cleaned_bins.iter())
        .map(|(_, end, _)| *end)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_max = raw_bins
        .iter()
        .chain(cleaned_bins.iter())
        .map(|(_, _, count)| *count)
        .max()
        .unwrap_or(1) as f64;

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption("RT distribution (before vs after cleaning)", ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.05)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc("Reaction time (ms)")
        .x_label_style(("sans-serif", 35))
        .y_desc("Count")
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{:.0}", x.round()))
        .y_label_formatter(&|y| format!("{:.0}", y.round()))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (bins, color, label) in [(&raw_bins, BLUE, "before"), (&cleaned_bins, RED, "after")] {
        if bins.is_empty() {
            continue;
        }

        chart_context
            .draw_series(bins.iter().map(|&(start, end, count)| {
                Rectangle::new([(start, 0.0), (end, count as f64)], color.mix(0.6).filled())
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.mix(0.6).filled())
            });
    }

    chart_context
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", 25))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Creates a per-condition speed-accuracy scatter plot and saves it as a PNG file
///
/// Each series is drawn as filled circles in its assigned color. The undecorated
/// variant reproduces the mid-pipeline snapshot figure (axes only); the decorated
/// variant adds the caption, axis labels, and legend.
///
/// # Arguments
/// * `series` - One named point series per condition, points are (mean RT, accuracy)
/// * `decorated` - If true, draws caption, axis descriptions, and legend
/// * `output_path` - Path where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the chart was successfully created and saved
/// * `Err(PlotError)` - If an error occurred during chart generation
pub fn create_speed_accuracy_scatter(
    series: &[ScatterSeries],
    decorated: bool,
    output_path: &Path,
) -> Result<()> {
    let total_points: usize = series.iter().map(|s| s.points.len()).sum();
    if total_points == 0 {
        return Err(PlotError::InvalidData(
            "Scatter data cannot be empty".to_string(),
        ));
    }

    // Validate that accuracies are in valid range
    for s in series {
        for (_, accuracy) in &s.points {
            if *accuracy < 0.0 || *accuracy > 1.0 {
                return Err(PlotError::InvalidData(format!(
                    "Accuracy {:.4} is outside valid range 0-1",
                    accuracy
                )));
            }
        }
    }

    // X-axis range from the data with a small margin on each side
    let x_min = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(rt, _)| *rt))
        .fold(f64::INFINITY, f64::min);
    let x_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|(rt, _)| *rt))
        .fold(f64::NEG_INFINITY, f64::max);
    let x_pad = ((x_max - x_min) * 0.05).max(10.0);

    let root = BitMapBackend::new(output_path, (1200, 800));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut builder = ChartBuilder::on(&drawing_area);
    builder.margin(20).x_label_area_size(60).y_label_area_size(85);
    if decorated {
        builder.caption("Speed-accuracy tradeoff (per subject)", ("sans-serif", 40));
    }

    let mut chart_context = builder
        .build_cartesian_2d((x_min - x_pad)..(x_max + x_pad), 0.0..1.05)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let mut mesh = chart_context.configure_mesh();
    mesh.x_label_style(("sans-serif", 35))
        .y_label_style(("sans-serif", 35))
        .label_style(("sans-serif", 25))
        .x_label_formatter(&|x| format!("{:.0}", x.round()))
        .y_label_formatter(&|y| format!("{:.2}", y));

    if decorated {
        mesh.x_desc("Mean RT (ms)").y_desc("Accuracy");
    }

    mesh.draw().map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (index, s) in series.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];

        let annotation = chart_context
            .draw_series(
                s.points
                    .iter()
                    .map(|&(rt, accuracy)| Circle::new((rt, accuracy), 5, color.mix(0.8).filled())),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        if decorated {
            annotation.label(s.label.clone()).legend(move |(x, y)| {
                Circle::new((x + 6, y), 5, color.mix(0.8).filled())
            });
        }
    }

    if decorated {
        chart_context
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", 25))
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Convenience function to create the raw-vs-cleaned RT distribution figure
///
/// # Arguments
/// * `raw_trials` - The full synthesized trial table
/// * `cleaned_trials` - The range-filtered trial table
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(())` - If the plot was successfully created
/// * `Err(PlotError)` - If an error occurred
pub fn create_rt_distribution_plot(
    raw_trials: &[TrialRecord],
    cleaned_trials: &[TrialRecord],
    output_dir: &Path,
) -> Result<()> {
    let raw: Vec<f64> = raw_trials.iter().map(|t| t.rt_ms).collect();
    let cleaned: Vec<f64> = cleaned_trials.iter().map(|t| t.rt_ms).collect();

    let output_path = output_dir.join("rt_distribution_before_after.png");
    create_rt_histogram(&raw, &cleaned, &output_path)
}

/// Convenience function to create both speed-accuracy scatter figures
///
/// Writes the undecorated per-condition snapshot (`rt_by_condition.png`) and the
/// fully decorated final figure (`speed_accuracy.png`) from the same
/// subject-condition summary.
///
/// # Arguments
/// * `summaries` - Subject-condition summary rows
/// * `output_dir` - Directory where the PNG files should be saved
///
/// # Returns
/// * `Ok(())` - If both plots were successfully created
/// * `Err(PlotError)` - If an error occurred
pub fn create_speed_accuracy_plots(
    summaries: &[SubjectConditionSummary],
    output_dir: &Path,
) -> Result<()> {
    let series = scatter_series_by_condition(summaries);

    create_speed_accuracy_scatter(&series, false, &output_dir.join("rt_by_condition.png"))?;
    create_speed_accuracy_scatter(&series, true, &output_dir.join("speed_accuracy.png"))?;

    Ok(())
}

/// Groups subject-condition summary rows into one scatter series per condition
///
/// Conditions absent from the summary produce no series, so the scatter only
/// carries the conditions actually observed.
pub fn scatter_series_by_condition(summaries: &[SubjectConditionSummary]) -> Vec<ScatterSeries> {
    Condition::ALL
        .iter()
        .filter_map(|&condition| {
            let points: Vec<(f64, f64)> = summaries
                .iter()
                .filter(|s| s.condition == condition)
                .map(|s| (s.mean_rt, s.accuracy))
                .collect();

            if points.is_empty() {
                None
            } else {
                Some(ScatterSeries {
                    label: condition.to_string(),
                    points,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_histogram_bins_counts() {
        let values = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let bins = histogram_bins(&values, 5);

        assert_eq!(bins.len(), 5);
        let total: usize = bins.iter().map(|(_, _, count)| count).sum();
        assert_eq!(total, values.len());

        // Bin edges span the full range
        assert_eq!(bins[0].0, 0.0);
        assert!((bins[4].1 - 5.0).abs() < 1e-9);

        // The range maximum lands in the last bin
        assert_eq!(bins[4].2, 2); // 4.0 and 5.0
    }

    #[test]
    fn test_histogram_bins_degenerate_range() {
        let values = vec![42.0; 7];
        let bins = histogram_bins(&values, 10);

        assert_eq!(bins.len(), 10);
        let total: usize = bins.iter().map(|(_, _, count)| count).sum();
        assert_eq!(total, 7);

        // Range widened by 0.5 on each side around the single value
        assert!((bins[0].0 - 41.5).abs() < 1e-9);
        assert!((bins[9].1 - 42.5).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_bins_empty() {
        assert!(histogram_bins(&[], 60).is_empty());
        assert!(histogram_bins(&[1.0], 0).is_empty());
    }

    #[test]
    fn test_create_rt_histogram_validation() {
        let temp_dir = std::env::temp_dir();
        let output_path = temp_dir.join("test_rt_histogram.png");

        let result = create_rt_histogram(&[], &[], &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_create_speed_accuracy_scatter_validation() {
        let temp_dir = std::env::temp_dir();
        let output_path = temp_dir.join("test_scatter.png");

        // Empty data
        let result = create_speed_accuracy_scatter(&[], true, &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Accuracy out of range (negative)
        let series = vec![ScatterSeries {
            label: "easy".to_string(),
            points: vec![(500.0, -0.1)],
        }];
        let result = create_speed_accuracy_scatter(&series, true, &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        // Accuracy out of range (>1)
        let series = vec![ScatterSeries {
            label: "easy".to_string(),
            points: vec![(500.0, 1.5)],
        }];
        let result = create_speed_accuracy_scatter(&series, true, &output_path);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    #[test]
    fn test_scatter_series_by_condition() {
        let summaries = vec![
            SubjectConditionSummary {
                subject: 0,
                condition: Condition::Easy,
                mean_rt: 510.0,
                accuracy: 0.93,
            },
            SubjectConditionSummary {
                subject: 1,
                condition: Condition::Easy,
                mean_rt: 530.0,
                accuracy: 0.91,
            },
            SubjectConditionSummary {
                subject: 0,
                condition: Condition::Hard,
                mean_rt: 660.0,
                accuracy: 0.84,
            },
        ];

        let series = scatter_series_by_condition(&summaries);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "easy");
        assert_eq!(series[0].points, vec![(510.0, 0.93), (530.0, 0.91)]);
        assert_eq!(series[1].label, "hard");
        assert_eq!(series[1].points, vec![(660.0, 0.84)]);
    }

    #[test]
    fn test_scatter_series_skips_absent_conditions() {
        let summaries = vec![SubjectConditionSummary {
            subject: 0,
            condition: Condition::Hard,
            mean_rt: 640.0,
            accuracy: 0.86,
        }];

        let series = scatter_series_by_condition(&summaries);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "hard");
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_rt_histogram_success() {
        let temp_dir = std::env::temp_dir();
        let output_path = temp_dir.join("test_rt_histogram_success.png");
        let _ = fs::remove_file(&output_path);

        let raw: Vec<f64> = (0..500).map(|i| 300.0 + i as f64 * 10.0).collect();
        let cleaned: Vec<f64> = raw.iter().copied().filter(|&rt| rt <= 3000.0).collect();

        let result = create_rt_histogram(&raw, &cleaned, &output_path);
        assert!(result.is_ok());
        assert!(output_path.exists());

        let _ = fs::remove_file(&output_path);
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_create_speed_accuracy_plots_success() {
        let temp_dir = std::env::temp_dir().join("speed_accuracy_plot_tests");
        fs::create_dir_all(&temp_dir).unwrap();

        let summaries: Vec<SubjectConditionSummary> = (0..20)
            .flat_map(|subject| {
                [
                    SubjectConditionSummary {
                        subject,
                        condition: Condition::Easy,
                        mean_rt: 500.0 + subject as f64,
                        accuracy: 0.9,
                    },
                    SubjectConditionSummary {
                        subject,
                        condition: Condition::Hard,
                        mean_rt: 640.0 + subject as f64,
                        accuracy: 0.85,
                    },
                ]
            })
            .collect();

        let result = create_speed_accuracy_plots(&summaries, &temp_dir);
        assert!(result.is_ok());
        assert!(temp_dir.join("rt_by_condition.png").exists());
        assert!(temp_dir.join("speed_accuracy.png").exists());

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
