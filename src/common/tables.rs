//! ASCII table formatting for console reporting
//!
//! This module renders the pipeline's console output using the [`tabled`] crate:
//! - A head preview of the synthesized trial table
//! - The condition-level summary statistics table

use crate::common::records::{ConditionSummary, TrialRecord};
use tabled::{Table, Tabled};

/// Display row for the condition-level summary table
#[derive(Debug, Clone, Tabled)]
pub struct ConditionSummaryRow {
    #[tabled(rename = "Condition")]
    pub condition: String,
    #[tabled(rename = "Mean RT (ms)")]
    pub mean_rt: String,
    #[tabled(rename = "Median RT (ms)")]
    pub median_rt: String,
    #[tabled(rename = "Accuracy")]
    pub accuracy: String,
    #[tabled(rename = "N")]
    pub n: usize,
}

impl From<&ConditionSummary> for ConditionSummaryRow {
    fn from(summary: &ConditionSummary) -> Self {
        Self {
            condition: summary.condition.to_string(),
            mean_rt: format!("{:.1}", summary.mean_rt),
            median_rt: format!("{:.1}", summary.median_rt),
            accuracy: format!("{:.2}%", summary.accuracy * 100.0),
            n: summary.n,
        }
    }
}

/// Display row for the trial table head preview
#[derive(Debug, Clone, Tabled)]
struct TrialPreviewRow {
    #[tabled(rename = "Subject")]
    subject: u32,
    #[tabled(rename = "Trial")]
    trial: u32,
    #[tabled(rename = "Condition")]
    condition: String,
    #[tabled(rename = "RT (ms)")]
    rt_ms: String,
    #[tabled(rename = "Correct")]
    correct: u8,
}

impl From<&TrialRecord> for TrialPreviewRow {
    fn from(record: &TrialRecord) -> Self {
        Self {
            subject: record.subject,
            trial: record.trial,
            condition: record.condition.to_string(),
            rt_ms: format!("{:.1}", record.rt_ms),
            correct: record.correct,
        }
    }
}

/// Formats condition summaries as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `summaries` - A slice of [`ConditionSummary`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_condition_summary_table(
    summaries: &[ConditionSummary],
    title: Option<&str>,
) -> String {
    if summaries.is_empty() {
        return "No cleaned trials available for summary".to_string();
    }

    let rows: Vec<ConditionSummaryRow> = summaries.iter().map(Into::into).collect();
    let table = Table::new(rows).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}

/// Formats the first `limit` trial records as an ASCII preview table
pub fn format_trial_preview(trials: &[TrialRecord], limit: usize) -> String {
    if trials.is_empty() {
        return "No trials synthesized".to_string();
    }

    let rows: Vec<TrialPreviewRow> = trials.iter().take(limit).map(Into::into).collect();
    Table::new(rows).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::records::Condition;

    fn sample_summary() -> ConditionSummary {
        ConditionSummary {
            condition: Condition::Easy,
            mean_rt: 523.456,
            median_rt: 518.2,
            accuracy: 0.9175,
            n: 1987,
        }
    }

    #[test]
    fn test_condition_summary_row_formatting() {
        let row = ConditionSummaryRow::from(&sample_summary());
        assert_eq!(row.condition, "easy");
        assert_eq!(row.mean_rt, "523.5");
        assert_eq!(row.median_rt, "518.2");
        assert_eq!(row.accuracy, "91.75%");
        assert_eq!(row.n, 1987);
    }

    #[test]
    fn test_format_condition_summary_table() {
        let summaries = vec![
            sample_summary(),
            ConditionSummary {
                condition: Condition::Hard,
                mean_rt: 651.0,
                median_rt: 649.5,
                accuracy: 0.85,
                n: 2013,
            },
        ];

        let table = format_condition_summary_table(&summaries, Some("Summary by condition"));
        assert!(table.contains("Summary by condition"));
        assert!(table.contains("Condition"));
        assert!(table.contains("Mean RT (ms)"));
        assert!(table.contains("easy"));
        assert!(table.contains("hard"));
        assert!(table.contains("85.00%"));

        // Test without title
        let table_no_title = format_condition_summary_table(&summaries, None);
        assert!(!table_no_title.contains("Summary by condition"));
        assert!(table_no_title.contains("Median RT (ms)"));
    }

    #[test]
    fn test_format_condition_summary_table_empty() {
        let table = format_condition_summary_table(&[], Some("Summary"));
        assert_eq!(table, "No cleaned trials available for summary");
    }

    #[test]
    fn test_format_trial_preview_limits_rows() {
        let trials: Vec<TrialRecord> = (0..10)
            .map(|t| TrialRecord {
                subject: 0,
                trial: t,
                condition: Condition::Easy,
                rt_ms: 500.0 + t as f64,
                correct: 1,
            })
            .collect();

        let preview = format_trial_preview(&trials, 5);
        assert!(preview.contains("504.0"));
        assert!(!preview.contains("505.0"));

        assert_eq!(format_trial_preview(&[], 5), "No trials synthesized");
    }
}
