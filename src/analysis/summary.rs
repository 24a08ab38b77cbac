//! Grouped descriptive statistics over the cleaned trial table
//!
//! This module computes the two summary tables the pipeline reports:
//! per-condition statistics (mean/median RT, accuracy, count) and
//! per-subject-per-condition statistics for the speed-accuracy scatter.

use crate::common::records::{Condition, ConditionSummary, SubjectConditionSummary, TrialRecord};
use std::collections::BTreeMap;

/// Computes per-condition descriptive statistics from the cleaned table
///
/// Produces one row per condition actually present, in condition reporting
/// order (easy before hard). Accuracy is the mean of the 0/1 correctness
/// flags.
pub fn summarize_by_condition(trials: &[TrialRecord]) -> Vec<ConditionSummary> {
    let mut groups: BTreeMap<Condition, Vec<&TrialRecord>> = BTreeMap::new();
    for trial in trials {
        groups.entry(trial.condition).or_default().push(trial);
    }

    groups
        .into_iter()
        .map(|(condition, group)| {
            let rts: Vec<f64> = group.iter().map(|t| t.rt_ms).collect();
            ConditionSummary {
                condition,
                mean_rt: mean(&rts),
                median_rt: median(rts),
                accuracy: accuracy(&group),
                n: group.len(),
            }
        })
        .collect()
}

/// Computes per-subject, per-condition statistics from the cleaned table
///
/// Produces one row per (subject, condition) pair actually present, ordered
/// by subject and then condition. A subject that never received a condition
/// contributes no row for it.
pub fn summarize_by_subject_condition(trials: &[TrialRecord]) -> Vec<SubjectConditionSummary> {
    let mut groups: BTreeMap<(u32, Condition), Vec<&TrialRecord>> = BTreeMap::new();
    for trial in trials {
        groups
            .entry((trial.subject, trial.condition))
            .or_default()
            .push(trial);
    }

    groups
        .into_iter()
        .map(|((subject, condition), group)| {
            let rts: Vec<f64> = group.iter().map(|t| t.rt_ms).collect();
            SubjectConditionSummary {
                subject,
                condition,
                mean_rt: mean(&rts),
                accuracy: accuracy(&group),
            }
        })
        .collect()
}

/// Arithmetic mean; 0.0 for an empty slice
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of the values; midpoint of the two middle values for even counts
fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.sort_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Fraction of trials in the group flagged correct
fn accuracy(group: &[&TrialRecord]) -> f64 {
    if group.is_empty() {
        return 0.0;
    }
    group.iter().map(|t| t.correct as u32).sum::<u32>() as f64 / group.len() as f64
}
