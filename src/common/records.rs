use serde::{Deserialize, Serialize};
use std::fmt;

/// Experimental difficulty level for a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Easy,
    Hard,
}

impl Condition {
    /// All condition values, in the order they are reported
    pub const ALL: [Condition; 2] = [Condition::Easy, Condition::Hard];
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Easy => write!(f, "easy"),
            Condition::Hard => write!(f, "hard"),
        }
    }
}

/// One simulated measurement event for one subject under one condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Subject identifier
    pub subject: u32,
    /// Trial index within the subject
    pub trial: u32,
    /// Difficulty condition the trial was run under
    pub condition: Condition,
    /// Measured reaction time in milliseconds
    pub rt_ms: f64,
    /// Response correctness flag (1 = correct, 0 = incorrect)
    pub correct: u8,
}

/// Descriptive statistics for all cleaned trials under one condition
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionSummary {
    /// Condition the statistics describe
    pub condition: Condition,
    /// Mean reaction time in milliseconds
    pub mean_rt: f64,
    /// Median reaction time in milliseconds
    pub median_rt: f64,
    /// Fraction of correct responses (0.0 to 1.0)
    pub accuracy: f64,
    /// Number of trials contributing to the statistics
    pub n: usize,
}

/// Per-subject statistics for one condition, used for the speed-accuracy scatter
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectConditionSummary {
    /// Subject identifier
    pub subject: u32,
    /// Condition the statistics describe
    pub condition: Condition,
    /// Mean reaction time in milliseconds
    pub mean_rt: f64,
    /// Fraction of correct responses (0.0 to 1.0)
    pub accuracy: f64,
}
