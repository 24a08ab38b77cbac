//! Range-based trial cleaning
//!
//! Removes trials whose reaction time falls outside a plausible physiological
//! range. Pure filtering, no side effects.

use crate::common::records::TrialRecord;

/// Lower bound of the plausible reaction-time range, in milliseconds (inclusive)
pub const RT_MIN_MS: f64 = 150.0;

/// Upper bound of the plausible reaction-time range, in milliseconds (inclusive)
pub const RT_MAX_MS: f64 = 3000.0;

/// Returns the subset of trials whose reaction time lies in [`RT_MIN_MS`, `RT_MAX_MS`]
///
/// The closed interval keeps trials exactly on either bound. Record order is
/// preserved, so the cleaned table remains in generation order.
pub fn clean_trials(trials: &[TrialRecord]) -> Vec<TrialRecord> {
    trials
        .iter()
        .filter(|t| (RT_MIN_MS..=RT_MAX_MS).contains(&t.rt_ms))
        .cloned()
        .collect()
}
