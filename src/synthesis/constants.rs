//! Experiment parameters for the synthetic dataset
//!
//! All pipeline parameters are inline constants; there is no configuration
//! system. Changing the experiment means editing this file.

/// Seed for the deterministic random source
pub const RNG_SEED: u64 = 0;

/// Number of simulated subjects
pub const N_SUBJECTS: u32 = 20;

/// Number of trials generated per subject
pub const TRIALS_PER_SUBJECT: u32 = 200;

/// Mean baseline reaction time for the easy condition, in milliseconds
pub const EASY_MEAN_RT_MS: f64 = 520.0;

/// Mean baseline reaction time for the hard condition, in milliseconds
pub const HARD_MEAN_RT_MS: f64 = 650.0;

/// Standard deviation of the baseline reaction time, in milliseconds
pub const RT_SD_MS: f64 = 120.0;

/// Probability that a trial is overridden with a too-fast outlier
pub const LOW_OUTLIER_PROBABILITY: f64 = 0.01;

/// Too-fast outlier range, in milliseconds
pub const LOW_OUTLIER_RANGE_MS: (f64, f64) = (50.0, 120.0);

/// Probability that a trial is overridden with a too-slow outlier
pub const HIGH_OUTLIER_PROBABILITY: f64 = 0.01;

/// Too-slow outlier range, in milliseconds
pub const HIGH_OUTLIER_RANGE_MS: (f64, f64) = (3200.0, 6000.0);

/// Probability of a correct response in the easy condition
pub const EASY_P_CORRECT: f64 = 0.92;

/// Probability of a correct response in the hard condition
pub const HARD_P_CORRECT: f64 = 0.85;
