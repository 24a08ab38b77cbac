//! Synthetic trial data generation and CSV export
//!
//! This module produces the raw trial table through parameterized random
//! sampling from a seeded source, and serializes it to CSV. For a fixed seed
//! the generated table is identical across runs; the per-trial draw order is
//! part of that contract and must not be reordered.

pub mod constants;

use crate::common::records::{Condition, TrialRecord};
use constants::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during data synthesis and export
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Invalid distribution parameters: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("Failed to write CSV output: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("Failed to flush CSV output: {0}")]
    FileWrite(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, SynthesisError>;

/// Generates the synthetic trial table from a seeded random source
///
/// Produces exactly `n_subjects * trials_per_subject` records in generation
/// order (outer loop over subjects, inner over trials). Each trial consumes
/// draws from the random source in a fixed order:
///
/// 1. Condition: one uniform draw, easy/hard with equal weight.
/// 2. Baseline RT: one draw from Normal(condition mean, shared sd).
/// 3. Too-fast outlier: one uniform check draw; on a hit (1%), one more draw
///    from the too-fast range replaces the RT.
/// 4. Too-slow outlier: one uniform check draw; on a hit (1%), one more draw
///    from the too-slow range replaces the RT. This check is independent of
///    step 3; when both fire, the too-slow value wins.
/// 5. Correctness: one uniform draw against the condition's accuracy.
///
/// The two outlier checks are intentionally not mutually exclusive; the
/// second overwrite is kept for reproducibility of the reference dataset.
///
/// # Arguments
/// * `seed` - Seed for the random source
/// * `n_subjects` - Number of subjects to simulate
/// * `trials_per_subject` - Number of trials per subject
///
/// # Returns
/// * `Ok(Vec<TrialRecord>)` - The synthesized trial table
/// * `Err(SynthesisError)` - If the distribution parameters are invalid
pub fn synthesize_trials(
    seed: u64,
    n_subjects: u32,
    trials_per_subject: u32,
) -> Result<Vec<TrialRecord>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let easy_rt = Normal::new(EASY_MEAN_RT_MS, RT_SD_MS)?;
    let hard_rt = Normal::new(HARD_MEAN_RT_MS, RT_SD_MS)?;

    let mut trials = Vec::with_capacity((n_subjects * trials_per_subject) as usize);

    for subject in 0..n_subjects {
        for trial in 0..trials_per_subject {
            let condition = if rng.gen::<f64>() < 0.5 {
                Condition::Easy
            } else {
                Condition::Hard
            };

            let mut rt_ms = match condition {
                Condition::Easy => easy_rt.sample(&mut rng),
                Condition::Hard => hard_rt.sample(&mut rng),
            };

            if rng.gen::<f64>() < LOW_OUTLIER_PROBABILITY {
                rt_ms = rng.gen_range(LOW_OUTLIER_RANGE_MS.0..LOW_OUTLIER_RANGE_MS.1);
            }
            if rng.gen::<f64>() < HIGH_OUTLIER_PROBABILITY {
                rt_ms = rng.gen_range(HIGH_OUTLIER_RANGE_MS.0..HIGH_OUTLIER_RANGE_MS.1);
            }

            let p_correct = match condition {
                Condition::Easy => EASY_P_CORRECT,
                Condition::Hard => HARD_P_CORRECT,
            };
            let correct = u8::from(rng.gen::<f64>() < p_correct);

            trials.push(TrialRecord {
                subject,
                trial,
                condition,
                rt_ms,
                correct,
            });
        }
    }

    Ok(trials)
}

/// Serializes the trial table to a CSV file with a header row
///
/// Columns are `subject,trial,condition,rt_ms,correct` with the condition as
/// its lowercase label and correctness as 0/1. The output directory must
/// already exist; a missing directory surfaces as the underlying file-open
/// error and aborts the run.
///
/// # Arguments
/// * `trials` - The trial table to serialize
/// * `output_path` - Path of the CSV file to create
///
/// # Returns
/// * `Ok(())` - If the table was fully written
/// * `Err(SynthesisError)` - If file creation or serialization failed
pub fn export_trials_csv(trials: &[TrialRecord], output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;

    for trial in trials {
        writer.serialize(trial)?;
    }

    writer.flush()?;
    Ok(())
}
