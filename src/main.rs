mod analysis;
mod common;
mod synthesis;

use std::path::Path;
use thiserror::Error;

// Import pipeline stages
use analysis::{clean_trials, summarize_by_condition, summarize_by_subject_condition};
use common::plots::{create_rt_distribution_plot, create_speed_accuracy_plots};
use common::tables::{format_condition_summary_table, format_trial_preview};
use synthesis::constants::{N_SUBJECTS, RNG_SEED, TRIALS_PER_SUBJECT};
use synthesis::{export_trials_csv, synthesize_trials};

/// Number of rows shown in the console head preview of the trial table
const PREVIEW_ROWS: usize = 5;

/// Errors that can occur while running the pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Synthesis error: {0}")]
    Synthesis(#[from] synthesis::SynthesisError),

    #[error("Plot generation error: {0}")]
    Plot(#[from] common::PlotError),
}

type Result<T> = core::result::Result<T, PipelineError>;

fn main() -> Result<()> {
    // Output directories must exist up front; a missing one aborts the run
    let csv_path = Path::new("data/synthetic_rt.csv");
    let figures_dir = Path::new("figures");

    // Synthesize the raw trial table and serialize it
    let trials = synthesize_trials(RNG_SEED, N_SUBJECTS, TRIALS_PER_SUBJECT)?;
    export_trials_csv(&trials, csv_path)?;

    println!("{}", format_trial_preview(&trials, PREVIEW_ROWS));

    // Clean by plausible reaction-time range
    let cleaned = clean_trials(&trials);
    println!("Before: {} After: {}", trials.len(), cleaned.len());

    // Summary stats by condition
    let condition_summary = summarize_by_condition(&cleaned);
    println!(
        "{}",
        format_condition_summary_table(&condition_summary, Some("Summary by condition"))
    );

    // Speed-accuracy tradeoff by subject
    let subject_summary = summarize_by_subject_condition(&cleaned);

    // Exploratory figures
    create_rt_distribution_plot(&trials, &cleaned, figures_dir)?;
    create_speed_accuracy_plots(&subject_summary, figures_dir)?;

    Ok(())
}
