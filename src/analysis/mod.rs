//! Cleaning and aggregation stages of the pipeline

pub mod cleaning;
pub mod summary;

// Re-export analysis functions for convenience
pub use cleaning::clean_trials;
pub use summary::{summarize_by_condition, summarize_by_subject_condition};
