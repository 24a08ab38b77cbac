//! Common infrastructure modules shared across pipeline stages
//!
//! This module provides reusable infrastructure for:
//! - Data model types for trials and summary statistics
//! - ASCII table formatting for console reporting
//! - Plotting the exploratory figures

pub mod plots;
pub mod records;
pub mod tables;

// Re-export commonly used items
pub use plots::PlotError;
pub use records::{Condition, ConditionSummary, SubjectConditionSummary, TrialRecord};
