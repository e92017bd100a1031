//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by placement operations.
///
/// Capacity overload and unassigned tasks are *not* errors: they are
/// penalized through the fitness function instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Two parents of a crossover have different lengths.
    #[error("chromosome lengths differ: {left} vs {right}")]
    ChromosomeLengthMismatch { left: usize, right: usize },

    /// An assignment does not cover exactly one gene per task.
    #[error("assignment has {actual} genes, expected {expected} (one per task)")]
    AssignmentLength { expected: usize, actual: usize },

    /// Tasks or infrastructure failed structural validation.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A run parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlacementError>;
