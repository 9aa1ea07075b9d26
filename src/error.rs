//! Error types for the ant colony engine.

use thiserror::Error;

/// Errors raised while configuring or running an [`AcoEngine`](crate::aco::AcoEngine).
///
/// Every variant is fatal: the engine never retries and never degrades to
/// uniform selection when a collaborator breaks its contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A tunable parameter is outside its valid range.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// `grade_item` returned zero, a negative value, or a non-finite value.
    #[error("item {index} has invalid grade {grade} (must be finite and positive)")]
    InvalidItemGrade { index: usize, grade: f64 },

    /// `grade_solution` returned zero, a negative value, or a non-finite value.
    #[error("solution has invalid grade {grade} (must be finite and positive)")]
    InvalidSolutionGrade { grade: f64 },

    /// A candidate index does not address the working set.
    #[error("candidate index {index} out of range for working set of {len} items")]
    CandidateOutOfRange { index: usize, len: usize },

    /// The candidate list offered an item that is already in the solution.
    #[error("item {index} offered twice; constraints must drop chosen items")]
    DuplicateItem { index: usize },

    /// Candidate factors summed to zero or overflowed.
    #[error("candidate factors sum to {total}; cannot form a probability vector")]
    DegenerateProbabilities { total: f64 },
}

impl AcoError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        AcoError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AcoError>;
