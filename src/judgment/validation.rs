use std::fmt;

use anyhow::Result;

use super::matrix::JudgmentMatrix;

/// Judgments with a consistency ratio above this are rejected unless the
/// config overrides the threshold.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Why a unit of input was sent back for re-collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A sub-criteria or alternative group was outside the allowed size.
    InvalidGroupSize,
    /// A judgment row did not have one entry per group member.
    MalformedRow,
    /// The matrix consistency ratio exceeded the threshold.
    InconsistentJudgments,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InvalidGroupSize => write!(f, "invalid group size"),
            RejectReason::MalformedRow => write!(f, "invalid count"),
            RejectReason::InconsistentJudgments => write!(f, "inconsistent judgments"),
        }
    }
}

/// A judgment matrix that passed the consistency check.
#[derive(Debug, Clone)]
pub struct AcceptedJudgments {
    /// Priority weight per group member, in entry order. Sums to 1.
    pub priorities: Vec<f64>,
    pub consistency_ratio: f64,
}

/// Outcome of validating one sibling group's matrix. Rejection is a value,
/// not an error: the collection loop reacts to it by re-requesting input.
#[derive(Debug)]
pub enum MatrixOutcome {
    Accepted(AcceptedJudgments),
    Rejected(RejectReason),
}

/// Check a collected matrix against the consistency threshold.
///
/// # Errors
///
/// Only the zero-column contract violation from normalization escapes as an
/// error; an over-threshold ratio is a normal `Rejected` outcome.
pub fn evaluate_matrix(matrix: &JudgmentMatrix, threshold: f64) -> Result<MatrixOutcome> {
    let priorities = matrix.priority_vector()?;
    let consistency_ratio = matrix.consistency_ratio(&priorities);

    if consistency_ratio > threshold {
        return Ok(MatrixOutcome::Rejected(RejectReason::InconsistentJudgments));
    }

    Ok(MatrixOutcome::Accepted(AcceptedJudgments {
        priorities,
        consistency_ratio,
    }))
}
