//! # Errors of the solve process
//!
//! Every way a solve can end without an optimal solution is a variant of `SolveError`. Problems
//! that are rejected before any pivoting happens (inconsistent dimensions, unknown tokens) report
//! zero iterations; the others carry the number of pivots that were performed.
use serde::Serialize;
use thiserror::Error;

use crate::algorithm::Phase;

/// Why a linear program could not be solved to optimality.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Row or column counts of the problem data disagree.
    #[error("dimension mismatch: {what} has length {found}, expected {expected}")]
    DimensionMismatch {
        /// Which part of the problem has the wrong size.
        what: String,
        /// The size implied by the rest of the problem.
        expected: usize,
        /// The size that was provided.
        found: usize,
    },

    /// A constraint relation token is not one of `<=`, `>=` or `=`.
    #[error("invalid relation \"{token}\", expected one of \"<=\", \">=\" or \"=\"")]
    InvalidRelation {
        /// The token that was provided.
        token: String,
    },

    /// An objective sense token is not one of `max` or `min`.
    #[error("invalid objective \"{token}\", expected \"max\" or \"min\"")]
    InvalidObjective {
        /// The token that was provided.
        token: String,
    },

    /// A required part of the problem is empty.
    #[error("incomplete problem: {what} is empty")]
    IncompleteData {
        /// Which part of the problem is missing.
        what: String,
    },

    /// The artificial variables could not be driven to zero.
    #[error("problem is infeasible: sum of artificial variables is {residual:.6}")]
    Infeasible {
        /// Sum of the artificial variable values at the end of the search for feasibility.
        residual: f64,
        /// Pivots performed.
        iterations: usize,
    },

    /// The objective can be improved without bound.
    #[error("problem is unbounded: column {column} can increase without limit ({phase})")]
    Unbounded {
        /// Phase in which unboundedness was detected.
        phase: Phase,
        /// The entering column without a positive coefficient in any constraint row.
        column: usize,
        /// Pivots performed.
        iterations: usize,
    },

    /// No verdict was reached within the iteration cap.
    #[error("maximum number of iterations ({limit}) reached ({phase})")]
    IterationLimitExceeded {
        /// Phase that hit the cap.
        phase: Phase,
        /// The cap.
        limit: usize,
        /// Pivots performed.
        iterations: usize,
    },

    /// An artificial variable is basic at a nonzero value when the optimization finished.
    #[error("artificial column {column} remains basic with value {value:.6}, solution is invalid")]
    DegenerateExtraction {
        /// Index of the artificial column.
        column: usize,
        /// Its value.
        value: f64,
        /// Pivots performed.
        iterations: usize,
    },

    /// A state the construction of the tableau should make impossible.
    #[error("internal error ({phase}): {message}")]
    Internal {
        /// Phase in which the state was encountered.
        phase: Phase,
        /// Description of the state.
        message: String,
        /// Pivots performed.
        iterations: usize,
    },
}

/// The kind of a `SolveError`, without any of its data.
///
/// Used by callers that translate errors into their own messages or status codes.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DimensionMismatch,
    InvalidRelation,
    InvalidObjective,
    IncompleteData,
    Infeasible,
    Unbounded,
    IterationLimitExceeded,
    DegenerateExtraction,
    Internal,
}

impl SolveError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolveError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            SolveError::InvalidRelation { .. } => ErrorKind::InvalidRelation,
            SolveError::InvalidObjective { .. } => ErrorKind::InvalidObjective,
            SolveError::IncompleteData { .. } => ErrorKind::IncompleteData,
            SolveError::Infeasible { .. } => ErrorKind::Infeasible,
            SolveError::Unbounded { .. } => ErrorKind::Unbounded,
            SolveError::IterationLimitExceeded { .. } => ErrorKind::IterationLimitExceeded,
            SolveError::DegenerateExtraction { .. } => ErrorKind::DegenerateExtraction,
            SolveError::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Number of pivots performed before the error was detected.
    pub fn iterations(&self) -> usize {
        match self {
            SolveError::DimensionMismatch { .. }
            | SolveError::InvalidRelation { .. }
            | SolveError::InvalidObjective { .. }
            | SolveError::IncompleteData { .. } => 0,
            SolveError::Infeasible { iterations, .. }
            | SolveError::Unbounded { iterations, .. }
            | SolveError::IterationLimitExceeded { iterations, .. }
            | SolveError::DegenerateExtraction { iterations, .. }
            | SolveError::Internal { iterations, .. } => *iterations,
        }
    }

    pub(crate) fn dimension_mismatch(what: impl Into<String>, expected: usize, found: usize) -> Self {
        SolveError::DimensionMismatch { what: what.into(), expected, found }
    }
}
