//! Carbonate-system errors.

use crate::pair::Pair;
use cs_core::CsError;
use cs_solver::SolverError;
use thiserror::Error;

/// Result type for carbonate-system operations.
pub type CarbResult<T> = Result<T, CarbError>;

/// Errors that can occur while solving the carbonate system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarbError {
    /// Shape mismatch, non-finite or non-physical input.
    #[error("Core error: {0}")]
    Core(#[from] CsError),

    /// Root-finder failure before any element was solved.
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),

    /// The H+ residual was not driven below tolerance for some elements.
    #[error("{pair} did not converge at elements {indices:?}")]
    NotConverged { pair: Pair, indices: Vec<usize> },
}
