//! Error types for solver operations.

use cs_core::error::CsError;
use thiserror::Error;

/// Errors that can occur while root-finding.
///
/// Non-convergence is not an error here: it is reported per element in
/// [`crate::BatchSolution`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Core error: {0}")]
    Core(#[from] CsError),
}

pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_pass_through() {
        let core = CsError::NonFinite {
            what: "initial guess",
            value: f64::NAN,
        };
        let err: SolverError = core.clone().into();
        assert!(err.to_string().contains("initial guess"));
        assert!(matches!(
            err,
            SolverError::Core(CsError::NonFinite {
                what: "initial guess",
                ..
            })
        ));
    }
}
