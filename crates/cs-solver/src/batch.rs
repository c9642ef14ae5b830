//! Elementwise root-finding over independent systems.

use crate::error::SolverResult;
use crate::newton::{NewtonResult, RootConfig, newton_solve};
use crate::problem::Balance;
use cs_core::numeric::{Real, ensure_finite};
use rayon::prelude::*;

/// Per-element outcome of a batched solve.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSolution {
    /// Roots (or last iterate where not converged)
    pub x: Vec<Real>,
    /// Convergence flag per element
    pub converged: Vec<bool>,
    /// Iterations per element
    pub iterations: Vec<usize>,
    /// Normalised residual per element
    pub residuals: Vec<Real>,
}

impl BatchSolution {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn all_converged(&self) -> bool {
        self.converged.iter().all(|&c| c)
    }

    /// Indices of elements that did not converge.
    pub fn failed(&self) -> Vec<usize> {
        self.converged
            .iter()
            .enumerate()
            .filter(|(_, c)| !**c)
            .map(|(i, _)| i)
            .collect()
    }
}

impl FromIterator<NewtonResult> for BatchSolution {
    fn from_iter<I: IntoIterator<Item = NewtonResult>>(iter: I) -> Self {
        let mut out = BatchSolution {
            x: Vec::new(),
            converged: Vec::new(),
            iterations: Vec::new(),
            residuals: Vec::new(),
        };
        for r in iter {
            out.x.push(r.x);
            out.converged.push(r.converged);
            out.iterations.push(r.iterations);
            out.residuals.push(r.residual);
        }
        out
    }
}

/// Solve `residual(i, x) = 0` for every element `i` of `x0` independently.
///
/// Elements are evaluated in parallel; each element's result depends only on
/// its own initial guess and residual, so the outcome equals a sequential
/// loop over the elements.
pub fn solve_elementwise<F>(
    x0: &[Real],
    residual: F,
    config: &RootConfig,
) -> SolverResult<BatchSolution>
where
    F: Fn(usize, Real) -> Balance + Sync,
{
    for &x in x0 {
        ensure_finite(x, "initial guess")?;
    }

    let results: Vec<NewtonResult> = x0
        .par_iter()
        .enumerate()
        .map(|(i, &x)| newton_solve(x, |h| residual(i, h), config))
        .collect();

    let solution: BatchSolution = results.into_iter().collect();
    tracing::debug!(
        elements = solution.len(),
        failed = solution.failed().len(),
        max_iterations = solution.iterations.iter().copied().max().unwrap_or(0),
        "elementwise solve finished"
    );
    Ok(solution)
}
