//! Newton solver for a single scalar unknown.

use crate::derivative::central_difference;
use crate::problem::Balance;
use cs_core::numeric::Real;

/// Root-finding configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RootConfig {
    /// Relative step tolerance: stop once `|dx| <= xtol * |x|`
    pub xtol: Real,
    /// Maximum normalised residual accepted as converged
    pub residual_tol: Real,
    /// Maximum iterations
    pub max_iterations: usize,
    /// Relative finite-difference step for the derivative
    pub fd_step: Real,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            xtol: 1e-12,
            residual_tol: 1e-9,
            max_iterations: 500,
            fd_step: 1e-6,
        }
    }
}

/// Newton iteration result.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonResult {
    /// Final iterate
    pub x: Real,
    /// Normalised residual at `x`
    pub residual: Real,
    /// Number of iterations
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Newton solve of `lhs(x) = rhs(x)` from `x0`.
///
/// Iterates until the step is below `xtol` relative to `x`, the derivative
/// degenerates, or the iteration budget is spent. The result is flagged as
/// converged only if the final point is finite and its normalised residual is
/// within `residual_tol`, so a stalled iteration is never reported as a root.
pub fn newton_solve<F>(x0: Real, f: F, config: &RootConfig) -> NewtonResult
where
    F: Fn(Real) -> Balance,
{
    let mut x = x0;
    let mut iterations = 0;

    while iterations < config.max_iterations {
        iterations += 1;

        let balance = f(x);
        if !balance.is_finite() {
            break;
        }
        let r = balance.residual();
        if r == 0.0 {
            break;
        }

        let d = central_difference(x, &f, config.fd_step);
        if d == 0.0 || !d.is_finite() {
            break;
        }

        let dx = -r / d;
        x += dx;
        if !x.is_finite() {
            break;
        }

        if dx.abs() <= config.xtol * x.abs().max(Real::MIN_POSITIVE) {
            break;
        }
    }

    let residual = f(x).normalized();
    NewtonResult {
        x,
        residual,
        iterations,
        converged: x.is_finite() && residual.is_finite() && residual <= config.residual_tol,
    }
}
