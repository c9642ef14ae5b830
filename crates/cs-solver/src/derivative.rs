//! Finite difference derivative of a scalar residual.

use crate::problem::Balance;
use cs_core::numeric::Real;

/// Perturbation used at point `x`: relative to `|x|`, absolute at zero.
#[inline]
fn step_at(x: Real, rel_step: Real) -> Real {
    if x == 0.0 {
        rel_step
    } else {
        rel_step * x.abs()
    }
}

/// Compute d(lhs - rhs)/dx using central finite differences.
///
/// Exact for quadratics, which several carbonate residuals are.
pub fn central_difference<F>(x: Real, f: F, rel_step: Real) -> Real
where
    F: Fn(Real) -> Balance,
{
    let dx = step_at(x, rel_step);
    (f(x + dx).residual() - f(x - dx).residual()) / (2.0 * dx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_linear() {
        // f(x) = 2*x, f' = 2
        let f = |x: Real| Balance::new(2.0 * x, 0.0);
        assert!((central_difference(3.0, f, 1e-7) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn derivative_quadratic() {
        // f(x) = x^2, f' = 2*x
        let f = |x: Real| Balance::new(x * x, 0.0);
        assert!((central_difference(3.0, f, 1e-6) - 6.0).abs() < 1e-6);
    }

    #[test]
    fn derivative_at_zero_uses_absolute_step() {
        // f(x) = 4 - 3x + x^2 at 0 → -3
        let f = |x: Real| Balance::new(4.0 + x * x, 3.0 * x);
        assert!((central_difference(0.0, f, 1e-6) + 3.0).abs() < 1e-8);
    }

    #[test]
    fn derivative_tiny_scale() {
        // Residual of hydrogen-ion magnitude: f(h) = h^3, f'(1e-8) = 3e-16
        let f = |h: Real| Balance::new(h * h * h, 0.0);
        let d = central_difference(1e-8, f, 1e-6);
        assert!((d / 3e-16 - 1.0).abs() < 1e-9);
    }
}
