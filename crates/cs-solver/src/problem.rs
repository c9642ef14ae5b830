//! Residual definition for root-finding.

use cs_core::numeric::{Real, rel_diff};

/// Two sides of an equation `lhs = rhs` evaluated at a trial point.
///
/// Keeping both sides lets the solver judge the residual against the size of
/// the terms being balanced, which matters when every term is ~1e-20.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Balance {
    pub lhs: Real,
    pub rhs: Real,
}

impl Balance {
    pub fn new(lhs: Real, rhs: Real) -> Self {
        Self { lhs, rhs }
    }

    /// `lhs - rhs`
    #[inline]
    pub fn residual(&self) -> Real {
        self.lhs - self.rhs
    }

    /// `|lhs - rhs| / max(|lhs|, |rhs|)`; zero when both sides vanish.
    pub fn normalized(&self) -> Real {
        rel_diff(self.lhs, self.rhs)
    }

    pub fn is_finite(&self) -> bool {
        self.lhs.is_finite() && self.rhs.is_finite()
    }
}
