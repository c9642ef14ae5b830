//! Arithmetic abstraction shared by plain and uncertain values.

use crate::numeric::Real;
use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Anything that can be reduced to a plain nominal value.
pub trait Nominal {
    fn nominal(&self) -> Real;
}

/// Numeric value usable in the closed-form carbonate expressions.
///
/// Implemented for `Real` and [`crate::Uncertain`]; closed forms written
/// against this trait propagate uncertainty for free.
pub trait Scalar:
    Copy
    + Debug
    + Nominal
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Lift an exact constant (no uncertainty).
    fn from_real(v: Real) -> Self;

    fn powi(self, n: i32) -> Self;

    /// `10^self`
    fn exp10(self) -> Self;

    fn log10(self) -> Self;
}

impl Nominal for Real {
    #[inline]
    fn nominal(&self) -> Real {
        *self
    }
}

impl Scalar for Real {
    #[inline]
    fn from_real(v: Real) -> Self {
        v
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        Real::powi(self, n)
    }

    #[inline]
    fn exp10(self) -> Self {
        Real::powf(10.0, self)
    }

    #[inline]
    fn log10(self) -> Self {
        Real::log10(self)
    }
}
