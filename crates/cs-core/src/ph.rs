//! pH scale conversions.

use crate::scalar::Scalar;

/// Hydrogen-ion concentration from pH: `H = 10^-pH`.
#[inline]
pub fn ch<T: Scalar>(ph: T) -> T {
    (-ph).exp10()
}

/// pH from hydrogen-ion concentration: `pH = -log10(H)`.
#[inline]
pub fn cp<T: Scalar>(h: T) -> T {
    -h.log10()
}
