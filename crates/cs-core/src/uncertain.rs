//! Nominal value with a one-sigma uncertainty.
//!
//! Propagation is first order and treats every operand as independent:
//! `σ_f² = Σ (∂f/∂x_i · σ_i)²`. Correlations between operands (e.g. `x - x`)
//! are not tracked.

use crate::numeric::Real;
use crate::scalar::{Nominal, Scalar};
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uncertain {
    pub nominal: Real,
    pub std_dev: Real,
}

impl Uncertain {
    pub fn new(nominal: Real, std_dev: Real) -> Self {
        Self {
            nominal,
            std_dev: std_dev.abs(),
        }
    }

    /// Exact value (zero uncertainty).
    pub fn exact(nominal: Real) -> Self {
        Self {
            nominal,
            std_dev: 0.0,
        }
    }

    /// Relative uncertainty `σ / |x|`; infinite for a zero nominal with nonzero σ.
    pub fn rel_std_dev(&self) -> Real {
        if self.std_dev == 0.0 {
            0.0
        } else {
            self.std_dev / self.nominal.abs()
        }
    }

    /// `10^x` with σ = 10^x · ln(10) · σx
    pub fn exp10(self) -> Self {
        let v = Real::powf(10.0, self.nominal);
        Self::new(v, v * core::f64::consts::LN_10 * self.std_dev)
    }

    /// σ = σx / (|x| · ln(10))
    pub fn log10(self) -> Self {
        Self::new(
            self.nominal.log10(),
            self.std_dev / (self.nominal.abs() * core::f64::consts::LN_10),
        )
    }

    pub fn powi(self, n: i32) -> Self {
        let d = n as Real * self.nominal.powi(n - 1);
        Self::new(self.nominal.powi(n), d * self.std_dev)
    }

    pub fn powf(self, p: Real) -> Self {
        let d = p * self.nominal.powf(p - 1.0);
        Self::new(self.nominal.powf(p), d * self.std_dev)
    }
}

impl From<Real> for Uncertain {
    fn from(v: Real) -> Self {
        Self::exact(v)
    }
}

impl fmt::Display for Uncertain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+/-{}", self.nominal, self.std_dev)
    }
}

impl Add for Uncertain {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.nominal + rhs.nominal,
            self.std_dev.hypot(rhs.std_dev),
        )
    }
}

impl Sub for Uncertain {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.nominal - rhs.nominal,
            self.std_dev.hypot(rhs.std_dev),
        )
    }
}

impl Mul for Uncertain {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let da = rhs.nominal * self.std_dev;
        let db = self.nominal * rhs.std_dev;
        Self::new(self.nominal * rhs.nominal, da.hypot(db))
    }
}

impl Div for Uncertain {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        let v = self.nominal / rhs.nominal;
        let da = self.std_dev / rhs.nominal;
        let db = v * rhs.std_dev / rhs.nominal;
        Self::new(v, da.hypot(db))
    }
}

impl Neg for Uncertain {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.nominal, self.std_dev)
    }
}

// Mixed arithmetic with exact constants.
macro_rules! mixed_ops {
    ($($tr:ident $method:ident),*) => {$(
        impl $tr<Real> for Uncertain {
            type Output = Uncertain;
            fn $method(self, rhs: Real) -> Uncertain {
                $tr::$method(self, Uncertain::exact(rhs))
            }
        }

        impl $tr<Uncertain> for Real {
            type Output = Uncertain;
            fn $method(self, rhs: Uncertain) -> Uncertain {
                $tr::$method(Uncertain::exact(self), rhs)
            }
        }
    )*};
}

mixed_ops!(Add add, Sub sub, Mul mul, Div div);

impl Nominal for Uncertain {
    #[inline]
    fn nominal(&self) -> Real {
        self.nominal
    }
}

impl Scalar for Uncertain {
    fn from_real(v: Real) -> Self {
        Self::exact(v)
    }

    fn powi(self, n: i32) -> Self {
        Uncertain::powi(self, n)
    }

    fn exp10(self) -> Self {
        Uncertain::exp10(self)
    }

    fn log10(self) -> Self {
        Uncertain::log10(self)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn json_round_trip() {
        let x = Uncertain::new(2.0e-3, 1.0e-5);
        let json = serde_json::to_string(&x).unwrap();
        assert!(json.contains("std_dev"));
        let back: Uncertain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, x);
    }
}
