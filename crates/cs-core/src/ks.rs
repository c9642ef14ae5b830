//! Equilibrium-constant bundle.
//!
//! The constants are supplied by the caller (computed elsewhere from
//! temperature, salinity and pressure) and are only ever read here.

use crate::broadcast::{ElementCount, pick};
use crate::error::{CsError, CsResult};
use crate::numeric::{Real, ensure_positive};

/// Dissociation constants of one system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KsPoint {
    /// First dissociation constant of carbonic acid
    pub k1: Real,
    /// Second dissociation constant of carbonic acid
    pub k2: Real,
    /// Dissociation constant of boric acid
    pub kb: Real,
    /// Ion product of water
    pub kw: Real,
}

impl KsPoint {
    pub fn new(k1: Real, k2: Real, kb: Real, kw: Real) -> Self {
        Self { k1, k2, kb, kw }
    }
}

/// Named constants K1, K2, KB, KW; each field holds 1 or L values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ks {
    #[cfg_attr(feature = "serde", serde(alias = "K1"))]
    pub k1: Vec<Real>,
    #[cfg_attr(feature = "serde", serde(alias = "K2"))]
    pub k2: Vec<Real>,
    #[cfg_attr(feature = "serde", serde(alias = "KB"))]
    pub kb: Vec<Real>,
    #[cfg_attr(feature = "serde", serde(alias = "KW"))]
    pub kw: Vec<Real>,
}

impl Ks {
    /// Bundle for a single set of conditions.
    pub fn scalar(k1: Real, k2: Real, kb: Real, kw: Real) -> Self {
        Self {
            k1: vec![k1],
            k2: vec![k2],
            kb: vec![kb],
            kw: vec![kw],
        }
    }

    /// Bundle with per-element constants; checks the fields broadcast together.
    pub fn new(k1: Vec<Real>, k2: Vec<Real>, kb: Vec<Real>, kw: Vec<Real>) -> CsResult<Self> {
        let ks = Self { k1, k2, kb, kw };
        ks.validate()?;
        Ok(ks)
    }

    fn fields(&self) -> [(&'static str, &[Real]); 4] {
        [
            ("K1", self.k1.as_slice()),
            ("K2", self.k2.as_slice()),
            ("KB", self.kb.as_slice()),
            ("KW", self.kw.as_slice()),
        ]
    }

    /// Every field non-empty, of length 1 or the longest field, and every
    /// constant finite and positive.
    pub fn validate(&self) -> CsResult<()> {
        let expected = self.element_count();
        if expected == 0 {
            return Err(CsError::InvalidArg {
                what: "empty equilibrium constant bundle",
            });
        }
        for (what, values) in self.fields() {
            if values.len() != 1 && values.len() != expected {
                return Err(CsError::ShapeMismatch {
                    what,
                    len: values.len(),
                    expected,
                });
            }
            for &v in values {
                ensure_positive(v, what)?;
            }
        }
        Ok(())
    }

    /// Constants for element `i` of a broadcast of this bundle.
    pub fn at(&self, i: usize) -> KsPoint {
        KsPoint {
            k1: pick(&self.k1, i),
            k2: pick(&self.k2, i),
            kb: pick(&self.kb, i),
            kw: pick(&self.kw, i),
        }
    }
}

impl ElementCount for Ks {
    fn element_count(&self) -> usize {
        self.fields()
            .iter()
            .map(|(_, v)| v.len())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_bundle_broadcasts_to_any_index() {
        let ks = Ks::scalar(1.4e-6, 1.07e-9, 2.5e-9, 6.0e-14);
        assert_eq!(ks.element_count(), 1);
        assert_eq!(ks.at(7), KsPoint::new(1.4e-6, 1.07e-9, 2.5e-9, 6.0e-14));
    }

    #[test]
    fn mixed_lengths_broadcast() {
        let k1 = vec![1e-6, 2e-6, 3e-6];
        let ks = Ks::new(k1, vec![1e-9], vec![2.5e-9], vec![6e-14]).unwrap();
        assert_eq!(ks.element_count(), 3);
        assert_eq!(ks.at(2).k1, 3e-6);
        assert_eq!(ks.at(2).k2, 1e-9);
    }

    #[test]
    fn incompatible_lengths_rejected() {
        let err = Ks::new(vec![1e-6, 2e-6], vec![1e-9; 3], vec![2.5e-9], vec![6e-14]).unwrap_err();
        assert!(matches!(
            err,
            CsError::ShapeMismatch {
                what: "K1",
                len: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn non_positive_constant_rejected() {
        let err = Ks::new(vec![1e-6], vec![0.0], vec![2.5e-9], vec![6e-14]).unwrap_err();
        assert!(matches!(err, CsError::Domain { what: "K2", .. }));
    }
}
