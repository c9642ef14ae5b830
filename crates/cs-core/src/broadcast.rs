//! Broadcasting of scalar/array inputs and nominal-value extraction.
//!
//! A one-element input is a scalar and broadcasts against anything; every
//! other input must share the common length L.

use crate::error::{CsError, CsResult};
use crate::numeric::Real;
use crate::scalar::Nominal;
use crate::uncertain::Uncertain;

/// Number of independent elements an input contributes.
pub trait ElementCount {
    fn element_count(&self) -> usize;
}

impl ElementCount for Real {
    fn element_count(&self) -> usize {
        1
    }
}

impl ElementCount for Uncertain {
    fn element_count(&self) -> usize {
        1
    }
}

impl<T> ElementCount for &[T] {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T> ElementCount for Vec<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

/// Length of the longest item (0 when no items are given).
pub fn lens(items: &[&dyn ElementCount]) -> usize {
    items
        .iter()
        .map(|item| item.element_count())
        .max()
        .unwrap_or(0)
}

/// Common broadcast length of named inputs.
///
/// Fails before any computation if an input is empty or its length is
/// neither 1 nor the longest length.
pub fn broadcast_len(items: &[(&'static str, &dyn ElementCount)]) -> CsResult<usize> {
    let expected = items
        .iter()
        .map(|(_, item)| item.element_count())
        .max()
        .unwrap_or(0);

    for &(what, item) in items {
        let len = item.element_count();
        if len == 0 {
            return Err(CsError::InvalidArg { what });
        }
        if len != 1 && len != expected {
            return Err(CsError::ShapeMismatch {
                what,
                len,
                expected,
            });
        }
    }

    if expected == 0 {
        return Err(CsError::InvalidArg {
            what: "no inputs to broadcast",
        });
    }
    Ok(expected)
}

/// Element `i` of a broadcast input.
#[inline]
pub fn pick<T: Copy>(values: &[T], i: usize) -> T {
    if values.len() == 1 {
        values[0]
    } else {
        values[i]
    }
}

/// Nominal values, shape preserved.
pub fn noms<T: Nominal>(values: &[T]) -> Vec<Real> {
    values.iter().map(Nominal::nominal).collect()
}
