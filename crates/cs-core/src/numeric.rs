use crate::CsError;

/// Floating point type used throughout system
pub type Real = f64;

/// Relative difference `|a - b| / max(|a|, |b|)`, zero when both are zero.
pub fn rel_diff(a: Real, b: Real) -> Real {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CsError::NonFinite { what, value: v })
    }
}

/// Concentrations and dissociation constants must be strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CsError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CsError::Domain { what, value: v })
    }
}
