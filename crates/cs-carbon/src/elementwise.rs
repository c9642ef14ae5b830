//! Broadcasting glue between slice inputs, the `Ks` bundle and per-element formulas.

use crate::error::CarbResult;
use cs_core::{ElementCount, Ks, KsPoint, broadcast_len, pick};

/// Validate the constants and broadcast all named inputs (the bundle included).
pub(crate) fn prepare(items: &[(&'static str, &dyn ElementCount)], ks: &Ks) -> CarbResult<usize> {
    ks.validate()?;
    Ok(broadcast_len(items)?)
}

pub(crate) fn map2<A, B, R, F>(len: usize, a: &[A], b: &[B], ks: &Ks, f: F) -> Vec<R>
where
    A: Copy,
    B: Copy,
    F: Fn(A, B, KsPoint) -> R,
{
    (0..len)
        .map(|i| f(pick(a, i), pick(b, i), ks.at(i)))
        .collect()
}

pub(crate) fn map3<A, B, C, R, F>(len: usize, a: &[A], b: &[B], c: &[C], ks: &Ks, f: F) -> Vec<R>
where
    A: Copy,
    B: Copy,
    C: Copy,
    F: Fn(A, B, C, KsPoint) -> R,
{
    (0..len)
        .map(|i| f(pick(a, i), pick(b, i), pick(c, i), ks.at(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarbError;
    use cs_core::CsError;

    #[test]
    fn prepare_includes_constants_in_broadcast() {
        let ks = Ks::new(vec![1e-6, 2e-6], vec![1e-9], vec![2.5e-9], vec![6e-14]).unwrap();
        let a: &[f64] = &[1.0];
        assert_eq!(prepare(&[("a", &a), ("Ks", &ks)], &ks).unwrap(), 2);

        let b: &[f64] = &[1.0, 2.0, 3.0];
        let err = prepare(&[("b", &b), ("Ks", &ks)], &ks).unwrap_err();
        assert!(matches!(
            err,
            CarbError::Core(CsError::ShapeMismatch {
                what: "Ks",
                len: 2,
                expected: 3
            })
        ));
    }

    #[test]
    fn map_broadcasts_scalars() {
        let ks = Ks::scalar(1e-6, 1e-9, 2.5e-9, 6e-14);
        let out = map2(3, &[1.0, 2.0, 3.0], &[10.0], &ks, |a, b, k| a * b + k.k1);
        assert_eq!(out, vec![10.0 + 1e-6, 20.0 + 1e-6, 30.0 + 1e-6]);

        let out = map3(2, &[1.0], &[2.0, 3.0], &[4.0], &ks, |a, b, c, _| a + b + c);
        assert_eq!(out, vec![7.0, 8.0]);
    }
}
