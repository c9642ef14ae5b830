//! Closed-form solvers for the pairs that include pH.
//!
//! H+ is known, so each unknown follows from a single algebraic expression:
//! no iteration and no root ambiguity. Invalid input (e.g. H ≤ 0) shows up as
//! non-finite or non-physical output rather than being clamped.

use crate::elementwise::{map2, map3, prepare};
use crate::error::CarbResult;
use crate::speciation::co2_from_dic;
use cs_core::{Ks, KsPoint, Scalar, ch};

/// DIC = CO2·(1 + K1/H + K1K2/H²)
pub fn dic_from_co2<T: Scalar>(h: T, co2: T, k: KsPoint) -> T {
    let (one, k1, k2) = (T::from_real(1.0), T::from_real(k.k1), T::from_real(k.k2));
    co2 * (one + k1 / h + k1 * k2 / h.powi(2))
}

/// DIC = HCO3·(1 + H/K1 + K2/H)
pub fn dic_from_hco3<T: Scalar>(h: T, hco3: T, k: KsPoint) -> T {
    let (one, k1, k2) = (T::from_real(1.0), T::from_real(k.k1), T::from_real(k.k2));
    hco3 * (one + h / k1 + k2 / h)
}

/// DIC = CO3·(1 + H/K2 + H²/(K1K2))
pub fn dic_from_co3<T: Scalar>(h: T, co3: T, k: KsPoint) -> T {
    let (one, k1, k2) = (T::from_real(1.0), T::from_real(k.k1), T::from_real(k.k2));
    co3 * (one + h / k2 + h.powi(2) / (k1 * k2))
}

/// CO2 = (TA − KB·BT/(KB+H) − KW/H + H) / (K1/H + 2K1K2/H²)
pub fn co2_from_ta<T: Scalar>(h: T, ta: T, bt: T, k: KsPoint) -> T {
    let (k1, k2) = (T::from_real(k.k1), T::from_real(k.k2));
    let (kb, kw) = (T::from_real(k.kb), T::from_real(k.kw));
    let two = T::from_real(2.0);
    (ta - kb * bt / (kb + h) - kw / h + h) / (k1 / h + two * k1 * k2 / h.powi(2))
}

fn h_from_ph<T: Scalar>(ph: &[T]) -> Vec<T> {
    ph.iter().map(|&p| ch(p)).collect()
}

/// CO2 and pH given: returns DIC.
pub fn co2_ph<T: Scalar>(co2: &[T], ph: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("CO2", &co2), ("pH", &ph), ("Ks", ks)], ks)?;
    Ok(map2(len, &h_from_ph(ph), co2, ks, dic_from_co2))
}

/// pH and HCO3 given: returns DIC.
pub fn ph_hco3<T: Scalar>(ph: &[T], hco3: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("pH", &ph), ("HCO3", &hco3), ("Ks", ks)], ks)?;
    Ok(map2(len, &h_from_ph(ph), hco3, ks, dic_from_hco3))
}

/// pH and CO3 given: returns DIC.
pub fn ph_co3<T: Scalar>(ph: &[T], co3: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("pH", &ph), ("CO3", &co3), ("Ks", ks)], ks)?;
    Ok(map2(len, &h_from_ph(ph), co3, ks, dic_from_co3))
}

/// pH and TA given: returns CO2.
pub fn ph_ta<T: Scalar>(ph: &[T], ta: &[T], bt: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("pH", &ph), ("TA", &ta), ("BT", &bt), ("Ks", ks)], ks)?;
    Ok(map3(len, &h_from_ph(ph), ta, bt, ks, co2_from_ta))
}

/// pH and DIC given: returns CO2.
pub fn ph_dic<T: Scalar>(ph: &[T], dic: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("pH", &ph), ("DIC", &dic), ("Ks", ks)], ks)?;
    Ok(map2(len, &h_from_ph(ph), dic, ks, co2_from_dic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speciation::{co3_from_dic, hco3_from_dic, ta_from_co2};
    use cs_core::{Uncertain, rel_diff};

    const BT: f64 = 4.16e-4;

    fn ks() -> Ks {
        Ks::scalar(1.4e-6, 1.07e-9, 2.5e-9, 6.0e-14)
    }

    #[test]
    fn dic_recovered_from_each_species() {
        let ks = ks();
        let k = ks.at(0);
        let (ph, dic) = (8.1, 2.0e-3);
        let h = ch(ph);

        let co2 = co2_from_dic(h, dic, k);
        let hco3 = hco3_from_dic(h, dic, k);
        let co3 = co3_from_dic(h, dic, k);

        let from_co2 = co2_ph(&[co2], &[ph], &ks).unwrap();
        let from_hco3 = ph_hco3(&[ph], &[hco3], &ks).unwrap();
        let from_co3 = ph_co3(&[ph], &[co3], &ks).unwrap();
        for recovered in [from_co2[0], from_hco3[0], from_co3[0]] {
            assert!(rel_diff(recovered, dic) < 1e-13);
        }
        let co2_back = ph_dic(&[ph], &[dic], &ks).unwrap();
        assert!(rel_diff(co2_back[0], co2) < 1e-13);
    }

    #[test]
    fn ph_ta_inverts_alkalinity() {
        let ks = ks();
        let k = ks.at(0);
        let h = ch(8.05);
        let co2 = 1.2e-5;
        let ta = ta_from_co2(co2, h, BT, k);
        let back = ph_ta(&[8.05], &[ta], &[BT], &ks).unwrap();
        assert!(rel_diff(back[0], co2) < 1e-10);
    }

    #[test]
    fn broadcasts_scalar_ph_over_array() {
        let ks = ks();
        let out = ph_dic(&[8.1], &[1.9e-3, 2.0e-3, 2.1e-3], &ks).unwrap();
        assert_eq!(out.len(), 3);
        assert!(rel_diff(out[1] / out[0], 2.0 / 1.9) < 1e-13);
    }

    #[test]
    fn uncertainty_propagates() {
        let ks = ks();
        let ph = [Uncertain::new(8.1, 0.01)];
        let dic = [Uncertain::new(2.0e-3, 0.0)];
        let co2 = ph_dic(&ph, &dic, &ks).unwrap()[0];
        let plain = ph_dic(&[8.1], &[2.0e-3], &ks).unwrap()[0];
        assert!(rel_diff(co2.nominal, plain) < 1e-13);
        // CO2 scales roughly with H near pH 8: ~ln(10)·0.01 relative
        assert!(co2.rel_std_dev() > 0.015 && co2.rel_std_dev() < 0.03);
    }

    #[test]
    fn zero_h_surfaces_as_non_finite() {
        // pH = +inf gives H = 0
        let dic = co2_ph(&[1e-5], &[f64::INFINITY], &ks()).unwrap();
        assert!(dic[0].is_infinite());
    }

    #[test]
    fn mismatched_lengths_fail_before_computing() {
        let err = ph_hco3(&[8.0, 8.1], &[1e-3, 2e-3, 3e-3], &ks()).unwrap_err();
        assert!(err.to_string().contains("pH has 2 elements"));
    }
}
