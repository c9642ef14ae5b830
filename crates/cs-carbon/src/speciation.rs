//! Species concentrations from H+ and DIC, and alkalinity from CO2 and H+.
//!
//! Zeebe & Wolf-Gladrow eqs. 1.1.9-1.1.11 and 1.5.80. Pure algebra, so the
//! functions are generic over [`Scalar`] and carry uncertainty through.

use crate::elementwise::{map2, map3, prepare};
use crate::error::CarbResult;
use cs_core::{Ks, KsPoint, Scalar};

/// CO2 = DIC / (1 + K1/H + K1K2/H²)
pub fn co2_from_dic<T: Scalar>(h: T, dic: T, k: KsPoint) -> T {
    let (one, k1, k2) = (T::from_real(1.0), T::from_real(k.k1), T::from_real(k.k2));
    dic / (one + k1 / h + k1 * k2 / h.powi(2))
}

/// HCO3 = DIC / (1 + H/K1 + K2/H)
pub fn hco3_from_dic<T: Scalar>(h: T, dic: T, k: KsPoint) -> T {
    let (one, k1, k2) = (T::from_real(1.0), T::from_real(k.k1), T::from_real(k.k2));
    dic / (one + h / k1 + k2 / h)
}

/// CO3 = DIC / (1 + H/K2 + H²/(K1K2))
pub fn co3_from_dic<T: Scalar>(h: T, dic: T, k: KsPoint) -> T {
    let (one, k1, k2) = (T::from_real(1.0), T::from_real(k.k1), T::from_real(k.k2));
    dic / (one + h / k2 + h.powi(2) / (k1 * k2))
}

/// TA = CO2·(K1/H + 2K1K2/H²) + BT·KB/(KB+H) + KW/H − H
pub fn ta_from_co2<T: Scalar>(co2: T, h: T, bt: T, k: KsPoint) -> T {
    let (k1, k2) = (T::from_real(k.k1), T::from_real(k.k2));
    let (kb, kw) = (T::from_real(k.kb), T::from_real(k.kw));
    let two = T::from_real(2.0);
    co2 * (k1 / h + two * k1 * k2 / h.powi(2)) + bt * kb / (kb + h) + kw / h - h
}

/// CO2 from H and DIC, elementwise.
pub fn c_co2<T: Scalar>(h: &[T], dic: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("H", &h), ("DIC", &dic), ("Ks", ks)], ks)?;
    Ok(map2(len, h, dic, ks, co2_from_dic))
}

/// HCO3 from H and DIC, elementwise.
pub fn c_hco3<T: Scalar>(h: &[T], dic: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("H", &h), ("DIC", &dic), ("Ks", ks)], ks)?;
    Ok(map2(len, h, dic, ks, hco3_from_dic))
}

/// CO3 from H and DIC, elementwise.
pub fn c_co3<T: Scalar>(h: &[T], dic: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("H", &h), ("DIC", &dic), ("Ks", ks)], ks)?;
    Ok(map2(len, h, dic, ks, co3_from_dic))
}

/// TA from CO2, H and BT, elementwise.
pub fn c_ta<T: Scalar>(co2: &[T], h: &[T], bt: &[T], ks: &Ks) -> CarbResult<Vec<T>> {
    let len = prepare(&[("CO2", &co2), ("H", &h), ("BT", &bt), ("Ks", ks)], ks)?;
    Ok(map3(len, co2, h, bt, ks, ta_from_co2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::{Uncertain, rel_diff};

    fn ks() -> Ks {
        Ks::scalar(1.4e-6, 1.07e-9, 2.5e-9, 6.0e-14)
    }

    #[test]
    fn fractions_sum_to_dic() {
        let h = [1e-7, 1e-8, 3e-9];
        let dic = [2.0e-3];
        let ks = ks();
        let co2 = c_co2(&h, &dic, &ks).unwrap();
        let hco3 = c_hco3(&h, &dic, &ks).unwrap();
        let co3 = c_co3(&h, &dic, &ks).unwrap();
        for i in 0..3 {
            let total = co2[i] + hco3[i] + co3[i];
            assert!(rel_diff(total, 2.0e-3) < 1e-14);
        }
    }

    #[test]
    fn equilibrium_ratios_hold() {
        let k = ks().at(0);
        let (h, dic) = (7.9e-9, 2.1e-3);
        let co2 = co2_from_dic(h, dic, k);
        let hco3 = hco3_from_dic(h, dic, k);
        let co3 = co3_from_dic(h, dic, k);
        // K1 = H·HCO3/CO2, K2 = H·CO3/HCO3
        assert!(rel_diff(h * hco3 / co2, k.k1) < 1e-13);
        assert!(rel_diff(h * co3 / hco3, k.k2) < 1e-13);
    }

    #[test]
    fn alkalinity_terms() {
        // With no carbon and no borate only the water terms remain
        let k = ks().at(0);
        let h = 1e-8;
        let ta = ta_from_co2(0.0, h, 0.0, k);
        assert!((ta - (k.kw / h - h)).abs() < 1e-24);

        let ta = ta_from_co2(1e-5, h, 4.16e-4, k);
        let carbonate = 1e-5 * (k.k1 / h + 2.0 * k.k1 * k.k2 / h / h);
        let borate = 4.16e-4 * k.kb / (k.kb + h);
        assert!(rel_diff(ta, carbonate + borate + k.kw / h - h) < 1e-14);
    }

    #[test]
    fn uncertainty_propagates_through_converters() {
        let k = ks().at(0);
        let dic = Uncertain::new(2.0e-3, 2.0e-6);
        let h = Uncertain::exact(7.9e-9);
        let hco3 = hco3_from_dic(h, dic, k);
        // Linear in DIC: same relative uncertainty
        assert!((hco3.rel_std_dev() - 1e-3).abs() < 1e-12);
    }

    #[test]
    fn zero_h_is_not_masked() {
        let k = ks().at(0);
        assert!(ta_from_co2(1e-5, 0.0, 4.16e-4, k).is_infinite());
        assert_eq!(co2_from_dic(0.0, 2e-3, k), 0.0);
    }

    #[test]
    fn shape_mismatch_rejected() {
        let err = c_co2(&[1e-8, 2e-8], &[1e-3, 2e-3, 3e-3], &ks()).unwrap_err();
        assert!(err.to_string().contains("Shape mismatch"));
    }
}
