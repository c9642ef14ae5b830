//! Completion of the whole carbonate system from any one pair.

use crate::direct::{co2_from_ta, dic_from_co2, dic_from_co3, dic_from_hco3};
use crate::elementwise::prepare;
use crate::error::CarbResult;
use crate::implicit::solve_pair;
use crate::pair::{Pair, Species};
use crate::speciation::{co2_from_dic, co3_from_dic, hco3_from_dic, ta_from_co2};
use cs_core::{ElementCount, Ks, KsPoint, Real, ch, cp, ensure_positive, pick};
use cs_solver::RootConfig;

/// Every quantity of the system, elementwise.
#[derive(Clone, Debug, PartialEq)]
pub struct CarbonateState {
    pub pair: Pair,
    pub h: Vec<Real>,
    pub ph: Vec<Real>,
    pub co2: Vec<Real>,
    pub hco3: Vec<Real>,
    pub co3: Vec<Real>,
    pub dic: Vec<Real>,
    pub ta: Vec<Real>,
}

impl CarbonateState {
    pub fn len(&self) -> usize {
        self.h.len()
    }

    pub fn is_empty(&self) -> bool {
        self.h.is_empty()
    }

    pub fn get(&self, species: Species) -> &[Real] {
        match species {
            Species::Co2 => &self.co2,
            Species::Ph => &self.ph,
            Species::Hco3 => &self.hco3,
            Species::Co3 => &self.co3,
            Species::Ta => &self.ta,
            Species::Dic => &self.dic,
        }
    }
}

struct Known<'a> {
    pair: Pair,
    a: &'a [Real],
    b: &'a [Real],
}

impl<'a> Known<'a> {
    fn get(&self, s: Species) -> Option<&'a [Real]> {
        let (x, y) = self.pair.species();
        if x == s {
            Some(self.a)
        } else if y == s {
            Some(self.b)
        } else {
            None
        }
    }
}

/// Solve the full system from the pair `a`, `b` (in the order of
/// [`Pair::species`], pH as pH).
///
/// H+ comes from the closed form when pH is known and from the implicit
/// solver otherwise; every element must converge. DIC is then taken from the
/// most direct known species and the remaining species follow from H+ and
/// DIC. Given inputs are reported unchanged. `bt` feeds the alkalinity terms
/// and is required for every pair.
pub fn csys(
    pair: Pair,
    a: &[Real],
    b: &[Real],
    bt: &[Real],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<CarbonateState> {
    let (sa, sb) = pair.species();
    let inputs: [(&'static str, &dyn ElementCount); 4] =
        [(sa.name(), &a), (sb.name(), &b), ("BT", &bt), ("Ks", ks)];
    let len = prepare(&inputs, ks)?;
    let known = Known { pair, a, b };

    let h: Vec<Real> = match known.get(Species::Ph) {
        Some(ph) => (0..len).map(|i| ch(pick(ph, i))).collect(),
        None => {
            let solved = solve_pair(pair, a, b, bt, ks, config)?.into_h()?;
            (0..len).map(|i| pick(&solved, i)).collect()
        }
    };
    for &hi in &h {
        ensure_positive(hi, "H")?;
    }

    let column = |s: Species, derive: &dyn Fn(usize) -> Real| -> Vec<Real> {
        match known.get(s) {
            Some(given) => (0..len).map(|i| pick(given, i)).collect(),
            None => (0..len).map(derive).collect(),
        }
    };

    let dic = column(Species::Dic, &|i: usize| {
        let (hi, k) = (h[i], ks.at(i));
        if let Some(co2) = known.get(Species::Co2) {
            dic_from_co2(hi, pick(co2, i), k)
        } else if let Some(hco3) = known.get(Species::Hco3) {
            dic_from_hco3(hi, pick(hco3, i), k)
        } else if let Some(co3) = known.get(Species::Co3) {
            dic_from_co3(hi, pick(co3, i), k)
        } else {
            // pH & TA is the only pair left
            let ta = known.get(Species::Ta).map_or(Real::NAN, |ta| pick(ta, i));
            dic_from_co2(hi, co2_from_ta(hi, ta, pick(bt, i), k), k)
        }
    });

    let from_dic = |f: fn(Real, Real, KsPoint) -> Real, i: usize| f(h[i], dic[i], ks.at(i));
    let co2 = column(Species::Co2, &|i: usize| from_dic(co2_from_dic, i));
    let hco3 = column(Species::Hco3, &|i: usize| from_dic(hco3_from_dic, i));
    let co3 = column(Species::Co3, &|i: usize| from_dic(co3_from_dic, i));
    let carbonate_ta = |i: usize| ta_from_co2(co2[i], h[i], pick(bt, i), ks.at(i));
    let ta = column(Species::Ta, &carbonate_ta);
    let ph = column(Species::Ph, &|i: usize| cp(h[i]));

    tracing::debug!(pair = pair.name(), len, "carbonate system completed");

    Ok(CarbonateState {
        pair,
        h,
        ph,
        co2,
        hco3,
        co3,
        dic,
        ta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CarbError;
    use cs_core::{CsError, rel_diff};

    const BT: Real = 4.16e-4;

    fn ks() -> Ks {
        Ks::scalar(1.4e-6, 1.07e-9, 2.5e-9, 6.0e-14)
    }

    #[test]
    fn ph_dic_fills_everything() {
        let s = csys(Pair::PhDic, &[8.1], &[2.0e-3], &[BT], &ks(), None).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.ph, vec![8.1]);
        assert_eq!(s.dic, vec![2.0e-3]);
        let total = s.co2[0] + s.hco3[0] + s.co3[0];
        assert!(rel_diff(total, 2.0e-3) < 1e-13);
        assert!(rel_diff(s.ta[0], 0.002333426572519645) < 1e-9);
    }

    #[test]
    fn given_values_are_kept_verbatim() {
        let from = csys(Pair::PhDic, &[8.1], &[2.0e-3], &[BT], &ks(), None).unwrap();
        let s = csys(Pair::TaDic, &from.ta, &from.dic, &[BT], &ks(), None).unwrap();
        assert_eq!(s.ta, from.ta);
        assert_eq!(s.dic, from.dic);
        assert!((s.ph[0] - 8.1).abs() < 1e-9);
        assert_eq!(s.get(Species::Ta), from.ta.as_slice());
    }

    #[test]
    fn bt_broadcasts_over_scalar_pair() {
        let bt = [BT; 3];
        let s = csys(Pair::Co2Dic, &[9.95e-6], &[2.0e-3], &bt, &ks(), None).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.h[0], s.h[2]);
    }

    #[test]
    fn infeasible_pair_is_an_error() {
        let ks = Ks::scalar(1e-6, 1e-9, 2.5e-9, 6e-14);
        let err = csys(Pair::Hco3Dic, &[0.002], &[0.0021], &[BT], &ks, None).unwrap_err();
        assert!(matches!(
            err,
            CarbError::NotConverged { pair, .. } if pair == Pair::Hco3Dic
        ));
    }

    #[test]
    fn non_finite_h_rejected() {
        let err = csys(Pair::PhDic, &[f64::NAN], &[2.0e-3], &[BT], &ks(), None).unwrap_err();
        assert!(matches!(
            err,
            CarbError::Core(CsError::NonFinite { what, .. }) if what == "H"
        ));
    }
}
