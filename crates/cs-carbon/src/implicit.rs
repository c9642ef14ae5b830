//! H+ from two species other than pH, by root-finding on the residuals.
//!
//! Inputs are broadcast to a common length, stripped to nominal values and
//! solved element by element from the pair's initial guess. The root-finder
//! is not uncertainty-aware; any error analysis has to wrap these calls.

use crate::elementwise::prepare;
use crate::error::{CarbError, CarbResult};
use crate::pair::Pair;
use crate::residuals;
use cs_core::{Ks, KsPoint, Nominal, Real, cp, noms, pick};
use cs_solver::{Balance, RootConfig, solve_elementwise};

/// H+ per element, with the root-finder's verdict for each.
#[derive(Clone, Debug, PartialEq)]
pub struct HSolution {
    pub pair: Pair,
    /// Hydrogen-ion concentration (last iterate where not converged)
    pub h: Vec<Real>,
    pub converged: Vec<bool>,
    pub iterations: Vec<usize>,
    /// Normalised residual `|lhs - rhs| / max(|lhs|, |rhs|)` at `h`
    pub residuals: Vec<Real>,
}

impl HSolution {
    pub fn len(&self) -> usize {
        self.h.len()
    }

    pub fn is_empty(&self) -> bool {
        self.h.is_empty()
    }

    pub fn all_converged(&self) -> bool {
        self.converged.iter().all(|&c| c)
    }

    /// Indices of elements whose residual was not driven below tolerance.
    pub fn failed(&self) -> Vec<usize> {
        self.converged
            .iter()
            .enumerate()
            .filter_map(|(i, &c)| (!c).then_some(i))
            .collect()
    }

    pub fn ph(&self) -> Vec<Real> {
        self.h.iter().map(|&h| cp(h)).collect()
    }

    /// H+ values, or [`CarbError::NotConverged`] if any element failed.
    pub fn into_h(self) -> CarbResult<Vec<Real>> {
        let failed = self.failed();
        if failed.is_empty() {
            Ok(self.h)
        } else {
            Err(CarbError::NotConverged {
                pair: self.pair,
                indices: failed,
            })
        }
    }
}

fn solve_h<F>(
    pair: Pair,
    len: usize,
    ks: &Ks,
    config: Option<RootConfig>,
    residual: F,
) -> CarbResult<HSolution>
where
    F: Fn(usize, Real, KsPoint) -> Balance + Sync,
{
    let _span = tracing::debug_span!("solve_h", pair = pair.name(), len).entered();
    let cfg = config.unwrap_or_default();
    let x0 = vec![pair.initial_guess(); len];

    let sol = solve_elementwise(&x0, |i, h| residual(i, h, ks.at(i)), &cfg)?;

    for i in sol.failed() {
        tracing::warn!(
            pair = pair.name(),
            index = i,
            h = sol.x[i],
            residual = sol.residuals[i],
            iterations = sol.iterations[i],
            "H+ residual not driven below tolerance"
        );
    }

    Ok(HSolution {
        pair,
        h: sol.x,
        converged: sol.converged,
        iterations: sol.iterations,
        residuals: sol.residuals,
    })
}

/// CO2 and HCO3 given: returns H.
pub fn co2_hco3<T: Nominal>(
    co2: &[T],
    hco3: &[T],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("CO2", &co2), ("HCO3", &hco3), ("Ks", ks)], ks)?;
    let (co2, hco3) = (noms(co2), noms(hco3));
    solve_h(Pair::Co2Hco3, len, ks, config, |i, h, k| {
        residuals::co2_hco3(h, pick(&co2, i), pick(&hco3, i), k)
    })
}

/// CO2 and CO3 given: returns H.
pub fn co2_co3<T: Nominal>(
    co2: &[T],
    co3: &[T],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("CO2", &co2), ("CO3", &co3), ("Ks", ks)], ks)?;
    let (co2, co3) = (noms(co2), noms(co3));
    solve_h(Pair::Co2Co3, len, ks, config, |i, h, k| {
        residuals::co2_co3(h, pick(&co2, i), pick(&co3, i), k)
    })
}

/// CO2 and TA given: returns H.
pub fn co2_ta<T: Nominal, B: Nominal>(
    co2: &[T],
    ta: &[T],
    bt: &[B],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("CO2", &co2), ("TA", &ta), ("BT", &bt), ("Ks", ks)], ks)?;
    let (co2, ta, bt) = (noms(co2), noms(ta), noms(bt));
    solve_h(Pair::Co2Ta, len, ks, config, |i, h, k| {
        residuals::co2_ta(h, pick(&co2, i), pick(&ta, i), pick(&bt, i), k)
    })
}

/// CO2 and DIC given: returns H.
pub fn co2_dic<T: Nominal>(
    co2: &[T],
    dic: &[T],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("CO2", &co2), ("DIC", &dic), ("Ks", ks)], ks)?;
    let (co2, dic) = (noms(co2), noms(dic));
    solve_h(Pair::Co2Dic, len, ks, config, |i, h, k| {
        residuals::co2_dic(h, pick(&co2, i), pick(&dic, i), k)
    })
}

/// HCO3 and CO3 given: returns H.
pub fn hco3_co3<T: Nominal>(
    hco3: &[T],
    co3: &[T],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("HCO3", &hco3), ("CO3", &co3), ("Ks", ks)], ks)?;
    let (hco3, co3) = (noms(hco3), noms(co3));
    solve_h(Pair::Hco3Co3, len, ks, config, |i, h, k| {
        residuals::hco3_co3(h, pick(&hco3, i), pick(&co3, i), k)
    })
}

/// HCO3 and TA given: returns H.
pub fn hco3_ta<T: Nominal, B: Nominal>(
    hco3: &[T],
    ta: &[T],
    bt: &[B],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("HCO3", &hco3), ("TA", &ta), ("BT", &bt), ("Ks", ks)], ks)?;
    let (hco3, ta, bt) = (noms(hco3), noms(ta), noms(bt));
    solve_h(Pair::Hco3Ta, len, ks, config, |i, h, k| {
        residuals::hco3_ta(h, pick(&hco3, i), pick(&ta, i), pick(&bt, i), k)
    })
}

/// HCO3 and DIC given: returns H (the smaller of the two positive roots).
pub fn hco3_dic<T: Nominal>(
    hco3: &[T],
    dic: &[T],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("HCO3", &hco3), ("DIC", &dic), ("Ks", ks)], ks)?;
    let (hco3, dic) = (noms(hco3), noms(dic));
    solve_h(Pair::Hco3Dic, len, ks, config, |i, h, k| {
        residuals::hco3_dic(h, pick(&hco3, i), pick(&dic, i), k)
    })
}

/// CO3 and TA given: returns H (the larger of the two positive roots).
pub fn co3_ta<T: Nominal, B: Nominal>(
    co3: &[T],
    ta: &[T],
    bt: &[B],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("CO3", &co3), ("TA", &ta), ("BT", &bt), ("Ks", ks)], ks)?;
    let (co3, ta, bt) = (noms(co3), noms(ta), noms(bt));
    solve_h(Pair::Co3Ta, len, ks, config, |i, h, k| {
        residuals::co3_ta(h, pick(&co3, i), pick(&ta, i), pick(&bt, i), k)
    })
}

/// CO3 and DIC given: returns H.
pub fn co3_dic<T: Nominal>(
    co3: &[T],
    dic: &[T],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("CO3", &co3), ("DIC", &dic), ("Ks", ks)], ks)?;
    let (co3, dic) = (noms(co3), noms(dic));
    solve_h(Pair::Co3Dic, len, ks, config, |i, h, k| {
        residuals::co3_dic(h, pick(&co3, i), pick(&dic, i), k)
    })
}

/// TA and DIC given: returns H.
pub fn ta_dic<T: Nominal, B: Nominal>(
    ta: &[T],
    dic: &[T],
    bt: &[B],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    let len = prepare(&[("TA", &ta), ("DIC", &dic), ("BT", &bt), ("Ks", ks)], ks)?;
    let (ta, dic, bt) = (noms(ta), noms(dic), noms(bt));
    solve_h(Pair::TaDic, len, ks, config, |i, h, k| {
        residuals::ta_dic(h, pick(&ta, i), pick(&dic, i), pick(&bt, i), k)
    })
}

/// H+ for any implicit pair, `a` and `b` in the order of [`Pair::species`].
///
/// `bt` is only read by the alkalinity pairs. Pairs containing pH are
/// rejected since they need no root-finding.
pub fn solve_pair<T: Nominal>(
    pair: Pair,
    a: &[T],
    b: &[T],
    bt: &[T],
    ks: &Ks,
    config: Option<RootConfig>,
) -> CarbResult<HSolution> {
    match pair {
        Pair::Co2Hco3 => co2_hco3(a, b, ks, config),
        Pair::Co2Co3 => co2_co3(a, b, ks, config),
        Pair::Co2Ta => co2_ta(a, b, bt, ks, config),
        Pair::Co2Dic => co2_dic(a, b, ks, config),
        Pair::Hco3Co3 => hco3_co3(a, b, ks, config),
        Pair::Hco3Ta => hco3_ta(a, b, bt, ks, config),
        Pair::Hco3Dic => hco3_dic(a, b, ks, config),
        Pair::Co3Ta => co3_ta(a, b, bt, ks, config),
        Pair::Co3Dic => co3_dic(a, b, ks, config),
        Pair::TaDic => ta_dic(a, b, bt, ks, config),
        Pair::Co2Ph | Pair::PhHco3 | Pair::PhCo3 | Pair::PhTa | Pair::PhDic => {
            Err(cs_core::CsError::InvalidArg {
                what: "pH is known for this pair; use the closed-form solver",
            }
            .into())
        }
    }
}
