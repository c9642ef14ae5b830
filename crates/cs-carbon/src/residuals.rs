//! Residual equations in H+ for the pairs without pH (Zeebe & Wolf-Gladrow, App. B).
//!
//! Each function equates two expressions for the same unknown and returns
//! both sides at trial `h`; the root-finder drives `lhs - rhs` to zero.

use cs_core::{KsPoint, Real};
use cs_solver::Balance;

/// Sum of the borate, water and proton terms shared by the HCO3&TA and CO3&TA
/// residuals: `(h²+K1h+K1K2)·(KB·BT·h + KW·KB + KW·h − KB·h² − h³)`.
#[inline]
fn alkalinity_remainder(h: Real, bt: Real, k: KsPoint) -> Real {
    (h.powi(2) + k.k1 * h + k.k1 * k.k2)
        * (k.kb * bt * h + k.kw * k.kb + k.kw * h - k.kb * h.powi(2) - h.powi(3))
}

/// CO2·(h²+K1h+K1K2) = HCO3·(h²+h³/K1+K2h)
///
/// Two negative roots, one positive.
pub fn co2_hco3(h: Real, co2: Real, hco3: Real, k: KsPoint) -> Balance {
    let lhs = co2 * (h.powi(2) + k.k1 * h + k.k1 * k.k2);
    let rhs = hco3 * (h.powi(2) + h.powi(3) / k.k1 + k.k2 * h);
    Balance::new(lhs, rhs)
}

/// CO2·(h²+K1h+K1K2) = CO3·(h²+h³/K2+h⁴/(K1K2))
///
/// One positive root, three negative.
pub fn co2_co3(h: Real, co2: Real, co3: Real, k: KsPoint) -> Balance {
    let lhs = co2 * (h.powi(2) + k.k1 * h + k.k1 * k.k2);
    let rhs = co3 * (h.powi(2) + h.powi(3) / k.k2 + h.powi(4) / (k.k1 * k.k2));
    Balance::new(lhs, rhs)
}

/// TA·h²·(KB+h) = CO2·(KB+h)·(K1h+2K1K2) + h²·KB·BT + (KB+h)·(KW·h−h³)
///
/// One positive, one negative, two complex conjugate roots.
pub fn co2_ta(h: Real, co2: Real, ta: Real, bt: Real, k: KsPoint) -> Balance {
    let lhs = ta * h.powi(2) * (k.kb + h);
    let rhs = co2 * (k.kb + h) * (k.k1 * h + 2.0 * k.k1 * k.k2)
        + h.powi(2) * k.kb * bt
        + (k.kb + h) * (k.kw * h - h.powi(3));
    Balance::new(lhs, rhs)
}

/// DIC·h² = CO2·(h²+K1h+K1K2)
///
/// One positive root, one negative.
pub fn co2_dic(h: Real, co2: Real, dic: Real, k: KsPoint) -> Balance {
    let lhs = dic * h.powi(2);
    let rhs = co2 * (h.powi(2) + k.k1 * h + k.k1 * k.k2);
    Balance::new(lhs, rhs)
}

/// HCO3·(h+h²/K1+K2) = CO3·(h+h²/K2+h³/(K1K2))
///
/// One positive root, two negative.
pub fn hco3_co3(h: Real, hco3: Real, co3: Real, k: KsPoint) -> Balance {
    let lhs = hco3 * (h + h.powi(2) / k.k1 + k.k2);
    let rhs = co3 * (h + h.powi(2) / k.k2 + h.powi(3) / (k.k1 * k.k2));
    Balance::new(lhs, rhs)
}

/// TA·(KB+h)·(h³+K1h²+K1K2h) =
///   HCO3·(h+h²/K1+K2)·[(KB+2K2)K1h + 2KB·K1K2 + K1h²] + remainder
///
/// One positive root, four negative.
pub fn hco3_ta(h: Real, hco3: Real, ta: Real, bt: Real, k: KsPoint) -> Balance {
    let lhs = ta * (k.kb + h) * (h.powi(3) + k.k1 * h.powi(2) + k.k1 * k.k2 * h);
    let rhs = hco3
        * (h + h.powi(2) / k.k1 + k.k2)
        * ((k.kb + 2.0 * k.k2) * k.k1 * h + 2.0 * k.kb * k.k1 * k.k2 + k.k1 * h.powi(2))
        + alkalinity_remainder(h, bt, k);
    Balance::new(lhs, rhs)
}

/// HCO3·(h+h²/K1+K2) = h·DIC
///
/// Two positive roots; the smaller one is physical.
pub fn hco3_dic(h: Real, hco3: Real, dic: Real, k: KsPoint) -> Balance {
    let lhs = hco3 * (h + h.powi(2) / k.k1 + k.k2);
    let rhs = h * dic;
    Balance::new(lhs, rhs)
}

/// TA·(KB+h)·(h³+K1h²+K1K2h) =
///   CO3·(h+h²/K2+h³/(K1K2))·[K1h² + K1h(KB+2K2) + 2KB·K1K2] + remainder
///
/// Three negative roots and two positive ones. Started from 1.0 the solver
/// returns the larger positive root. That is the physical H+ at seawater pH,
/// but at high pH with low DIC (around pH 9.3 and above, DIC below 1 mmol/kg)
/// the physical H+ is the smaller root and the result converges to the wrong
/// one.
pub fn co3_ta(h: Real, co3: Real, ta: Real, bt: Real, k: KsPoint) -> Balance {
    let lhs = ta * (k.kb + h) * (h.powi(3) + k.k1 * h.powi(2) + k.k1 * k.k2 * h);
    let rhs = co3
        * (h + h.powi(2) / k.k2 + h.powi(3) / (k.k1 * k.k2))
        * (k.k1 * h.powi(2) + k.k1 * h * (k.kb + 2.0 * k.k2) + 2.0 * k.kb * k.k1 * k.k2)
        + alkalinity_remainder(h, bt, k);
    Balance::new(lhs, rhs)
}

/// CO3·(1+h/K2+h²/(K1K2)) = DIC
///
/// One positive root, one negative (the product of the roots is
/// `(1 - DIC/CO3)·K1K2 < 0`). Started from 1.0 the iteration reaches the
/// positive root.
pub fn co3_dic(h: Real, co3: Real, dic: Real, k: KsPoint) -> Balance {
    let lhs = co3 * (1.0 + h / k.k2 + h.powi(2) / (k.k1 * k.k2));
    Balance::new(lhs, dic)
}

/// DIC·(KB+h)·(K1h²+2K1K2h) =
///   (TA·(KB+h)·h − KB·BT·h − KW·(KB+h) + (KB+h)·h²)·(h²+K1h+K1K2)
///
/// One positive root, four negative.
pub fn ta_dic(h: Real, ta: Real, dic: Real, bt: Real, k: KsPoint) -> Balance {
    let lhs = dic * (k.kb + h) * (k.k1 * h.powi(2) + 2.0 * k.k1 * k.k2 * h);
    let rhs = (ta * (k.kb + h) * h - k.kb * bt * h - k.kw * (k.kb + h) + (k.kb + h) * h.powi(2))
        * (h.powi(2) + k.k1 * h + k.k1 * k.k2);
    Balance::new(lhs, rhs)
}
