//! Shared fixtures for the carbonate integration tests.
#![allow(dead_code)]

use cs_carbon::{CarbonateState, Ks, Pair, Real, Species, csys, rel_diff};

pub const BT: Real = 4.16e-4;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn seawater_ks() -> Ks {
    Ks::scalar(1.4e-6, 1.07e-9, 2.5e-9, 6.0e-14)
}

/// Reference state from pH and DIC.
pub fn reference(ph: Real, dic: Real) -> CarbonateState {
    csys(Pair::PhDic, &[ph], &[dic], &[BT], &seawater_ks(), None).expect("pH & DIC is closed-form")
}

pub fn inputs_for(pair: Pair, state: &CarbonateState) -> (Vec<Real>, Vec<Real>) {
    let (a, b) = pair.species();
    (state.get(a).to_vec(), state.get(b).to_vec())
}

pub fn assert_same_state(got: &CarbonateState, want: &CarbonateState, tol: Real) {
    for s in Species::ALL {
        for (i, (&g, &w)) in got.get(s).iter().zip(want.get(s)).enumerate() {
            assert!(
                rel_diff(g, w) < tol,
                "{}: {s}[{i}] = {g:e}, expected {w:e}",
                got.pair
            );
        }
    }
    for (&g, &w) in got.h.iter().zip(&want.h) {
        let pair = got.pair;
        assert!(rel_diff(g, w) < tol, "{pair}: H = {g:e}, expected {w:e}");
    }
}
