//! cs-carbon: seawater carbonate-system solver.
//!
//! Given any two of CO2, pH, HCO3, CO3, TA and DIC plus the equilibrium
//! constants, computes the rest. Pairs containing pH are closed-form and
//! generic over [`cs_core::Scalar`], so [`cs_core::Uncertain`] inputs carry
//! their uncertainty through. The other ten pairs solve a residual equation
//! for H+ elementwise with [`cs_solver`].
//!
//! Contains:
//! - pair (species and the fifteen input pairs)
//! - speciation (species and TA from H+ and DIC)
//! - direct (pH-known pairs)
//! - residuals / implicit (H+ equations and their solvers)
//! - system (full-state completion)
//! - error

mod elementwise;

pub mod direct;
pub mod error;
pub mod implicit;
pub mod pair;
pub mod residuals;
pub mod speciation;
pub mod system;

pub use direct::{co2_ph, ph_co3, ph_dic, ph_hco3, ph_ta};
pub use error::{CarbError, CarbResult};
pub use implicit::{
    HSolution, co2_co3, co2_dic, co2_hco3, co2_ta, co3_dic, co3_ta, hco3_co3, hco3_dic, hco3_ta,
    solve_pair, ta_dic,
};
pub use pair::{Pair, Species};
pub use speciation::{c_co2, c_co3, c_hco3, c_ta};
pub use system::{CarbonateState, csys};

pub use cs_core::{Ks, KsPoint, Real, Uncertain, ch, cp, rel_diff};
pub use cs_solver::RootConfig;
