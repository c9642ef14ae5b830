//! cs-core: numeric foundation for carbsys.
//!
//! Contains:
//! - numeric (Real + float helpers)
//! - scalar (arithmetic trait shared by plain and uncertain values)
//! - uncertain (nominal value + one-sigma uncertainty)
//! - broadcast (scalar/array broadcasting, nominal-value stripping)
//! - ks (equilibrium-constant bundle)
//! - ph (pH <-> H conversion)
//! - error (shared error types)

pub mod broadcast;
pub mod error;
pub mod ks;
pub mod numeric;
pub mod ph;
pub mod scalar;
pub mod uncertain;

pub use broadcast::{ElementCount, broadcast_len, lens, noms, pick};
pub use error::{CsError, CsResult};
pub use ks::{Ks, KsPoint};
pub use numeric::*;
pub use ph::{ch, cp};
pub use scalar::{Nominal, Scalar};
pub use uncertain::Uncertain;
