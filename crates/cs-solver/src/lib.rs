//! Elementwise nonlinear root-finder.
//!
//! This crate provides a Newton solver for scalar equations written as
//! `lhs(x) = rhs(x)`, batched over arrays of independent unknowns. The
//! derivative is taken by finite differences, and every element carries its
//! own convergence verdict based on the normalised residual at the returned
//! point.

pub mod batch;
pub mod derivative;
pub mod error;
pub mod newton;
pub mod problem;

pub use batch::{BatchSolution, solve_elementwise};
pub use error::{SolverError, SolverResult};
pub use newton::{NewtonResult, RootConfig, newton_solve};
pub use problem::Balance;
