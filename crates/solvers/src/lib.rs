//! Solvers for quadratic equations.
//!
//! # Modules
//!
//! - [`quadratic`]: closed-form solver with vertex, discriminant and point
//!   evaluation queries
//! - [`check`]: runs any [`Solver`] against cases with known answers, plus
//!   the plain-text fixture format for those cases
//!
//! [`Solver`]: quadroots_core::Solver

pub mod check;
pub mod quadratic;

pub use quadratic::QuadraticSolver;
