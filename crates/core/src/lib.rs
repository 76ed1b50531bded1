//! Core types and traits for solving quadratic equations.
//!
//! This crate defines the data model and the seams that solvers, check
//! harnesses and presenters build on:
//!
//! - [`Equation`]: the coefficients of `a * x^2 + b * x + c` plus a display
//!   precision
//! - [`Answer`] and [`RootState`]: the real roots of an equation, tagged
//!   with how many there are
//! - [`Tolerance`] and [`Sign`]: epsilon-tolerant comparison against zero
//! - [`Solver`]: the capability to turn an equation into an answer
//! - [`Model`]: a callable used to evaluate an equation at a point
//! - [`Observer`]: receives run events and optionally returns control actions
//! - [`parse_coefficient`]: reads a coefficient from a line of user input
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for [`Equation`],
//!   [`Answer`] and [`RootState`].

mod answer;
mod equation;
mod error;
mod model;
mod observer;
mod parse;
mod solver;
mod tolerance;

pub use answer::{Answer, RootState};
pub use equation::{DEFAULT_PRECISION, Equation, MAX_COEF_ABS_VALUE};
pub use error::Error;
pub use model::Model;
pub use observer::Observer;
pub use parse::{MAX_INPUT_LINE_LEN, ParseError, parse_coefficient};
pub use solver::Solver;
pub use tolerance::{EPSILON, Sign, Tolerance, ToleranceError};
