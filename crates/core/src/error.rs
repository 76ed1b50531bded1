use thiserror::Error;

/// Errors returned by equation queries and solvers.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// A coefficient or evaluation point exceeds the magnitude bound.
    #[error("absolute value {value} exceeds the bound {bound}")]
    CoefficientTooLarge { value: f64, bound: f64 },

    /// The query only makes sense for a true quadratic (`a != 0`).
    #[error("this operation can not be used with a linear equation")]
    LinearEquation,

    /// An argument is malformed, such as a non-finite coefficient.
    #[error("illegal argument: {reason}")]
    IllegalArgument { reason: &'static str },
}
