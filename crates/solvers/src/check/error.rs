use thiserror::Error;

/// Errors that can occur while checking a solver against cases.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("case {index} was rejected by the solver")]
    Solve {
        index: usize,
        #[source]
        source: quadroots_core::Error,
    },
}
