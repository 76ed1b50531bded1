use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while reading input or presenting results.
#[derive(Debug, Error)]
pub enum Error {
    #[error("couldn't open file {path:?}")]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    Io(#[from] io::Error),

    #[error("input ended before a coefficient was read")]
    EndOfInput,

    #[error("no valid coefficient after {attempts} attempts")]
    RetriesExhausted { attempts: usize },

    #[error(transparent)]
    Solve(#[from] quadroots_core::Error),
}
