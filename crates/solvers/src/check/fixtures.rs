//! Plain-text fixture files for check runs.
//!
//! A fixture file is a sequence of records, one number per line:
//!
//! ```text
//! 1
//! 1
//! -12
//! -4
//! 3
//! #
//! ```
//!
//! Each record starts with the coefficients `a`, `b` and `c`, followed by
//! zero, one or two expected roots (no roots, one root, two ascending roots),
//! or by a single `inf` line when every `x` is a root. A line starting with
//! `#` ends the record. Blank lines are ignored.

use std::{fmt::Write as _, fs, io, path::Path};

use thiserror::Error;

use quadroots_core::{Answer, Equation, RootState};

use super::Case;

/// Marks the end of a record.
pub const RECORD_SEPARATOR: char = '#';

/// Stands in for the roots of an equation with infinitely many solutions.
pub const INFINITE_ROOTS: &str = "inf";

/// Errors that can occur when reading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("line {line}: not a finite number: {text:?}")]
    InvalidNumber { line: usize, text: String },

    #[error("line {line}: record has more than three coefficients and two roots")]
    TooManyValues { line: usize },

    #[error("line {line}: record needs three coefficients, found {found}")]
    TooFewValues { line: usize, found: usize },

    #[error("line {line}: expected roots are not in ascending order")]
    UnorderedRoots { line: usize },

    #[error("line {line}: record is not terminated by '#'")]
    Unterminated { line: usize },

    #[error("could not read fixture file")]
    Io(#[from] io::Error),
}

/// Values collected for the record being parsed.
#[derive(Default)]
struct Record {
    values: Vec<f64>,
    infinite: bool,
}

impl Record {
    fn push(&mut self, value: f64, line: usize) -> Result<(), FixtureError> {
        if self.values.len() == 5 || (self.infinite && self.values.len() == 3) {
            return Err(FixtureError::TooManyValues { line });
        }
        self.values.push(value);
        Ok(())
    }

    fn mark_infinite(&mut self, line: usize) -> Result<(), FixtureError> {
        let found = self.values.len();
        if found < 3 {
            return Err(FixtureError::TooFewValues { line, found });
        }
        if self.infinite || found > 3 {
            return Err(FixtureError::TooManyValues { line });
        }
        self.infinite = true;
        Ok(())
    }

    fn finish(self, line: usize) -> Result<Case, FixtureError> {
        let Record { values, infinite } = self;
        if values.len() < 3 {
            return Err(FixtureError::TooFewValues {
                line,
                found: values.len(),
            });
        }

        let equation = Equation::new(values[0], values[1], values[2]);
        let expected = match (infinite, &values[3..]) {
            (true, _) => Answer::infinite(),
            (false, []) => Answer::none(),
            (false, [root]) => Answer::one(*root),
            (false, [root_1, root_2]) => {
                if root_1 >= root_2 {
                    return Err(FixtureError::UnorderedRoots { line });
                }
                Answer::two(*root_1, *root_2)
            }
            (false, _) => return Err(FixtureError::TooManyValues { line }),
        };

        Ok(Case::new(equation, expected))
    }
}

/// Parses fixture text into cases.
///
/// # Errors
///
/// Returns a [`FixtureError`] carrying the 1-based line number of the first
/// malformed line.
pub fn parse(text: &str) -> Result<Vec<Case>, FixtureError> {
    let mut cases = Vec::new();
    let mut record = Record::default();
    let mut pending = false;
    let mut last_line = 0;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        last_line = line;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with(RECORD_SEPARATOR) {
            cases.push(std::mem::take(&mut record).finish(line)?);
            pending = false;
            continue;
        }

        pending = true;

        if trimmed == INFINITE_ROOTS {
            record.mark_infinite(line)?;
            continue;
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => record.push(value, line)?,
            _ => {
                return Err(FixtureError::InvalidNumber {
                    line,
                    text: trimmed.to_owned(),
                });
            }
        }
    }

    if pending {
        return Err(FixtureError::Unterminated { line: last_line });
    }

    Ok(cases)
}

/// Reads and parses a fixture file.
///
/// # Errors
///
/// Returns [`FixtureError::Io`] if the file can not be read, or a parse error.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Case>, FixtureError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Renders cases in the fixture format accepted by [`parse`].
#[must_use]
pub fn render(cases: &[Case]) -> String {
    let mut out = String::new();

    for case in cases {
        for coef in case.equation.coefficients() {
            let _ = writeln!(out, "{coef}");
        }
        if case.expected.state() == RootState::InfiniteRoots {
            let _ = writeln!(out, "{INFINITE_ROOTS}");
        }
        for root in case.expected.roots() {
            let _ = writeln!(out, "{root}");
        }
        let _ = writeln!(out, "{RECORD_SEPARATOR}");
    }

    out
}
