use std::io::{BufRead, Write};

use tracing::warn;

use quadroots_core::{
    DEFAULT_PRECISION, Equation, Error as SolveError, MAX_COEF_ABS_VALUE, Tolerance,
    parse_coefficient,
};

use crate::Error;

/// Default number of attempts allowed per coefficient.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Reads coefficients interactively, re-prompting on bad input.
///
/// Each coefficient gets at most `max_attempts` tries. A rejected line is
/// answered with an `Error: ...` message on the output before prompting again.
#[derive(Debug)]
pub struct Prompt<R, W> {
    input: R,
    output: W,
    max_attempts: usize,
    max_abs_coef: f64,
    tolerance: Tolerance,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Creates a prompt with default limits.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_abs_coef: MAX_COEF_ABS_VALUE,
            tolerance: Tolerance::default(),
        }
    }

    /// Sets the number of attempts per coefficient, at least one.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the largest accepted coefficient magnitude.
    #[must_use]
    pub fn with_max_abs_coef(mut self, max_abs_coef: f64) -> Self {
        self.max_abs_coef = max_abs_coef;
        self
    }

    /// Writes `message` and reads one coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EndOfInput`] if input runs out,
    /// [`Error::RetriesExhausted`] once every attempt was rejected,
    /// or [`Error::Io`] if reading or writing fails.
    pub fn read_coefficient(&mut self, message: &str) -> Result<f64, Error> {
        let mut line = String::new();

        for attempt in 1..=self.max_attempts {
            write!(self.output, "{message}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::EndOfInput);
            }

            let rejection = match parse_coefficient(&line) {
                Ok(value) => match self.check_bound(value) {
                    Ok(()) => return Ok(value),
                    Err(err) => err.to_string(),
                },
                Err(err) => err.to_string(),
            };

            warn!(attempt, reason = %rejection, "coefficient rejected");
            writeln!(self.output, "Error: {rejection}")?;
        }

        Err(Error::RetriesExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Reads coefficients A, B and C.
    ///
    /// The equation uses [`DEFAULT_PRECISION`].
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Prompt::read_coefficient`].
    pub fn read_equation(&mut self) -> Result<Equation, Error> {
        let a = self.read_coefficient("Print coefficient A: ")?;
        let b = self.read_coefficient("Print coefficient B: ")?;
        let c = self.read_coefficient("Print coefficient C: ")?;

        Ok(Equation::new(a, b, c).with_precision(DEFAULT_PRECISION))
    }

    /// Returns the output, for writing between prompts.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Returns the input and output.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn check_bound(&self, value: f64) -> Result<(), SolveError> {
        let bound = self.max_abs_coef;
        if self.tolerance.exceeds(value, bound) {
            return Err(SolveError::CoefficientTooLarge { value, bound });
        }
        Ok(())
    }
}
