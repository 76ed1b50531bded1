use thiserror::Error;

use quadroots_core::{MAX_COEF_ABS_VALUE, Tolerance};

/// Configuration for the quadratic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: Tolerance,
    max_abs_coef: f64,
}

/// Errors that can occur when validating a quadratic solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_abs_coef must be finite and positive")]
    MaxAbsCoef,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(Tolerance::default(), MAX_COEF_ABS_VALUE).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated magnitude bound.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_abs_coef` is non-finite or not positive.
    pub fn new(tolerance: Tolerance, max_abs_coef: f64) -> Result<Self, ConfigError> {
        if !max_abs_coef.is_finite() || max_abs_coef <= 0.0 {
            return Err(ConfigError::MaxAbsCoef);
        }

        Ok(Self {
            tolerance,
            max_abs_coef,
        })
    }

    /// Returns the tolerance used for every sign comparison.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Returns the largest accepted coefficient magnitude.
    #[must_use]
    pub fn max_abs_coef(&self) -> f64 {
        self.max_abs_coef
    }
}
