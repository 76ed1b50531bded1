use thiserror::Error;

/// Default tolerance band around zero used for sign comparisons.
pub const EPSILON: f64 = 1e-9;

/// Errors that can occur when creating a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
}

/// The sign of a value after absorbing floating-point noise near zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// Value is below `-epsilon`.
    Negative,
    /// Value lies within `[-epsilon, epsilon]`.
    Zero,
    /// Value is above `epsilon`.
    Positive,
}

impl Sign {
    /// Returns `-1`, `0` or `1`.
    #[must_use]
    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    /// Returns true if the value was classified as zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }
}

/// An epsilon-tolerant comparison against zero.
///
/// All coefficient and discriminant checks go through [`Tolerance::sign`]
/// rather than raw floating-point equality, so values that differ from zero
/// only by rounding error are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is negative or non-finite.
    pub fn new(epsilon: f64) -> Result<Self, ToleranceError> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ToleranceError::InvalidEpsilon(epsilon));
        }
        Ok(Self { epsilon })
    }

    /// Returns the epsilon.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Classifies `value` as negative, zero or positive.
    #[must_use]
    pub fn sign(&self, value: f64) -> Sign {
        if value < -self.epsilon {
            Sign::Negative
        } else if value > self.epsilon {
            Sign::Positive
        } else {
            Sign::Zero
        }
    }

    /// Returns true if `|value|` is above `bound` by more than epsilon.
    ///
    /// This is the magnitude check applied to coefficients, so a value equal
    /// to the bound passes.
    #[must_use]
    pub fn exceeds(&self, value: f64, bound: f64) -> bool {
        self.sign(value.abs() - bound) == Sign::Positive
    }

    /// Returns true if `a` and `b` are equal within epsilon.
    #[must_use]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        self.sign(a - b).is_zero()
    }
}
