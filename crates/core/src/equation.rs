/// Default number of significant digits used when formatting roots.
pub const DEFAULT_PRECISION: usize = 10;

/// Largest coefficient magnitude accepted by the solver.
///
/// Squared terms of values at this bound stay well within `f64` range.
pub const MAX_COEF_ABS_VALUE: f64 = 1e18;

/// A quadratic equation `a * x^2 + b * x + c = 0`.
///
/// The equation is plain data; magnitude and finiteness checks happen when a
/// solver consumes it. `precision` only affects how results are displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equation {
    /// Coefficient of `x^2`.
    pub a: f64,
    /// Coefficient of `x`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
    /// Significant digits used when formatting numbers for this equation.
    #[cfg_attr(feature = "serde", serde(default = "default_precision"))]
    pub precision: usize,
}

#[cfg(feature = "serde")]
fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl Equation {
    /// Creates an equation with the default output precision.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Returns a copy of this equation with a different output precision.
    #[must_use]
    pub fn with_precision(self, precision: usize) -> Self {
        Self { precision, ..self }
    }

    /// Returns the coefficients as `[a, b, c]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<[f64; 3]> for Equation {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}
