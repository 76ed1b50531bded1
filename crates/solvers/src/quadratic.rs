//! Closed-form solver for quadratic equations.
//!
//! # Algorithm
//!
//! The solver classifies the equation by the signs of its coefficients, using
//! the configured [`Tolerance`] instead of exact floating-point comparison:
//!
//! - `a ≈ 0`, `b ≈ 0`: every `x` is a root if `c ≈ 0`, otherwise none
//! - `a ≈ 0`: the linear root `-c / b`
//! - otherwise the sign of the discriminant `D = b² - 4ac` decides between no
//!   root, a double root `-b / 2a`, or two roots `(-b ± √D) / 2a`, evaluated
//!   in a form that keeps the smaller root accurate when `b² ≫ |4ac|`
//!
//! Two roots are always reported in ascending order, including when `a < 0`.
//!
//! # Validation
//!
//! Every query rejects coefficients that are non-finite or whose magnitude
//! exceeds [`Config::max_abs_coef`]. A coefficient exactly at the bound is
//! accepted.

mod config;
mod point;


pub use config::{Config, ConfigError};
pub use point::PointModel;

use tracing::{debug, warn};

use quadroots_core::{Answer, Equation, Error, Sign, Solver, Tolerance};

/// Solves quadratic equations and answers related queries.
///
/// The solver holds only its configuration and can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadraticSolver {
    config: Config,
}

impl QuadraticSolver {
    /// Creates a solver with the given config.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the solver config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn tolerance(&self) -> Tolerance {
        self.config.tolerance()
    }

    /// Finds the real roots of the equation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoefficientTooLarge`] if a coefficient exceeds the
    /// magnitude bound, or [`Error::IllegalArgument`] if one is not finite.
    pub fn solve(&self, equation: &Equation) -> Result<Answer, Error> {
        self.validate(equation)?;

        let answer = if self.tolerance().sign(equation.a).is_zero() {
            self.solve_linear(equation)
        } else {
            self.solve_quadratic(equation)
        };

        debug!(
            a = equation.a,
            b = equation.b,
            c = equation.c,
            state = ?answer.state(),
            "solved equation"
        );
        Ok(answer)
    }

    /// Solves `b * x + c = 0`.
    fn solve_linear(&self, equation: &Equation) -> Answer {
        let tol = self.tolerance();

        if tol.sign(equation.b).is_zero() {
            return if tol.sign(equation.c).is_zero() {
                Answer::infinite()
            } else {
                Answer::none()
            };
        }

        Answer::one(unsigned_zero(-equation.c / equation.b))
    }

    /// Solves an equation with a non-zero leading coefficient.
    ///
    /// Two roots come from `q = -(b + sign(b) * sqrt(D)) / 2` as `q / a` and
    /// `c / q`, which never subtracts nearly equal values.
    fn solve_quadratic(&self, equation: &Equation) -> Answer {
        let Equation { a, b, c, .. } = *equation;
        let disc = discriminant(equation);

        match self.tolerance().sign(disc) {
            Sign::Negative => Answer::none(),
            Sign::Zero => Answer::one(unsigned_zero(-b / (2.0 * a))),
            Sign::Positive => {
                // D > 0 here, so q is non-zero even when b is.
                let q = -0.5 * (b + b.signum() * disc.sqrt());
                Answer::two(unsigned_zero(q / a), unsigned_zero(c / q))
            }
        }
    }

    /// Evaluates `a * x^2 + b * x + c`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoefficientTooLarge`] if `x` or a coefficient exceeds
    /// the magnitude bound, or [`Error::IllegalArgument`] if one is not finite.
    pub fn point_value(&self, equation: &Equation, x: f64) -> Result<f64, Error> {
        self.validate(equation)?;
        self.check_value(x, "evaluation point must be finite")?;

        Ok(equation.a * x * x + equation.b * x + equation.c)
    }

    /// Returns the discriminant `b^2 - 4ac`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficients are rejected by validation.
    pub fn discriminant(&self, equation: &Equation) -> Result<f64, Error> {
        self.validate(equation)?;
        Ok(discriminant(equation))
    }

    /// Returns the x coordinate of the parabola's vertex, `-b / 2a`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LinearEquation`] if `a ≈ 0`, or a validation error.
    pub fn vertex_x(&self, equation: &Equation) -> Result<f64, Error> {
        self.require_quadratic(equation)?;
        Ok(unsigned_zero(-equation.b / (2.0 * equation.a)))
    }

    /// Returns the y coordinate of the parabola's vertex, `-D / 4a`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LinearEquation`] if `a ≈ 0`, or a validation error.
    pub fn vertex_y(&self, equation: &Equation) -> Result<f64, Error> {
        self.require_quadratic(equation)?;
        Ok(unsigned_zero(-discriminant(equation) / (4.0 * equation.a)))
    }

    /// Returns the parabola's vertex as `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LinearEquation`] if `a ≈ 0`, or a validation error.
    pub fn vertex(&self, equation: &Equation) -> Result<(f64, f64), Error> {
        Ok((self.vertex_x(equation)?, self.vertex_y(equation)?))
    }

    /// Returns the equation's left-hand side as a [`Model`] of `x`.
    ///
    /// [`Model`]: quadroots_core::Model
    #[must_use]
    pub fn model<'a>(&'a self, equation: &'a Equation) -> PointModel<'a> {
        PointModel::new(self, equation)
    }

    fn require_quadratic(&self, equation: &Equation) -> Result<(), Error> {
        self.validate(equation)?;

        if self.tolerance().sign(equation.a).is_zero() {
            warn!(a = equation.a, "vertex requested for a linear equation");
            return Err(Error::LinearEquation);
        }
        Ok(())
    }

    fn validate(&self, equation: &Equation) -> Result<(), Error> {
        for coef in equation.coefficients() {
            self.check_value(coef, "coefficients must be finite")?;
        }
        Ok(())
    }

    fn check_value(&self, value: f64, reason: &'static str) -> Result<(), Error> {
        if !value.is_finite() {
            warn!(value, "rejected non-finite value");
            return Err(Error::IllegalArgument { reason });
        }

        let bound = self.config.max_abs_coef();
        if self.tolerance().exceeds(value, bound) {
            warn!(value, bound, "rejected value above magnitude bound");
            return Err(Error::CoefficientTooLarge { value, bound });
        }
        Ok(())
    }
}

impl Solver for QuadraticSolver {
    fn solve(&self, equation: &Equation) -> Result<Answer, Error> {
        QuadraticSolver::solve(self, equation)
    }
}

fn discriminant(equation: &Equation) -> f64 {
    equation.b * equation.b - 4.0 * equation.a * equation.c
}

/// Maps `-0.0` to `0.0` so roots never print as `-0`.
#[allow(clippy::float_cmp)]
fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}
