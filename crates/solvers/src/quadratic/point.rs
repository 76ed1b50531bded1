use quadroots_core::{Equation, Error, Model};

use super::QuadraticSolver;

/// An equation's left-hand side, evaluated through a solver.
///
/// Calling the model with `x` returns `a * x^2 + b * x + c`, subject to the
/// solver's magnitude checks.
#[derive(Debug, Clone, Copy)]
pub struct PointModel<'a> {
    solver: &'a QuadraticSolver,
    equation: &'a Equation,
}

impl<'a> PointModel<'a> {
    pub(super) fn new(solver: &'a QuadraticSolver, equation: &'a Equation) -> Self {
        Self { solver, equation }
    }

    /// Returns the equation being evaluated.
    #[must_use]
    pub fn equation(&self) -> &Equation {
        self.equation
    }
}

impl Model for PointModel<'_> {
    type Input = f64;
    type Output = f64;
    type Error = Error;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        self.solver.point_value(self.equation, *x)
    }
}
