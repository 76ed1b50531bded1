use thiserror::Error;

use quadroots_core::{Answer, Equation, Model};

use crate::quadratic::QuadraticSolver;

/// An equation paired with the answer a correct solver must return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    pub equation: Equation,
    pub expected: Answer,
}

/// Reasons a [`Case`] is not self-consistent.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidCase {
    #[error("expected roots {root_1} and {root_2} are not distinct")]
    RootsNotDistinct { root_1: f64, root_2: f64 },

    #[error("expected root {root} gives {value}, not zero")]
    NotARoot { root: f64, value: f64 },

    #[error("expected root {root} can not be evaluated")]
    Evaluation {
        root: f64,
        #[source]
        source: quadroots_core::Error,
    },
}

impl Case {
    /// Creates a case.
    #[must_use]
    pub fn new(equation: Equation, expected: Answer) -> Self {
        Self { equation, expected }
    }

    /// Checks that the expected answer is consistent with the equation.
    ///
    /// Every expected root must evaluate to zero within the solver's tolerance,
    /// and two expected roots must be distinct within that tolerance. Root
    /// counts are not cross-checked; that is what running the solver is for.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self, solver: &QuadraticSolver) -> Result<(), InvalidCase> {
        let tol = solver.config().tolerance();

        if let [root_1, root_2] = *self.expected.roots()
            && tol.approx_eq(root_1, root_2)
        {
            return Err(InvalidCase::RootsNotDistinct { root_1, root_2 });
        }

        let model = solver.model(&self.equation);
        for &root in self.expected.roots() {
            let value = model
                .call(&root)
                .map_err(|source| InvalidCase::Evaluation { root, source })?;
            if !tol.sign(value).is_zero() {
                return Err(InvalidCase::NotARoot { root, value });
            }
        }

        Ok(())
    }
}
