use crate::{Answer, Equation, Error};

/// Something that finds the real roots of an [`Equation`].
///
/// Check harnesses and presenters depend on this trait rather than on a
/// concrete solver, so alternative implementations can be swapped in.
pub trait Solver {
    /// Solves the equation.
    ///
    /// # Errors
    ///
    /// Returns an error if the equation is rejected before solving.
    fn solve(&self, equation: &Equation) -> Result<Answer, Error>;
}

impl<S: Solver + ?Sized> Solver for &S {
    fn solve(&self, equation: &Equation) -> Result<Answer, Error> {
        (**self).solve(equation)
    }
}
