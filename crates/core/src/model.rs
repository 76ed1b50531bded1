/// Evaluates something at a point.
///
/// Quadratic solvers hand out an equation's left-hand side as a `Model` of
/// `x`, and check harnesses call it to confirm that expected roots evaluate
/// to zero.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model at `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is outside what the model accepts, such as
    /// a point beyond a solver's magnitude bound.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
