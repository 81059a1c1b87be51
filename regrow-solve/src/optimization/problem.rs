/// Defines an optimization problem over `N` solver variables.
///
/// The problem owns the mapping between the solver's raw variables and the
/// model's domain types, plus the scalar objective read from a model call.
/// Keeping both on one trait lets a problem apply variable transforms (for
/// example, searching over logarithms to enforce positivity) without the
/// solver knowing.
pub trait OptimizationProblem<const N: usize> {
    type Input;
    type Output;
    type InputError: std::error::Error + Send + Sync + 'static;
    type ObjectiveError: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::InputError>;

    /// Computes the objective value from a model input/output pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective cannot be computed.
    fn objective(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<f64, Self::ObjectiveError>;
}
