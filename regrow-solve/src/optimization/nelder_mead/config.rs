/// Configuration for the Nelder–Mead solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of simplex iterations.
    pub max_iters: usize,
    /// Offset added to each seed coordinate to build the initial simplex.
    pub initial_step: f64,
    /// Converged when the simplex diameter falls at or below this value.
    pub x_tol: f64,
    /// Converged when the objective spread across the simplex falls at or
    /// below this value. Zero keeps the test active only for an exactly
    /// flat simplex.
    pub f_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 300,
            initial_step: 0.1,
            x_tol: 1e-12,
            f_tol: 0.0,
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial step is zero or non-finite, or if
    /// any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.initial_step.is_finite() || self.initial_step == 0.0 {
            return Err("initial_step must be finite and nonzero");
        }
        if !self.x_tol.is_finite() || self.x_tol < 0.0 {
            return Err("x_tol must be finite and non-negative");
        }
        if !self.f_tol.is_finite() || self.f_tol < 0.0 {
            return Err("f_tol must be finite and non-negative");
        }
        Ok(())
    }
}
