//! Delta solver traits and types
//!
//! # Design Philosophy
//!
//! The solver is split the same way as the rest of the crate:
//! - `AttenuationProblem` says WHAT to solve (D, gradient, Δ, target window)
//! - `SolverConfiguration` says HOW to solve (bounds, budget, tolerance)
//! - `DeltaSolver` is the numerical method
//! - `SolveResult` is the answer, with its convergence flag

// ============================================================================
// Defaults
// ============================================================================

/// Shortest pulse the probe accepts \[s\]
pub const DELTA_MIN: f64 = 500e-6;

/// Longest pulse the probe accepts \[s\]
pub const DELTA_MAX: f64 = 2500e-6;

/// Bisection iteration budget
pub const DEFAULT_MAX_ITERATIONS: usize = 60;

/// Absolute tolerance on the attenuation ratio
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Weakest gradient of the ramp, as a fraction of the spectrometer maximum
pub const GRADIENT_MIN_FRACTION: f64 = 0.02;

/// Strongest gradient of the ramp, as a fraction of the spectrometer maximum
pub const GRADIENT_MAX_FRACTION: f64 = 0.98;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for the delta solver
///
/// The gradient fractions keep the ramp away from the coil limits: the
/// experiment runs from 2 % to 98 % of the catalog maximum.
///
/// # Example
///
/// ```rust
/// use dosy_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::default()
///     .with_max_iterations(100)
///     .with_tolerance(1e-9);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfiguration {
    /// Physical search interval for δ \[s\]
    pub delta_bounds: (f64, f64),

    /// Maximum number of bisection steps
    pub max_iterations: usize,

    /// Early-exit tolerance on |R − target|
    pub tolerance: f64,

    /// g_min / g_spec
    pub gradient_min_fraction: f64,

    /// g_max / g_spec
    pub gradient_max_fraction: f64,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        Self {
            delta_bounds: (DELTA_MIN, DELTA_MAX),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            gradient_min_fraction: GRADIENT_MIN_FRACTION,
            gradient_max_fraction: GRADIENT_MAX_FRACTION,
        }
    }
}

impl SolverConfiguration {
    /// Builder pattern: set the δ search interval
    pub fn with_delta_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.delta_bounds = (lower, upper);
        self
    }

    /// Builder pattern: set the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder pattern: set the ratio tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder pattern: set the gradient ramp fractions
    pub fn with_gradient_fractions(mut self, min_fraction: f64, max_fraction: f64) -> Self {
        self.gradient_min_fraction = min_fraction;
        self.gradient_max_fraction = max_fraction;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let (lower, upper) = self.delta_bounds;
        if !(lower.is_finite() && upper.is_finite()) || lower <= 0.0 || upper <= lower {
            return Err(format!(
                "Delta bounds must satisfy 0 < lower < upper, got [{}, {}]",
                lower, upper
            ));
        }
        if self.max_iterations == 0 {
            return Err("Maximum iterations must be positive".to_string());
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("Tolerance must be positive".to_string());
        }
        if !(0.0..1.0).contains(&self.gradient_min_fraction)
            || self.gradient_max_fraction <= self.gradient_min_fraction
            || self.gradient_max_fraction > 1.0
        {
            return Err(format!(
                "Gradient fractions must satisfy 0 <= min < max <= 1, got {} and {}",
                self.gradient_min_fraction, self.gradient_max_fraction
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Problem definition
// =================================================================================================

/// Inputs of a single δ inversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttenuationProblem {
    /// Diffusion coefficient D \[m²/s\]
    pub diffusion_coefficient: f64,

    /// Spectrometer maximum gradient g_spec \[T/m\]
    pub gradient_max: f64,

    /// Diffusion time Δ \[s\]
    pub diffusion_time: f64,

    /// Lower end of the wanted attenuation window
    pub ratio_min: f64,

    /// Upper end of the wanted attenuation window
    pub ratio_max: f64,
}

impl AttenuationProblem {
    /// Create a problem
    pub fn new(
        diffusion_coefficient: f64,
        gradient_max: f64,
        diffusion_time: f64,
        ratio_min: f64,
        ratio_max: f64,
    ) -> Self {
        Self {
            diffusion_coefficient,
            gradient_max,
            diffusion_time,
            ratio_min,
            ratio_max,
        }
    }

    /// Ratio aimed at: the middle of the window
    pub fn target_ratio(&self) -> f64 {
        (self.ratio_min + self.ratio_max) / 2.0
    }

    /// Validate that parameters are physically meaningful
    pub fn validate(&self) -> Result<(), String> {
        if !self.diffusion_coefficient.is_finite() || self.diffusion_coefficient <= 0.0 {
            return Err(format!(
                "Diffusion coefficient must be positive and finite, got {}",
                self.diffusion_coefficient
            ));
        }
        if !self.gradient_max.is_finite() || self.gradient_max <= 0.0 {
            return Err(format!("Maximum gradient must be positive, got {}", self.gradient_max));
        }
        if !self.diffusion_time.is_finite() || self.diffusion_time <= 0.0 {
            return Err(format!("Diffusion time must be positive, got {}", self.diffusion_time));
        }
        let window_ok = self.ratio_min > 0.0
            && self.ratio_max < 1.0
            && self.ratio_min <= self.ratio_max;
        if !window_ok {
            return Err(format!(
                "Ratio window must satisfy 0 < min <= max < 1, got [{}, {}]",
                self.ratio_min, self.ratio_max
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Solve result
// =================================================================================================

/// Outcome of a δ inversion
///
/// `achieved_ratio` is always evaluated at the returned `delta`, after
/// clamping, so the pair is consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    /// Pulse duration δ \[s\], inside the configured bounds
    pub delta: f64,

    /// Attenuation ratio obtained with `delta`
    pub achieved_ratio: f64,

    /// Ratio the solver aimed at
    pub target_ratio: f64,

    /// True when the tolerance was met before the budget ran out
    pub converged: bool,

    /// Bisection steps performed
    pub iterations: usize,
}

impl SolveResult {
    /// δ in microseconds, the unit entered as p30 on the spectrometer
    pub fn delta_us(&self) -> f64 {
        self.delta * 1e6
    }

    /// Whether the achieved ratio falls inside `[ratio_min, ratio_max]`
    ///
    /// A converged solve counts as inside: it met the target to within the
    /// solver tolerance, even when the window is narrower than that.
    pub fn within_window(&self, ratio_min: f64, ratio_max: f64) -> bool {
        self.converged || (ratio_min..=ratio_max).contains(&self.achieved_ratio)
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Trait for δ solvers
///
/// # Responsibility
/// Finds the pulse duration that gives the target attenuation. Does NOT
/// know about molecules, solvents or spectrometers (that is the Scenario's
/// job).
pub trait DeltaSolver: Send + Sync {
    /// Solve a problem with a given configuration
    ///
    /// Errors only on invalid problem or configuration. An infeasible
    /// target is not an error: the result carries `converged == false`.
    fn solve(
        &self,
        problem: &AttenuationProblem,
        config: &SolverConfiguration,
    ) -> Result<SolveResult, String>;

    /// Name of the method (used in logs)
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = SolverConfiguration::default();
        assert_eq!(config.delta_bounds, (500e-6, 2500e-6));
        assert_eq!(config.max_iterations, 60);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.gradient_min_fraction, 0.02);
        assert_eq!(config.gradient_max_fraction, 0.98);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_bounds() {
        let config = SolverConfiguration::default().with_delta_bounds(2e-3, 1e-3);
        assert!(config.validate().unwrap_err().contains("Delta bounds"));

        let config = SolverConfiguration::default().with_delta_bounds(0.0, 1e-3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_budget_and_tolerance() {
        assert!(SolverConfiguration::default().with_max_iterations(0).validate().is_err());
        assert!(SolverConfiguration::default().with_tolerance(0.0).validate().is_err());
        assert!(SolverConfiguration::default().with_tolerance(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_invalid_gradient_fractions() {
        let config = SolverConfiguration::default().with_gradient_fractions(0.5, 0.5);
        assert!(config.validate().unwrap_err().contains("Gradient fractions"));

        let config = SolverConfiguration::default().with_gradient_fractions(0.0, 1.2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_target_ratio_is_midpoint() {
        let problem = AttenuationProblem::new(5e-9, 0.3, 0.1, 0.02, 0.05);
        assert!((problem.target_ratio() - 0.035).abs() < 1e-15);
    }

    #[test]
    fn test_problem_validation() {
        assert!(AttenuationProblem::new(5e-9, 0.3, 0.1, 0.02, 0.05).validate().is_ok());
        assert!(AttenuationProblem::new(0.0, 0.3, 0.1, 0.02, 0.05).validate().is_err());
        assert!(AttenuationProblem::new(f64::INFINITY, 0.3, 0.1, 0.02, 0.05).validate().is_err());
        assert!(AttenuationProblem::new(5e-9, -0.3, 0.1, 0.02, 0.05).validate().is_err());
        assert!(AttenuationProblem::new(5e-9, 0.3, 0.0, 0.02, 0.05).validate().is_err());

        let reversed = AttenuationProblem::new(5e-9, 0.3, 0.1, 0.05, 0.02);
        assert!(reversed.validate().unwrap_err().contains("Ratio window"));

        let out_of_range = AttenuationProblem::new(5e-9, 0.3, 0.1, 0.0, 1.0);
        assert!(out_of_range.validate().is_err());
    }

    #[test]
    fn test_solve_result_helpers() {
        let result = SolveResult {
            delta: 1.25e-3,
            achieved_ratio: 0.03,
            target_ratio: 0.035,
            converged: true,
            iterations: 12,
        };
        assert!((result.delta_us() - 1250.0).abs() < 1e-9);
        assert!(result.within_window(0.02, 0.05));

        let stuck = SolveResult { converged: false, ..result };
        assert!(stuck.within_window(0.02, 0.05));
        assert!(!stuck.within_window(0.04, 0.05));
    }

    #[test]
    fn test_converged_solve_within_degenerate_window() {
        // Tolerance met, but the ratio is not exactly the single allowed value
        let result = SolveResult {
            delta: 1.03e-3,
            achieved_ratio: 0.035000028,
            target_ratio: 0.035,
            converged: true,
            iterations: 21,
        };
        assert!(result.within_window(0.035, 0.035));
    }
}
