//! Bisection solver for the pulse duration δ
//!
//! # Mathematical Background
//!
//! For fixed D, Δ and gradient ramp, the attenuation ratio R(δ) decreases
//! strictly over the search interval (as long as Δ > δ/3). Finding δ such
//! that R(δ) = R_target is therefore a one-dimensional root search on a
//! monotonic function:
//!
//! ```text
//! mid = (lo + hi) / 2
//! R(mid) > target  →  attenuation too weak, δ must grow   →  lo = mid
//! R(mid) ≤ target  →  attenuation too strong, δ must drop →  hi = mid
//! ```
//!
//! # Characteristics
//!
//! - **Order**: linear convergence, the interval halves at each step
//! - **Cost**: 1 evaluation of R per step, at most `max_iterations` steps
//! - **Robustness**: always stays inside the physical interval
//!
//! # Infeasible targets
//!
//! When even δ_min attenuates too much (fast diffusion) or δ_max not enough
//! (slow diffusion), the interval collapses onto one bound without meeting
//! the tolerance. The solver then returns that bound with
//! `converged == false`; there is no other divergence detection.
//!
//! # Example
//!
//! ```rust
//! use dosy_rs::solver::{AttenuationProblem, BisectionSolver, DeltaSolver, SolverConfiguration};
//!
//! let problem = AttenuationProblem::new(5.07e-9, 0.30, 0.1, 0.02, 0.05);
//! let result = BisectionSolver::new()
//!     .solve(&problem, &SolverConfiguration::default())
//!     .unwrap();
//!
//! assert!(result.converged);
//! assert!((result.achieved_ratio - 0.035).abs() < 1e-6);
//! ```

use crate::physics::attenuation_ratio;
use crate::solver::{AttenuationProblem, DeltaSolver, SolveResult, SolverConfiguration};

// =================================================================================================
// Bisection Solver
// =================================================================================================

/// Bounded bisection over δ
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl BisectionSolver {
    /// Create a new bisection solver
    pub fn new() -> Self {
        Self
    }
}

impl DeltaSolver for BisectionSolver {
    fn solve(
        &self,
        problem: &AttenuationProblem,
        config: &SolverConfiguration,
    ) -> Result<SolveResult, String> {
        config.validate()?;
        problem.validate()?;

        // R(δ) is only monotonic while Δ > δ/3 over the whole interval
        let upper = config.delta_bounds.1;
        if problem.diffusion_time <= upper / 3.0 {
            return Err(format!(
                "Diffusion time {} s must exceed a third of the longest pulse ({} s)",
                problem.diffusion_time,
                upper / 3.0
            ));
        }

        Ok(bisect(problem, config))
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Clamp δ into `[lower, upper]`
pub fn clamp_delta(delta: f64, bounds: (f64, f64)) -> f64 {
    delta.max(bounds.0).min(bounds.1)
}

/// Run the bisection without validating its inputs
pub(crate) fn bisect(problem: &AttenuationProblem, config: &SolverConfiguration) -> SolveResult {
    let g_min = config.gradient_min_fraction * problem.gradient_max;
    let g_max = config.gradient_max_fraction * problem.gradient_max;
    let target = problem.target_ratio();

    let ratio_at = |delta: f64| {
        attenuation_ratio(problem.diffusion_coefficient, g_min, g_max, delta, problem.diffusion_time)
    };

    let (mut lo, mut hi) = config.delta_bounds;
    let mut matched = None;
    let mut iterations = 0;

    for step in 1..=config.max_iterations {
        iterations = step;
        let mid = (lo + hi) / 2.0;
        let ratio = ratio_at(mid);

        if (ratio - target).abs() < config.tolerance {
            matched = Some(mid);
            break;
        }

        if ratio > target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let converged = matched.is_some();
    let delta = clamp_delta(matched.unwrap_or((lo + hi) / 2.0), config.delta_bounds);
    let achieved_ratio = ratio_at(delta);

    if converged {
        log::debug!(
            "Bisection converged in {} steps: δ = {:.1} µs, R = {:.6} (target {:.6})",
            iterations,
            delta * 1e6,
            achieved_ratio,
            target
        );
    } else {
        log::warn!(
            "Bisection exhausted {} steps without reaching R = {:.6}; returning δ = {:.1} µs with R = {:.6}",
            iterations,
            target,
            delta * 1e6,
            achieved_ratio
        );
    }

    SolveResult {
        delta,
        achieved_ratio,
        target_ratio: target,
        converged,
        iterations,
    }
}

// =================================================================================================
// Tests
// =================================================================================================
