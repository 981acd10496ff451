//! Pulse duration solver
//!
//! This module inverts the attenuation model: given a diffusion
//! coefficient, the spectrometer gradient and the diffusion time, it finds
//! the gradient pulse duration δ (p30) that brings the signal down to the
//! wanted attenuation.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to plan
//!    - Molecule (formula or mass, optional DP)
//!    - Solvent and spectrometer (catalog keys)
//!    - Diffusion time, temperature, attenuation window
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - δ search interval
//!    - Iteration budget and tolerance
//!    - Gradient ramp fractions
//!
//! 3. **Solver** (`DeltaSolver` trait) - The numerical method
//!    - Works on an `AttenuationProblem` (D, g, Δ, window)
//!    - Returns a `SolveResult`
//!    - Independent of molecules and catalogs
//!
//! # Module Organization
//!
//! - **`traits`**: `DeltaSolver`, `SolverConfiguration`, `AttenuationProblem`, `SolveResult`
//! - **`scenario`**: `Scenario`, `Molecule`, `MassSource`, `P30Estimate`
//! - **`methods`**: `BisectionSolver`
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐   ┌──────────────┐
//! │ Scenario        │   │ Catalogs     │
//! │ (molecule, Δ…)  │   │ (η, g_max)   │
//! └────────┬────────┘   └──────┬───────┘
//!          └─────────┬─────────┘
//!           ┌────────▼─────────────┐
//!           │ AttenuationProblem   │ ← D, g_max, Δ, window
//!           └────────┬─────────────┘
//!           ┌────────▼─────────────┐
//!           │ DeltaSolver          │ ← bisection on R(δ)
//!           └────────┬─────────────┘
//!           ┌────────▼─────────────┐
//!           │ P30Estimate          │ ← δ, achieved R, flags
//!           └──────────────────────┘
//! ```
//!
//! # Quick Start Example
//!
//! ```rust
//! use dosy_rs::solver::solve_delta;
//!
//! // Glucose in water on the 400: D ≈ 5.07e-9 m²/s, Δ = 0.1 s
//! let result = solve_delta(5.07e-9, 0.30, 0.1, 0.02, 0.05);
//!
//! assert!(result.converged);
//! assert!(result.delta >= 500e-6 && result.delta <= 2500e-6);
//! println!("p30 = {:.1} µs", result.delta_us());
//! ```
//!
//! # Error Handling
//!
//! `solve_delta` never fails: an infeasible target yields a boundary δ with
//! `converged == false`. `DeltaSolver::solve` returns `Result<T, String>`
//! and only fails on invalid problem or configuration.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod scenario;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    AttenuationProblem,
    DeltaSolver,
    SolveResult,
    SolverConfiguration,
    DEFAULT_MAX_ITERATIONS,
    DEFAULT_TOLERANCE,
    DELTA_MAX,
    DELTA_MIN,
    GRADIENT_MAX_FRACTION,
    GRADIENT_MIN_FRACTION,
};

pub use scenario::{
    MassSource,
    Molecule,
    P30Estimate,
    Scenario,
    DEFAULT_DIFFUSION_TIME,
    DEFAULT_RATIO_WINDOW,
    DEFAULT_TEMPERATURE,
};

pub use methods::{clamp_delta, BisectionSolver};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Find the pulse duration δ for a target attenuation window
///
/// Uses the default configuration: δ in [500 µs, 2500 µs], gradients ramped
/// from 2 % to 98 % of `gradient_max`, 60 bisection steps, tolerance 1e-6
/// on the ratio. Inputs are not validated; see [`BisectionSolver`] for the
/// checked variant.
///
/// # Arguments
///
/// * `diffusion_coefficient` - D \[m²/s\]
/// * `gradient_max` - Spectrometer maximum gradient \[T/m\]
/// * `diffusion_time` - Δ \[s\]
/// * `ratio_min`, `ratio_max` - Attenuation window; the midpoint is the target
pub fn solve_delta(
    diffusion_coefficient: f64,
    gradient_max: f64,
    diffusion_time: f64,
    ratio_min: f64,
    ratio_max: f64,
) -> SolveResult {
    let problem = AttenuationProblem::new(
        diffusion_coefficient,
        gradient_max,
        diffusion_time,
        ratio_min,
        ratio_max,
    );
    methods::bisection::bisect(&problem, &SolverConfiguration::default())
}

// =================================================================================================
// Tests
// =================================================================================================
