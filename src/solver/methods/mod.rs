//! Numerical methods for the δ inversion
//!
//! This module contains concrete implementations of the
//! [`DeltaSolver`](crate::solver::DeltaSolver) trait.
//!
//! # Available Methods
//!
//! - **[`BisectionSolver`]**: bounded bisection on the monotonic R(δ)
//!   - Cost: 1 attenuation evaluation per step, 60 steps at most by default
//!   - Use: default method, robust to infeasible targets
//!
//! Each solver is stateless and can be reused for any number of problems,
//! from any thread.

pub mod bisection;

// Re-exports for convenience
pub use bisection::{clamp_delta, BisectionSolver};
