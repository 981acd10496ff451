//! Physical models
//!
//! This module gathers the closed-form physics that turns a molecule into a
//! diffusion coefficient, and a diffusion coefficient into a signal
//! attenuation:
//!
//! ```text
//! formula ──► molar mass ──► hydrodynamic radius ──► D ──► R(δ)
//!  (formula)                      (radius)       (diffusion) (attenuation)
//! ```
//!
//! Every function here is a pure kernel: no validation, no state, no I/O.
//! Inputs are expected to be physically meaningful (positive temperature,
//! viscosity and radius). Validation lives in [`crate::solver::Scenario`].
//!
//! # Example
//!
//! ```rust
//! use dosy_rs::physics::{
//!     molecular_mass, hydrodynamic_radius_linear, diffusion_coefficient, attenuation_ratio,
//! };
//!
//! let mass = molecular_mass("C6H12O6");
//! let radius = hydrodynamic_radius_linear(mass);
//! let d = diffusion_coefficient(radius, 298.0, 0.0010);
//!
//! let r = attenuation_ratio(d, 0.006, 0.294, 1.0e-3, 0.1);
//! assert!(r > 0.0 && r < 1.0);
//! ```

pub mod constants;
pub mod formula;
pub mod radius;
pub mod diffusion;
pub mod attenuation;

// re-export commonly used items for convenience
pub use constants::{BOLTZMANN, GYROMAGNETIC_RATIO_H};
pub use formula::{molecular_mass, ElementTable, MassEstimate};
pub use radius::{
    hydrodynamic_radius_linear,
    hydrodynamic_radius_polymer,
    LinearRadiusModel,
    PolymerRadiusModel,
    RadiusModel,
};
pub use diffusion::diffusion_coefficient;
pub use attenuation::{attenuation_ratio, b_value};
