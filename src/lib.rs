//! dosy-rs: p30 estimation for DOSY NMR experiments
//!
//! Estimates the diffusion gradient pulse duration δ ("p30") of a DOSY
//! experiment from the size of the molecule, the solvent, the spectrometer
//! and the diffusion time Δ.
//!
//! # Architecture
//!
//! dosy-rs keeps the same separation as a simulation framework:
//!
//! 1. **Physics** ([`physics`]): closed-form models
//!    - formula → molar mass
//!    - molar mass or DP → hydrodynamic radius
//!    - radius → diffusion coefficient (Stokes–Einstein)
//!    - δ → attenuation ratio (Stejskal–Tanner)
//!
//! 2. **Numerics** ([`solver`]): inverting the attenuation model
//!    - bisection on δ within the probe limits
//!    - scenario validation and the [`P30Estimate`] result handle
//!
//! 3. **Reference data** ([`catalog`]): solvent viscosities, spectrometer
//!    gradients and atomic weights, passed in as values
//!
//! # Quick Start
//!
//! ```rust
//! use dosy_rs::{Catalogs, Molecule, Scenario};
//!
//! # fn main() -> Result<(), dosy_rs::DosyError> {
//! let catalogs = Catalogs::default();
//!
//! // Glucose in water on the 400, Δ = 100 ms
//! let estimate = Scenario::new(Molecule::from_formula("C6H12O6"), "H2O", "400")
//!     .with_diffusion_time(0.1)
//!     .compute(&catalogs)?;
//!
//! println!("{}", estimate);
//! assert!(estimate.p30_us() >= 500.0 && estimate.p30_us() <= 2500.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Physical models (equations)
//! - [`solver`]: δ solver, scenarios and estimates
//! - [`catalog`]: Reference catalogs
//! - [`output`]: Journal export

// Core modules
pub mod physics;
pub mod solver;

pub mod catalog;
pub mod error;
pub mod output;

pub use catalog::Catalogs;
pub use error::DosyError;
pub use physics::{
    attenuation_ratio,
    b_value,
    diffusion_coefficient,
    hydrodynamic_radius_linear,
    hydrodynamic_radius_polymer,
    molecular_mass,
};
pub use solver::{solve_delta, Molecule, MassSource, P30Estimate, Scenario, SolveResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use dosy_rs::prelude::*;
    //! ```
    pub use crate::catalog::Catalogs;
    pub use crate::error::DosyError;
    pub use crate::physics::{ElementTable,
                             MassEstimate,
                             RadiusModel};
    pub use crate::solver::{AttenuationProblem,
                            BisectionSolver,
                            DeltaSolver,
                            MassSource,
                            Molecule,
                            P30Estimate,
                            Scenario,
                            SolveResult,
                            SolverConfiguration};
    pub use crate::output::{CsvExporter, Exporter};
}
