//! Error types for the estimation pipeline
//!
//! The physics kernels and the bisection never fail. Errors only come from
//! validating user-level inputs before a computation.

use thiserror::Error;

/// Errors raised while preparing or running a p30 estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DosyError {
    /// Solvent name not present in the viscosity catalog
    #[error("Unknown solvent '{0}'")]
    UnknownSolvent(String),

    /// Spectrometer name not present in the gradient catalog
    #[error("Unknown spectrometer '{0}'")]
    UnknownSpectrometer(String),

    /// A physical quantity is not finite or outside its domain
    #[error("Invalid {quantity}: {value} ({reason})")]
    InvalidPhysicalInput {
        quantity: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Polymer mode with DP = 0
    #[error("Degree of polymerization must be a positive integer")]
    InvalidDegreeOfPolymerization,

    /// Attenuation window outside (0, 1) or reversed
    #[error("Invalid attenuation window [{min}, {max}]: bounds must satisfy 0 < min <= max < 1")]
    InvalidRatioWindow { min: f64, max: f64 },

    /// Neither a formula nor a molar mass was provided
    #[error("Empty formula: provide a molecular formula or a molar mass")]
    EmptyFormula,

    /// Solver rejected its problem or configuration
    #[error("Solver error: {0}")]
    Solver(String),
}
