//! Export of experimental p30 values.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the journal
//! format. Each format is an independent implementation in its own
//! sub-module.
//!
//! # Available formats
//!
//! | Format  | Module    |
//! |---------|-----------|
//! | CSV     | [`csv`]   |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use dosy_rs::{Catalogs, Molecule, Scenario};
//! use dosy_rs::output::export::{CsvExporter, Exporter};
//! use std::path::Path;
//!
//! let estimate = Scenario::new(Molecule::from_formula("C6H12O6"), "H2O", "400")
//!     .compute(&Catalogs::default())
//!     .unwrap();
//!
//! // The operator tuned p30 on the spectrometer and kept 1100 µs
//! CsvExporter::default()
//!     .append(&estimate, 1100.0, Path::new("experiences_dosy.csv"))
//!     .unwrap();
//! ```

pub mod csv;

// Re-export the most commonly used types at the module level
pub use csv::{CsvConfig, CsvError, CsvExporter, ExperimentRecord};

use std::path::Path;

use crate::solver::P30Estimate;

/// Abstraction trait for all journal formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the
/// caller can react precisely based on the error type.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Appends one experiment to the journal at `path`.
    ///
    /// The record combines the context of `estimate` (spectrometer,
    /// solvent, molecular weight, Δ, temperature, DP) with the p30 value the
    /// operator actually retained, in microseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `p30_experimental_us` is not a positive finite number
    /// - the file cannot be opened or written
    fn append(
        &self,
        estimate: &P30Estimate,
        p30_experimental_us: f64,
        path: &Path,
    ) -> Result<(), Self::Error>;
}
