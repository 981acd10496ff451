//! Reference catalogs: solvent viscosities and spectrometer gradients
//!
//! Catalogs are plain values handed to [`Scenario::compute`](crate::solver::Scenario::compute).
//! The defaults match the instruments and solvents of the lab set-up; tests
//! and other sites can extend or replace entries with the builder methods.
//!
//! # Example
//!
//! ```rust
//! use dosy_rs::Catalogs;
//!
//! let catalogs = Catalogs::default()
//!     .with_solvent("THF-d8", 0.00046)
//!     .with_spectrometer("600", 0.50);
//!
//! assert_eq!(catalogs.viscosity("H2O").unwrap(), 0.0010);
//! assert_eq!(catalogs.max_gradient("600").unwrap(), 0.50);
//! assert!(catalogs.viscosity("Benzene").is_err());
//! ```

use std::collections::BTreeMap;

use crate::error::DosyError;
use crate::physics::ElementTable;

/// Default solvent viscosities \[Pa·s\]
const DEFAULT_SOLVENTS: [(&str, f64); 7] = [
    ("H2O", 0.0010),
    ("DMSO", 0.0020),
    ("CDCl3", 0.0006),
    ("MeOD", 0.00055),
    ("Acetone-d6", 0.0003),
    ("DMF", 0.00092),
    ("Acetic", 0.0012),
];

/// Default spectrometer maximum gradients \[T/m\], keyed by ¹H frequency (MHz)
const DEFAULT_SPECTROMETERS: [(&str, f64); 2] = [("400", 0.30), ("500", 0.35)];

/// Solvent and spectrometer reference data
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogs {
    /// Solvent name → dynamic viscosity \[Pa·s\]
    solvents: BTreeMap<String, f64>,

    /// Spectrometer name → maximum gradient strength \[T/m\]
    spectrometers: BTreeMap<String, f64>,

    /// Atomic weights used to read formulas
    elements: ElementTable,
}

impl Default for Catalogs {
    fn default() -> Self {
        Self {
            solvents: to_map(&DEFAULT_SOLVENTS),
            spectrometers: to_map(&DEFAULT_SPECTROMETERS),
            elements: ElementTable::default(),
        }
    }
}

impl Catalogs {
    /// Create empty solvent and spectrometer catalogs
    ///
    /// The element table keeps its defaults.
    pub fn empty() -> Self {
        Self {
            solvents: BTreeMap::new(),
            spectrometers: BTreeMap::new(),
            elements: ElementTable::default(),
        }
    }

    /// Builder pattern: add or override a solvent
    pub fn with_solvent(mut self, name: &str, viscosity: f64) -> Self {
        self.solvents.insert(name.to_string(), viscosity);
        self
    }

    /// Builder pattern: add or override a spectrometer
    pub fn with_spectrometer(mut self, name: &str, max_gradient: f64) -> Self {
        self.spectrometers.insert(name.to_string(), max_gradient);
        self
    }

    /// Builder pattern: replace the element table
    pub fn with_elements(mut self, elements: ElementTable) -> Self {
        self.elements = elements;
        self
    }

    /// Element table used for formulas
    pub fn elements(&self) -> &ElementTable {
        &self.elements
    }

    /// Viscosity of a solvent \[Pa·s\]
    pub fn viscosity(&self, solvent: &str) -> Result<f64, DosyError> {
        self.solvents
            .get(solvent)
            .copied()
            .ok_or_else(|| DosyError::UnknownSolvent(solvent.to_string()))
    }

    /// Maximum gradient of a spectrometer \[T/m\]
    pub fn max_gradient(&self, spectrometer: &str) -> Result<f64, DosyError> {
        self.spectrometers
            .get(spectrometer)
            .copied()
            .ok_or_else(|| DosyError::UnknownSpectrometer(spectrometer.to_string()))
    }

    /// Solvent names, sorted
    pub fn solvent_names(&self) -> Vec<&str> {
        self.solvents.keys().map(String::as_str).collect()
    }

    /// Spectrometer names, sorted
    pub fn spectrometer_names(&self) -> Vec<&str> {
        self.spectrometers.keys().map(String::as_str).collect()
    }
}

fn to_map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}
