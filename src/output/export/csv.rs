//! CSV journal of experimentally optimised p30 values
//!
//! Each call appends one row. The header is written when the file is
//! created (or found empty), never again:
//!
//! ```csv
//! spectrometer,solvent,molecular_weight,d20_s,p30_us,temperature_K,DP
//! 400,H2O,180.156,0.1,1100,298,
//! 500,CDCl3,104.15,0.1,2400,298,100
//! ```
//!
//! `molecular_weight` is the mass entered by the user: the whole molecule,
//! or the monomer in polymer mode. The `DP` cell is empty for small
//! molecules.
//!
//! # Metadata
//!
//! With [`CsvConfig::with_metadata`], a comment line carrying a creation
//! timestamp is written above the header of a new file:
//!
//! ```csv
//! # DOSY p30 journal
//! # Created: 2026-02-11T15:30:00+00:00
//! spectrometer,solvent,...
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::output::export::Exporter;
use crate::solver::P30Estimate;

/// Column names, in file order
pub const HEADER: [&str; 7] = [
    "spectrometer",
    "solvent",
    "molecular_weight",
    "d20_s",
    "p30_us",
    "temperature_K",
    "DP",
];

// =============================================================================
// Errors
// =============================================================================

/// Errors raised by the CSV journal
#[derive(Debug, Error)]
pub enum CsvError {
    /// A value to be written is not acceptable
    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    /// Underlying file error
    #[error("CSV I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `precision`: Decimal places for floats, `None` for the shortest exact form
/// - `include_metadata`: Add comment lines when the file is created
///
/// # Example
///
/// ```rust
/// use dosy_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default().delimiter(';').precision(3);
/// assert_eq!(config.delimiter, ';');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: shortest form)
    pub precision: Option<usize>,

    /// Include metadata comments in new files (default: false)
    pub include_metadata: bool,

    /// Title line of the metadata block
    pub title: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: None,
            include_metadata: false,
            title: "DOSY p30 journal".to_string(),
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, title: &str) -> Self {
        self.include_metadata = true;
        self.title = title.to_string();
        self
    }
}

// =============================================================================
// Record
// =============================================================================

/// One journal row
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRecord {
    /// Spectrometer catalog key
    pub spectrometer: String,
    /// Solvent catalog key
    pub solvent: String,
    /// Entered molar mass (monomer mass for polymers) \[g/mol\]
    pub molecular_weight: f64,
    /// Diffusion time Δ \[s\]
    pub diffusion_time: f64,
    /// p30 retained by the operator \[µs\]
    pub p30_us: f64,
    /// Temperature \[K\]
    pub temperature: f64,
    /// Degree of polymerization, if any
    pub degree_of_polymerization: Option<u32>,
}

impl ExperimentRecord {
    /// Build a record from an estimate and the measured p30
    pub fn from_estimate(estimate: &P30Estimate, p30_experimental_us: f64) -> Result<Self, CsvError> {
        if !p30_experimental_us.is_finite() || p30_experimental_us <= 0.0 {
            return Err(CsvError::InvalidValue {
                field: "experimental p30",
                value: p30_experimental_us,
            });
        }

        Ok(Self {
            spectrometer: estimate.spectrometer.clone(),
            solvent: estimate.solvent.clone(),
            molecular_weight: estimate.molecular_weight,
            diffusion_time: estimate.diffusion_time,
            p30_us: p30_experimental_us,
            temperature: estimate.temperature,
            degree_of_polymerization: estimate.degree_of_polymerization,
        })
    }

    fn cells(&self, config: &CsvConfig) -> [String; 7] {
        [
            escape_field(&self.spectrometer, config.delimiter),
            escape_field(&self.solvent, config.delimiter),
            format_number(self.molecular_weight, config),
            format_number(self.diffusion_time, config),
            format_number(self.p30_us, config),
            format_number(self.temperature, config),
            self.degree_of_polymerization
                .map(|dp| dp.to_string())
                .unwrap_or_default(),
        ]
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Format number with configured precision
fn format_number(value: f64, config: &CsvConfig) -> String {
    match config.precision {
        Some(precision) => format!("{:.prec$}", value, prec = precision),
        None => format!("{}", value),
    }
}

/// Quote a text field when it contains the delimiter, a quote or a line break
fn escape_field(value: &str, delimiter: char) -> String {
    let needs_quotes = value.contains(delimiter)
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn join(cells: &[String], delimiter: char) -> String {
    cells.join(&delimiter.to_string())
}

// =============================================================================
// Exporter
// =============================================================================

/// Appends experiments to a CSV journal
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    /// Output format
    pub config: CsvConfig,
}

impl CsvExporter {
    /// Create an exporter with a given configuration
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Append an already built record
    pub fn append_record(&self, record: &ExperimentRecord, path: &Path) -> Result<(), CsvError> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let is_new = file.metadata()?.len() == 0;

        if is_new {
            if self.config.include_metadata {
                writeln!(file, "# {}", self.config.title)?;
                writeln!(file, "# Created: {}", chrono::Utc::now().to_rfc3339())?;
            }
            let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
            writeln!(file, "{}", join(&header, self.config.delimiter))?;
        }

        writeln!(file, "{}", join(&record.cells(&self.config), self.config.delimiter))?;

        log::info!(
            "Recorded p30 = {} µs for {} in {} on {} to {}",
            record.p30_us,
            record.molecular_weight,
            record.solvent,
            record.spectrometer,
            path.display()
        );

        Ok(())
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn append(
        &self,
        estimate: &P30Estimate,
        p30_experimental_us: f64,
        path: &Path,
    ) -> Result<(), Self::Error> {
        let record = ExperimentRecord::from_estimate(estimate, p30_experimental_us)?;
        self.append_record(&record, path)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
