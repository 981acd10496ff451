//! Output of estimation results
//!
//! The estimate itself renders as a text report through `Display`
//! (see [`P30Estimate`](crate::solver::P30Estimate)). This module holds the
//! persistent side: the journal where operators record the p30 value they
//! kept after tuning on the spectrometer.
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── export/             ← Journal export
//!     ├── mod.rs          ← Exporter trait
//!     └── csv.rs          ← CSV journal
//! ```

pub mod export;

// Re-export commonly used items for convenience
pub use export::{CsvConfig, CsvError, CsvExporter, ExperimentRecord, Exporter};
