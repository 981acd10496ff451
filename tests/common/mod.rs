//! Common utilities for integration tests

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{glucose_scenario, lab_catalogs, polystyrene_scenario, GLUCOSE_D};
pub use test_helpers::{assert_close, relative_error};
