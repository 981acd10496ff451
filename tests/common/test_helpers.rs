//! Helper functions for integration tests

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-300 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Assert that two values agree within a relative tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    let error = relative_error(actual, expected);
    assert!(
        error < tolerance,
        "{}: got {}, expected {} (relative error {} >= {})",
        message, actual, expected, error, tolerance
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_relative_error_small_scale() {
        // Diffusion coefficients live around 1e-9, far above the cut-off
        assert!((relative_error(5.1e-9, 5.0e-9) - 0.02).abs() < 1e-10);
    }
}
