//! Stejskal–Tanner attenuation model
//!
//! # b-value
//!
//! For a pulsed-field-gradient pair of strength g, pulse duration δ and
//! diffusion time Δ:
//!
//! ```text
//! b(g, δ, Δ) = γ_H² · g² · δ² · (Δ − δ/3)
//! ```
//!
//! # Attenuation ratio
//!
//! The ratio of the signal recorded at g_max to the signal recorded at
//! g_min, for a species with diffusion coefficient D:
//!
//! ```text
//! R = exp(−D · (b(g_max) − b(g_min)))
//! ```
//!
//! With g_max > g_min ≥ 0 and Δ > δ/3, R decreases strictly as δ grows.
//! The delta solver relies on that monotonicity.

use crate::physics::constants::GYROMAGNETIC_RATIO_H;

/// Diffusion weighting b \[s/m²\]
///
/// # Arguments
///
/// * `gradient` - Gradient strength g \[T/m\]
/// * `delta` - Pulse duration δ \[s\]
/// * `diffusion_time` - Diffusion delay Δ \[s\]
pub fn b_value(gradient: f64, delta: f64, diffusion_time: f64) -> f64 {
    GYROMAGNETIC_RATIO_H.powi(2) * gradient.powi(2) * delta.powi(2) * (diffusion_time - delta / 3.0)
}

/// Signal ratio I(g_max) / I(g_min) for a diffusion coefficient D
pub fn attenuation_ratio(
    diffusion_coefficient: f64,
    gradient_min: f64,
    gradient_max: f64,
    delta: f64,
    diffusion_time: f64,
) -> f64 {
    let weighting = b_value(gradient_max, delta, diffusion_time)
        - b_value(gradient_min, delta, diffusion_time);
    (-diffusion_coefficient * weighting).exp()
}
