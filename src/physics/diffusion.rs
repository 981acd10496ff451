//! Stokes–Einstein diffusion coefficient
//!
//! ```text
//! D = k_B · T / (6π · η · r_h)
//! ```
//!
//! This is a bare physics kernel. Temperature, viscosity and radius must be
//! strictly positive; the scenario layer checks them before calling.

use std::f64::consts::PI;

use crate::physics::constants::BOLTZMANN;

/// Diffusion coefficient of a sphere \[m²/s\]
///
/// # Arguments
///
/// * `radius` - Hydrodynamic radius r_h \[m\]
/// * `temperature_k` - Absolute temperature T \[K\]
/// * `viscosity` - Solvent dynamic viscosity η \[Pa·s\]
pub fn diffusion_coefficient(radius: f64, temperature_k: f64, viscosity: f64) -> f64 {
    (BOLTZMANN * temperature_k) / (6.0 * PI * viscosity * radius)
}
