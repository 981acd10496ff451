//! Physical constants used by the diffusion and attenuation models

/// Boltzmann constant k_B \[J/K\]
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Proton gyromagnetic ratio γ_H \[rad/(s·T)\]
pub const GYROMAGNETIC_RATIO_H: f64 = 2.675e8;
