//! Reference scenarios and catalogs
//!
//! Values chosen so that the expected outputs can be checked by hand.

use dosy_rs::{Catalogs, Molecule, Scenario};

/// Diffusion coefficient of glucose in water at 298 K \[m²/s\]
pub const GLUCOSE_D: f64 = 5.07e-9;

/// Default catalogs plus a 600 MHz probe and THF-d8
pub fn lab_catalogs() -> Catalogs {
    Catalogs::default()
        .with_spectrometer("600", 0.50)
        .with_solvent("THF-d8", 0.00046)
}

/// Glucose in water on the 400, Δ = 0.1 s, window [0.02, 0.05]
pub fn glucose_scenario() -> Scenario {
    Scenario::new(Molecule::from_formula("C6H12O6"), "H2O", "400")
        .with_diffusion_time(0.1)
        .with_temperature(298.0)
        .with_ratio_window(0.02, 0.05)
}

/// Polystyrene (styrene C8H8 repeat unit) with a given DP in CDCl3
pub fn polystyrene_scenario(degree_of_polymerization: u32) -> Scenario {
    Scenario::new(
        Molecule::polymer_from_formula("C8H8", degree_of_polymerization),
        "CDCl3",
        "500",
    )
}
