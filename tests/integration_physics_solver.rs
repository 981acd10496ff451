//! Integration tests: physics module + solver module
//!
//! These tests follow a molecule through the whole chain, from formula to
//! p30, and check the reference values computed by hand.

use dosy_rs::physics::{
    attenuation_ratio,
    diffusion_coefficient,
    hydrodynamic_radius_linear,
    hydrodynamic_radius_polymer,
    molecular_mass,
};
use dosy_rs::solver::{solve_delta, BisectionSolver, DeltaSolver, SolverConfiguration, DELTA_MAX, DELTA_MIN};
use dosy_rs::{DosyError, Molecule, Scenario};

mod common;
use common::{assert_close, glucose_scenario, lab_catalogs, polystyrene_scenario, GLUCOSE_D};

// =================================================================================================
// Reference chain: glucose in water
// =================================================================================================

#[test]
fn test_glucose_chain_by_hand() {
    // 6 × 12.01 + 12 × 1.008 + 6 × 16.00
    let mass = molecular_mass("C6H12O6");
    assert_close(mass, 180.156, 1e-12, "glucose mass");

    // 3.205e-12 × √180.156
    let radius = hydrodynamic_radius_linear(mass);
    assert_close(radius, 4.3018e-11, 1e-4, "glucose radius");

    // k_B · 298 / (6π · 0.0010 · r)
    let d = diffusion_coefficient(radius, 298.0, 0.0010);
    assert_close(d, GLUCOSE_D, 1e-3, "glucose diffusion coefficient");

    let result = solve_delta(d, 0.30, 0.1, 0.02, 0.05);
    assert!(result.converged);
    assert!((result.achieved_ratio - 0.035).abs() < 1e-6);
    assert!(result.delta > DELTA_MIN && result.delta < DELTA_MAX);

    // Closed-form check: γ² · Δg² · D · δ² · (Δ − δ/3) = −ln(0.035)
    let g_min = 0.02 * 0.30;
    let g_max = 0.98 * 0.30;
    let exponent = -attenuation_ratio(d, g_min, g_max, result.delta, 0.1).ln();
    assert_close(exponent, -(0.035f64).ln(), 1e-4, "attenuation exponent");
}

#[test]
fn test_scenario_matches_free_functions() {
    let estimate = glucose_scenario().compute(&lab_catalogs()).unwrap();

    let d = diffusion_coefficient(hydrodynamic_radius_linear(molecular_mass("C6H12O6")), 298.0, 0.0010);
    let direct = solve_delta(d, 0.30, 0.1, 0.02, 0.05);

    assert_eq!(estimate.solution, direct);
    assert_eq!(estimate.diffusion_coefficient, d);
}

// =================================================================================================
// Physical trends
// =================================================================================================

#[test]
fn test_heavier_molecule_needs_longer_pulse() {
    let catalogs = lab_catalogs();
    let mut previous = 0.0;

    for mass in [50.0, 180.0, 500.0, 1500.0] {
        let estimate = Scenario::new(Molecule::from_mass(mass), "H2O", "400")
            .compute(&catalogs)
            .unwrap();
        assert!(estimate.p30() > previous, "p30 did not grow at M = {}", mass);
        previous = estimate.p30();
    }
}

#[test]
fn test_viscous_solvent_needs_longer_pulse() {
    let catalogs = lab_catalogs();
    let water = glucose_scenario().compute(&catalogs).unwrap();

    let mut dmso = glucose_scenario();
    dmso.solvent = "DMSO".to_string();
    let dmso = dmso.compute(&catalogs).unwrap();

    assert!(dmso.diffusion_coefficient < water.diffusion_coefficient);
    assert!(dmso.p30() > water.p30());
}

#[test]
fn test_warmer_sample_needs_shorter_pulse() {
    let catalogs = lab_catalogs();
    let cold = glucose_scenario().with_temperature(280.0).compute(&catalogs).unwrap();
    let warm = glucose_scenario().with_temperature(320.0).compute(&catalogs).unwrap();

    assert!(warm.p30() < cold.p30());
}

#[test]
fn test_longer_diffusion_time_needs_shorter_pulse() {
    let catalogs = lab_catalogs();
    let short = glucose_scenario().with_diffusion_time(0.05).compute(&catalogs).unwrap();
    let long = glucose_scenario().with_diffusion_time(0.2).compute(&catalogs).unwrap();

    assert!(long.p30() < short.p30());
}

#[test]
fn test_polymer_radius_grows_with_chain() {
    let catalogs = lab_catalogs();
    let short = polystyrene_scenario(10).compute(&catalogs).unwrap();
    let long = polystyrene_scenario(1000).compute(&catalogs).unwrap();

    assert!(long.hydrodynamic_radius > short.hydrodynamic_radius);
    assert_eq!(long.hydrodynamic_radius, hydrodynamic_radius_polymer(1000));
    assert!(long.p30() >= short.p30());
}

#[test]
fn test_polymer_radius_ignores_monomer_mass() {
    // The polymer model only looks at DP
    let catalogs = lab_catalogs();
    let light = Scenario::new(Molecule::polymer_from_mass(28.05, 50), "CDCl3", "500")
        .compute(&catalogs)
        .unwrap();
    let heavy = Scenario::new(Molecule::polymer_from_mass(280.5, 50), "CDCl3", "500")
        .compute(&catalogs)
        .unwrap();

    assert_eq!(light.hydrodynamic_radius, heavy.hydrodynamic_radius);
    assert_eq!(light.p30(), heavy.p30());
    assert_close(heavy.total_mass, 14025.0, 1e-12, "total chain mass");
}

// =================================================================================================
// Catalog injection
// =================================================================================================

#[test]
fn test_custom_spectrometer_and_solvent() {
    let catalogs = lab_catalogs();
    let on_400 = glucose_scenario().compute(&catalogs).unwrap();

    let mut on_600 = glucose_scenario();
    on_600.spectrometer = "600".to_string();
    let on_600 = on_600.compute(&catalogs).unwrap();

    // Stronger gradient, same attenuation with a shorter pulse
    assert!(on_600.p30() < on_400.p30());

    let thf = Scenario::new(Molecule::from_formula("C6H12O6"), "THF-d8", "600")
        .compute(&catalogs)
        .unwrap();
    assert!(thf.p30() >= DELTA_MIN);
}

#[test]
fn test_default_catalogs_reject_custom_entries() {
    let err = Scenario::new(Molecule::from_formula("C6H12O6"), "THF-d8", "400")
        .compute(&dosy_rs::Catalogs::default())
        .unwrap_err();
    assert_eq!(err, DosyError::UnknownSolvent("THF-d8".to_string()));
}

// =================================================================================================
// Infeasible targets
// =================================================================================================

#[test]
fn test_infeasible_window_returns_bound_with_flags() {
    // Huge chain in DMSO: even 2.5 ms barely attenuates
    let estimate = Scenario::new(Molecule::polymer_from_mass(104.15, 20_000), "DMSO", "400")
        .compute(&lab_catalogs())
        .unwrap();

    assert!(!estimate.solution.converged);
    assert!(!estimate.within_window());
    assert!((estimate.p30() - DELTA_MAX).abs() < 1e-12);
    assert!(estimate.solution.achieved_ratio > 0.05);
}

#[test]
fn test_checked_solver_with_custom_bounds() {
    let config = SolverConfiguration::default().with_delta_bounds(1e-3, 2e-3);
    let estimate = glucose_scenario()
        .compute_with(&lab_catalogs(), &BisectionSolver::new(), &config)
        .unwrap();

    assert!(estimate.p30() >= 1e-3 && estimate.p30() <= 2e-3);

    let name: &dyn DeltaSolver = &BisectionSolver::new();
    assert_eq!(name.name(), "Bisection");
}

// =================================================================================================
// Determinism
// =================================================================================================

#[test]
fn test_repeated_scenarios_are_bit_identical() {
    let catalogs = lab_catalogs();
    let first = glucose_scenario().compute(&catalogs).unwrap();
    let second = glucose_scenario().compute(&catalogs).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.p30().to_bits(), second.p30().to_bits());
    assert_eq!(molecular_mass("C8H8").to_bits(), molecular_mass("C8H8").to_bits());
}
