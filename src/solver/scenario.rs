//! DOSY scenario definition
//!
//! A scenario combines a molecule with its experimental conditions. It is
//! the validated entry point of the crate: it checks the user-level inputs,
//! runs the physics chain and hands back a [`P30Estimate`].
//!
//! ```text
//! Molecule ─► molar mass ─► radius (linear | polymer) ─► D ─► solver ─► P30Estimate
//!                 ▲                                       ▲      ▲
//!             Catalogs::elements              Catalogs::viscosity  Catalogs::max_gradient
//! ```

use std::fmt;

use crate::catalog::Catalogs;
use crate::error::DosyError;
use crate::physics::{
    diffusion_coefficient,
    ElementTable,
    LinearRadiusModel,
    MassEstimate,
    PolymerRadiusModel,
    RadiusModel,
};
use crate::solver::{
    AttenuationProblem,
    BisectionSolver,
    DeltaSolver,
    SolveResult,
    SolverConfiguration,
};

/// Default diffusion time Δ \[s\]
pub const DEFAULT_DIFFUSION_TIME: f64 = 0.1;

/// Default sample temperature \[K\]
pub const DEFAULT_TEMPERATURE: f64 = 298.0;

/// Default attenuation window
pub const DEFAULT_RATIO_WINDOW: (f64, f64) = (0.02, 0.05);

// =================================================================================================
// Molecule description
// =================================================================================================

/// Where the molar mass comes from
///
/// The caller picks exactly one source.
#[derive(Debug, Clone, PartialEq)]
pub enum MassSource {
    /// Simplified molecular formula, e.g. `"C6H12O6"`
    Formula(String),
    /// Molar mass \[g/mol\]
    MolarMass(f64),
}

impl MassSource {
    fn validate(&self) -> Result<(), DosyError> {
        match self {
            MassSource::Formula(formula) if formula.trim().is_empty() => Err(DosyError::EmptyFormula),
            MassSource::Formula(_) => Ok(()),
            MassSource::MolarMass(mass) => positive("molar mass", *mass),
        }
    }

    /// Resolve to a molar mass, keeping the formula estimate when there is one
    fn resolve(&self, elements: &ElementTable) -> Result<(f64, Option<MassEstimate>), DosyError> {
        match self {
            MassSource::MolarMass(mass) => Ok((*mass, None)),
            MassSource::Formula(formula) => {
                let estimate = elements.estimate(formula.trim());
                if estimate.mass <= 0.0 {
                    return Err(DosyError::InvalidPhysicalInput {
                        quantity: "molar mass",
                        value: estimate.mass,
                        reason: "formula contains no known element",
                    });
                }
                Ok((estimate.mass, Some(estimate)))
            }
        }
    }
}

/// Molecule under study
#[derive(Debug, Clone, PartialEq)]
pub enum Molecule {
    /// Compact or linear small molecule
    Small(MassSource),

    /// Polymer described by its repeat unit
    Polymer {
        /// Mass of one monomer
        monomer: MassSource,
        /// Number of repeat units (must be positive)
        degree_of_polymerization: u32,
    },
}

impl Molecule {
    /// Small molecule from a formula
    pub fn from_formula(formula: &str) -> Self {
        Molecule::Small(MassSource::Formula(formula.to_string()))
    }

    /// Small molecule from a molar mass
    pub fn from_mass(mass: f64) -> Self {
        Molecule::Small(MassSource::MolarMass(mass))
    }

    /// Polymer from a monomer formula
    pub fn polymer_from_formula(monomer: &str, degree_of_polymerization: u32) -> Self {
        Molecule::Polymer {
            monomer: MassSource::Formula(monomer.to_string()),
            degree_of_polymerization,
        }
    }

    /// Polymer from a monomer molar mass
    pub fn polymer_from_mass(monomer_mass: f64, degree_of_polymerization: u32) -> Self {
        Molecule::Polymer {
            monomer: MassSource::MolarMass(monomer_mass),
            degree_of_polymerization,
        }
    }

    /// Mass source of the molecule (or of its monomer)
    pub fn mass_source(&self) -> &MassSource {
        match self {
            Molecule::Small(source) => source,
            Molecule::Polymer { monomer, .. } => monomer,
        }
    }

    /// DP for polymers, `None` for small molecules
    pub fn degree_of_polymerization(&self) -> Option<u32> {
        match self {
            Molecule::Small(_) => None,
            Molecule::Polymer { degree_of_polymerization, .. } => Some(*degree_of_polymerization),
        }
    }

    /// Radius model that applies to this molecule
    pub fn radius_model(&self) -> RadiusModel {
        match self {
            Molecule::Small(_) => RadiusModel::Linear(LinearRadiusModel::default()),
            Molecule::Polymer { .. } => RadiusModel::Polymer(PolymerRadiusModel::default()),
        }
    }
}

// =================================================================================================
// Scenario
// =================================================================================================

/// Simulation scenario
///
/// Defines a specific experiment to plan:
/// - the molecule (mass source, optional DP)
/// - the solvent and spectrometer, looked up in [`Catalogs`]
/// - the diffusion time, temperature and attenuation window
///
/// # Example
///
/// ```rust
/// use dosy_rs::{Catalogs, Molecule, Scenario};
///
/// let estimate = Scenario::new(Molecule::from_formula("C6H12O6"), "H2O", "400")
///     .with_diffusion_time(0.1)
///     .with_temperature(298.0)
///     .compute(&Catalogs::default())
///     .unwrap();
///
/// assert!(estimate.within_window());
/// println!("{}", estimate);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Molecule under study
    pub molecule: Molecule,

    /// Solvent catalog key
    pub solvent: String,

    /// Spectrometer catalog key
    pub spectrometer: String,

    /// Diffusion time Δ (d20) \[s\]
    pub diffusion_time: f64,

    /// Sample temperature \[K\]
    pub temperature: f64,

    /// Lower end of the attenuation window
    pub ratio_min: f64,

    /// Upper end of the attenuation window
    pub ratio_max: f64,
}

impl Scenario {
    /// Create a scenario with default conditions
    pub fn new(molecule: Molecule, solvent: &str, spectrometer: &str) -> Self {
        Self {
            molecule,
            solvent: solvent.trim().to_string(),
            spectrometer: spectrometer.trim().to_string(),
            diffusion_time: DEFAULT_DIFFUSION_TIME,
            temperature: DEFAULT_TEMPERATURE,
            ratio_min: DEFAULT_RATIO_WINDOW.0,
            ratio_max: DEFAULT_RATIO_WINDOW.1,
        }
    }

    /// Builder pattern: set Δ \[s\]
    pub fn with_diffusion_time(mut self, diffusion_time: f64) -> Self {
        self.diffusion_time = diffusion_time;
        self
    }

    /// Builder pattern: set the temperature \[K\]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builder pattern: set the attenuation window
    pub fn with_ratio_window(mut self, ratio_min: f64, ratio_max: f64) -> Self {
        self.ratio_min = ratio_min;
        self.ratio_max = ratio_max;
        self
    }

    /// Validate inputs against the default solver configuration
    pub fn validate(&self) -> Result<(), DosyError> {
        self.validate_with(&SolverConfiguration::default())
    }

    /// Validate inputs against a solver configuration
    ///
    /// Catalog keys are not checked here, see [`Scenario::compute_with`].
    pub fn validate_with(&self, config: &SolverConfiguration) -> Result<(), DosyError> {
        positive("temperature", self.temperature)?;
        positive("diffusion time", self.diffusion_time)?;

        if self.diffusion_time <= config.delta_bounds.1 / 3.0 {
            return Err(DosyError::InvalidPhysicalInput {
                quantity: "diffusion time",
                value: self.diffusion_time,
                reason: "must exceed a third of the longest gradient pulse",
            });
        }

        let window_ok = self.ratio_min > 0.0
            && self.ratio_max < 1.0
            && self.ratio_min <= self.ratio_max;
        if !window_ok {
            return Err(DosyError::InvalidRatioWindow {
                min: self.ratio_min,
                max: self.ratio_max,
            });
        }

        if self.molecule.degree_of_polymerization() == Some(0) {
            return Err(DosyError::InvalidDegreeOfPolymerization);
        }

        self.molecule.mass_source().validate()
    }

    /// Estimate p30 with the default bisection solver
    pub fn compute(&self, catalogs: &Catalogs) -> Result<P30Estimate, DosyError> {
        self.compute_with(catalogs, &BisectionSolver::new(), &SolverConfiguration::default())
    }

    /// Estimate p30 with a given solver and configuration
    pub fn compute_with(
        &self,
        catalogs: &Catalogs,
        solver: &dyn DeltaSolver,
        config: &SolverConfiguration,
    ) -> Result<P30Estimate, DosyError> {
        // ====== Step 1: Validation ======

        let viscosity = catalogs.viscosity(&self.solvent)?;
        let gradient_max = catalogs.max_gradient(&self.spectrometer)?;
        positive("viscosity", viscosity)?;
        positive("maximum gradient", gradient_max)?;
        self.validate_with(config)?;

        // ====== Step 2: Physics ======

        let (molecular_weight, formula_estimate) =
            self.molecule.mass_source().resolve(catalogs.elements())?;

        let radius_model = self.molecule.radius_model();
        let degree_of_polymerization = self.molecule.degree_of_polymerization();
        let radius = radius_model.radius(molecular_weight, degree_of_polymerization.unwrap_or(1));
        let total_mass = molecular_weight * degree_of_polymerization.unwrap_or(1) as f64;

        let diffusion = diffusion_coefficient(radius, self.temperature, viscosity);

        // ====== Step 3: Solve ======

        let problem = AttenuationProblem::new(
            diffusion,
            gradient_max,
            self.diffusion_time,
            self.ratio_min,
            self.ratio_max,
        );
        let solution = solver.solve(&problem, config).map_err(DosyError::Solver)?;

        log::debug!(
            "{} p30 for {} g/mol in {} on {}: D = {:.3e} m²/s, δ = {:.1} µs ({})",
            radius_model.label(),
            total_mass,
            self.solvent,
            self.spectrometer,
            diffusion,
            solution.delta_us(),
            solver.name()
        );

        Ok(P30Estimate {
            spectrometer: self.spectrometer.clone(),
            solvent: self.solvent.clone(),
            radius_model,
            molecular_weight,
            total_mass,
            degree_of_polymerization,
            temperature: self.temperature,
            diffusion_time: self.diffusion_time,
            ratio_min: self.ratio_min,
            ratio_max: self.ratio_max,
            hydrodynamic_radius: radius,
            diffusion_coefficient: diffusion,
            solution,
            formula_estimate,
        })
    }
}

fn positive(quantity: &'static str, value: f64) -> Result<(), DosyError> {
    if !value.is_finite() {
        return Err(DosyError::InvalidPhysicalInput { quantity, value, reason: "must be finite" });
    }
    if value <= 0.0 {
        return Err(DosyError::InvalidPhysicalInput { quantity, value, reason: "must be positive" });
    }
    Ok(())
}

// =================================================================================================
// Estimate (result handle)
// =================================================================================================

/// Result of a scenario computation
///
/// This is the handle passed to the export step, which attaches the
/// experimentally optimised p30 to it.
#[derive(Debug, Clone, PartialEq)]
pub struct P30Estimate {
    /// Spectrometer catalog key
    pub spectrometer: String,

    /// Solvent catalog key
    pub solvent: String,

    /// Radius model used
    pub radius_model: RadiusModel,

    /// Entered molar mass: the molecule, or the monomer for polymers \[g/mol\]
    pub molecular_weight: f64,

    /// Molar mass of the whole chain (equals `molecular_weight` for small molecules)
    pub total_mass: f64,

    /// DP for polymers
    pub degree_of_polymerization: Option<u32>,

    /// Sample temperature \[K\]
    pub temperature: f64,

    /// Diffusion time Δ \[s\]
    pub diffusion_time: f64,

    /// Requested attenuation window, lower end
    pub ratio_min: f64,

    /// Requested attenuation window, upper end
    pub ratio_max: f64,

    /// Hydrodynamic radius \[m\]
    pub hydrodynamic_radius: f64,

    /// Diffusion coefficient \[m²/s\]
    pub diffusion_coefficient: f64,

    /// Solver output
    pub solution: SolveResult,

    /// Formula breakdown, when the mass came from a formula
    pub formula_estimate: Option<MassEstimate>,
}

impl P30Estimate {
    /// Computed p30 \[s\]
    pub fn p30(&self) -> f64 {
        self.solution.delta
    }

    /// Computed p30 \[µs\]
    pub fn p30_us(&self) -> f64 {
        self.solution.delta_us()
    }

    /// Whether the achieved ratio lies in the requested window
    pub fn within_window(&self) -> bool {
        self.solution.within_window(self.ratio_min, self.ratio_max)
    }

    /// Whether the estimate relied on a partially unknown formula
    pub fn is_degraded(&self) -> bool {
        self.formula_estimate
            .as_ref()
            .is_some_and(MassEstimate::is_degraded)
    }
}

impl fmt::Display for P30Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.radius_model {
            RadiusModel::Linear(_) => writeln!(f, "MW: {:.2} g/mol", self.total_mass)?,
            RadiusModel::Polymer(_) => writeln!(f, "MW total: {:.2} g/mol", self.total_mass)?,
        }
        writeln!(f, "p30 computed ({}): {:.1} µs", self.radius_model.label(), self.p30_us())?;
        writeln!(
            f,
            "Attenuation ratio: {:.4} (target {:.4})",
            self.solution.achieved_ratio, self.solution.target_ratio
        )?;

        if !self.within_window() {
            write!(f, "Warning: ratio outside [{}, {}]", self.ratio_min, self.ratio_max)?;
            if self.solution.converged {
                writeln!(f)?;
            } else {
                writeln!(f, ", p30 limited to the probe range")?;
            }
        }
        if let Some(estimate) = self.formula_estimate.as_ref().filter(|e| !e.unknown_symbols.is_empty()) {
            writeln!(f, "Warning: unknown elements ignored: {}", estimate.unknown_symbols.join(", "))?;
        }
        Ok(())
    }
}

// ================================================================================================
// Tests
// ================================================================================================
