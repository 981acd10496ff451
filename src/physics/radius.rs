//! Hydrodynamic radius models
//!
//! Two closed-form estimators, selected by the kind of molecule:
//!
//! | Model   | Formula                 | Input                       |
//! |---------|-------------------------|-----------------------------|
//! | Linear  | r = k_lin · M^0.5       | molar mass M \[g/mol\]      |
//! | Polymer | r = l_monomer · DP^ν    | degree of polymerization DP |
//!
//! The linear model is a scaling law for compact (globular) solutes. The
//! polymer model treats the chain as a random coil in a good solvent, with
//! ν the Flory exponent.

/// Calibration constant of the linear model \[m·(mol/g)^0.5\]
pub const K_LIN: f64 = 3.205e-12;

/// Effective monomer length of the polymer model \[m\]
pub const MONOMER_LENGTH: f64 = 0.25e-9;

/// Flory exponent for a random coil in a good solvent
pub const FLORY_EXPONENT: f64 = 0.588;

/// Radius of a compact molecule from its molar mass \[m\]
pub fn hydrodynamic_radius_linear(mass: f64) -> f64 {
    LinearRadiusModel::default().radius(mass)
}

/// Radius of a polymer coil from its degree of polymerization \[m\]
///
/// DP must be positive; a zero DP gives a zero radius, which the diffusion
/// model cannot use.
pub fn hydrodynamic_radius_polymer(degree_of_polymerization: u32) -> f64 {
    PolymerRadiusModel::default().radius(degree_of_polymerization)
}

// =================================================================================================
// Parameterised models
// =================================================================================================

/// Power law r = k_lin · M^0.5
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRadiusModel {
    /// Calibration constant k_lin
    pub k_lin: f64,
}

impl Default for LinearRadiusModel {
    fn default() -> Self {
        Self { k_lin: K_LIN }
    }
}

impl LinearRadiusModel {
    /// Radius for a molar mass \[g/mol\]
    pub fn radius(&self, mass: f64) -> f64 {
        self.k_lin * mass.sqrt()
    }
}

/// Scaling law r = l_monomer · DP^ν
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolymerRadiusModel {
    /// Effective monomer length \[m\]
    pub monomer_length: f64,
    /// Scaling exponent ν
    pub flory_exponent: f64,
}

impl Default for PolymerRadiusModel {
    fn default() -> Self {
        Self {
            monomer_length: MONOMER_LENGTH,
            flory_exponent: FLORY_EXPONENT,
        }
    }
}

impl PolymerRadiusModel {
    /// Radius for a degree of polymerization
    pub fn radius(&self, degree_of_polymerization: u32) -> f64 {
        self.monomer_length * (degree_of_polymerization as f64).powf(self.flory_exponent)
    }
}

/// Which radius model applies to a computation
///
/// Exactly one model is used per estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RadiusModel {
    /// Compact or linear small molecule
    Linear(LinearRadiusModel),
    /// Polymer chain
    Polymer(PolymerRadiusModel),
}

impl RadiusModel {
    /// Short label used in reports and logs
    pub fn label(&self) -> &'static str {
        match self {
            RadiusModel::Linear(_) => "linear",
            RadiusModel::Polymer(_) => "polymer",
        }
    }

    /// Radius \[m\] with the model's own parameters
    ///
    /// The linear model reads `molar_mass`, the polymer model reads
    /// `degree_of_polymerization`; the other argument is ignored.
    pub fn radius(&self, molar_mass: f64, degree_of_polymerization: u32) -> f64 {
        match self {
            RadiusModel::Linear(model) => model.radius(molar_mass),
            RadiusModel::Polymer(model) => model.radius(degree_of_polymerization),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
