//! Molar mass estimation from a simplified chemical formula
//!
//! A formula is read as a sequence of tokens, each made of an upper-case
//! letter, an optional lower-case letter and an optional count:
//!
//! ```text
//! C6H12O6  →  C×6  H×12  O×6
//! CH3Cl    →  C×1  H×3   Cl×1
//! ```
//!
//! Characters that cannot start a token (parentheses, charges, stray digits)
//! are skipped. There is no grouping and no charge handling.
//!
//! # Tolerance
//!
//! Symbols missing from the [`ElementTable`] contribute **zero** mass. The
//! estimator never fails; callers that care can inspect
//! [`MassEstimate::unknown_symbols`] or [`MassEstimate::is_degraded`] and
//! treat a suspiciously low mass as a typo in the formula.
//!
//! # Example
//!
//! ```rust
//! use dosy_rs::physics::molecular_mass;
//!
//! let glucose = molecular_mass("C6H12O6");
//! assert!((glucose - 180.156).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

// =================================================================================================
// Element Table
// =================================================================================================

/// Atomic weights known to the default table \[g/mol\]
const DEFAULT_WEIGHTS: [(&str, f64); 7] = [
    ("H", 1.008),
    ("C", 12.01),
    ("N", 14.01),
    ("O", 16.00),
    ("Cl", 35.45),
    ("Br", 79.90),
    ("I", 126.90),
];

/// Immutable mapping from element symbol to atomic weight \[g/mol\]
///
/// Symbols are case-sensitive: `"Cl"` is chlorine, `"CL"` is carbon
/// followed by an unknown `"L"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTable {
    weights: BTreeMap<String, f64>,
}

impl Default for ElementTable {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS
                .iter()
                .map(|(symbol, weight)| (symbol.to_string(), *weight))
                .collect(),
        }
    }
}

impl ElementTable {
    /// Create an empty table (every symbol is unknown)
    pub fn empty() -> Self {
        Self { weights: BTreeMap::new() }
    }

    /// Builder pattern: add or replace an element
    pub fn with_element(mut self, symbol: &str, atomic_weight: f64) -> Self {
        self.weights.insert(symbol.to_string(), atomic_weight);
        self
    }

    /// Atomic weight of a symbol, if known
    pub fn weight(&self, symbol: &str) -> Option<f64> {
        self.weights.get(symbol).copied()
    }

    /// Known symbols, sorted
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Estimate the molar mass of a formula
    ///
    /// Unknown symbols are recorded (once each, in order of appearance) and
    /// contribute nothing to the sum.
    pub fn estimate(&self, formula: &str) -> MassEstimate {
        let mut mass = 0.0;
        let mut tokens = 0;
        let mut unknown_symbols: Vec<String> = Vec::new();

        for (symbol, count) in tokenize(formula) {
            tokens += 1;
            match self.weight(symbol) {
                Some(weight) => mass += weight * count,
                None => {
                    if !unknown_symbols.iter().any(|s| s == symbol) {
                        unknown_symbols.push(symbol.to_string());
                    }
                }
            }
        }

        if !unknown_symbols.is_empty() {
            log::warn!(
                "Formula '{}' contains unknown element symbols {:?}; they contribute no mass",
                formula,
                unknown_symbols
            );
        }

        MassEstimate { mass, tokens, unknown_symbols }
    }
}

// =================================================================================================
// Mass Estimate
// =================================================================================================

/// Result of a formula mass estimation
#[derive(Debug, Clone, PartialEq)]
pub struct MassEstimate {
    /// Additive molar mass \[g/mol\]
    pub mass: f64,

    /// Number of element tokens read from the formula
    pub tokens: usize,

    /// Symbols that were not found in the element table
    pub unknown_symbols: Vec<String>,
}

impl MassEstimate {
    /// True when part of the formula could not be interpreted
    ///
    /// Either a symbol was unknown or the formula contained no token at all.
    pub fn is_degraded(&self) -> bool {
        self.tokens == 0 || !self.unknown_symbols.is_empty()
    }
}

/// Molar mass of a formula using the default element table \[g/mol\]
pub fn molecular_mass(formula: &str) -> f64 {
    ElementTable::default().estimate(formula).mass
}

// =================================================================================================
// Tokenizer
// =================================================================================================

/// Split a formula into `(symbol, count)` pairs
///
/// A missing count means 1. Counts are read as `f64`, so long digit runs
/// keep their magnitude.
fn tokenize(formula: &str) -> Vec<(&str, f64)> {
    let bytes = formula.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_uppercase() {
            i += 1;
            continue;
        }

        let start = i;
        i += 1;
        if i < bytes.len() && bytes[i].is_ascii_lowercase() {
            i += 1;
        }
        let symbol = &formula[start..i];

        let digits_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        let count = if digits_start == i {
            1.0
        } else {
            formula[digits_start..i].parse::<f64>().unwrap_or(f64::INFINITY)
        };

        tokens.push((symbol, count));
    }

    tokens
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(tokenize("C6H12O6"), vec![("C", 6.0), ("H", 12.0), ("O", 6.0)]);
    }

    #[test]
    fn test_tokenize_implicit_count_and_two_letters() {
        assert_eq!(tokenize("CH3Cl"), vec![("C", 1.0), ("H", 3.0), ("Cl", 1.0)]);
    }

    #[test]
    fn test_tokenize_skips_noise() {
        // Parentheses, leading digits and lower-case starts are ignored
        assert_eq!(tokenize("2(CH2)n"), vec![("C", 1.0), ("H", 2.0)]);
        assert!(tokenize("abc 123").is_empty());
    }

    #[test]
    fn test_glucose_mass() {
        assert_relative_eq!(molecular_mass("C6H12O6"), 180.156, epsilon = 1e-9);
    }

    #[test]
    fn test_halogens() {
        // CHCl3 = 12.01 + 1.008 + 3 × 35.45
        assert_relative_eq!(molecular_mass("CHCl3"), 119.368, epsilon = 1e-9);
        assert_relative_eq!(molecular_mass("CH3Br"), 94.934, epsilon = 1e-9);
        assert_relative_eq!(molecular_mass("CH3I"), 141.934, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_symbol_contributes_zero() {
        let table = ElementTable::default();
        let estimate = table.estimate("NaCl");

        assert_relative_eq!(estimate.mass, 35.45, epsilon = 1e-12);
        assert_eq!(estimate.unknown_symbols, vec!["Na".to_string()]);
        assert!(estimate.is_degraded());
    }

    #[test]
    fn test_unknown_symbol_recorded_once() {
        let estimate = ElementTable::default().estimate("SiO2Si");
        assert_eq!(estimate.unknown_symbols, vec!["Si".to_string()]);
    }

    #[test]
    fn test_malformed_formula_is_zero() {
        let estimate = ElementTable::default().estimate("glucose");
        assert_eq!(estimate.mass, 0.0);
        assert_eq!(estimate.tokens, 0);
        assert!(estimate.is_degraded());

        assert_eq!(molecular_mass(""), 0.0);
    }

    #[test]
    fn test_clean_formula_not_degraded() {
        assert!(!ElementTable::default().estimate("C2H6O").is_degraded());
    }

    #[test]
    fn test_custom_table() {
        let table = ElementTable::empty().with_element("Na", 22.99);
        assert_relative_eq!(table.estimate("Na2").mass, 45.98, epsilon = 1e-12);
        assert_eq!(table.symbols().collect::<Vec<_>>(), vec!["Na"]);
    }

    #[test]
    fn test_huge_counts_keep_magnitude() {
        // 99 999 999 999 carbons, far beyond u32
        let mass = molecular_mass("C99999999999H");
        assert_relative_eq!(mass, 99_999_999_999.0 * 12.01 + 1.008, max_relative = 1e-12);
        assert!(mass > 1.0e12);
    }

    #[test]
    fn test_case_sensitivity() {
        // "CL" is carbon followed by an unknown "L"
        let estimate = ElementTable::default().estimate("CL");
        assert_relative_eq!(estimate.mass, 12.01, epsilon = 1e-12);
        assert_eq!(estimate.unknown_symbols, vec!["L".to_string()]);
    }
}
