//! `PropertySet` and target-basis description for pass communication.
//!
//! The [`PropertySet`] is the shared context passed through all
//! compilation passes; currently it carries the target basis the
//! translation pass rewrites toward.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A target gate basis, as a set of gate names (OpenQASM 3 naming).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasisGates {
    gates: FxHashSet<String>,
}

impl BasisGates {
    /// Create a basis from gate names.
    pub fn new(gates: impl IntoIterator<Item = String>) -> Self {
        Self {
            gates: gates.into_iter().collect(),
        }
    }

    /// The full IR gate set: every gate is native.
    pub fn universal() -> Self {
        Self::new(
            ["id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "cx", "cy", "cz", "swap", "ccx"]
                .map(String::from),
        )
    }

    /// A CNOT-based Clifford+T basis: {h, s, sdg, t, tdg, x, z, cx}.
    ///
    /// Every other IR gate decomposes into it; targeting this basis
    /// forces the H·CX·H expansion of CZ.
    pub fn cnot() -> Self {
        Self::new(["h", "s", "sdg", "t", "tdg", "x", "z", "cx"].map(String::from))
    }

    /// Check whether a gate name is in the basis.
    pub fn contains(&self, name: &str) -> bool {
        self.gates.contains(name)
    }

    /// Iterate over the gate names in the basis.
    pub fn gates(&self) -> impl Iterator<Item = &str> {
        self.gates.iter().map(String::as_str)
    }

    /// Number of gates in the basis.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the basis is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Shared context passed through all compilation passes.
#[derive(Debug, Clone, Default)]
pub struct PropertySet {
    /// Target basis for translation, if any.
    pub basis_gates: Option<BasisGates>,
}

impl PropertySet {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target basis.
    #[must_use]
    pub fn with_basis(mut self, basis: BasisGates) -> Self {
        self.basis_gates = Some(basis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_contains() {
        let basis = BasisGates::cnot();
        assert!(basis.contains("h"));
        assert!(basis.contains("cx"));
        assert!(!basis.contains("cz"));
        assert!(!basis.contains("ccx"));
    }

    #[test]
    fn test_universal_covers_cnot() {
        let universal = BasisGates::universal();
        for gate in BasisGates::cnot().gates() {
            assert!(universal.contains(gate));
        }
    }

    #[test]
    fn test_property_set() {
        let props = PropertySet::new().with_basis(BasisGates::cnot());
        assert!(props.basis_gates.is_some());
        assert!(PropertySet::new().basis_gates.is_none());
    }
}
