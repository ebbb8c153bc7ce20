//! Pass manager for orchestrating compilation.

use tracing::{debug, info, instrument};

use sindri_ir::Circuit;

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::passes::{BasisTranslation, CancelInversePairs};
use crate::property::{BasisGates, PropertySet};

/// Manages and executes a sequence of compilation passes.
pub struct PassManager {
    /// The passes to execute, in order.
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    /// Create a new empty pass manager.
    pub fn new() -> Self {
        Self { passes: vec![] }
    }

    /// Add a pass to the manager.
    pub fn add_pass(&mut self, pass: impl Pass + 'static) {
        self.passes.push(Box::new(pass));
    }

    /// Run all passes on the given circuit.
    #[instrument(skip(self, circuit, properties))]
    pub fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        info!(
            "Running pass manager with {} passes on circuit with {} qubits",
            self.passes.len(),
            circuit.num_qubits()
        );

        for pass in &self.passes {
            if pass.should_run(circuit, properties) {
                debug!("Running pass: {}", pass.name());
                pass.run(circuit, properties)?;
                debug!("Pass {} completed, ops: {}", pass.name(), circuit.num_ops());
            } else {
                debug!("Skipping pass: {}", pass.name());
            }
        }

        info!(
            "Pass manager completed, final depth: {}, ops: {}",
            circuit.depth(),
            circuit.num_ops()
        );

        Ok(())
    }

    /// Get the number of passes.
    pub fn len(&self) -> usize {
        self.passes.len()
    }

    /// Check if the manager has no passes.
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }
}

impl Default for PassManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating pass managers with preset configurations.
pub struct PassManagerBuilder {
    /// Optimization level (0-3).
    optimization_level: u8,
    /// Target properties.
    properties: PropertySet,
}

impl PassManagerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            optimization_level: 1,
            properties: PropertySet::new(),
        }
    }

    /// Set the optimization level.
    ///
    /// - Level 0: required transformations only (basis translation)
    /// - Level 1+: inverse-pair cancellation
    #[must_use]
    pub fn with_optimization_level(mut self, level: u8) -> Self {
        self.optimization_level = level.min(3);
        self
    }

    /// Set the target basis.
    #[must_use]
    pub fn with_basis(mut self, basis: BasisGates) -> Self {
        self.properties.basis_gates = Some(basis);
        self
    }

    /// Build the pass manager and return it with the properties.
    pub fn build(self) -> (PassManager, PropertySet) {
        let mut pm = PassManager::new();

        if self.properties.basis_gates.is_some() {
            pm.add_pass(BasisTranslation);
        }

        if self.optimization_level >= 1 {
            pm.add_pass(CancelInversePairs);
        }

        (pm, self.properties)
    }
}

impl Default for PassManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sindri_ir::QubitId;

    #[test]
    fn test_empty_pass_manager() {
        let pm = PassManager::new();
        assert!(pm.is_empty());
        assert_eq!(pm.len(), 0);
    }

    #[test]
    fn test_pass_manager_run_noop() {
        let pm = PassManager::new();
        let mut props = PropertySet::new();

        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.h(QubitId(0)).unwrap();
        circuit.cx(QubitId(0), QubitId(1)).unwrap();

        pm.run(&mut circuit, &mut props).unwrap();
        assert_eq!(circuit.num_ops(), 2);
    }

    #[test]
    fn test_builder_with_basis() {
        let (pm, props) = PassManagerBuilder::new()
            .with_optimization_level(2)
            .with_basis(BasisGates::cnot())
            .build();

        assert_eq!(pm.len(), 2);
        assert!(props.basis_gates.is_some());
    }

    #[test]
    fn test_builder_level_zero() {
        let (pm, _) = PassManagerBuilder::new()
            .with_optimization_level(0)
            .with_basis(BasisGates::cnot())
            .build();

        // Translation only.
        assert_eq!(pm.len(), 1);
    }

    #[test]
    fn test_full_pipeline() {
        // CZ then CZ: translation expands both, cancellation removes
        // everything (H·H pairs and the CX pair).
        let mut circuit = Circuit::with_size("test", 2, 0);
        circuit.cz(QubitId(0), QubitId(1)).unwrap();
        circuit.cz(QubitId(0), QubitId(1)).unwrap();

        let (pm, mut props) = PassManagerBuilder::new()
            .with_optimization_level(1)
            .with_basis(BasisGates::cnot())
            .build();
        pm.run(&mut circuit, &mut props).unwrap();

        assert_eq!(circuit.num_ops(), 0);
    }
}
