//! Backend capability introspection.
//!
//! Describes what a backend can do: qubit count, supported gates, and
//! shot limits. Compilers use this to decide whether transpilation is
//! needed; the CLI uses it for backend listings.

use serde::{Deserialize, Serialize};

/// Gate names of the full IR gate set (OpenQASM 3 naming).
const UNIVERSAL_GATES: &[&str] = &[
    "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "cx", "cy", "cz", "swap", "ccx",
];

/// Hardware capabilities of a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Number of qubits available.
    pub num_qubits: u32,
    /// Supported gate set (OpenQASM 3 naming convention).
    pub gate_set: Vec<String>,
    /// Maximum number of shots per job.
    pub max_shots: u32,
    /// Whether this is a simulator (`true`) vs real hardware (`false`).
    pub is_simulator: bool,
}

impl Capabilities {
    /// Create capabilities for a statevector simulator.
    ///
    /// Simulators support the full IR gate set and a generous shot limit.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            name: "simulator".into(),
            num_qubits,
            gate_set: UNIVERSAL_GATES.iter().map(|s| (*s).into()).collect(),
            max_shots: 100_000,
            is_simulator: true,
        }
    }

    /// Check whether a gate (by name) is supported.
    pub fn supports_gate(&self, name: &str) -> bool {
        self.gate_set.iter().any(|g| g == name)
    }
}
