//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Standard gates with known semantics.
///
/// The set is deliberately small: every gate here is either produced by the
/// circuit library or required by a transpiler decomposition rule. None of
/// them carries a parameter, so a gate is fully described by its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford and T gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
}

impl StandardGate {
    /// Get the name of this gate (OpenQASM 3 naming).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
            StandardGate::CCX => "ccx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg => 1,

            StandardGate::CX | StandardGate::CY | StandardGate::CZ | StandardGate::Swap => 2,

            StandardGate::CCX => 3,
        }
    }

    /// Check whether the gate is its own inverse.
    pub fn is_self_inverse(&self) -> bool {
        !matches!(
            self,
            StandardGate::S | StandardGate::Sdg | StandardGate::T | StandardGate::Tdg
        )
    }

    /// Get the inverse of this gate.
    pub fn inverse(&self) -> StandardGate {
        match self {
            StandardGate::S => StandardGate::Sdg,
            StandardGate::Sdg => StandardGate::S,
            StandardGate::T => StandardGate::Tdg,
            StandardGate::Tdg => StandardGate::T,
            g => *g,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CZ.num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);
        assert_eq!(StandardGate::H.name(), "h");
        assert_eq!(StandardGate::Sdg.name(), "sdg");
    }

    #[test]
    fn test_self_inverse() {
        assert!(StandardGate::H.is_self_inverse());
        assert!(StandardGate::CX.is_self_inverse());
        assert!(StandardGate::Swap.is_self_inverse());
        assert!(!StandardGate::S.is_self_inverse());
        assert!(!StandardGate::T.is_self_inverse());
    }

    #[test]
    fn test_inverse() {
        assert_eq!(StandardGate::S.inverse(), StandardGate::Sdg);
        assert_eq!(StandardGate::Tdg.inverse(), StandardGate::T);
        assert_eq!(StandardGate::CZ.inverse(), StandardGate::CZ);
    }
}
