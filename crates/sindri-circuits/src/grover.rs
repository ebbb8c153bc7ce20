//! Grover's search algorithm circuit generator.
//!
//! Grover's algorithm finds a marked item in an unstructured database
//! with O(sqrt(N)) queries, compared to O(N) classically.

use std::f64::consts::PI;

use sindri_ir::{Circuit, IrError, QubitId};
use thiserror::Error;

/// Widest register with an exact ancilla-free multi-controlled-Z here.
const MAX_EXACT_WIDTH: usize = 3;

/// Errors that can occur while generating a search circuit.
#[derive(Debug, Error)]
pub enum GroverError {
    /// Marked state does not fit in the register.
    #[error("Marked state {marked} exceeds maximum {max} for {n_qubits} qubits")]
    MarkedStateOutOfRange {
        /// The requested marked state.
        marked: usize,
        /// Largest representable state.
        max: usize,
        /// Register width.
        n_qubits: usize,
    },

    /// Register width outside the exactly-constructible range.
    #[error("No exact multi-controlled-Z construction for {0} qubits (supported: 1 to {MAX_EXACT_WIDTH})")]
    UnsupportedWidth(usize),

    /// Circuit construction failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for circuit generation.
pub type GroverResult<T> = Result<T, GroverError>;

/// Generate a Grover search circuit.
///
/// The circuit prepares a uniform superposition, applies `iterations`
/// rounds of oracle + diffusion, and measures every qubit. The oracle
/// flips the phase of `marked`; when every bit of `marked` is set it
/// reduces to a bare multi-controlled Z between the Hadamard layers.
///
/// # Arguments
/// * `n_qubits` - Number of qubits (search space size = 2^n, 1 to 3)
/// * `marked` - The state to find (0 to 2^n - 1)
/// * `iterations` - Number of Grover iterations (see [`optimal_iterations`])
pub fn grover(n_qubits: usize, marked: usize, iterations: usize) -> GroverResult<Circuit> {
    if n_qubits == 0 || n_qubits > MAX_EXACT_WIDTH {
        return Err(GroverError::UnsupportedWidth(n_qubits));
    }
    let max = (1 << n_qubits) - 1;
    if marked > max {
        return Err(GroverError::MarkedStateOutOfRange {
            marked,
            max,
            n_qubits,
        });
    }

    let mut circuit = Circuit::with_size("grover", n_qubits as u32, n_qubits as u32);

    // Uniform superposition over all states.
    for i in 0..n_qubits {
        circuit.h(QubitId(i as u32))?;
    }

    for _ in 0..iterations {
        apply_oracle(&mut circuit, n_qubits, marked)?;
        apply_diffusion(&mut circuit, n_qubits)?;
    }

    circuit.measure_all()?;

    Ok(circuit)
}

/// Calculate the optimal number of Grover iterations.
///
/// For a single marked item in a space of size N = 2^n the amplitude of
/// the marked state after k iterations is sin((2k+1)·θ) with
/// θ = asin(1/√N); the optimum is ⌊π/(4θ)⌋, clamped to at least 1.
/// For n = 2 this gives exactly 1 iteration with success probability 1.
pub fn optimal_iterations(n_qubits: usize) -> usize {
    let n = (1usize << n_qubits) as f64;
    let theta = (1.0 / n.sqrt()).asin();
    let optimal = (PI / (4.0 * theta)).floor() as usize;
    optimal.max(1)
}

/// Probability of measuring the marked state after `iterations` rounds.
pub fn success_probability(n_qubits: usize, iterations: usize) -> f64 {
    let n = (1usize << n_qubits) as f64;
    let theta = (1.0 / n.sqrt()).asin();
    ((2 * iterations + 1) as f64 * theta).sin().powi(2)
}

/// Apply the oracle for the marked state.
///
/// X gates conjugate a multi-controlled Z so the phase flip lands on
/// `marked`: qubits whose bit is 0 are flipped before and after.
fn apply_oracle(circuit: &mut Circuit, n_qubits: usize, marked: usize) -> GroverResult<()> {
    for i in 0..n_qubits {
        if (marked >> i) & 1 == 0 {
            circuit.x(QubitId(i as u32))?;
        }
    }

    apply_multi_controlled_z(circuit, n_qubits)?;

    for i in 0..n_qubits {
        if (marked >> i) & 1 == 0 {
            circuit.x(QubitId(i as u32))?;
        }
    }
    Ok(())
}

/// Apply a multi-controlled Z gate across the whole register.
///
/// Exact constructions only: Z for 1 qubit, CZ for 2, H·CCX·H for 3.
fn apply_multi_controlled_z(circuit: &mut Circuit, n_qubits: usize) -> GroverResult<()> {
    match n_qubits {
        1 => {
            circuit.z(QubitId(0))?;
        }
        2 => {
            circuit.cz(QubitId(0), QubitId(1))?;
        }
        3 => {
            circuit.h(QubitId(2))?;
            circuit.ccx(QubitId(0), QubitId(1), QubitId(2))?;
            circuit.h(QubitId(2))?;
        }
        other => return Err(GroverError::UnsupportedWidth(other)),
    }
    Ok(())
}

/// Apply the diffusion operator (2|s⟩⟨s| - I).
///
/// H-layer, X-layer, multi-controlled Z, X-layer, H-layer.
fn apply_diffusion(circuit: &mut Circuit, n_qubits: usize) -> GroverResult<()> {
    for i in 0..n_qubits {
        circuit.h(QubitId(i as u32))?;
    }
    for i in 0..n_qubits {
        circuit.x(QubitId(i as u32))?;
    }

    apply_multi_controlled_z(circuit, n_qubits)?;

    for i in 0..n_qubits {
        circuit.x(QubitId(i as u32))?;
    }
    for i in 0..n_qubits {
        circuit.h(QubitId(i as u32))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sindri_ir::StandardGate;

    #[test]
    fn test_optimal_iterations() {
        assert_eq!(optimal_iterations(1), 1); // N=2, θ=π/4, π/(4θ)=1
        assert_eq!(optimal_iterations(2), 1); // N=4, θ=π/6, π/(4θ)=1.5
        assert_eq!(optimal_iterations(3), 2); // N=8
        assert_eq!(optimal_iterations(4), 3); // N=16
    }

    #[test]
    fn test_success_probability_exact_for_two_qubits() {
        // (2·1+1)·π/6 = π/2: the 2-qubit circuit measures the marked
        // state with certainty after one iteration.
        assert!((success_probability(2, 1) - 1.0).abs() < 1e-12);
        // Over-rotation: a second iteration drops to 25%.
        assert!((success_probability(2, 2) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_grover_two_qubit_marked_all_ones() {
        // With marked = 0b11 the oracle needs no X conjugation: the
        // circuit is H-layer, CZ, diffusion, measures.
        let circuit = grover(2, 0b11, 1).unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);

        let gates: Vec<_> = circuit
            .instructions()
            .iter()
            .filter_map(|i| i.as_gate())
            .collect();
        assert_eq!(
            gates.iter().filter(|g| **g == StandardGate::CZ).count(),
            2 // oracle + diffusion
        );
        assert_eq!(gates.iter().filter(|g| **g == StandardGate::H).count(), 6);
        assert_eq!(gates.iter().filter(|g| **g == StandardGate::X).count(), 4);
        assert_eq!(
            circuit.instructions().iter().filter(|i| i.is_measure()).count(),
            2
        );
    }

    #[test]
    fn test_grover_oracle_conjugation() {
        // marked = 0b01: qubit 1 has a 0 bit, so the oracle adds two X
        // gates on it (plus the four in the diffusion X-layer).
        let circuit = grover(2, 0b01, 1).unwrap();
        let x_count = circuit
            .instructions()
            .iter()
            .filter(|i| i.as_gate() == Some(StandardGate::X))
            .count();
        assert_eq!(x_count, 6);
    }

    #[test]
    fn test_grover_three_qubits() {
        let circuit = grover(3, 5, 2).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert!(circuit.depth() > 0);
        // Each MCZ is H·CCX·H; oracle + diffusion per iteration.
        let ccx_count = circuit
            .instructions()
            .iter()
            .filter(|i| i.as_gate() == Some(StandardGate::CCX))
            .count();
        assert_eq!(ccx_count, 4);
    }

    #[test]
    fn test_grover_zero_iterations() {
        let circuit = grover(2, 0, 0).unwrap();
        // Superposition and measurement only.
        assert_eq!(circuit.num_ops(), 4);
    }

    #[test]
    fn test_marked_state_out_of_range() {
        let err = grover(2, 4, 1).unwrap_err();
        assert!(matches!(err, GroverError::MarkedStateOutOfRange { .. }));
    }

    #[test]
    fn test_unsupported_widths() {
        assert!(matches!(
            grover(0, 0, 1),
            Err(GroverError::UnsupportedWidth(0))
        ));
        assert!(matches!(
            grover(4, 0, 1),
            Err(GroverError::UnsupportedWidth(4))
        ));
    }
}
