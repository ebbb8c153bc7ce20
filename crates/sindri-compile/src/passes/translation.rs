//! Basis translation pass.

use tracing::debug;

use sindri_ir::{Circuit, Instruction, QubitId, StandardGate};

use crate::error::{CompileError, CompileResult};
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Round limit for the decomposition fixpoint. Every rule bottoms out in
/// {h, s, sdg, t, tdg, x, z, cx} within a handful of rounds.
const MAX_ROUNDS: usize = 16;

/// Basis translation pass.
///
/// Rewrites every gate outside the target basis using fixed decomposition
/// rules, repeating until the whole circuit is inside the basis.
/// Measurements and barriers pass through untouched. A gate with no rule
/// fails with [`CompileError::UnsupportedGate`].
pub struct BasisTranslation;

impl Pass for BasisTranslation {
    fn name(&self) -> &'static str {
        "BasisTranslation"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()> {
        let Some(basis) = properties.basis_gates.clone() else {
            return Ok(());
        };

        for round in 0..MAX_ROUNDS {
            let mut changed = false;
            let mut rewritten = Vec::with_capacity(circuit.instructions().len());

            for inst in circuit.instructions() {
                match inst.as_gate() {
                    Some(gate) if !basis.contains(gate.name()) => {
                        let expansion = decompose(gate, &inst.qubits)
                            .ok_or_else(|| CompileError::UnsupportedGate(gate.name().into()))?;
                        changed = true;
                        rewritten.extend(expansion);
                    }
                    _ => rewritten.push(inst.clone()),
                }
            }

            *circuit.instructions_mut() = rewritten;

            if !changed {
                debug!("Basis translation converged after {} rounds", round);
                return Ok(());
            }
        }

        Err(CompileError::TranslationDepthExceeded(MAX_ROUNDS))
    }

    fn should_run(&self, _circuit: &Circuit, properties: &PropertySet) -> bool {
        properties.basis_gates.is_some()
    }
}

/// One decomposition step for a gate, or `None` if no rule exists.
///
/// Rules may emit gates that are themselves outside the basis; the
/// fixpoint loop in `run` keeps expanding until everything lands.
fn decompose(gate: StandardGate, qubits: &[QubitId]) -> Option<Vec<Instruction>> {
    use StandardGate::*;

    let single = |g: StandardGate, q: QubitId| Instruction::single_qubit_gate(g, q);
    let two = |g: StandardGate, a: QubitId, b: QubitId| Instruction::two_qubit_gate(g, a, b);

    Some(match gate {
        // Identity drops.
        I => vec![],

        Z => vec![single(S, qubits[0]), single(S, qubits[0])],
        S => vec![single(T, qubits[0]), single(T, qubits[0])],
        Sdg => vec![single(Tdg, qubits[0]), single(Tdg, qubits[0])],
        X => vec![
            single(H, qubits[0]),
            single(Z, qubits[0]),
            single(H, qubits[0]),
        ],
        // Y = S·X·Sdg exactly (no global phase).
        Y => vec![
            single(Sdg, qubits[0]),
            single(X, qubits[0]),
            single(S, qubits[0]),
        ],

        CZ => vec![
            single(H, qubits[1]),
            two(CX, qubits[0], qubits[1]),
            single(H, qubits[1]),
        ],
        CY => vec![
            single(Sdg, qubits[1]),
            two(CX, qubits[0], qubits[1]),
            single(S, qubits[1]),
        ],
        Swap => vec![
            two(CX, qubits[0], qubits[1]),
            two(CX, qubits[1], qubits[0]),
            two(CX, qubits[0], qubits[1]),
        ],

        // Standard Clifford+T Toffoli network.
        CCX => {
            let (a, b, c) = (qubits[0], qubits[1], qubits[2]);
            vec![
                single(H, c),
                two(CX, b, c),
                single(Tdg, c),
                two(CX, a, c),
                single(T, c),
                two(CX, b, c),
                single(Tdg, c),
                two(CX, a, c),
                single(T, b),
                single(T, c),
                single(H, c),
                two(CX, a, b),
                single(T, a),
                single(Tdg, b),
                two(CX, a, b),
            ]
        }

        // No rule: H, T, Tdg, CX are the floor of every chain above.
        H | T | Tdg | CX => return None,
    })
}
