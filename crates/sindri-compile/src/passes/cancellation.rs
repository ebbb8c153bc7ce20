//! Inverse-pair cancellation pass.

use rustc_hash::FxHashMap;
use tracing::debug;

use sindri_ir::{Circuit, Instruction};

use crate::error::CompileResult;
use crate::pass::{Pass, PassKind};
use crate::property::PropertySet;

/// Inverse-pair cancellation pass.
///
/// Removes adjacent gate pairs that compose to identity: a self-inverse
/// gate repeated on identical operands (H·H, X·X, CX·CX, ...) or an
/// inverse pair (S·Sdg, T·Tdg) in either order. Two gates are adjacent
/// when no intervening instruction touches any of their qubits;
/// measurements and barriers block cancellation across them.
pub struct CancelInversePairs;

impl CancelInversePairs {
    /// Scan once, returning the sequence with one generation of pairs
    /// removed, or `None` if nothing cancelled.
    fn cancel_once(instructions: &[Instruction]) -> Option<Vec<Instruction>> {
        let mut removed = vec![false; instructions.len()];
        // Wire frontier: qubit id → index of the last surviving
        // instruction touching it.
        let mut last: FxHashMap<u32, usize> = FxHashMap::default();
        let mut any = false;

        for (i, inst) in instructions.iter().enumerate() {
            if let Some(gate) = inst.as_gate() {
                let pred = inst
                    .qubits
                    .first()
                    .and_then(|q| last.get(&q.0).copied())
                    .filter(|j| {
                        inst.qubits
                            .iter()
                            .all(|q| last.get(&q.0).copied() == Some(*j))
                    });

                if let Some(j) = pred {
                    let prev = &instructions[j];
                    if !removed[j]
                        && prev.as_gate() == Some(gate.inverse())
                        && prev.qubits == inst.qubits
                    {
                        removed[i] = true;
                        removed[j] = true;
                        any = true;
                        // Expose whatever preceded the pair on the next
                        // fixpoint round rather than tracking it here.
                        for q in &inst.qubits {
                            last.remove(&q.0);
                        }
                        continue;
                    }
                }
            }

            // Gates that didn't cancel, measures, and barriers all
            // advance the frontier of their qubits.
            for q in &inst.qubits {
                last.insert(q.0, i);
            }
        }

        if !any {
            return None;
        }

        Some(
            instructions
                .iter()
                .enumerate()
                .filter(|(i, _)| !removed[*i])
                .map(|(_, inst)| inst.clone())
                .collect(),
        )
    }
}

impl Pass for CancelInversePairs {
    fn name(&self) -> &'static str {
        "CancelInversePairs"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit, _properties: &mut PropertySet) -> CompileResult<()> {
        // Keep cancelling until no more pairs are found, bounded to
        // avoid pathological cases.
        const MAX_ITERATIONS: usize = 100;

        for iteration in 0..MAX_ITERATIONS {
            match Self::cancel_once(circuit.instructions()) {
                Some(survivors) => *circuit.instructions_mut() = survivors,
                None => {
                    debug!("Cancellation converged after {} iterations", iteration);
                    break;
                }
            }
        }

        Ok(())
    }
}
