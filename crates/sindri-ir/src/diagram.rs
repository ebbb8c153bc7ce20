//! Terminal rendering of circuits.
//!
//! Produces a fixed-width text diagram with one wire row per qubit and
//! gates packed into time columns, e.g. for a Bell circuit:
//!
//! ```text
//! q0: ──H───●───M──
//! q1: ──────X───M──
//! ```

use crate::circuit::Circuit;
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};

/// Render a circuit as a text diagram.
///
/// Classical wires are not drawn; a measurement shows as `M` on its qubit
/// wire. Barriers occupy a column of `░` on the qubits they touch.
pub fn draw(circuit: &Circuit) -> String {
    let num_qubits = circuit.num_qubits();
    if num_qubits == 0 {
        return String::new();
    }

    // Pack instructions into columns with a per-wire frontier walk.
    let mut front = vec![0usize; num_qubits];
    let mut columns: Vec<Vec<(usize, String)>> = vec![];

    for inst in circuit.instructions() {
        let col = inst
            .qubits
            .iter()
            .map(|q| front[q.0 as usize])
            .max()
            .unwrap_or(0);
        if columns.len() <= col {
            columns.resize_with(col + 1, Vec::new);
        }
        for (qubit, label) in inst.qubits.iter().zip(labels(inst)) {
            columns[col].push((qubit.0 as usize, label));
        }
        for q in &inst.qubits {
            front[q.0 as usize] = col + 1;
        }
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|c| c.iter().map(|(_, l)| l.chars().count()).max().unwrap_or(1) + 2)
        .collect();

    let prefix_width = format!("q{}", num_qubits - 1).len();
    let mut out = String::new();
    for row in 0..num_qubits {
        out.push_str(&format!("{:>prefix_width$}: ", format!("q{row}")));
        for (col, width) in columns.iter().zip(&widths) {
            let label = col
                .iter()
                .find(|(r, _)| *r == row)
                .map_or(String::new(), |(_, l)| l.clone());
            let len = label.chars().count();
            let left = (width - len) / 2;
            let right = width - len - left;
            out.push_str(&"─".repeat(left));
            out.push_str(&label);
            out.push_str(&"─".repeat(right));
        }
        out.push('\n');
    }
    out
}

/// Per-qubit labels for an instruction, aligned with its operand order.
fn labels(inst: &Instruction) -> Vec<String> {
    match inst.kind {
        InstructionKind::Gate(gate) => match gate {
            StandardGate::CX => vec!["●".into(), "X".into()],
            StandardGate::CY => vec!["●".into(), "Y".into()],
            StandardGate::CZ => vec!["●".into(), "●".into()],
            StandardGate::Swap => vec!["✕".into(), "✕".into()],
            StandardGate::CCX => vec!["●".into(), "●".into(), "X".into()],
            g => vec![g.name().to_uppercase()],
        },
        InstructionKind::Measure => vec!["M".into(); inst.qubits.len()],
        InstructionKind::Barrier => vec!["░".into(); inst.qubits.len()],
    }
}
