//! Measurement safety across the compilation pipeline.
//!
//! Optimization passes must never reorder, merge, or drop measurement
//! instructions, and translation must leave a terminal measurement
//! terminal.

use sindri_circuits::grover;
use sindri_compile::{BasisGates, PassManagerBuilder};
use sindri_ir::{Circuit, QubitId};

fn transpile(circuit: &mut Circuit, level: u8) {
    let (pm, mut props) = PassManagerBuilder::new()
        .with_optimization_level(level)
        .with_basis(BasisGates::cnot())
        .build();
    pm.run(circuit, &mut props).unwrap();
}

/// Index of the first measure and count of trailing non-gate ops.
fn measures_are_terminal(circuit: &Circuit) -> bool {
    let first_measure = circuit
        .instructions()
        .iter()
        .position(|i| i.is_measure());
    match first_measure {
        None => true,
        Some(pos) => circuit.instructions()[pos..]
            .iter()
            .all(|i| !i.is_gate()),
    }
}

#[test]
fn grover_transpiles_with_measures_intact() {
    for marked in 0..4 {
        let mut circuit = grover(2, marked, 1).unwrap();
        transpile(&mut circuit, 1);

        let measures = circuit
            .instructions()
            .iter()
            .filter(|i| i.is_measure())
            .count();
        assert_eq!(measures, 2, "marked={marked}");
        assert!(measures_are_terminal(&circuit), "marked={marked}");
        // Everything landed in the target basis.
        for inst in circuit.instructions().iter().filter(|i| i.is_gate()) {
            assert!(
                BasisGates::cnot().contains(inst.name()),
                "gate {} survived translation",
                inst.name()
            );
        }
    }
}

#[test]
fn three_qubit_grover_transpiles() {
    let mut circuit = grover(3, 6, 2).unwrap();
    transpile(&mut circuit, 1);

    assert!(measures_are_terminal(&circuit));
    assert!(
        circuit
            .instructions()
            .iter()
            .filter(|i| i.is_gate())
            .all(|i| BasisGates::cnot().contains(i.name()))
    );
}

#[test]
fn cancellation_does_not_cross_measurement() {
    let mut circuit = Circuit::with_size("test", 1, 1);
    circuit.h(QubitId(0)).unwrap();
    circuit.measure_all().unwrap();
    circuit.h(QubitId(0)).unwrap();

    transpile(&mut circuit, 3);

    // Both Hadamards survive: the measurement between them is a barrier
    // to cancellation.
    assert_eq!(circuit.num_ops(), 3);
}

#[test]
fn optimization_levels_agree_on_gate_set() {
    for level in 0..=3 {
        let mut circuit = grover(2, 3, 1).unwrap();
        transpile(&mut circuit, level);
        assert!(measures_are_terminal(&circuit), "level={level}");
        assert!(
            circuit
                .instructions()
                .iter()
                .filter(|i| i.is_gate())
                .all(|i| BasisGates::cnot().contains(i.name())),
            "level={level}"
        );
    }
}
