//! Statistical behavior of Grover circuits on the simulator.
//!
//! The 2-qubit Grover circuit is exact: one iteration puts the entire
//! amplitude on the marked state, so every shot must report it. Wider
//! registers amplify without reaching certainty, so those assertions are
//! thresholds far below the analytic expectation but far above chance.

use sindri_adapter_sim::SimulatorBackend;
use sindri_circuits::{grover, optimal_iterations, success_probability};
use sindri_compile::{BasisGates, PassManagerBuilder};
use sindri_hal::Backend;

const SHOTS: u32 = 4096;

/// Big-endian bitstring of `state` over `width` bits.
fn bitstring(state: usize, width: usize) -> String {
    format!("{state:0width$b}")
}

#[tokio::test]
async fn two_qubit_grover_is_exact_for_every_marked_state() {
    for marked in 0..4 {
        let circuit = grover(2, marked, 1).unwrap();
        let backend = SimulatorBackend::new().with_seed(11 + marked as u64);

        let job_id = backend.submit(&circuit, SHOTS).await.unwrap();
        let result = backend.wait(&job_id).await.unwrap();

        let target = bitstring(marked, 2);
        assert_eq!(
            result.counts.get(&target),
            u64::from(SHOTS),
            "marked={marked}: expected all shots on {target}, got {}",
            result.counts
        );
    }
}

#[tokio::test]
async fn default_oracle_marks_eleven() {
    // The bare-CZ oracle (marked = 0b11) concentrates everything on "11".
    let circuit = grover(2, 0b11, 1).unwrap();
    let backend = SimulatorBackend::new().with_seed(1);

    let job_id = backend.submit(&circuit, SHOTS).await.unwrap();
    let result = backend.result(&job_id).await.unwrap();

    assert_eq!(result.counts.most_frequent(), Some(("11", u64::from(SHOTS))));
    assert_eq!(result.counts.get("00"), 0);
    assert_eq!(result.counts.get("01"), 0);
    assert_eq!(result.counts.get("10"), 0);
}

#[tokio::test]
async fn transpiled_circuit_matches_untranspiled() {
    let mut circuit = grover(2, 0b11, 1).unwrap();

    let (pm, mut props) = PassManagerBuilder::new()
        .with_optimization_level(1)
        .with_basis(BasisGates::cnot())
        .build();
    pm.run(&mut circuit, &mut props).unwrap();

    // CZ is gone; semantics are not.
    assert!(circuit.instructions().iter().all(|i| i.name() != "cz"));

    let backend = SimulatorBackend::new().with_seed(5);
    let job_id = backend.submit(&circuit, SHOTS).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    assert_eq!(result.counts.get("11"), u64::from(SHOTS));
}

#[tokio::test]
async fn three_qubit_grover_dominates_chance() {
    let marked = 5;
    let iterations = optimal_iterations(3);
    let circuit = grover(3, marked, iterations).unwrap();
    let backend = SimulatorBackend::new().with_seed(23);

    let job_id = backend.submit(&circuit, SHOTS).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    // Analytic success probability ≈ 0.945; chance is 0.125. The 0.8
    // threshold is dozens of standard deviations from both.
    assert!(success_probability(3, iterations) > 0.9);
    let target = bitstring(marked, 3);
    let observed = result.counts.probability(&target);
    assert!(
        observed > 0.8,
        "expected {target} to dominate, observed probability {observed}"
    );
}

#[tokio::test]
async fn zero_iterations_is_uniform() {
    // Without amplification the superposition samples uniformly: no
    // outcome strays far from 25%.
    let circuit = grover(2, 0b11, 0).unwrap();
    let backend = SimulatorBackend::new().with_seed(17);

    let job_id = backend.submit(&circuit, SHOTS).await.unwrap();
    let result = backend.wait(&job_id).await.unwrap();

    for outcome in ["00", "01", "10", "11"] {
        let p = result.counts.probability(outcome);
        assert!(
            (0.15..0.35).contains(&p),
            "outcome {outcome} has probability {p}, expected ~0.25"
        );
    }
}
