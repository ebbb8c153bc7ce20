//! Simulator backend implementation.

use std::sync::Mutex;
use std::time::Instant;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};
use uuid::Uuid;

use sindri_hal::{
    Backend, BackendAvailability, Capabilities, Counts, ExecutionResult, HalError, HalResult, Job,
    JobId, JobStatus, ValidationResult,
};
use sindri_ir::Circuit;

use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator backend.
///
/// Supports circuits up to ~20 qubits (limited by memory). Measurement
/// must be terminal: the unitary prefix of the circuit is applied once
/// and all shots are sampled from the resulting distribution, so a gate
/// after a measurement is rejected at validation.
pub struct SimulatorBackend {
    /// Capabilities, cached at construction.
    capabilities: Capabilities,
    /// Tracked jobs.
    jobs: Mutex<FxHashMap<String, SimJob>>,
    /// Sampling source; seedable for deterministic tests.
    rng: Mutex<StdRng>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(20)
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Mutex::new(FxHashMap::default()),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Use a fixed RNG seed for reproducible sampling.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Collect the measurement wiring (qubit index → clbit index).
    ///
    /// Fails if any gate follows a measurement (the sampling model
    /// requires terminal measurement) or if nothing is measured at all.
    fn measurement_wiring(circuit: &Circuit) -> HalResult<Vec<(usize, usize)>> {
        let mut wiring = vec![];
        let mut measured = false;

        for inst in circuit.instructions() {
            if inst.is_measure() {
                measured = true;
                for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                    wiring.push((q.0 as usize, c.0 as usize));
                }
            } else if inst.is_gate() && measured {
                return Err(HalError::Unsupported(
                    "mid-circuit measurement: a gate follows a measure".into(),
                ));
            }
        }

        if !measured {
            return Err(HalError::InvalidCircuit(
                "circuit has no measurement".into(),
            ));
        }
        Ok(wiring)
    }

    /// Run the simulation synchronously.
    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        let start = Instant::now();
        let num_qubits = circuit.num_qubits();
        debug!("Starting simulation: {} qubits, {} shots", num_qubits, shots);

        let wiring = Self::measurement_wiring(circuit)?;
        let num_clbits = circuit.num_clbits();

        // Evolve the state once; measurement is terminal, so every shot
        // samples the same distribution.
        let mut sv = Statevector::new(num_qubits);
        for inst in circuit.instructions() {
            sv.apply(inst);
        }

        let mut counts = Counts::new();
        {
            let mut rng = self
                .rng
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            for _ in 0..shots {
                let outcome = sv.sample(&mut *rng);
                counts.add(format_outcome(outcome, &wiring, num_clbits), 1);
            }
        }

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        Ok(ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64))
    }
}

/// Map a sampled qubit-space outcome through the measurement wiring to a
/// big-endian clbit-space bitstring.
fn format_outcome(outcome: usize, wiring: &[(usize, usize)], num_clbits: usize) -> String {
    let mut bits = vec!['0'; num_clbits];
    for (qubit, clbit) in wiring {
        if (outcome >> qubit) & 1 == 1 {
            bits[num_clbits - 1 - clbit] = '1';
        }
    }
    bits.into_iter().collect()
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let mut reasons = vec![];

        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            reasons.push(format!(
                "circuit has {} qubits but simulator supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            ));
        }
        if let Err(e) = Self::measurement_wiring(circuit) {
            reasons.push(e.to_string());
        }
        if !reasons.is_empty() {
            return Ok(ValidationResult::Invalid { reasons });
        }

        // All IR gates are native here, so this only triggers for gate
        // sets narrowed in a custom capability description.
        for inst in circuit.instructions().iter().filter(|i| i.is_gate()) {
            if !self.capabilities.supports_gate(inst.name()) {
                return Ok(ValidationResult::RequiresTranspilation {
                    details: format!("gate '{}' is not in the backend gate set", inst.name()),
                });
            }
        }

        Ok(ValidationResult::Valid)
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit has {} qubits but simulator only supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }
        if shots == 0 || shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "shots must be in 1..={}, got {shots}",
                self.capabilities.max_shots
            )));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        debug!("Submitted job: {}", job_id);

        // Execution is synchronous and blocking; the job reaches a
        // terminal state before submit returns.
        let (job, result) = match self.run_simulation(circuit, shots) {
            Ok(result) => (
                Job::new(job_id.clone(), shots)
                    .with_backend(self.name())
                    .with_status(JobStatus::Completed),
                Some(result),
            ),
            Err(e) => (
                Job::new(job_id.clone(), shots)
                    .with_backend(self.name())
                    .with_status(JobStatus::Failed(e.to_string())),
                None,
            ),
        };

        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.insert(job_id.0.clone(), SimJob { job, result });

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        jobs.get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        let jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let sim_job = jobs
            .get(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        match &sim_job.job.status {
            JobStatus::Failed(msg) => Err(HalError::JobFailed(msg.clone())),
            _ => sim_job
                .result
                .clone()
                .ok_or_else(|| HalError::JobNotFound(job_id.0.clone())),
        }
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self
            .jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let sim_job = jobs
            .get_mut(&job_id.0)
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))?;
        // Terminal states are permanent; execution is synchronous, so in
        // practice every tracked job is already terminal.
        if sim_job.job.status.is_pending() {
            sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
        }
        Ok(())
    }
}
