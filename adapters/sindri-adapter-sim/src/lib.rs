//! Sindri Local Statevector Simulator
//!
//! This crate provides a local simulator backend for testing,
//! development, and small-scale experiments. It uses statevector
//! simulation, which is exact but limited to ~20 qubits by memory.
//!
//! # Execution model
//!
//! Measurement must be terminal (no gate may follow a measure). Under
//! that rule the final distribution does not depend on the shot, so the
//! simulator applies the circuit's unitary prefix once and samples all
//! shots from the resulting probabilities.
//!
//! # Example
//!
//! ```ignore
//! use sindri_adapter_sim::SimulatorBackend;
//! use sindri_hal::Backend;
//! use sindri_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     // Run a Bell state
//!     let circuit = Circuit::bell()?;
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("{}", result.counts);
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
