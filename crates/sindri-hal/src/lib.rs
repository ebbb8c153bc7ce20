//! Sindri Backend Abstraction Layer
//!
//! This crate provides a unified interface for executing circuits,
//! decoupling circuit construction and compilation from the backend that
//! runs them.
//!
//! # Overview
//!
//! - A common [`Backend`] trait covering the job lifecycle: introspection,
//!   validation, submission, status polling, result retrieval, cancellation
//! - [`Capabilities`] to describe backend features and constraints
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use sindri_adapter_sim::SimulatorBackend;
//! use sindri_hal::Backend;
//! use sindri_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let circuit = Circuit::bell()?;
//!     let backend = SimulatorBackend::new();
//!
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect ~50% |00⟩ and ~50% |11⟩
//!     println!("{}", result.counts);
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("Most frequent: {bitstring} ({count} times)");
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{Backend, BackendAvailability, ValidationResult};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
