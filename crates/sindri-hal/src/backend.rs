//! Backend trait and validation types.
//!
//! The [`Backend`] trait defines the lifecycle for interacting with an
//! execution backend:
//!
//! ```text
//!   capabilities() ──→ validate() ──→ submit() ──→ status() ──→ result()
//!    (sync, &ref)       (async)       (async)      (async)      (async)
//! ```
//!
//! ## Design principles
//!
//! - **Async-native**: all I/O methods are async.
//! - **Thread-safe**: `Send + Sync` bound enables shared ownership.
//! - **Infallible introspection**: `capabilities()` is synchronous — a
//!   backend that cannot report capabilities without I/O is not
//!   correctly initialized.

use std::time::Duration;

use async_trait::async_trait;

use sindri_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::job::{JobId, JobStatus};
use crate::result::ExecutionResult;

/// Trait for execution backends.
///
/// # Contract
///
/// - `capabilities()` MUST be synchronous and infallible; implementations
///   cache capabilities at construction time.
/// - `validate()` MUST check the circuit against backend constraints
///   before submission.
/// - `submit()` MUST return a tracked `JobId`.
/// - `result()` MUST only be called once status is `Completed`.
/// - `wait()` has a default implementation (500ms poll, 5-minute timeout).
#[async_trait]
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Check backend availability.
    async fn availability(&self) -> HalResult<BackendAvailability>;

    /// Validate a circuit against backend constraints.
    ///
    /// SHOULD check at minimum the qubit count against
    /// `capabilities().num_qubits` and gate support against
    /// `capabilities().gate_set`. The three-state result lets a caller
    /// decide to transpile and retry vs. fail outright.
    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult>;

    /// Submit a circuit for execution.
    ///
    /// Returns a job ID that can be used to check status and retrieve results.
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId>;

    /// Get the status of a job.
    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus>;

    /// Get the result of a completed job.
    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult>;

    /// Cancel a job.
    async fn cancel(&self, job_id: &JobId) -> HalResult<()>;

    /// Wait for a job to complete and return its result.
    ///
    /// Default implementation polls every 500ms for up to 5 minutes.
    async fn wait(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        use tokio::time::sleep;

        let poll_interval = Duration::from_millis(500);
        let max_polls = 600;

        for _ in 0..max_polls {
            let status = self.status(job_id).await?;

            match status {
                JobStatus::Completed => return self.result(job_id).await,
                JobStatus::Failed(msg) => return Err(HalError::JobFailed(msg)),
                JobStatus::Cancelled => return Err(HalError::JobCancelled),
                JobStatus::Queued | JobStatus::Running => {
                    sleep(poll_interval).await;
                }
            }
        }

        Err(HalError::Timeout(job_id.0.clone()))
    }
}

/// Backend availability information.
#[derive(Debug, Clone)]
pub struct BackendAvailability {
    /// Whether the backend is currently accepting jobs.
    pub is_available: bool,
    /// Human-readable status message.
    pub status_message: Option<String>,
}

impl BackendAvailability {
    /// Availability for a backend that is always available.
    ///
    /// Typical for local simulators.
    pub fn always_available() -> Self {
        Self {
            is_available: true,
            status_message: None,
        }
    }

    /// Availability for an offline backend.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            is_available: false,
            status_message: Some(reason.into()),
        }
    }
}

/// Result of circuit validation against backend constraints.
///
/// The three-state return is deliberate:
/// - `Valid` — the circuit can be submitted as-is.
/// - `Invalid` — the circuit cannot run on this backend.
/// - `RequiresTranspilation` — the circuit could run after compilation.
#[derive(Debug, Clone)]
pub enum ValidationResult {
    /// Circuit is valid and can be submitted directly.
    Valid,
    /// Circuit is invalid for this backend.
    Invalid {
        /// Reasons the circuit is invalid.
        reasons: Vec<String>,
    },
    /// Circuit could run after transpilation.
    RequiresTranspilation {
        /// What transpilation is needed.
        details: String,
    },
}

impl ValidationResult {
    /// Check if the circuit is valid (can be submitted as-is).
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability() {
        let avail = BackendAvailability::always_available();
        assert!(avail.is_available);
        assert!(avail.status_message.is_none());

        let down = BackendAvailability::unavailable("maintenance");
        assert!(!down.is_available);
        assert_eq!(down.status_message.as_deref(), Some("maintenance"));
    }

    #[test]
    fn test_validation_result_is_valid() {
        assert!(ValidationResult::Valid.is_valid());
        assert!(!ValidationResult::Invalid { reasons: vec![] }.is_valid());
        assert!(
            !ValidationResult::RequiresTranspilation {
                details: String::new()
            }
            .is_valid()
        );
    }
}
