//! Sindri Search-Circuit Library
//!
//! Generators for Grover-search circuits over small registers, together
//! with the analytic helpers needed to choose an iteration count and to
//! predict the measurement distribution.
//!
//! # Example
//!
//! ```rust
//! use sindri_circuits::grover::{grover, optimal_iterations, success_probability};
//!
//! // Search a 4-element space for |11⟩. One iteration is optimal and exact.
//! let iterations = optimal_iterations(2);
//! assert_eq!(iterations, 1);
//! assert!((success_probability(2, iterations) - 1.0).abs() < 1e-12);
//!
//! let circuit = grover(2, 0b11, iterations).unwrap();
//! assert_eq!(circuit.num_qubits(), 2);
//! ```

pub mod grover;

pub use grover::{GroverError, GroverResult, grover, optimal_iterations, success_probability};
