//! Sindri Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits in Sindri. A circuit is an ordered, validated sequence of
//! instructions over a fixed register of qubits and classical bits.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for the built-in gate set (H, X, CZ, CX, ...)
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API
//! - **Diagrams**: [`diagram::draw`] for terminal rendering
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use sindri_ir::{Circuit, QubitId};
//!
//! // Create a new circuit with 2 qubits and 2 classical bits
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // Build the Bell state: |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! // Add measurement
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `I`, `X`, `Y`, `Z` | 1 | Identity and Pauli gates |
//! | `S`, `Sdg` | 1 | S and S-dagger gates |
//! | `T`, `Tdg` | 1 | T and T-dagger gates |
//! | `CX`, `CY`, `CZ` | 2 | Controlled Pauli gates |
//! | `Swap` | 2 | SWAP gate |
//! | `CCX` | 3 | Toffoli (CCNOT) gate |

pub mod circuit;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{ClbitId, QubitId};
