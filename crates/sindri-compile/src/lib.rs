//! Sindri Transpilation Framework
//!
//! This crate provides the compilation infrastructure for transforming
//! circuits to run on a target backend. It implements a pass-based
//! architecture, enabling modular and extensible compilation.
//!
//! # Overview
//!
//! ```text
//! Input Circuit
//!       │
//!       ▼
//! ┌─────────────┐
//! │ PassManager │ ◄── PropertySet (target basis)
//! └─────────────┘
//!       │
//!       ├── BasisTranslation
//!       └── CancelInversePairs
//!       │
//!       ▼
//! Output Circuit (backend-compatible)
//! ```
//!
//! # Example: Basic Compilation
//!
//! ```rust
//! use sindri_compile::{BasisGates, PassManagerBuilder};
//! use sindri_ir::{Circuit, QubitId};
//!
//! // A circuit using CZ, which a CNOT-based target lacks.
//! let mut circuit = Circuit::with_size("example", 2, 0);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cz(QubitId(0), QubitId(1)).unwrap();
//!
//! let (pm, mut props) = PassManagerBuilder::new()
//!     .with_optimization_level(1)
//!     .with_basis(BasisGates::cnot())
//!     .build();
//!
//! pm.run(&mut circuit, &mut props).unwrap();
//!
//! // CZ became H·CX·H.
//! assert!(circuit.instructions().iter().all(|i| i.name() != "cz"));
//! ```
//!
//! # Custom Passes
//!
//! Implement the [`Pass`] trait to create custom compilation passes:
//!
//! ```rust
//! use sindri_compile::{CompileResult, Pass, PassKind, PropertySet};
//! use sindri_ir::Circuit;
//!
//! struct MyCustomPass;
//!
//! impl Pass for MyCustomPass {
//!     fn name(&self) -> &str { "my_custom_pass" }
//!     fn kind(&self) -> PassKind { PassKind::Transformation }
//!
//!     fn run(&self, circuit: &mut Circuit, props: &mut PropertySet) -> CompileResult<()> {
//!         // Your pass logic here
//!         Ok(())
//!     }
//! }
//! ```

pub mod error;
pub mod manager;
pub mod pass;
pub mod property;

// Built-in passes
pub mod passes;

pub use error::{CompileError, CompileResult};
pub use manager::{PassManager, PassManagerBuilder};
pub use pass::{Pass, PassKind};
pub use passes::{BasisTranslation, CancelInversePairs};
pub use property::{BasisGates, PropertySet};
