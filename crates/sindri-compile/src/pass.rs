//! Pass trait and types for compilation passes.

use sindri_ir::Circuit;

use crate::error::CompileResult;
use crate::property::PropertySet;

/// The kind of compilation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassKind {
    /// Analysis pass that reads but does not modify the circuit.
    Analysis,
    /// Transformation pass that modifies the circuit.
    Transformation,
}

/// A compilation pass that operates on a circuit.
///
/// Passes are the fundamental unit of compilation. Each pass performs a
/// specific transformation or analysis on the instruction sequence.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Get the kind of this pass.
    fn kind(&self) -> PassKind;

    /// Run the pass on the given circuit.
    ///
    /// Analysis passes should not modify the circuit but may write to
    /// the `PropertySet`; transformation passes modify the circuit and
    /// may read from the `PropertySet`.
    fn run(&self, circuit: &mut Circuit, properties: &mut PropertySet) -> CompileResult<()>;

    /// Check if this pass should run based on current state.
    fn should_run(&self, _circuit: &Circuit, _properties: &PropertySet) -> bool {
        true
    }
}
