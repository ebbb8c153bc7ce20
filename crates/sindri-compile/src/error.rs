//! Error types for the compilation crate.

use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// No decomposition rule reaches the target basis for this gate.
    #[error("Gate '{0}' cannot be translated to the target basis")]
    UnsupportedGate(String),

    /// Translation did not converge within the round limit.
    #[error("Basis translation exceeded {0} rounds without converging")]
    TranslationDepthExceeded(usize),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
