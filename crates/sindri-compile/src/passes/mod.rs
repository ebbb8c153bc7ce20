//! Built-in compilation passes.

pub mod cancellation;
pub mod translation;

pub use cancellation::CancelInversePairs;
pub use translation::BasisTranslation;
