pub mod amortisation;
pub mod error;
pub mod types;

pub use error::EmiCoreError;
pub use types::*;

/// Standard result type for fallible emi-core operations
pub type EmiCoreResult<T> = Result<T, EmiCoreError>;
