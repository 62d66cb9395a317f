use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmiCoreError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },
}
