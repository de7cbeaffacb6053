//! Error types for registry operations

use super::definition::ErrorCode;

/// Result type for fallible registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Internal registry failures, distinct from the caller errors it manages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Allocation counter sits on reserved code {code}")]
    ReservedCodeCollision { code: ErrorCode },

    #[error("No further error codes can be allocated")]
    CodesExhausted,

    #[error("Error code {code} is not registered")]
    UnknownCode { code: ErrorCode },
}

impl RegistryError {
    /// The reserved definition that reports this failure
    pub fn reserved_code(&self) -> ErrorCode {
        match self {
            RegistryError::ReservedCodeCollision { .. } | RegistryError::CodesExhausted => {
                ErrorCode::RESERVED_NO_CODE
            }
            RegistryError::UnknownCode { .. } => ErrorCode::RESERVED_CODE_NOT_FOUND,
        }
    }
}
