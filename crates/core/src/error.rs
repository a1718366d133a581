//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Updating items never fails; this only covers turning caller input into
/// items (e.g. parsing the canonical display form).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A numeric field could not be parsed.
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            value: value.into(),
        }
    }
}
