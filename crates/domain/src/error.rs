//! Error type for domain-level invariant checks.

use thiserror::Error;

/// Error raised when a payload violates a catalog invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values, disallowed artifact)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
