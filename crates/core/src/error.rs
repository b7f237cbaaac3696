//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// conflicts, missing records). Storage and transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a required transform field is absent).
    #[error("{0}")]
    Validation(String),

    /// The request collides with existing state (e.g. duplicate item name).
    #[error("{0}")]
    Conflict(String),

    /// A requested record was not found.
    #[error("{0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Human-readable message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Conflict(msg) | Self::NotFound(msg) => msg,
        }
    }
}
