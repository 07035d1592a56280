//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Missing or malformed bearer credentials
    #[error("Unauthenticated: {message}")]
    Unauthenticated { message: String },

    /// Request validation error
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Caller is not entitled to the target resource
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Refused removal of a cache's last remaining key
    #[error("Last key: {message}")]
    LastKey { message: String },

    /// Resource already exists
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Storage backend error
    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    /// Create an unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a last key error
    pub fn last_key(message: impl Into<String>) -> Self {
        Self::LastKey {
            message: message.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
