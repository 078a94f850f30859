// Copyright 2025 Cowboy AI, LLC.

//! Error types for object composition operations

use thiserror::Error;

/// Errors that can occur when composing or invoking prototypal objects
///
/// The composition engine is fail-fast: a fault is reported to the
/// immediate caller with the offending slot name attached, never retried
/// or swallowed.
#[derive(Debug, Clone, Error)]
pub enum ObjectError {
    /// Slot lookup failed on the object and its whole delegation chain
    #[error("Slot not found: {key}")]
    SlotNotFound {
        /// The slot name that was looked up
        key: String,
    },

    /// A slot was invoked as a method but does not hold a callable value
    #[error("Slot is not callable: {key}")]
    NotCallable {
        /// The slot name that was invoked
        key: String,
    },

    /// Invalid operation
    #[error("Invalid operation: {reason}")]
    InvalidOperation {
        /// Reason why the operation is invalid
        reason: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic object error
    #[error("Object error: {0}")]
    Generic(String),
}

/// Result type for object composition operations
pub type ObjectResult<T> = Result<T, ObjectError>;

impl From<serde_json::Error> for ObjectError {
    fn from(err: serde_json::Error) -> Self {
        ObjectError::SerializationError(err.to_string())
    }
}

impl ObjectError {
    /// Create a generic object error
    pub fn generic(msg: impl Into<String>) -> Self {
        ObjectError::Generic(msg.into())
    }

    /// Check if this is a missing-slot error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ObjectError::SlotNotFound { .. })
    }

    /// Check if this is a not-callable error
    pub fn is_not_callable(&self) -> bool {
        matches!(self, ObjectError::NotCallable { .. })
    }
}
