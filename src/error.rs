//! Error types for the puzzle engine
//!
//! This module provides the engine's error taxonomy using `thiserror`
//! for automatic error trait implementations. Every error is local to a
//! single call: a rejected operation never corrupts session state,
//! history, or scheduling.

use thiserror::Error;

/// Main error type for the puzzle engine
#[derive(Error, Debug)]
pub enum Error {
    /// The digest provider failed to hash a preimage
    #[error("Digest computation failed: {0}")]
    Digest(String),

    /// A caller-supplied parameter was outside its allowed range
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation was invoked in a session state that forbids it
    #[error("Invalid transition: {operation} is not allowed while {from}")]
    InvalidTransition {
        /// Session status at the time the operation was rejected
        from: String,
        /// Name of the rejected operation
        operation: String,
    },
}

/// Result type alias for the puzzle engine
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a digest computation error
    pub fn digest(msg: impl Into<String>) -> Self {
        Self::Digest(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid transition error
    pub fn invalid_transition(from: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::InvalidTransition {
            from: from.into(),
            operation: operation.into(),
        }
    }
}
