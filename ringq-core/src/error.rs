//! # Error Handling
//!
//! Error types shared by every ringq component.
//!
//! ## Failure Classes
//!
//! 1. **Allocation**: storage for a node or a text copy could not be reserved.
//!    The target ring is left untouched.
//! 2. **Invalid argument**: a request the queue cannot honour (removing from
//!    an empty queue, deleting from one). Queue operations report this
//!    through their `bool`/`Option`/count return, never as an `Error`.
//! 3. **Ownership violations** (double release, use after destroy) are not
//!    errors at all: `Element` and `Queue` are move-only, so the compiler
//!    rejects them.

use thiserror::Error;

/// Result type alias for ringq operations
pub type Result<T> = std::result::Result<T, Error>;

/// Primary error type for ringq
#[derive(Error, Debug)]
pub enum Error {
    #[error("Allocation of {requested} bytes failed")]
    Allocation { requested: usize },

    #[error("Resource exhausted: {resource}")]
    ResourceExhausted { resource: String },

    #[error("Ring corruption detected: {details}")]
    RingCorruption { details: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Allocation { .. } => true,
            Error::ResourceExhausted { .. } => true,
            Error::RingCorruption { .. } => false,
            Error::Configuration { .. } => false,
        }
    }

    /// Get error code for monitoring
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Allocation { .. } => "ALLOCATION_FAILED",
            Error::ResourceExhausted { .. } => "RESOURCE_EXHAUSTED",
            Error::RingCorruption { .. } => "RING_CORRUPTION",
            Error::Configuration { .. } => "CONFIG_ERROR",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Configuration {
            message: err.to_string(),
        }
    }
}

/// Extension trait for adding context to results
pub trait ResultExt<T> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e {
            Error::Configuration { message } => Error::Configuration {
                message: format!("{}: {}", f(), message),
            },
            other => other,
        })
    }
}
