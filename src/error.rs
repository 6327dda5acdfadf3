//! Engine error types

use thiserror::Error;

/// Errors raised by the debt engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller-supplied parameter is outside its valid domain
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// An operation was invoked against inputs that cannot support it
    /// (e.g. projecting from an empty base series)
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// CSV read/write error from the export or loader paths
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse error from the series loader
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error from file-backed loading or export
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Shorthand for an `InvalidParameter` error
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Convenience result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;
