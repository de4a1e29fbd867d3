//! Error types for the Ark Grid optimizer.
//!
//! An infeasible inventory is not an error: it surfaces as an
//! [`OptimizationResult`](crate::OptimizationResult) without a best candidate.

use thiserror::Error;

/// Result type alias for Ark Grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running a search.
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown gem type identifier.
    #[error("Invalid gem type: {0}")]
    InvalidGemType(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The worker thread pool could not be built.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Computation cancelled.
    #[error("Computation cancelled")]
    Cancelled,

    /// Timeout exceeded.
    #[error("Timeout exceeded after {0}ms")]
    Timeout(u64),
}
