//! Error types for layout reconstruction.

use thiserror::Error;

/// Errors produced while reconstructing text layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A token arrived without usable geometry.
    #[error("input data error: {0}")]
    InputData(String),

    /// Configuration value outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Worker pool construction failed.
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LayoutError>;
