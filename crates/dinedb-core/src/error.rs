// crates/dinedb-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, validating or caching a catalog.
///
/// Query operations never return this type: an odd or empty query simply
/// yields a broader or empty result set.
#[derive(Debug, Error)]
pub enum DineError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, DineError>;
