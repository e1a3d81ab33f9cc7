//! Error types for pixfill-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixfill_core::Error),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
