// File: crates/figure-core/src/error.rs
// Summary: Error types for label configuration and drawing surfaces.

use thiserror::Error;

/// Configuration errors raised before any drawing happens, plus surface failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LabelError {
    #[error("unrecognized label position: {0}")]
    InvalidPlacementMode(String),
    #[error("unrecognized text alignment: {0}")]
    InvalidAlignment(String),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Failures reported by a drawing surface implementation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("failed to draw text: {0}")]
    Text(String),
    #[error("failed to update surface: {0}")]
    Update(String),
}
