//! Error handling for Headwave
//!
//! Model construction fails fast on structural problems (empty layer stack,
//! velocity/thickness count mismatch). Physically invalid refraction
//! geometry is not an error: a velocity inversion surfaces as a NaN cell in
//! the travel-time table and never aborts the rest of the computation.

use thiserror::Error;

/// Result type alias for Headwave operations
pub type Result<T> = std::result::Result<T, HeadwaveError>;

/// Main error type for Headwave operations
#[derive(Error, Debug)]
pub enum HeadwaveError {
    // Model Validation Errors
    #[error("Layer model must contain at least one thickness")]
    EmptyModel,

    #[error(
        "Velocity count must be one more than thickness count: \
         got {velocities} velocities for {thicknesses} thicknesses"
    )]
    LayerMismatch {
        velocities: usize,
        thicknesses: usize,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Configuration Errors
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    // Figure Errors
    #[error("Figure encoding error: {0}")]
    Image(#[from] image::ImageError),
}

impl HeadwaveError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            HeadwaveError::EmptyModel => "EMPTY_MODEL",
            HeadwaveError::LayerMismatch { .. } => "LAYER_MISMATCH",
            HeadwaveError::Io(_) => "IO_ERROR",
            HeadwaveError::Config(_) => "CONFIG_ERROR",
            HeadwaveError::Image(_) => "IMAGE_ERROR",
        }
    }

    /// Check if this error is a model validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HeadwaveError::EmptyModel | HeadwaveError::LayerMismatch { .. }
        )
    }
}
