//! # Mesh Errors
//!
//! Error types for tessellation and export.

use thiserror::Error;

/// Errors that can occur while building or exporting meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A box with a non-positive or non-finite dimension was requested.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Mesh validation failed.
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Too many triangles to export.
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Writing the export failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
