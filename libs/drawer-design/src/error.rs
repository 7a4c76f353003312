//! # Design Errors
//!
//! Errors surfaced by the configuration context.

use config::constants::ConfigError;
use grid_mesh::MeshError;
use grid_partition::PartitionError;
use thiserror::Error;

/// Errors that can occur while configuring or exporting a design.
#[derive(Debug, Error)]
pub enum DesignError {
    /// A parameter was outside its accepted range or malformed.
    #[error("Invalid parameter: {0}")]
    Config(#[from] ConfigError),

    /// Partition construction or editing failed.
    #[error(transparent)]
    Partition(#[from] PartitionError),

    /// Tessellation or export failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Parameters could not be read from or written to JSON.
    #[error("Invalid parameters JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for design operations.
pub type DesignResult<T> = Result<T, DesignError>;
