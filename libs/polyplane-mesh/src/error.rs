//! # Mesh Errors
//!
//! Error types for plane mesh generation.

use thiserror::Error;

/// Errors that can occur while building a plane mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A build parameter is outside the range the builder accepts.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name as declared to the host
        name: &'static str,
        /// What was wrong with the value
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertices the grid would need
        count: usize,
        /// Allowed maximum
        max: usize,
    },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the first problem found
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh building.
pub type MeshResult<T> = Result<T, MeshError>;
