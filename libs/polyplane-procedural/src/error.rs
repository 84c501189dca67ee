//! # Procedural Errors
//!
//! Error types for the host binding. Every failure is local to one
//! procedural instance; none of them abort the host session.

use polyplane_mesh::MeshError;
use thiserror::Error;

/// Failure reported by the host while creating a scene object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HostError {
    /// Host-provided description
    pub message: String,
}

impl HostError {
    /// Creates a host error with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur while initializing a procedural instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProceduralError {
    /// The host could not create the child polymesh
    #[error("failed to make polymesh node for {node}: {source}")]
    MeshCreation {
        /// Procedural node the child belongs to
        node: String,
        /// Failure reported by the host
        #[source]
        source: HostError,
    },

    /// The pure mesh build rejected its inputs
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A parameter value has a different type than declared
    #[error("parameter '{name}' expects {expected}, got {found}")]
    ParameterType {
        /// Parameter name
        name: &'static str,
        /// Declared type
        expected: &'static str,
        /// Type of the supplied value
        found: &'static str,
    },

    /// An enumeration parameter holds an index outside its label table
    #[error("parameter '{name}' has no label at index {index}")]
    InvalidEnum {
        /// Parameter name
        name: &'static str,
        /// Stored index
        index: i32,
    },

    /// A parameter was read that the schema does not declare
    #[error("parameter '{name}' is not declared")]
    UnknownParameter {
        /// Parameter name
        name: &'static str,
    },
}

impl ProceduralError {
    /// Creates a mesh creation error.
    pub fn mesh_creation(node: impl Into<String>, source: HostError) -> Self {
        Self::MeshCreation {
            node: node.into(),
            source,
        }
    }
}
