//! # Scene Host
//!
//! The renderer-side collaborator. The procedural never owns scene objects:
//! it asks the host to create the child polymesh and then hands arrays and
//! attributes over by value.

use polyplane_mesh::AttributeValue;
use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Host polymesh array names.
pub mod array_names {
    /// Vertex count of every face.
    pub const NSIDES: &str = "nsides";
    /// Concatenated face vertex indices.
    pub const VIDXS: &str = "vidxs";
    /// Flattened vertex positions.
    pub const VLIST: &str = "vlist";
}

/// Opaque handle to a scene object created by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeshHandle(pub u64);

/// Typed array data submitted to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayData {
    /// `u8` elements, used for face sizes
    Bytes(Vec<u8>),
    /// `u32` elements, used for vertex indices
    UInts(Vec<u32>),
    /// `f32` elements, used for flattened positions
    Floats(Vec<f32>),
}

impl ArrayData {
    /// Number of elements in the array.
    pub fn len(&self) -> usize {
        match self {
            ArrayData::Bytes(v) => v.len(),
            ArrayData::UInts(v) => v.len(),
            ArrayData::Floats(v) => v.len(),
        }
    }

    /// Returns true if the array has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Calls the procedural makes into the host renderer.
pub trait SceneHost {
    /// Creates a polymesh named `name` as a child of the procedural node
    /// `parent`.
    fn create_polymesh(&mut self, name: &str, parent: &str) -> Result<MeshHandle, HostError>;

    /// Sets an array parameter on `mesh`. Ownership of `data` moves to the host.
    fn set_array(&mut self, mesh: MeshHandle, name: &'static str, data: ArrayData);

    /// Sets a scalar parameter on `mesh`.
    fn set_attribute(&mut self, mesh: MeshHandle, name: &'static str, value: AttributeValue);

    /// Reports an unrecoverable error against the node named `node`.
    fn report_error(&mut self, node: &str, message: &str);
}
