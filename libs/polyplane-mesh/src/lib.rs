//! # PolyPlane Mesh
//!
//! Pure generation of a subdivided quad plane for renderer procedurals.
//! Produces the flat polymesh arrays plus the subdivision and displacement
//! attributes the host attaches to the mesh.
//!
//! ## Architecture
//!
//! ```text
//! GridSpec + SubdivisionSpec + DisplacementSpec → build → PlaneMesh
//!                                                 (MeshArrays + AttributeSet)
//! ```
//!
//! Nothing here talks to the host. Submitting the result to a live mesh
//! object is the job of `polyplane-procedural`.
//!
//! ## Usage
//!
//! ```rust
//! use polyplane_mesh::{build, Capabilities, DisplacementSpec, GridSpec, SubdivisionSpec};
//!
//! let plane = build(
//!     &GridSpec::new(10.0, 2),
//!     &SubdivisionSpec::default(),
//!     &DisplacementSpec::default(),
//!     Capabilities::FULL,
//! )
//! .unwrap();
//! assert_eq!(plane.arrays.face_count(), 4);
//! assert_eq!(plane.arrays.vertex_count(), 9);
//! ```

pub mod attributes;
pub mod capabilities;
pub mod displacement;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod subdivision;

pub use attributes::{AttributeSet, AttributeValue, NodeRef};
pub use capabilities::Capabilities;
pub use displacement::{displacement_attributes, DisplacementSpec};
pub use error::{MeshError, MeshResult};
pub use grid::{build_arrays, grid_faces, grid_vertices, GridSpec};
pub use mesh::MeshArrays;
pub use subdivision::{
    subdivision_attributes, AdaptiveMetric, AdaptiveSpace, EnumParam, SubdivType,
    SubdivisionSpec, UnknownLabel,
};

use serde::Serialize;

/// A built plane: mesh arrays and the attributes to attach to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaneMesh {
    /// Polymesh arrays
    pub arrays: MeshArrays,
    /// Attributes to set on the polymesh
    pub attributes: AttributeSet,
}

/// Builds the plane mesh and its attribute set.
///
/// All inputs are validated before any array is allocated. The result is a
/// pure function of the inputs, so repeated calls yield identical output.
///
/// # Errors
///
/// - [`MeshError::InvalidParameter`] for `divisions < 1`, a non-finite width,
///   or out-of-range subdivision/displacement scalars
/// - [`MeshError::TooManyVertices`] when the grid exceeds the vertex limit
pub fn build(
    grid: &GridSpec,
    subdiv: &SubdivisionSpec,
    disp: &DisplacementSpec,
    caps: Capabilities,
) -> MeshResult<PlaneMesh> {
    subdiv.validate()?;
    disp.validate()?;
    let arrays = build_arrays(grid)?;

    let mut attributes = AttributeSet::new();
    subdivision_attributes(subdiv, caps, &mut attributes);
    displacement_attributes(disp, caps, &mut attributes);

    log::debug!(
        "built {}x{} plane: {} vertices, {} faces, {} attributes",
        grid.divisions,
        grid.divisions,
        arrays.vertex_count(),
        arrays.face_count(),
        attributes.len()
    );

    Ok(PlaneMesh { arrays, attributes })
}
