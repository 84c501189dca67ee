//! # PolyPlane Procedural
//!
//! Per-instance lifecycle of the procedural node: read parameters, build the
//! plane, create the child polymesh and hand the arrays over to the host.
//!
//! The pure build runs before the host is asked for a mesh, so a rejected
//! parameter never leaves a half-initialized child behind.

use config::constants::{MESH_NODE_NAME, NUM_CHILDREN};
use polyplane_mesh::{build, Capabilities, PlaneMesh};

use crate::error::ProceduralError;
use crate::host::{array_names, ArrayData, MeshHandle, SceneHost};
use crate::params::{ParamSource, PlaneParams};

/// State of one initialized procedural instance.
///
/// Dropping it is the cleanup step; the child mesh itself belongs to the
/// host and is not destroyed here.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyPlane {
    node_name: String,
    params: PlaneParams,
    vertex_count: usize,
    mesh: MeshHandle,
}

impl PolyPlane {
    /// Initializes an instance for the node named `node_name`.
    ///
    /// # Errors
    ///
    /// Any failure is reported to the host against `node_name` and logged
    /// before it is returned:
    /// - parameter read errors from [`PlaneParams::read`]
    /// - [`ProceduralError::Mesh`] if the builder rejects the parameters
    /// - [`ProceduralError::MeshCreation`] if the host cannot create the mesh
    pub fn init<H, S>(
        host: &mut H,
        node_name: &str,
        source: &S,
        caps: Capabilities,
    ) -> Result<Self, ProceduralError>
    where
        H: SceneHost + ?Sized,
        S: ParamSource + ?Sized,
    {
        Self::try_init(host, node_name, source, caps).inspect_err(|err| {
            log::error!("[{node_name}] {err}");
            host.report_error(node_name, &err.to_string());
        })
    }

    fn try_init<H, S>(
        host: &mut H,
        node_name: &str,
        source: &S,
        caps: Capabilities,
    ) -> Result<Self, ProceduralError>
    where
        H: SceneHost + ?Sized,
        S: ParamSource + ?Sized,
    {
        let params = PlaneParams::read(source, caps)?;
        let plane = build(&params.grid, &params.subdivision, &params.displacement, caps)?;
        let vertex_count = plane.arrays.vertex_count();

        let mesh = host
            .create_polymesh(MESH_NODE_NAME, node_name)
            .map_err(|err| ProceduralError::mesh_creation(node_name, err))?;
        submit(host, mesh, plane);

        log::debug!("[{node_name}] created {MESH_NODE_NAME} with {vertex_count} vertices");

        Ok(Self {
            node_name: node_name.to_string(),
            params,
            vertex_count,
            mesh,
        })
    }

    /// Name of the procedural node this instance belongs to.
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Parameters captured at init time.
    pub fn params(&self) -> &PlaneParams {
        &self.params
    }

    /// Number of vertices in the generated mesh.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Handle of the generated child mesh.
    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    /// Number of child nodes; always one.
    pub fn num_children(&self) -> usize {
        NUM_CHILDREN
    }

    /// Returns the child at `index`, which only exists for index 0.
    pub fn child(&self, index: usize) -> Option<MeshHandle> {
        (index < NUM_CHILDREN).then_some(self.mesh)
    }
}

/// Moves the built arrays and attributes onto `mesh`.
fn submit<H: SceneHost + ?Sized>(host: &mut H, mesh: MeshHandle, plane: PlaneMesh) {
    let PlaneMesh { arrays, attributes } = plane;
    let positions = arrays.positions_flat();

    host.set_array(mesh, array_names::NSIDES, ArrayData::Bytes(arrays.face_sizes));
    host.set_array(mesh, array_names::VIDXS, ArrayData::UInts(arrays.vertex_indices));
    host.set_array(mesh, array_names::VLIST, ArrayData::Floats(positions));

    for (name, value) in attributes.iter() {
        host.set_attribute(mesh, name, value);
    }
}
