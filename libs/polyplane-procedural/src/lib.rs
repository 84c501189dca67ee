//! # PolyPlane Procedural
//!
//! Binds the pure plane builder to a renderer's procedural-node protocol.
//!
//! ## Architecture
//!
//! ```text
//! host node params → PlaneParams → polyplane-mesh::build → SceneHost (child polymesh)
//! ```
//!
//! ## Lifecycle
//!
//! | Host callback  | Here                                   |
//! |----------------|----------------------------------------|
//! | node loader    | [`node_loader`]                        |
//! | parameters     | [`parameter_schema`]                   |
//! | init           | [`InstanceTable::init`]                |
//! | num children   | [`InstanceTable::num_children`]        |
//! | get child      | [`InstanceTable::get_child`]           |
//! | cleanup        | [`InstanceTable::cleanup`]             |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use polyplane_procedural::{InstanceTable, ParameterValues, ParamValue};
//! use polyplane_mesh::Capabilities;
//!
//! let mut table = InstanceTable::new(Capabilities::FULL);
//! let values = ParameterValues::new().with("divisions", ParamValue::Int(16));
//! let id = table.init(&mut host, "ground", &values)?;
//! let mesh = table.get_child(id, 0);
//! ```

pub mod error;
pub mod host;
pub mod instances;
pub mod params;
pub mod procedural;
pub mod schema;

pub use error::{HostError, ProceduralError};
pub use host::{ArrayData, MeshHandle, SceneHost};
pub use instances::{InstanceId, InstanceTable};
pub use params::{ParamSource, ParamValue, ParameterValues, PlaneParams};
pub use procedural::PolyPlane;
pub use schema::{
    node_loader, parameter_schema, NodeInfo, NodeType, OutputType, ParamDecl, ParamType,
};
