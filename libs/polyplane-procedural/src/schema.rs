//! # Parameter Schema
//!
//! The fixed parameter declarations the host registers for the node, and
//! the loader entry describing the node type itself.

use config::constants::{
    DEFAULT_DISP_AUTOBUMP, DEFAULT_DISP_HEIGHT, DEFAULT_DISP_PADDING, DEFAULT_DISP_ZERO_VALUE,
    DEFAULT_DIVISIONS, DEFAULT_SUBDIV_ADAPTIVE_ERROR, DEFAULT_SUBDIV_ADAPTIVE_METRIC,
    DEFAULT_SUBDIV_ADAPTIVE_SPACE, DEFAULT_SUBDIV_ITERATIONS, DEFAULT_SUBDIV_TYPE, DEFAULT_WIDTH,
    NODE_ENTRY_NAME,
};
use polyplane_mesh::{AdaptiveMetric, AdaptiveSpace, Capabilities, EnumParam, SubdivType};
use serde::Serialize;

use crate::params::ParamValue;

/// Node parameter names.
pub mod param_names {
    /// Plane edge length.
    pub const WIDTH: &str = "width";
    /// Quads per edge.
    pub const DIVISIONS: &str = "divisions";
    /// Subdivision scheme.
    pub const SUBDIV_TYPE: &str = "subdiv_type";
    /// Subdivision iteration count.
    pub const SUBDIV_ITERATIONS: &str = "subdiv_iterations";
    /// Adaptive subdivision error threshold.
    pub const SUBDIV_ADAPTIVE_ERROR: &str = "subdiv_adaptive_error";
    /// Adaptive subdivision metric.
    pub const SUBDIV_ADAPTIVE_METRIC: &str = "subdiv_adaptive_metric";
    /// Adaptive subdivision space.
    pub const SUBDIV_ADAPTIVE_SPACE: &str = "subdiv_adaptive_space";
    /// Displacement shading node.
    pub const DISP_MAP: &str = "disp_map";
    /// Displacement value treated as flat.
    pub const DISP_ZERO_VALUE: &str = "disp_zero_value";
    /// Displacement height scale.
    pub const DISP_HEIGHT: &str = "disp_height";
    /// Displaced bounds padding.
    pub const DISP_PADDING: &str = "disp_padding";
    /// Autobump flag.
    pub const DISP_AUTOBUMP: &str = "disp_autobump";
}

/// Declared type of a node parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParamType {
    /// 32-bit float
    Float,
    /// 32-bit signed integer
    Int,
    /// Unsigned byte
    Byte,
    /// Boolean
    Bool,
    /// Integer index into a label table
    Enum(&'static [&'static str]),
    /// Nullable reference to another node
    Node,
}

impl ParamType {
    /// Short name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ParamType::Float => "float",
            ParamType::Int => "int",
            ParamType::Byte => "byte",
            ParamType::Bool => "bool",
            ParamType::Enum(_) => "enum",
            ParamType::Node => "node",
        }
    }
}

/// One parameter declaration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParamDecl {
    /// Parameter name
    pub name: &'static str,
    /// Declared type
    pub ty: ParamType,
    /// Value used when the node does not set one
    pub default: ParamValue,
}

impl ParamDecl {
    const fn new(name: &'static str, ty: ParamType, default: ParamValue) -> Self {
        Self { name, ty, default }
    }
}

/// Returns the node's parameter declarations in registration order.
///
/// Adaptive subdivision and autobump parameters are only declared when the
/// host supports them.
///
/// # Example
///
/// ```rust
/// use polyplane_mesh::Capabilities;
/// use polyplane_procedural::parameter_schema;
///
/// assert_eq!(parameter_schema(Capabilities::FULL).len(), 12);
/// assert_eq!(parameter_schema(Capabilities::REDUCED).len(), 8);
/// ```
pub fn parameter_schema(caps: Capabilities) -> Vec<ParamDecl> {
    use self::param_names::*;

    let mut decls = vec![
        ParamDecl::new(WIDTH, ParamType::Float, ParamValue::Float(DEFAULT_WIDTH)),
        ParamDecl::new(DIVISIONS, ParamType::Int, ParamValue::Int(DEFAULT_DIVISIONS)),
        ParamDecl::new(
            SUBDIV_TYPE,
            ParamType::Enum(SubdivType::LABELS),
            ParamValue::Enum(DEFAULT_SUBDIV_TYPE),
        ),
        ParamDecl::new(
            SUBDIV_ITERATIONS,
            ParamType::Byte,
            ParamValue::Byte(DEFAULT_SUBDIV_ITERATIONS),
        ),
    ];

    if caps.adaptive_subdivision {
        decls.extend([
            ParamDecl::new(
                SUBDIV_ADAPTIVE_ERROR,
                ParamType::Float,
                ParamValue::Float(DEFAULT_SUBDIV_ADAPTIVE_ERROR),
            ),
            ParamDecl::new(
                SUBDIV_ADAPTIVE_METRIC,
                ParamType::Enum(AdaptiveMetric::LABELS),
                ParamValue::Enum(DEFAULT_SUBDIV_ADAPTIVE_METRIC),
            ),
            ParamDecl::new(
                SUBDIV_ADAPTIVE_SPACE,
                ParamType::Enum(AdaptiveSpace::LABELS),
                ParamValue::Enum(DEFAULT_SUBDIV_ADAPTIVE_SPACE),
            ),
        ]);
    }

    decls.extend([
        ParamDecl::new(DISP_MAP, ParamType::Node, ParamValue::Node(None)),
        ParamDecl::new(
            DISP_ZERO_VALUE,
            ParamType::Float,
            ParamValue::Float(DEFAULT_DISP_ZERO_VALUE),
        ),
        ParamDecl::new(DISP_HEIGHT, ParamType::Float, ParamValue::Float(DEFAULT_DISP_HEIGHT)),
        ParamDecl::new(DISP_PADDING, ParamType::Float, ParamValue::Float(DEFAULT_DISP_PADDING)),
    ]);

    if caps.autobump {
        decls.push(ParamDecl::new(
            DISP_AUTOBUMP,
            ParamType::Bool,
            ParamValue::Bool(DEFAULT_DISP_AUTOBUMP),
        ));
    }

    decls
}

/// Kind of node the library registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeType {
    /// A shape whose children are generated at render preparation time
    ShapeProcedural,
}

/// Output type of the registered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutputType {
    /// The node produces no shading output
    None,
}

/// Loader entry describing one node type exported by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    /// Registered node name
    pub name: &'static str,
    /// Node kind
    pub node_type: NodeType,
    /// Shading output type
    pub output_type: OutputType,
    /// Library version the node was built with
    pub version: &'static str,
}

/// Returns the node type exported at `index`.
///
/// The library exports a single node, so only index 0 yields an entry.
pub fn node_loader(index: usize) -> Option<NodeInfo> {
    (index == 0).then_some(NodeInfo {
        name: NODE_ENTRY_NAME,
        node_type: NodeType::ShapeProcedural,
        output_type: OutputType::None,
        version: env!("CARGO_PKG_VERSION"),
    })
}
