//! # Configuration Constants
//!
//! Centralized constants for the PolyPlane procedural. All parameter
//! defaults, mesh limits and node names are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Grid**: Default plane size and resolution
//! - **Subdivision / Displacement**: Defaults forwarded to the host mesh
//! - **Limits**: Maximum values for safety bounds
//! - **Naming**: Scene-graph names used when registering nodes

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of vertex coordinates.
///
/// Vertex positions are produced in `f32` because that is the precision the
/// host stores them in.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f32, b: f32) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-7));
/// ```
pub const EPSILON: f32 = 1e-5;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Default edge length of the square plane.
pub const DEFAULT_WIDTH: f32 = 10.0;

/// Default number of quads along each edge of the plane.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DIVISIONS;
///
/// let vertices = (DEFAULT_DIVISIONS + 1).pow(2);
/// assert_eq!(vertices, 9);
/// ```
pub const DEFAULT_DIVISIONS: i32 = 2;

/// Number of sides of every face in the grid.
pub const QUAD_SIDES: u8 = 4;

// =============================================================================
// SUBDIVISION CONSTANTS
// =============================================================================

/// Default subdivision type index (`none`).
pub const DEFAULT_SUBDIV_TYPE: i32 = 0;

/// Default number of subdivision iterations requested from the host.
pub const DEFAULT_SUBDIV_ITERATIONS: u8 = 1;

/// Default adaptive subdivision error threshold. Zero disables adaptivity.
pub const DEFAULT_SUBDIV_ADAPTIVE_ERROR: f32 = 0.0;

/// Default adaptive metric index (`auto`).
pub const DEFAULT_SUBDIV_ADAPTIVE_METRIC: i32 = 0;

/// Default adaptive space index (`raster`).
pub const DEFAULT_SUBDIV_ADAPTIVE_SPACE: i32 = 0;

// =============================================================================
// DISPLACEMENT CONSTANTS
// =============================================================================

/// Default displacement height scale.
pub const DEFAULT_DISP_HEIGHT: f32 = 1.0;

/// Default displacement value treated as "no displacement".
pub const DEFAULT_DISP_ZERO_VALUE: f32 = 0.0;

/// Default bounds padding for displaced geometry.
pub const DEFAULT_DISP_PADDING: f32 = 0.0;

/// Default autobump flag.
pub const DEFAULT_DISP_AUTOBUMP: bool = false;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices a single plane may produce.
///
/// Keeps every vertex index well inside `u32` and bounds memory use when a
/// scene file asks for an absurd division count.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// assert!(MAX_VERTICES < u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = 100_000_000;

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Name of the child polymesh created under each procedural node.
pub const MESH_NODE_NAME: &str = "plane_shape";

/// Name under which the procedural node type is registered with the host.
pub const NODE_ENTRY_NAME: &str = "ar_polyplane";

/// Number of child nodes each procedural instance exposes.
pub const NUM_CHILDREN: usize = 1;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f32 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-7));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f32) -> bool {
    value.abs() < EPSILON
}

/// Returns the vertex count of a square grid with `divisions` quads per edge,
/// or `None` if it does not fit in `usize`.
///
/// # Example
///
/// ```rust
/// use config::constants::grid_vertex_count;
///
/// assert_eq!(grid_vertex_count(2), Some(9));
/// ```
pub fn grid_vertex_count(divisions: u32) -> Option<usize> {
    let side = (divisions as usize).checked_add(1)?;
    side.checked_mul(side)
}
