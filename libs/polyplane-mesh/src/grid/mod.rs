//! # Grid Plane
//!
//! Generates a square quad grid centered at the origin in the X-Z plane.
//!
//! ## Layout
//!
//! ```text
//!   row 0 (z = +w/2)   0 ── 1 ── 2
//!                      │    │    │
//!   row 1              3 ── 4 ── 5
//!                      │    │    │
//!   row 2 (z = -w/2)   6 ── 7 ── 8
//!                   x = -w/2     x = +w/2
//! ```
//!
//! Vertices are row-major, so vertex `(row, col)` has index
//! `row * (divisions + 1) + col`. Face corners rely on this ordering.

use config::constants::{grid_vertex_count, MAX_VERTICES, QUAD_SIDES};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshArrays;

/// Size and resolution of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Edge length of the square plane
    pub width: f32,
    /// Quads along each edge
    pub divisions: i32,
}

impl GridSpec {
    /// Creates a spec; values are checked by [`GridSpec::validate`].
    pub fn new(width: f32, divisions: i32) -> Self {
        Self { width, divisions }
    }

    /// Checks the spec and returns the division count as an unsigned value.
    ///
    /// Rejects `divisions < 1`, non-finite widths and grids over
    /// [`MAX_VERTICES`]. A finite width `<= 0` is allowed: it turns the plane
    /// half a turn about Y or collapses it, which the host can still consume.
    pub fn validate(&self) -> MeshResult<u32> {
        if self.divisions < 1 {
            return Err(MeshError::invalid_parameter(
                "divisions",
                format!("must be >= 1, got {}", self.divisions),
            ));
        }
        if !self.width.is_finite() {
            return Err(MeshError::invalid_parameter(
                "width",
                format!("must be finite, got {}", self.width),
            ));
        }

        let divisions = self.divisions as u32;
        let count = grid_vertex_count(divisions).unwrap_or(usize::MAX);
        if count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count,
                max: MAX_VERTICES,
            });
        }

        if self.width <= 0.0 {
            log::warn!(
                "plane width {} is not positive; the grid will be rotated or degenerate",
                self.width
            );
        }

        Ok(divisions)
    }

    /// Distance between neighbouring vertices along either axis.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.width / self.divisions as f32
    }

    /// Number of quad faces the grid produces.
    pub fn face_count(&self) -> usize {
        let n = self.divisions.max(0) as usize;
        n * n
    }

    /// Number of vertices the grid produces.
    pub fn vertex_count(&self) -> usize {
        grid_vertex_count(self.divisions.max(0) as u32).unwrap_or(usize::MAX)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: config::constants::DEFAULT_WIDTH,
            divisions: config::constants::DEFAULT_DIVISIONS,
        }
    }
}

/// Generates the grid's vertex positions in row-major order.
///
/// # Example
///
/// ```rust
/// use polyplane_mesh::{grid_vertices, GridSpec};
/// use glam::Vec3;
///
/// let vertices = grid_vertices(&GridSpec::new(10.0, 2)).unwrap();
/// assert_eq!(vertices.len(), 9);
/// assert_eq!(vertices[0], Vec3::new(-5.0, 0.0, 5.0));
/// assert_eq!(vertices[8], Vec3::new(5.0, 0.0, -5.0));
/// ```
pub fn grid_vertices(spec: &GridSpec) -> MeshResult<Vec<Vec3>> {
    let divisions = spec.validate()?;
    Ok(vertices_unchecked(spec.width, divisions))
}

/// Generates the grid's face sizes and vertex indices, one quad per cell in
/// row-major cell order.
///
/// # Example
///
/// ```rust
/// use polyplane_mesh::{grid_faces, GridSpec};
///
/// let (sizes, indices) = grid_faces(&GridSpec::new(1.0, 1)).unwrap();
/// assert_eq!(sizes, vec![4]);
/// assert_eq!(indices, vec![0, 1, 3, 2]);
/// ```
pub fn grid_faces(spec: &GridSpec) -> MeshResult<(Vec<u8>, Vec<u32>)> {
    let divisions = spec.validate()?;
    Ok(faces_unchecked(divisions))
}

/// Generates the complete mesh arrays for `spec`.
pub fn build_arrays(spec: &GridSpec) -> MeshResult<MeshArrays> {
    let divisions = spec.validate()?;
    let (face_sizes, vertex_indices) = faces_unchecked(divisions);
    Ok(MeshArrays {
        face_sizes,
        vertex_indices,
        vertex_positions: vertices_unchecked(spec.width, divisions),
    })
}

fn vertices_unchecked(width: f32, divisions: u32) -> Vec<Vec3> {
    let step = width / divisions as f32;
    let half = width / 2.0;
    let side = divisions as usize + 1;

    let mut vertices = Vec::with_capacity(side * side);
    for row in 0..=divisions {
        // Row 0 sits at +w/2 and rows walk towards -z.
        let z = (width - row as f32 * step) - half;
        for col in 0..=divisions {
            let x = step * col as f32 - half;
            vertices.push(Vec3::new(x, 0.0, z));
        }
    }
    vertices
}

fn faces_unchecked(divisions: u32) -> (Vec<u8>, Vec<u32>) {
    let face_count = divisions as usize * divisions as usize;
    let stride = divisions + 1;

    let face_sizes = vec![QUAD_SIDES; face_count];
    let mut indices = Vec::with_capacity(face_count * QUAD_SIDES as usize);
    for row in 0..divisions {
        for col in 0..divisions {
            let bottom_left = row * stride + col;
            let bottom_right = bottom_left + 1;
            // Counter-clockwise seen from +Y.
            indices.extend_from_slice(&[
                bottom_left,
                bottom_right,
                bottom_right + stride,
                bottom_left + stride,
            ]);
        }
    }
    (face_sizes, indices)
}
