//! # Mesh Arrays
//!
//! Flat polygon-mesh arrays in the layout the host polymesh expects:
//! per-face side counts, a flattened vertex-index list and vertex positions.

use config::constants::{approx_zero, QUAD_SIDES};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// A polygon mesh as three flat arrays.
///
/// Positions are stored as `f32` because that is the precision the host
/// keeps them in; no wider intermediate is needed for a flat grid.
///
/// # Example
///
/// ```rust
/// use polyplane_mesh::{build_arrays, GridSpec};
///
/// let arrays = build_arrays(&GridSpec::new(2.0, 1)).unwrap();
/// assert_eq!(arrays.face_count(), 1);
/// assert_eq!(arrays.face(0), Some([0, 1, 3, 2]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshArrays {
    /// Number of vertices of each face (`nsides`)
    pub face_sizes: Vec<u8>,
    /// Vertex indices of every face, concatenated (`vidxs`)
    pub vertex_indices: Vec<u32>,
    /// Vertex positions (`vlist`)
    pub vertex_positions: Vec<Vec3>,
}

impl MeshArrays {
    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.face_sizes.len()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_positions.len()
    }

    /// Returns the number of entries in the index list.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.vertex_indices.len()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.face_sizes.is_empty()
    }

    /// Returns the four corner indices of quad `index`, or `None` if the
    /// index list does not reach that far.
    #[inline]
    pub fn face(&self, index: usize) -> Option<[u32; 4]> {
        let start = index.checked_mul(QUAD_SIDES as usize)?;
        let end = start.checked_add(QUAD_SIDES as usize)?;
        match self.vertex_indices.get(start..end)? {
            &[a, b, c, d] => Some([a, b, c, d]),
            _ => None,
        }
    }

    /// Iterates over the corner indices of every complete quad in the index
    /// list.
    pub fn faces(&self) -> impl Iterator<Item = [u32; 4]> + '_ {
        self.vertex_indices
            .chunks_exact(QUAD_SIDES as usize)
            .map(|c| [c[0], c[1], c[2], c[3]])
    }

    /// Returns the position of the vertex at `(row, col)` of a square grid.
    ///
    /// Returns `None` if the arrays are not a square grid or the position is
    /// outside it.
    pub fn vertex(&self, row: usize, col: usize) -> Option<Vec3> {
        let side = self.grid_side()?;
        if row >= side || col >= side {
            return None;
        }
        self.vertex_positions.get(row * side + col).copied()
    }

    /// Vertices per grid row, if the vertex count is a perfect square.
    fn grid_side(&self) -> Option<usize> {
        let count = self.vertex_positions.len();
        let side = (count as f64).sqrt().round() as usize;
        (side * side == count).then_some(side)
    }

    /// Computes the (unnormalized) normal of quad `index` from its first
    /// three corners.
    ///
    /// Returns `None` if the face or one of its corners does not exist.
    pub fn face_normal(&self, index: usize) -> Option<Vec3> {
        let [a, b, c, _] = self.face(index)?;
        let v0 = *self.vertex_positions.get(a as usize)?;
        let v1 = *self.vertex_positions.get(b as usize)?;
        let v2 = *self.vertex_positions.get(c as usize)?;
        Some((v1 - v0).cross(v2 - v0))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.vertex_positions.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        self.vertex_positions[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the arrays for correctness.
    ///
    /// Checks:
    /// - Every face is a quad
    /// - The index list has exactly four entries per face
    /// - All indices are in range
    /// - No quad repeats a corner
    pub fn validate(&self) -> MeshResult<()> {
        if let Some(i) = self.face_sizes.iter().position(|&n| n != QUAD_SIDES) {
            return Err(MeshError::validation(format!(
                "face {i} has {} sides, expected {QUAD_SIDES}",
                self.face_sizes[i]
            )));
        }

        let expected = self.face_count() * QUAD_SIDES as usize;
        if self.vertex_indices.len() != expected {
            return Err(MeshError::validation(format!(
                "index count {} does not match {} faces",
                self.vertex_indices.len(),
                self.face_count()
            )));
        }

        let vertex_count = self.vertex_count();
        if let Some(bad) = self
            .vertex_indices
            .iter()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(MeshError::validation(format!(
                "index {bad} out of range for {vertex_count} vertices"
            )));
        }

        for (i, face) in self.faces().enumerate() {
            for a in 0..4 {
                if face[(a + 1)..].contains(&face[a]) {
                    return Err(MeshError::validation(format!(
                        "face {i} repeats vertex {}",
                        face[a]
                    )));
                }
            }
        }

        Ok(())
    }

    /// Returns true if every face normal points along `+Y`.
    ///
    /// Degenerate faces (zero area) are ignored. Arrays that fail
    /// [`MeshArrays::validate`] are never considered facing up.
    pub fn faces_up(&self) -> bool {
        if self.validate().is_err() {
            return false;
        }
        (0..self.face_count()).all(|i| {
            self.face_normal(i).is_some_and(|n| {
                approx_zero(n.length()) || (n.y > 0.0 && approx_zero(n.x) && approx_zero(n.z))
            })
        })
    }

    /// Exports positions as a flattened `[x, y, z, x, y, z, ...]` array.
    pub fn positions_flat(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertex_positions.len() * 3);
        for v in &self.vertex_positions {
            result.extend_from_slice(&v.to_array());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> MeshArrays {
        MeshArrays {
            face_sizes: vec![4],
            vertex_indices: vec![0, 1, 3, 2],
            vertex_positions: vec![
                Vec3::new(-1.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(-1.0, 0.0, -1.0),
                Vec3::new(1.0, 0.0, -1.0),
            ],
        }
    }

    #[test]
    fn test_empty_arrays() {
        let arrays = MeshArrays::default();
        assert!(arrays.is_empty());
        assert_eq!(arrays.bounding_box(), (Vec3::ZERO, Vec3::ZERO));
        assert!(arrays.validate().is_ok());
    }

    #[test]
    fn test_face_access() {
        let arrays = unit_quad();
        assert_eq!(arrays.face(0), Some([0, 1, 3, 2]));
        assert_eq!(arrays.face(1), None);
        assert_eq!(arrays.faces().count(), 1);
    }

    #[test]
    fn test_out_of_range_corners_do_not_panic() {
        let arrays = MeshArrays {
            face_sizes: vec![4],
            vertex_indices: vec![0, 1, 2, 3],
            vertex_positions: Vec::new(),
        };
        assert_eq!(arrays.face_normal(0), None);
        assert!(!arrays.faces_up());

        let truncated = MeshArrays {
            face_sizes: vec![4, 4],
            ..unit_quad()
        };
        assert_eq!(truncated.face(1), None);
        assert_eq!(truncated.face_normal(1), None);
        assert!(!truncated.faces_up());
    }

    #[test]
    fn test_json_round_trip() {
        let arrays = unit_quad();
        let json = serde_json::to_string(&arrays).unwrap();
        let restored: MeshArrays = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, arrays);
        assert!(restored.faces_up());
    }

    #[test]
    fn test_vertex_by_row_col() {
        let arrays = unit_quad();
        assert_eq!(arrays.vertex(1, 1), Some(Vec3::new(1.0, 0.0, -1.0)));
        assert_eq!(arrays.vertex(2, 0), None);
    }

    #[test]
    fn test_face_normal_points_up() {
        let arrays = unit_quad();
        let n = arrays.face_normal(0).unwrap();
        assert!(n.y > 0.0);
        assert!(arrays.faces_up());
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = unit_quad().bounding_box();
        assert_eq!(min, Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(max, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_validate_index_out_of_range() {
        let mut arrays = unit_quad();
        arrays.vertex_indices[2] = 4;
        assert!(matches!(
            arrays.validate(),
            Err(MeshError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_validate_non_quad() {
        let mut arrays = unit_quad();
        arrays.face_sizes[0] = 3;
        assert!(arrays.validate().is_err());
    }

    #[test]
    fn test_validate_repeated_corner() {
        let mut arrays = unit_quad();
        arrays.vertex_indices = vec![0, 1, 1, 2];
        assert!(arrays.validate().is_err());
    }

    #[test]
    fn test_positions_flat() {
        let flat = unit_quad().positions_flat();
        assert_eq!(flat.len(), 12);
        assert_eq!(&flat[..3], &[-1.0, 0.0, 1.0]);
    }
}
