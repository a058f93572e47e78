//! Geometry store: canonical vertex positions and triangle topology
use nalgebra::Point3;

use crate::color::ColorIndex;
use crate::error::MeshError;

/// A triangle referencing three vertices of the shared vertex buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub indices: [usize; 3],
    pub color: ColorIndex,
    /// Sort key, recomputed every frame by the depth sorter.
    pub depth: f32,
}

impl Face {
    pub fn new(v0: usize, v1: usize, v2: usize, color: ColorIndex) -> Self {
        Self {
            indices: [v0, v1, v2],
            color,
            depth: 0.0,
        }
    }
}

/// An indexed triangle mesh.
///
/// Vertex positions are fixed at construction and only ever read; faces may
/// be reordered in place so that they can be drawn back to front.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
    faces: Vec<Face>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point3<f32>>, faces: Vec<Face>) -> Result<Self, MeshError> {
        for (face_idx, face) in faces.iter().enumerate() {
            if let Some(&index) = face.indices.iter().find(|&&i| i >= vertices.len()) {
                return Err(MeshError::VertexIndexOutOfRange {
                    face: face_idx,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Create a cube centered at the origin, each quad side split into two
    /// triangles sharing a diagonal. `cube(2.0)` spans -1..1 on every axis.
    pub fn cube(size: f32) -> Self {
        let h = size / 2.0;
        let vertices = vec![
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
        ];

        const FRONT: ColorIndex = ColorIndex(6);
        const BACK: ColorIndex = ColorIndex(1);
        const LEFT: ColorIndex = ColorIndex(2);
        const RIGHT: ColorIndex = ColorIndex(3);
        const TOP: ColorIndex = ColorIndex(4);
        const BOTTOM: ColorIndex = ColorIndex(5);

        let faces = vec![
            // Front (z = -h)
            Face::new(0, 1, 2, FRONT),
            Face::new(0, 2, 3, FRONT),
            // Back (z = h)
            Face::new(4, 5, 6, BACK),
            Face::new(4, 6, 7, BACK),
            // Left (x = -h)
            Face::new(0, 3, 7, LEFT),
            Face::new(0, 7, 4, LEFT),
            // Right (x = h)
            Face::new(1, 5, 6, RIGHT),
            Face::new(1, 6, 2, RIGHT),
            // Top (y = h)
            Face::new(2, 3, 7, TOP),
            Face::new(2, 7, 6, TOP),
            // Bottom (y = -h)
            Face::new(0, 1, 5, BOTTOM),
            Face::new(0, 5, 4, BOTTOM),
        ];

        Self { vertices, faces }
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Borrow the canonical positions alongside mutable faces, so faces can
    /// be re-sorted against them.
    pub fn split_mut(&mut self) -> (&[Point3<f32>], &mut [Face]) {
        (&self.vertices, &mut self.faces)
    }

    /// Mutable faces only; vertex positions stay untouched.
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// Largest distance of any vertex from the origin.
    ///
    /// Rotation about the origin preserves this distance, so it bounds the
    /// z range of every rotated copy of the mesh.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, f32::max)
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::cube(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_topology() {
        let cube = Mesh::cube(2.0);
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 12);

        let mut colors: Vec<u8> = cube.faces().iter().map(|f| f.color.index()).collect();
        colors.dedup();
        assert_eq!(colors, vec![6, 1, 2, 3, 4, 5]);

        assert_eq!(cube.vertices()[0], Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(cube.vertices()[6], Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_cube_quads_share_an_edge() {
        let cube = Mesh::cube(2.0);
        for pair in cube.faces().chunks(2) {
            let shared = pair[0]
                .indices
                .iter()
                .filter(|i| pair[1].indices.contains(i))
                .count();
            assert_eq!(shared, 2);
            assert_eq!(pair[0].color, pair[1].color);
        }
    }

    #[test]
    fn test_bounding_radius() {
        let cube = Mesh::cube(2.0);
        assert!((cube.bounding_radius() - 3.0_f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_dangling_index() {
        let vertices = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        let faces = vec![Face::new(0, 1, 2, ColorIndex::BACKGROUND)];
        let err = Mesh::new(vertices, faces).unwrap_err();
        assert_eq!(
            err,
            MeshError::VertexIndexOutOfRange {
                face: 0,
                index: 2,
                vertex_count: 2
            }
        );
    }
}
