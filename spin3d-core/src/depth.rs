//! Painter's-algorithm face ordering
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::geometry::Face;

/// Which vertex positions the depth sorter reads.
///
/// `Canonical` sorts against the unrotated mesh before the frame's rotation
/// is applied. The order it yields is only an approximation once the mesh
/// turns, since it never changes. `Rotated` sorts against the frame's rotated
/// positions instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthOrder {
    #[default]
    Canonical,
    Rotated,
}

/// Mean z of the face's three vertices
pub fn face_depth(face: &Face, positions: &[Point3<f32>]) -> f32 {
    let [a, b, c] = face.indices;
    (positions[a].z + positions[b].z + positions[c].z) / 3.0
}

/// Recompute every face's depth and sort farthest first.
pub fn sort_faces_by_depth(faces: &mut [Face], positions: &[Point3<f32>]) {
    for face in faces.iter_mut() {
        face.depth = face_depth(face, positions);
    }
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
