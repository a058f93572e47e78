//! Rigid rotation of the canonical vertex set
use std::f32::consts::TAU;

use nalgebra::{Matrix3, Point3};

/// Cumulative rotation around three axes (in radians).
///
/// Angles are kept in `[0, 2π)`, which leaves their sines and cosines
/// unchanged and keeps f32 precision from decaying on long runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x = (self.x + dx).rem_euclid(TAU);
        self.y = (self.y + dy).rem_euclid(TAU);
        self.z = (self.z + dz).rem_euclid(TAU);
    }

    /// Apply one frame's worth of rotation.
    pub fn advance(&mut self, increment: &RotationState) {
        self.rotate(increment.x, increment.y, increment.z);
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<[f32; 3]> for RotationState {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// The rotation for a single frame, with its trigonometry evaluated once.
///
/// Composes rotate-X, then rotate-Y, then rotate-Z.
#[derive(Debug, Clone, Copy)]
pub struct FrameRotation {
    matrix: Matrix3<f32>,
}

impl FrameRotation {
    pub fn new(rotation: &RotationState) -> Self {
        let (sx, cx) = rotation.x.sin_cos();
        let (sy, cy) = rotation.y.sin_cos();
        let (sz, cz) = rotation.z.sin_cos();

        #[rustfmt::skip]
        let rx = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, cx,  -sx,
            0.0, sx,  cx,
        );
        #[rustfmt::skip]
        let ry = Matrix3::new(
            cy,  0.0, sy,
            0.0, 1.0, 0.0,
            -sy, 0.0, cy,
        );
        #[rustfmt::skip]
        let rz = Matrix3::new(
            cz,  -sz, 0.0,
            sz,  cz,  0.0,
            0.0, 0.0, 1.0,
        );

        Self {
            matrix: rz * ry * rx,
        }
    }

    pub fn matrix(&self) -> &Matrix3<f32> {
        &self.matrix
    }

    pub fn apply(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::from(self.matrix * point.coords)
    }

    /// Reset `working` from `canonical` and rotate every vertex.
    ///
    /// Each vertex is rotated exactly once per frame, regardless of how many
    /// faces share it. The canonical set is never written.
    pub fn apply_all(&self, canonical: &[Point3<f32>], working: &mut Vec<Point3<f32>>) {
        working.clear();
        working.extend(canonical.iter().map(|v| self.apply(v)));
    }
}
