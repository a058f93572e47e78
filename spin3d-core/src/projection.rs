//! Pinhole camera projection to pixel coordinates
use nalgebra::{Point2, Point3};

/// Integer pixel coordinates of a projected vertex
pub type ScreenPoint = Point2<i32>;

/// Camera configuration for the perspective projection.
///
/// The camera looks down +z from `-camera_offset`; `fov` is a focal-length
/// scale in pixels rather than an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub fov: f32,
    pub camera_offset: f32,
}

impl Camera {
    pub const DEFAULT_FOV: f32 = 256.0;
    pub const DEFAULT_CAMERA_OFFSET: f32 = 4.0;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fov: Self::DEFAULT_FOV,
            camera_offset: Self::DEFAULT_CAMERA_OFFSET,
        }
    }

    /// Project a 3D point to 2D screen space.
    ///
    /// No clipping is done; points may land outside the frame. The result is
    /// truncated toward zero.
    pub fn project_to_screen(&self, point: &Point3<f32>) -> ScreenPoint {
        let depth = point.z + self.camera_offset;
        debug_assert!(depth > 0.0, "vertex at or behind the camera plane: {point}");

        let half_w = (self.width / 2) as f32;
        let half_h = (self.height / 2) as f32;
        let x = half_w + (point.x * self.fov) / depth;
        let y = half_h - (point.y * self.fov) / depth;

        ScreenPoint::new(x as i32, y as i32)
    }

    /// Project every point of `points` into `out`, replacing its contents.
    pub fn project_all(&self, points: &[Point3<f32>], out: &mut Vec<ScreenPoint>) {
        out.clear();
        out.extend(points.iter().map(|p| self.project_to_screen(p)));
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(320, 240)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(320, 240);
        assert_eq!(camera.fov, 256.0);
        assert_eq!(camera.camera_offset, 4.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = Camera::default();
        assert_eq!(
            camera.project_to_screen(&Point3::origin()),
            ScreenPoint::new(160, 120)
        );
    }

    #[test]
    fn test_projection_formula() {
        let camera = Camera::default();
        // z + offset = 4: 256 / 4 = 64 pixels per unit
        assert_eq!(
            camera.project_to_screen(&Point3::new(-1.0, -1.0, 0.0)),
            ScreenPoint::new(96, 184)
        );
        // z + offset = 3: 160 - 85.33 = 74.67, 120 + 85.33 = 205.33
        assert_eq!(
            camera.project_to_screen(&Point3::new(-1.0, -1.0, -1.0)),
            ScreenPoint::new(74, 205)
        );
        // z + offset = 5: 160 + 51.2, 120 - 51.2
        assert_eq!(
            camera.project_to_screen(&Point3::new(1.0, 1.0, 1.0)),
            ScreenPoint::new(211, 68)
        );
    }

    #[test]
    fn test_odd_dimensions_use_integer_half() {
        let camera = Camera::new(321, 241);
        assert_eq!(
            camera.project_to_screen(&Point3::origin()),
            ScreenPoint::new(160, 120)
        );
    }

    #[test]
    fn test_off_screen_points_pass_through() {
        let camera = Camera::default();
        let p = camera.project_to_screen(&Point3::new(-3.0, 3.0, 0.0));
        assert_eq!(p, ScreenPoint::new(-32, -72));
    }
}
