//! Per-tick frame orchestration
use nalgebra::Point3;

use crate::config::RenderConfig;
use crate::depth::{sort_faces_by_depth, DepthOrder};
use crate::error::ConfigError;
use crate::geometry::Mesh;
use crate::projection::{Camera, ScreenPoint};
use crate::raster::Rasterizer;
use crate::surface::Surface;
use crate::transform::{FrameRotation, RotationState};

/// Counters for one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frame: u64,
    pub faces_drawn: usize,
    pub pixels_written: usize,
}

/// Owns the mesh and all per-frame render state.
///
/// Nothing carries over between frames except the cumulative rotation: the
/// working buffer is rebuilt from the canonical vertices on every tick.
#[derive(Debug)]
pub struct Renderer {
    mesh: Mesh,
    camera: Camera,
    rotation: RotationState,
    increment: RotationState,
    depth_order: DepthOrder,
    working: Vec<Point3<f32>>,
    screen: Vec<ScreenPoint>,
    rasterizer: Rasterizer,
    frame: u64,
}

impl Renderer {
    pub fn new(mesh: Mesh, config: &RenderConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        // Rotation preserves distance from the origin, so this bounds
        // z + camera_offset away from zero for every frame.
        let radius = mesh.bounding_radius();
        if radius >= config.camera_offset {
            return Err(ConfigError::MeshTooClose {
                radius,
                camera_offset: config.camera_offset,
            });
        }

        tracing::debug!(
            vertices = mesh.vertices().len(),
            faces = mesh.faces().len(),
            radius,
            ?config,
            "renderer created"
        );

        let vertex_count = mesh.vertices().len();
        Ok(Self {
            mesh,
            camera: config.camera(),
            rotation: RotationState::zero(),
            increment: config.increment(),
            depth_order: config.depth_order,
            working: Vec::with_capacity(vertex_count),
            screen: Vec::with_capacity(vertex_count),
            rasterizer: Rasterizer::new(),
            frame: 0,
        })
    }

    /// Render one frame into `surface`.
    ///
    /// Clears the surface, advances the rotation, orders faces back to front
    /// and fills each one. Presenting the result is up to the caller.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        surface.clear();
        self.rotation.advance(&self.increment);
        let rotation = FrameRotation::new(&self.rotation);

        match self.depth_order {
            DepthOrder::Canonical => {
                let (canonical, faces) = self.mesh.split_mut();
                sort_faces_by_depth(faces, canonical);
                rotation.apply_all(canonical, &mut self.working);
            }
            DepthOrder::Rotated => {
                rotation.apply_all(self.mesh.vertices(), &mut self.working);
                sort_faces_by_depth(self.mesh.faces_mut(), &self.working);
            }
        }
        self.camera.project_all(&self.working, &mut self.screen);

        let mut stats = FrameStats {
            frame: self.frame,
            ..FrameStats::default()
        };
        for face in self.mesh.faces() {
            let [a, b, c] = face.indices.map(|i| self.screen[i]);
            stats.pixels_written += self.rasterizer.fill_triangle(surface, a, b, c, face.color);
            stats.faces_drawn += 1;
        }
        self.frame += 1;

        tracing::trace!(?stats, rotation = ?self.rotation, "frame rendered");
        stats
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Cumulative rotation, for nudging the mesh between frames.
    pub fn rotation_mut(&mut self) -> &mut RotationState {
        &mut self.rotation
    }

    pub fn increment(&self) -> &RotationState {
        &self.increment
    }

    pub fn set_increment(&mut self, increment: RotationState) {
        self.increment = increment;
    }

    /// Rotated vertex positions of the last rendered frame
    pub fn working_positions(&self) -> &[Point3<f32>] {
        &self.working
    }

    /// Projected vertex positions of the last rendered frame
    pub fn screen_positions(&self) -> &[ScreenPoint] {
        &self.screen
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frame
    }
}
