//! Error types for mesh construction and configuration
//!
//! The per-frame pipeline itself is infallible; everything that can go wrong
//! is caught when a mesh or a renderer is built.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling a mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    /// A color index outside the 16-entry palette.
    #[error("color index {0} is outside the palette")]
    ColorOutOfPalette(u8),
}

/// Errors raised while loading or validating render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("frame buffer must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("fov must be positive and finite, got {0}")]
    InvalidFov(f32),

    #[error("camera offset must be positive and finite, got {0}")]
    InvalidCameraOffset(f32),

    #[error("angle increment must be finite, got {0:?}")]
    InvalidAngleIncrement([f32; 3]),

    /// Some rotation of the mesh would put a vertex at or behind the camera
    /// plane, where the projection divides by zero or flips sign.
    #[error("mesh bounding radius {radius} must be below camera offset {camera_offset}")]
    MeshTooClose { radius: f32, camera_offset: f32 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
