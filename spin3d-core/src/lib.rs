//! spin3d core library: a software rendering pipeline for a rotating mesh
//!
//! Each frame the canonical mesh is rotated, projected with a pinhole camera,
//! ordered back to front and filled triangle by triangle with flat palette
//! colors into a [`Surface`]. No hardware acceleration or depth buffer is
//! involved.

pub mod color;
pub mod config;
pub mod depth;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod projection;
pub mod raster;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use color::{ColorIndex, PALETTE_SIZE};
pub use config::RenderConfig;
pub use depth::DepthOrder;
pub use error::{ConfigError, MeshError};
pub use frame::{FrameStats, Renderer};
pub use geometry::{Face, Mesh};
pub use projection::{Camera, ScreenPoint};
pub use raster::Rasterizer;
pub use surface::{FrameBuffer, Surface};
pub use transform::{FrameRotation, RotationState};
