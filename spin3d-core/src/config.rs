//! Render configuration, loaded once at startup
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::ColorIndex;
use crate::depth::DepthOrder;
use crate::error::ConfigError;
use crate::projection::Camera;
use crate::transform::RotationState;

/// Fixed rendering constants: frame size, projection and spin rate.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub fov: f32,
    pub camera_offset: f32,
    /// Radians added to the X, Y and Z angles every frame.
    pub angle_increment: [f32; 3],
    pub background: ColorIndex,
    pub depth_order: DepthOrder,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            fov: Camera::DEFAULT_FOV,
            camera_offset: Camera::DEFAULT_CAMERA_OFFSET,
            angle_increment: [0.02; 3],
            background: ColorIndex::BACKGROUND,
            depth_order: DepthOrder::Canonical,
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded render config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.fov.is_finite() && self.fov > 0.0) {
            return Err(ConfigError::InvalidFov(self.fov));
        }
        if !(self.camera_offset.is_finite() && self.camera_offset > 0.0) {
            return Err(ConfigError::InvalidCameraOffset(self.camera_offset));
        }
        if !self.angle_increment.iter().all(|a| a.is_finite()) {
            return Err(ConfigError::InvalidAngleIncrement(self.angle_increment));
        }
        Ok(())
    }

    pub fn camera(&self) -> Camera {
        Camera {
            width: self.width,
            height: self.height,
            fov: self.fov,
            camera_offset: self.camera_offset,
        }
    }

    pub fn increment(&self) -> RotationState {
        RotationState::from(self.angle_increment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.camera(), Camera::new(320, 240));
        assert_eq!(config.increment(), RotationState::new(0.02, 0.02, 0.02));
    }

    #[test]
    fn test_partial_toml() {
        let config = RenderConfig::from_toml_str(
            r#"
            width = 160
            height = 120
            depth_order = "rotated"
            background = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.width, 160);
        assert_eq!(config.fov, 256.0);
        assert_eq!(config.depth_order, DepthOrder::Rotated);
        assert_eq!(config.background.index(), 8);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            RenderConfig::from_toml_str("width = 0"),
            Err(ConfigError::ZeroDimension { width: 0, height: 240 })
        ));
        assert!(matches!(
            RenderConfig::from_toml_str("fov = -1.0"),
            Err(ConfigError::InvalidFov(_))
        ));
        assert!(matches!(
            RenderConfig::from_toml_str("camera_offset = 0.0"),
            Err(ConfigError::InvalidCameraOffset(_))
        ));
        assert!(matches!(
            RenderConfig::from_toml_str("background = 16"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RenderConfig::from_toml_str("zoom = 2"),
            Err(ConfigError::Parse(_))
        ));

        let config = RenderConfig {
            angle_increment: [0.0, f32::NAN, 0.0],
            ..RenderConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAngleIncrement(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = RenderConfig::from_toml_file("/nonexistent/spin3d.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
