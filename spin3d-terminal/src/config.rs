//! Frontend configuration: render settings plus frame pacing
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use spin3d_core::{ConfigError, RenderConfig};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub target_fps: u32,
    /// Draw the status line over the first row.
    pub show_stats: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            target_fps: 30,
            show_stats: true,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(input).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded app config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.render.validate()?;
        if self.target_fps == 0 {
            return Err(AppError::InvalidTargetFps);
        }
        Ok(())
    }
}
