use std::io;

use spin3d_core::ConfigError;
use thiserror::Error;

/// Errors that end the terminal app
#[derive(Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("target fps must be positive")]
    InvalidTargetFps,
}
