use thiserror::Error;

/// A matrix was configured with geometry that cannot be laid out
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("matrix {axis} must be at least 1 LED")]
    ZeroDimension { axis: &'static str },
    #[error("LED {axis} must be a positive, finite size (got {value})")]
    InvalidLedSize { axis: &'static str, value: f32 },
    #[error("LED spacing {axis} must be zero or a positive, finite size (got {value})")]
    InvalidSpacing { axis: &'static str, value: f32 },
}

/// Failures of the simulator application around the matrix itself
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unable to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid matrix configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("unable to write snapshot: {0}")]
    Image(#[from] image::ImageError),
    #[error("unable to start the window: {0}")]
    Gui(String),
}
