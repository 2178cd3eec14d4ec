use thiserror::Error;

/// Startup errors. Nothing inside a running frame can fail; every variant here
/// is a precondition caught before the animation loop begins.
#[derive(Debug, Error)]
pub enum HeartError {
    #[error("particle pool capacity must be at least 1")]
    ZeroCapacity,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid fill color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("drawing surface is empty ({width}x{height})")]
    EmptySurface { width: f64, height: f64 },

    #[error("sprite image has zero width")]
    EmptySprite,

    #[error("failed to rasterize heart sprite: {0}")]
    Rasterize(String),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeartError>;
