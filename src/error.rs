use thiserror::Error;

pub type Result<T> = std::result::Result<T, CameraError>;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Degenerate view: eye {eye:?} coincides with target {target:?}")]
    DegenerateView { eye: [f32; 3], target: [f32; 3] },

    #[error("Degenerate up vector {up:?}: parallel to view direction")]
    DegenerateUp { up: [f32; 3] },

    #[error("Invalid projection: {0}")]
    InvalidProjection(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("GPU error: {0}")]
    Gpu(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
