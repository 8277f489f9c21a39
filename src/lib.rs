pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fly;
pub mod projection;
pub mod state;
pub mod traits;
pub mod types;

pub use camera::{Camera, CameraPose, CameraSnapshot};
pub use config::CameraConfig;
pub use error::{CameraError, Result};
pub use projection::Projection;
pub use state::NullState;
pub use traits::{Button, CameraState, Controller, TransformKind, TransformSink};
