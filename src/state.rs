use crate::camera::CameraPose;
use crate::traits::CameraState;

/// Behavior that leaves the pose untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct NullState;

impl CameraState for NullState {
    fn update(&mut self, _pose: &mut CameraPose) {}

    fn name(&self) -> &str {
        "Null"
    }
}
