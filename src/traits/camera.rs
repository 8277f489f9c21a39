use crate::camera::CameraPose;

/// Pluggable camera behavior, run once per update after the fly step
pub trait CameraState {
    /// Adjust eye/target (and up) according to this behavior's policy
    fn update(&mut self, pose: &mut CameraPose);

    /// Get state name for debugging
    fn name(&self) -> &str {
        "CameraState"
    }
}

impl<F> CameraState for F
where
    F: FnMut(&mut CameraPose),
{
    fn update(&mut self, pose: &mut CameraPose) {
        self(pose)
    }

    fn name(&self) -> &str {
        "Closure"
    }
}
