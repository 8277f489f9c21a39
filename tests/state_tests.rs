use std::cell::Cell;
use std::rc::Rc;

use glam::Vec3;
use lookat_camera::core::{RecordingSink, ScriptedController};
use lookat_camera::{Camera, CameraPose, CameraState, NullState};

/// State that counts its updates and drops
struct TrackedState {
    label: &'static str,
    step: Vec3,
    updates: Rc<Cell<u32>>,
    drops: Rc<Cell<u32>>,
}

impl TrackedState {
    fn new(label: &'static str, step: Vec3, drops: &Rc<Cell<u32>>) -> Self {
        Self {
            label,
            step,
            updates: Rc::new(Cell::new(0)),
            drops: drops.clone(),
        }
    }
}

impl CameraState for TrackedState {
    fn update(&mut self, pose: &mut CameraPose) {
        self.updates.set(self.updates.get() + 1);
        pose.eye += self.step;
    }

    fn name(&self) -> &str {
        self.label
    }
}

impl Drop for TrackedState {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn update(camera: &mut Camera) {
    let mut sink = RecordingSink::new();
    camera.update(&ScriptedController::default(), &mut sink).unwrap();
}

fn quiet_camera() -> Camera {
    let mut camera = Camera::new();
    camera.set_fly_enabled(false);
    camera
}

#[cfg(test)]
mod state_swap_tests {
    use super::*;

    #[test]
    fn test_default_state_is_null() {
        let mut camera = quiet_camera();
        assert_eq!(camera.state_name(), "Null");

        update(&mut camera);
        assert_eq!(camera.eye(), Vec3::new(0.0, 60.0, -120.0));
        assert_eq!(camera.target(), Vec3::ZERO);
    }

    #[test]
    fn test_state_runs_once_per_update() {
        let drops = Rc::new(Cell::new(0));
        let state = TrackedState::new("Drift", Vec3::X, &drops);
        let updates = state.updates.clone();

        let mut camera = quiet_camera();
        camera.set_state(Box::new(state));
        update(&mut camera);
        update(&mut camera);
        update(&mut camera);

        assert_eq!(updates.get(), 3);
        assert_eq!(camera.eye(), Vec3::new(3.0, 60.0, -120.0));
    }

    #[test]
    fn test_replacing_state_drops_previous_immediately() {
        let drops = Rc::new(Cell::new(0));
        let mut camera = quiet_camera();

        camera.set_state(Box::new(TrackedState::new("First", Vec3::X, &drops)));
        assert_eq!(drops.get(), 0);

        camera.set_state(Box::new(TrackedState::new("Second", Vec3::Y, &drops)));
        assert_eq!(drops.get(), 1);
        assert_eq!(camera.state_name(), "Second");

        drop(camera);
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn test_swap_keeps_pose_and_next_update_uses_new_state() {
        let drops = Rc::new(Cell::new(0));
        let first = TrackedState::new("First", Vec3::X, &drops);
        let first_updates = first.updates.clone();
        let second = TrackedState::new("Second", Vec3::new(0.0, 0.0, 5.0), &drops);
        let second_updates = second.updates.clone();

        let mut camera = quiet_camera();
        camera.set_state(Box::new(first));
        update(&mut camera);
        let eye_after_first = camera.eye();
        let target_after_first = camera.target();

        camera.set_state(Box::new(second));
        assert_eq!(camera.eye(), eye_after_first);
        assert_eq!(camera.target(), target_after_first);

        update(&mut camera);
        assert_eq!(first_updates.get(), 1);
        assert_eq!(second_updates.get(), 1);
        assert_eq!(camera.eye(), eye_after_first + Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_any_state_may_follow_any_state() {
        let drops = Rc::new(Cell::new(0));
        let mut camera = quiet_camera();

        camera.set_state(Box::new(NullState));
        camera.set_state(Box::new(NullState));
        camera.set_state(Box::new(TrackedState::new("Tracked", Vec3::ZERO, &drops)));
        camera.set_state(Box::new(|pose: &mut CameraPose| pose.target.y += 1.0));
        camera.set_state(Box::new(NullState));

        assert_eq!(drops.get(), 1);
        assert_eq!(camera.state_name(), "Null");
    }

    #[test]
    fn test_into_state_hands_back_ownership() {
        let drops = Rc::new(Cell::new(0));
        let mut camera = quiet_camera();
        camera.set_state(Box::new(TrackedState::new("Kept", Vec3::ZERO, &drops)));

        let state = camera.into_state();
        assert_eq!(drops.get(), 0);
        assert_eq!(state.name(), "Kept");

        drop(state);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_closure_state_follows_target() {
        let mut camera = quiet_camera();
        let offset = Vec3::new(0.0, 10.0, -30.0);
        camera.set_state(Box::new(move |pose: &mut CameraPose| pose.eye = pose.target + offset));

        camera.pose_mut().target = Vec3::new(5.0, 0.0, 5.0);
        update(&mut camera);

        assert_eq!(camera.eye(), Vec3::new(5.0, 10.0, -25.0));
        assert_eq!(camera.state_name(), "Closure");
        assert!(camera.view().transform_point3(camera.eye()).abs_diff_eq(Vec3::ZERO, 1e-4));
    }
}
