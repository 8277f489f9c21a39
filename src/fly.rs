use glam::Vec3;
use log::trace;

use crate::camera::CameraPose;
use crate::traits::{Button, Controller};

/// Keys relevant to the debug fly camera, sampled once per update
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FlyInput {
    pub shift: bool,
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl FlyInput {
    pub fn from_controller(controller: &dyn Controller) -> Self {
        Self {
            shift: controller.is_down(Button::Shift),
            forward: controller.is_down(Button::KeyW),
            backward: controller.is_down(Button::KeyS),
            left: controller.is_down(Button::KeyA),
            right: controller.is_down(Button::KeyD),
            up: controller.is_down(Button::KeyQ),
            down: controller.is_down(Button::KeyE),
        }
    }

    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Vertical direction: up takes precedence when both are held
    const fn vertical(&self) -> f32 {
        if self.up {
            1.0
        } else if self.down {
            -1.0
        } else {
            0.0
        }
    }

    /// Displacement for eye and target; zero unless shift is held
    pub fn displacement(&self, pose: &CameraPose, speed: f32) -> Vec3 {
        if !self.shift {
            return Vec3::ZERO;
        }

        let forward = Self::to_direction(self.forward, self.backward);
        let side = Self::to_direction(self.right, self.left);

        pose.front() * forward * speed + pose.right() * side * speed + Vec3::Y * self.vertical() * speed
    }
}

/// Apply one fly step to the pose, returning the displacement used
pub fn apply(pose: &mut CameraPose, controller: &dyn Controller, speed: f32) -> Vec3 {
    let input = FlyInput::from_controller(controller);
    let delta = input.displacement(pose, speed);

    if delta != Vec3::ZERO {
        pose.translate(delta);
        trace!("Fly step {:?} -> eye {:?}", delta, pose.eye);
    }

    delta
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized_pose() -> CameraPose {
        let mut pose = CameraPose::default();
        pose.normalize().unwrap();
        pose
    }

    #[test]
    fn test_no_shift_no_motion() {
        let input = FlyInput {
            forward: true,
            up: true,
            ..Default::default()
        };
        assert_eq!(input.displacement(&normalized_pose(), 2.0), Vec3::ZERO);
    }

    #[test]
    fn test_forward_and_backward_cancel() {
        let input = FlyInput {
            shift: true,
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(input.displacement(&normalized_pose(), 2.0), Vec3::ZERO);
    }

    #[test]
    fn test_up_wins_over_down() {
        let input = FlyInput {
            shift: true,
            up: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(input.displacement(&normalized_pose(), 2.0), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_down_moves_world_y() {
        let input = FlyInput {
            shift: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(input.displacement(&normalized_pose(), 0.5), Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn test_strafe_uses_right_vector() {
        let pose = normalized_pose();
        let input = FlyInput {
            shift: true,
            left: true,
            ..Default::default()
        };
        let delta = input.displacement(&pose, 2.0);
        assert!(delta.abs_diff_eq(-2.0 * pose.right(), 1e-6));
    }
}
