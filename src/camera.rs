use std::fmt;

use glam::{Mat4, Vec3};
use log::{debug, warn};
use serde::Serialize;

use crate::config::CameraConfig;
use crate::error::{CameraError, Result};
use crate::fly;
use crate::projection::Projection;
use crate::state::NullState;
use crate::traits::{CameraState, Controller, TransformKind, TransformSink};

pub const CAMERA_SPEED: f32 = 2.0;
pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 60.0, -120.0);
pub const DEFAULT_TARGET: Vec3 = Vec3::ZERO;
pub const DEFAULT_UP: Vec3 = Vec3::Y;

/// Derive unit front/right vectors for a look-at configuration
pub fn derive_basis(eye: Vec3, target: Vec3, up: Vec3) -> Result<(Vec3, Vec3)> {
    let front = (target - eye)
        .try_normalize()
        .ok_or(CameraError::DegenerateView {
            eye: eye.to_array(),
            target: target.to_array(),
        })?;
    let right = up
        .cross(front)
        .try_normalize()
        .ok_or(CameraError::DegenerateUp { up: up.to_array() })?;

    Ok((front, right))
}

/// Eye/target/up plus the basis derived from them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    front: Vec3,
    right: Vec3,
}

impl CameraPose {
    /// Create pose; front/right stay zero until the first normalize
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            target,
            up,
            front: Vec3::ZERO,
            right: Vec3::ZERO,
        }
    }

    /// Re-derive front/right from eye/target/up
    pub fn normalize(&mut self) -> Result<()> {
        let (front, right) = derive_basis(self.eye, self.target, self.up)?;
        self.front = front;
        self.right = right;
        Ok(())
    }

    /// Unit vector from eye towards target, as of the last normalize
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit vector `up x front`, as of the last normalize
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Move eye and target together
    pub fn translate(&mut self, delta: Vec3) {
        self.eye += delta;
        self.target += delta;
    }

    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(DEFAULT_EYE, DEFAULT_TARGET, DEFAULT_UP)
    }
}

/// Serializable view of the camera after an update
#[derive(Debug, Clone, Serialize)]
pub struct CameraSnapshot {
    pub state: String,
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    pub front: [f32; 3],
    pub right: [f32; 3],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// Look-at camera driven by a pluggable behavior state
pub struct Camera {
    pose: CameraPose,
    view: Mat4,
    projection: Mat4,
    params: Projection,
    fly_enabled: bool,
    fly_speed: f32,
    state: Box<dyn CameraState>,
}

impl Camera {
    /// Camera at the default eye/target/up with a null state
    pub fn new() -> Self {
        Self {
            pose: CameraPose::default(),
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            params: Projection::default(),
            fly_enabled: cfg!(debug_assertions),
            fly_speed: CAMERA_SPEED,
            state: Box::new(NullState),
        }
    }

    /// Build camera from a validated configuration
    pub fn from_config(config: &CameraConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            pose: CameraPose::new(
                Vec3::from_array(config.eye),
                Vec3::from_array(config.target),
                Vec3::from_array(config.up),
            ),
            params: config.projection()?,
            fly_enabled: config.fly_enabled,
            fly_speed: config.fly_speed,
            ..Self::new()
        })
    }

    /// Per-frame update: basis, debug fly, state, then matrices
    pub fn update(&mut self, controller: &dyn Controller, sink: &mut dyn TransformSink) -> Result<()> {
        self.pose
            .normalize()
            .inspect_err(|e| warn!("Skipping camera update: {}", e))?;

        if self.fly_enabled {
            fly::apply(&mut self.pose, controller, self.fly_speed);
        }

        self.state.update(&mut self.pose);

        self.set_projection(sink)
    }

    /// Rebuild view and projection and upload world/view/projection
    pub fn set_projection(&mut self, sink: &mut dyn TransformSink) -> Result<()> {
        // the state may have moved eye onto target since normalize
        derive_basis(self.pose.eye, self.pose.target, self.pose.up)
            .inspect_err(|e| warn!("Rejecting camera matrices: {}", e))?;

        self.view = Mat4::look_at_lh(self.pose.eye, self.pose.target, self.pose.up);
        self.projection = self.params.matrix();

        sink.set_transform(TransformKind::World, &Mat4::IDENTITY);
        sink.set_transform(TransformKind::View, &self.view);
        sink.set_transform(TransformKind::Projection, &self.projection);

        Ok(())
    }

    /// Rotation-only inverse of the view matrix, for billboards
    pub fn inverse_view(&self) -> Mat4 {
        // transpose is the inverse only because the rotation block is orthonormal
        let mut inverse = self.view.transpose();
        inverse.x_axis.w = 0.0;
        inverse.y_axis.w = 0.0;
        inverse.z_axis.w = 0.0;
        inverse
    }

    /// View applied first, then projection
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Replace the behavior state; the previous one is dropped here
    pub fn set_state(&mut self, state: Box<dyn CameraState>) {
        debug!("Camera state {} -> {}", self.state.name(), state.name());
        self.state = state;
    }

    /// Tear down the camera, handing back its state
    pub fn into_state(self) -> Box<dyn CameraState> {
        self.state
    }

    pub fn state_name(&self) -> &str {
        self.state.name()
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn pose_mut(&mut self) -> &mut CameraPose {
        &mut self.pose
    }

    pub fn eye(&self) -> Vec3 {
        self.pose.eye
    }

    pub fn target(&self) -> Vec3 {
        self.pose.target
    }

    pub fn up(&self) -> Vec3 {
        self.pose.up
    }

    pub fn front(&self) -> Vec3 {
        self.pose.front
    }

    pub fn right(&self) -> Vec3 {
        self.pose.right
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn projection_params(&self) -> &Projection {
        &self.params
    }

    pub fn set_projection_params(&mut self, params: Projection) {
        self.params = params;
    }

    pub fn fly_enabled(&self) -> bool {
        self.fly_enabled
    }

    pub fn set_fly_enabled(&mut self, enabled: bool) {
        self.fly_enabled = enabled;
    }

    pub fn fly_speed(&self) -> f32 {
        self.fly_speed
    }

    pub fn snapshot(&self) -> CameraSnapshot {
        CameraSnapshot {
            state: self.state.name().to_string(),
            eye: self.pose.eye.to_array(),
            target: self.pose.target.to_array(),
            up: self.pose.up.to_array(),
            front: self.pose.front.to_array(),
            right: self.pose.right.to_array(),
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("pose", &self.pose)
            .field("params", &self.params)
            .field("fly_enabled", &self.fly_enabled)
            .field("fly_speed", &self.fly_speed)
            .field("state", &self.state.name())
            .finish()
    }
}
