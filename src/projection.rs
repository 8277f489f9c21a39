use glam::Mat4;

use crate::error::{CameraError, Result};

pub const CAMERA_FOV_Y: f32 = std::f32::consts::PI / 3.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 500.0;
pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;

/// Left-handed perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Projection {
    /// Create projection from vertical fov (radians), aspect ratio and clip planes
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Result<Self> {
        if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
            return Err(CameraError::InvalidProjection(format!(
                "vertical fov must be in (0, pi), got {}",
                fov_y
            )));
        }
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(CameraError::InvalidProjection(format!(
                "aspect ratio must be positive, got {}",
                aspect
            )));
        }
        // near must never reach 0 or the depth range collapses
        if !(near > 0.0 && far.is_finite() && far > near) {
            return Err(CameraError::InvalidProjection(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                near, far
            )));
        }

        Ok(Self { fov_y, aspect, near, far })
    }

    /// Create projection with aspect ratio taken from screen dimensions
    pub fn from_screen(fov_y: f32, width: u32, height: u32, near: f32, far: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CameraError::InvalidProjection(format!(
                "screen dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        Self::new(fov_y, width as f32 / height as f32, near, far)
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Build the projection matrix (depth mapped to [0, 1])
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: CAMERA_FOV_Y,
            aspect: SCREEN_WIDTH as f32 / SCREEN_HEIGHT as f32,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
        }
    }
}
