use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{derive_basis, CAMERA_SPEED, DEFAULT_EYE, DEFAULT_TARGET, DEFAULT_UP};
use crate::error::{CameraError, Result};
use crate::projection::{Projection, CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Camera setup loaded from JSON; missing fields fall back to defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: [f32; 3],
    pub target: [f32; 3],
    pub up: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub screen_width: u32,
    pub screen_height: u32,
    /// World units moved per update while a fly key is held.
    pub fly_speed: f32,
    /// Debug fly camera; on by default in debug builds only.
    pub fly_enabled: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: DEFAULT_EYE.to_array(),
            target: DEFAULT_TARGET.to_array(),
            up: DEFAULT_UP.to_array(),
            fov_y_degrees: CAMERA_FOV_Y.to_degrees(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fly_speed: CAMERA_SPEED,
            fly_enabled: cfg!(debug_assertions),
        }
    }
}

impl CameraConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Projection described by this config
    pub fn projection(&self) -> Result<Projection> {
        Projection::from_screen(
            self.fov_y_degrees.to_radians(),
            self.screen_width,
            self.screen_height,
            self.near,
            self.far,
        )
    }

    /// Check that the config yields a usable camera
    pub fn validate(&self) -> Result<()> {
        let eye = Vec3::from_array(self.eye);
        let target = Vec3::from_array(self.target);
        let up = Vec3::from_array(self.up);

        if !(eye.is_finite() && target.is_finite() && up.is_finite()) {
            return Err(CameraError::InvalidConfig(
                "eye, target and up must be finite".to_string(),
            ));
        }

        derive_basis(eye, target, up).map_err(|e| CameraError::InvalidConfig(e.to_string()))?;

        if !(self.fly_speed.is_finite() && self.fly_speed >= 0.0) {
            return Err(CameraError::InvalidConfig(format!(
                "fly_speed must be a non-negative number, got {}",
                self.fly_speed
            )));
        }

        self.projection()?;
        Ok(())
    }
}
