use std::str::FromStr;

use crate::error::CameraError;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Shift,
}

impl Button {
    pub const ALL: [Button; 7] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::KeyQ,
        Button::KeyE,
        Button::Shift,
    ];
}

impl FromStr for Button {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" => Ok(Button::KeyW),
            "a" => Ok(Button::KeyA),
            "s" => Ok(Button::KeyS),
            "d" => Ok(Button::KeyD),
            "q" => Ok(Button::KeyQ),
            "e" => Ok(Button::KeyE),
            "shift" | "lshift" | "rshift" => Ok(Button::Shift),
            other => Err(CameraError::UnknownKey(other.to_string())),
        }
    }
}

/// Controller - key state queries
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];
}
