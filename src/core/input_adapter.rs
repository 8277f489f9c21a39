use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, Controller};

/// Adapter that bridges Winit keyboard events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Pressed buttons in press order (for get_down_keys)
    pressed_vec: Vec<Button>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                self.process_key(keycode, event.state);
            }
        }
    }

    /// Apply a single key transition
    pub fn process_key(&mut self, keycode: KeyCode, state: ElementState) {
        let Some(button) = Self::keycode_to_button(keycode) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_vec.push(button);
                }
            }
            ElementState::Released => {
                if self.pressed_keys.remove(&button) {
                    self.pressed_vec.retain(|&b| b != button);
                }
            }
        }
    }

    /// Release everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit KeyEvent has private fields, so tests drive process_key directly

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys().len(), 0);
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();
        controller.process_key(KeyCode::ShiftLeft, ElementState::Pressed);
        controller.process_key(KeyCode::KeyW, ElementState::Pressed);

        assert!(controller.is_down(Button::Shift));
        assert!(controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys(), &[Button::Shift, Button::KeyW]);

        controller.process_key(KeyCode::KeyW, ElementState::Released);
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.get_down_keys(), &[Button::Shift]);
    }

    #[test]
    fn test_both_shifts_map_to_shift() {
        let mut controller = WinitController::new();
        controller.process_key(KeyCode::ShiftLeft, ElementState::Pressed);
        controller.process_key(KeyCode::ShiftRight, ElementState::Pressed);
        assert_eq!(controller.get_down_keys().len(), 1);

        controller.process_key(KeyCode::ShiftRight, ElementState::Released);
        assert!(!controller.is_down(Button::Shift));
    }

    #[test]
    fn test_repeat_press_not_duplicated() {
        let mut controller = WinitController::new();
        controller.process_key(KeyCode::KeyQ, ElementState::Pressed);
        controller.process_key(KeyCode::KeyQ, ElementState::Pressed);
        assert_eq!(controller.get_down_keys(), &[Button::KeyQ]);
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut controller = WinitController::new();
        controller.process_key(KeyCode::Space, ElementState::Pressed);
        controller.process_key(KeyCode::Escape, ElementState::Pressed);
        assert!(controller.get_down_keys().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut controller = WinitController::new();
        controller.process_key(KeyCode::KeyD, ElementState::Pressed);
        controller.clear();
        assert!(!controller.is_down(Button::KeyD));
        assert!(controller.get_down_keys().is_empty());
    }
}
