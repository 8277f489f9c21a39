use crate::error::Result;
use crate::traits::{Button, Controller};

/// Controller with a fixed set of held buttons
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScriptedController {
    pressed: Vec<Button>,
}

impl ScriptedController {
    pub fn new(buttons: &[Button]) -> Self {
        let mut controller = Self::default();
        for &button in buttons {
            controller.press(button);
        }
        controller
    }

    /// Parse a combo such as `shift+w` or `shift+q+d`; empty means nothing held
    pub fn parse(combo: &str) -> Result<Self> {
        let buttons = combo
            .split('+')
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.parse::<Button>())
            .collect::<Result<Vec<Button>>>()?;
        Ok(Self::new(&buttons))
    }

    pub fn press(&mut self, button: Button) {
        if !self.pressed.contains(&button) {
            self.pressed.push(button);
        }
    }

    pub fn release(&mut self, button: Button) {
        self.pressed.retain(|&b| b != button);
    }
}

impl Controller for ScriptedController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CameraError;

    #[test]
    fn test_parse_combo() {
        let controller = ScriptedController::parse("shift+w").unwrap();
        assert!(controller.is_down(Button::Shift));
        assert!(controller.is_down(Button::KeyW));
        assert!(!controller.is_down(Button::KeyS));
        assert_eq!(controller.get_down_keys(), &[Button::Shift, Button::KeyW]);
    }

    #[test]
    fn test_parse_empty_combo() {
        let controller = ScriptedController::parse("").unwrap();
        assert!(controller.get_down_keys().is_empty());
    }

    #[test]
    fn test_parse_duplicates_collapse() {
        let controller = ScriptedController::parse("w+W+shift").unwrap();
        assert_eq!(controller.get_down_keys().len(), 2);
    }

    #[test]
    fn test_parse_unknown_key() {
        let result = ScriptedController::parse("shift+space");
        assert!(matches!(result, Err(CameraError::UnknownKey(_))));
    }

    #[test]
    fn test_press_release() {
        let mut controller = ScriptedController::new(&[Button::KeyQ]);
        controller.press(Button::Shift);
        controller.release(Button::KeyQ);
        assert_eq!(controller.get_down_keys(), &[Button::Shift]);
    }
}
