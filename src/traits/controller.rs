/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Cycle flight mode
    Space,
    /// Toggle automatic / free camera
    KeyV,
    /// Toggle the HUD
    KeyH,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - button states plus pointer motion accumulated since the
/// last `reset_deltas`
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Button went down since the last `reset_deltas`
    fn just_pressed(&self, _button: Button) -> bool {
        false
    }

    /// Pointer movement in pixels
    fn pointer_delta(&self) -> (f32, f32) {
        (0.0, 0.0)
    }

    /// Scroll wheel movement in lines, positive away from the user
    fn scroll_delta(&self) -> f32 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::KeyV, Button::KeyV);
        assert_ne!(Button::KeyV, Button::KeyH);
    }

    #[test]
    fn test_button_hash_distinct() {
        let set: HashSet<Button> = [
            Button::Space,
            Button::KeyV,
            Button::KeyH,
            Button::Shift,
            Button::Escape,
            Button::MouseLeft,
            Button::MouseRight,
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 7);
    }

    // Test mock controller implementation
    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::Space, Button::MouseLeft],
        };

        assert!(controller.is_down(Button::Space));
        assert!(controller.is_down(Button::MouseLeft));
        assert!(!controller.is_down(Button::KeyV));
        assert!(!controller.just_pressed(Button::Space));
    }

    #[test]
    fn test_default_deltas_are_zero() {
        let controller = MockController { pressed: vec![] };

        assert_eq!(controller.pointer_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
    }
}
