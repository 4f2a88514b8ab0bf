use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::controller::{Button, Controller};

/// Pixels per scroll line for touchpads reporting pixel deltas
const PIXELS_PER_LINE: f32 = 100.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Buttons that went down since the last reset
    pressed_edges: Vec<Button>,
    /// Current mouse position (relative to window)
    mouse_position: Option<(f32, f32)>,
    /// Mouse movement delta since last reset
    mouse_delta: (f32, f32),
    /// Scroll lines since last reset
    scroll: f32,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        // Auto-repeat must not retrigger toggles
                        if !event.repeat {
                            self.set_button(button, event.state);
                        }
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button(btn, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if let Some(old_pos) = self.mouse_position {
                    self.mouse_delta.0 += new_pos.0 - old_pos.0;
                    self.mouse_delta.1 += new_pos.1 - old_pos.1;
                }
                self.mouse_position = Some(new_pos);
            }
            WindowEvent::CursorLeft { .. } => {
                self.mouse_position = None;
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
            }
            WindowEvent::Focused(false) => {
                // Releases are lost while unfocused
                self.pressed_keys.clear();
            }
            _ => {}
        }
    }

    fn set_button(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(button) {
                    self.pressed_edges.push(button);
                }
            }
            ElementState::Released => {
                self.pressed_keys.remove(&button);
            }
        }
    }

    /// Reset per-frame state (mouse delta, scroll, press edges)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.scroll = 0.0;
        self.pressed_edges.clear();
    }

    /// Get current mouse position (if available)
    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::Space => Some(Button::Space),
            KeyCode::KeyV => Some(Button::KeyV),
            KeyCode::KeyH => Some(Button::KeyH),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn just_pressed(&self, button: Button) -> bool {
        self.pressed_edges.contains(&button)
    }

    fn pointer_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn scroll_delta(&self) -> f32 {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit keyboard events carry platform-specific fields that cannot be
    // built in tests, so these drive the state through `set_button` and the
    // mouse variants that are constructible.

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::Space));
        assert!(controller.pressed_keys.is_empty());
        assert_eq!(controller.mouse_position(), None);
        assert_eq!(controller.pointer_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
    }

    #[test]
    fn test_press_records_edge_once() {
        let mut controller = WinitController::new();
        controller.set_button(Button::KeyV, ElementState::Pressed);
        controller.set_button(Button::KeyV, ElementState::Pressed);

        assert!(controller.is_down(Button::KeyV));
        assert!(controller.just_pressed(Button::KeyV));
        assert_eq!(controller.pressed_edges.len(), 1);

        controller.reset_deltas();
        assert!(controller.is_down(Button::KeyV));
        assert!(!controller.just_pressed(Button::KeyV));

        controller.set_button(Button::KeyV, ElementState::Released);
        assert!(!controller.is_down(Button::KeyV));
        assert!(controller.pressed_keys.is_empty());
    }

    #[test]
    fn test_delta_reset() {
        let mut controller = WinitController::new();
        // Set some delta manually (simulating mouse movement)
        controller.mouse_delta = (10.0, 5.0);
        controller.scroll = 2.0;
        controller.mouse_position = Some((100.0, 200.0));

        controller.reset_deltas();
        assert_eq!(controller.pointer_delta(), (0.0, 0.0));
        assert_eq!(controller.scroll_delta(), 0.0);
        // Position should remain
        assert_eq!(controller.mouse_position(), Some((100.0, 200.0)));
    }

    #[test]
    fn test_focus_loss_releases_buttons() {
        let mut controller = WinitController::new();
        controller.set_button(Button::MouseLeft, ElementState::Pressed);
        controller.process_event(&WindowEvent::Focused(false));

        assert!(!controller.is_down(Button::MouseLeft));
        assert!(controller.pressed_keys.is_empty());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            WinitController::keycode_to_button(KeyCode::Space),
            Some(Button::Space)
        );
        assert_eq!(
            WinitController::keycode_to_button(KeyCode::ShiftRight),
            Some(Button::Shift)
        );
        assert_eq!(
            WinitController::keycode_to_button(KeyCode::Escape),
            Some(Button::Escape)
        );
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyW), None);
        assert_eq!(
            WinitController::mouse_button_to_button(MouseButton::Middle),
            None
        );
    }
}
