use glam::Vec2;

use crate::session::{FlightCommand, OrbitGesture};
use crate::traits::controller::{Button, Controller};

/// Translate one frame of controller state into session commands.
///
/// Space cycles the flight pattern, V toggles the free camera, H toggles
/// the HUD. Left drag orbits, right drag or shift+left drag pans, the wheel
/// zooms. Orbit gestures are emitted regardless of view mode; the rig drops
/// them while the automatic camera is active.
pub fn commands<C: Controller + ?Sized>(controller: &C) -> Vec<FlightCommand> {
    let mut out = Vec::new();

    if controller.just_pressed(Button::Space) {
        out.push(FlightCommand::CycleFlightMode);
    }
    if controller.just_pressed(Button::KeyV) {
        out.push(FlightCommand::ToggleViewMode);
    }
    if controller.just_pressed(Button::KeyH) {
        out.push(FlightCommand::ToggleHud);
    }

    let (dx, dy) = controller.pointer_delta();
    if dx != 0.0 || dy != 0.0 {
        let delta = Vec2::new(dx, dy);
        let left = controller.is_down(Button::MouseLeft);
        let pan = controller.is_down(Button::MouseRight)
            || (left && controller.is_down(Button::Shift));
        if pan {
            out.push(FlightCommand::Orbit(OrbitGesture::Pan(delta)));
        } else if left {
            out.push(FlightCommand::Orbit(OrbitGesture::Rotate(delta)));
        }
    }

    let scroll = controller.scroll_delta();
    if scroll != 0.0 {
        out.push(FlightCommand::Orbit(OrbitGesture::Zoom(scroll)));
    }

    out
}

/// Escape closes the viewer
pub fn wants_exit<C: Controller + ?Sized>(controller: &C) -> bool {
    controller.just_pressed(Button::Escape)
}
