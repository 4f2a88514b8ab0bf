use glam::Vec2;
use log::{debug, info};

use crate::config::FlightConfig;
use crate::core::timer::{Expiring, Throttled};
use crate::flight::{FlightMode, Telemetry, ViewMode};
use crate::frame::FrameInfo;
use crate::orbit::OrbitSettings;
use crate::rig::CameraRig;
use crate::traits::scene::FocusProvider;
use crate::types::CameraPose;

/// How long a status message stays on screen (seconds)
pub const STATUS_DURATION: f32 = 3.0;
/// Minimum spacing between telemetry log lines (seconds)
pub const TELEMETRY_LOG_INTERVAL: f32 = 1.0;

/// Free camera gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitGesture {
    Rotate(Vec2),
    Pan(Vec2),
    Zoom(f32),
}

/// Input-layer request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightCommand {
    CycleFlightMode,
    SetFlightMode(FlightMode),
    ToggleViewMode,
    ToggleHud,
    Orbit(OrbitGesture),
}

/// What the on-screen display shows this frame
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub visible: bool,
    pub flight_mode: &'static str,
    pub view_mode: &'static str,
    pub telemetry: Telemetry,
    pub status: Option<String>,
}

impl Hud {
    /// Single-line summary, e.g. for a window title
    pub fn title(&self) -> String {
        let mut line = format!(
            "{} | {} | {} | Alt {}",
            self.flight_mode,
            self.view_mode,
            self.telemetry,
            self.telemetry.altitude()
        );
        if let Some(status) = &self.status {
            line.push_str(" | ");
            line.push_str(status);
        }
        line
    }
}

/// Application-owned camera context.
///
/// Holds the rig, the scene's focus provider and the HUD state. The host
/// feeds it commands and one `tick` per rendered frame, then reads `pose`.
pub struct FlightSession {
    rig: CameraRig,
    focus: Option<Box<dyn FocusProvider>>,
    hud_visible: bool,
    status: Expiring<String>,
    telemetry_log: Throttled,
}

impl FlightSession {
    pub fn new(config: FlightConfig, orbit_settings: OrbitSettings) -> Self {
        Self {
            rig: CameraRig::new(config, orbit_settings),
            focus: None,
            hud_visible: true,
            status: Expiring::new(STATUS_DURATION),
            telemetry_log: Throttled::new(TELEMETRY_LOG_INTERVAL),
        }
    }

    pub fn set_focus_provider(&mut self, provider: Option<Box<dyn FocusProvider>>) {
        if let Some(p) = &provider {
            debug!("Focus provider: {}", p.name());
        }
        self.focus = provider;
    }

    pub fn handle(&mut self, command: FlightCommand) {
        match command {
            FlightCommand::CycleFlightMode => {
                let mode = self.rig.cycle_flight_mode();
                self.post_status(format!("Flight mode: {}", mode.label()));
            }
            FlightCommand::SetFlightMode(mode) => {
                if self.rig.set_flight_mode(mode) {
                    self.post_status(format!("Flight mode: {}", mode.label()));
                }
            }
            FlightCommand::ToggleViewMode => {
                let mode = self.rig.toggle_view_mode();
                self.post_status(format!("View: {}", mode.label()));
            }
            FlightCommand::ToggleHud => {
                self.hud_visible = !self.hud_visible;
                info!("HUD {}", if self.hud_visible { "shown" } else { "hidden" });
                let state = if self.hud_visible { "on" } else { "off" };
                self.post_status(format!("HUD: {}", state));
            }
            FlightCommand::Orbit(gesture) => {
                match gesture {
                    OrbitGesture::Rotate(delta) => self.rig.orbit_rotate(delta),
                    OrbitGesture::Pan(delta) => self.rig.orbit_pan(delta),
                    OrbitGesture::Zoom(delta) => self.rig.orbit_zoom(delta),
                };
            }
        }
    }

    fn post_status(&mut self, message: String) {
        info!("{}", message);
        self.status.set(message);
    }

    /// Advance one rendered frame
    pub fn tick(&mut self, frame: FrameInfo) {
        let focus = self.focus.as_ref().and_then(|p| p.focus_point());
        self.rig.set_focus_point(focus);
        self.rig.update(frame.delta);

        self.status.tick(frame.delta);

        if self.telemetry_log.try_tick(frame.delta) {
            let telemetry = self.rig.flight().telemetry();
            debug!(
                "frame {} t={:.2}s {:?}/{} {}",
                frame.number,
                frame.time,
                self.rig.view_mode(),
                self.rig.flight_mode(),
                telemetry
            );
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.rig.pose()
    }

    pub fn hud(&self) -> Hud {
        Hud {
            visible: self.hud_visible,
            flight_mode: self.rig.flight_mode().label(),
            view_mode: self.rig.view_mode().label(),
            telemetry: Telemetry::from_position(self.rig.pose().position),
            status: self.status.get().cloned(),
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.rig.view_mode()
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }
}

impl Default for FlightSession {
    fn default() -> Self {
        Self::new(FlightConfig::default(), OrbitSettings::default())
    }
}
