use glam::{Vec2, Vec3};
use log::info;

use crate::config::FlightConfig;
use crate::flight::{FlightController, FlightMode, ViewMode};
use crate::orbit::{OrbitInteractor, OrbitSettings};
use crate::traits::camera::PoseSource;
use crate::types::CameraPose;

/// Selects which camera source drives the view.
///
/// In `Automatic` the flight controller advances every frame. In `Manual`
/// the controller is paused and the orbit interactor supplies the pose.
/// Switching seeds the incoming source from the outgoing pose, so neither
/// direction snaps.
#[derive(Debug, Clone)]
pub struct CameraRig {
    flight: FlightController,
    orbit: OrbitInteractor,
    view_mode: ViewMode,
    focus_point: Option<Vec3>,
}

impl CameraRig {
    pub fn new(config: FlightConfig, orbit_settings: OrbitSettings) -> Self {
        Self {
            flight: FlightController::new(config),
            orbit: OrbitInteractor::new(orbit_settings),
            view_mode: ViewMode::Automatic,
            focus_point: None,
        }
    }

    pub fn update(&mut self, delta_time: f32) {
        if self.view_mode == ViewMode::Automatic {
            self.flight.update(delta_time, self.focus_point);
        }
    }

    /// Pose of whichever source is active
    pub fn pose(&self) -> CameraPose {
        match self.view_mode {
            ViewMode::Automatic => self.flight.pose(),
            ViewMode::Manual => self.orbit.pose(),
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if mode == self.view_mode {
            return;
        }
        match mode {
            ViewMode::Manual => self.orbit.seed_from(self.flight.pose()),
            ViewMode::Automatic => self.flight.acquire(self.orbit.pose()),
        }
        info!("View mode: {:?} -> {:?}", self.view_mode, mode);
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        let next = self.view_mode.toggled();
        self.set_view_mode(next);
        next
    }

    /// Returns false when `mode` was already active
    pub fn set_flight_mode(&mut self, mode: FlightMode) -> bool {
        self.flight.set_flight_mode(mode)
    }

    pub fn cycle_flight_mode(&mut self) -> FlightMode {
        self.flight.cycle_flight_mode()
    }

    /// Point of interest from the scene; `None` restores the default look-at
    pub fn set_focus_point(&mut self, focus: Option<Vec3>) {
        self.focus_point = focus;
    }

    /// Returns false when the free camera is not active
    pub fn orbit_rotate(&mut self, delta: Vec2) -> bool {
        if self.view_mode != ViewMode::Manual {
            return false;
        }
        self.orbit.rotate(delta);
        true
    }

    pub fn orbit_pan(&mut self, delta: Vec2) -> bool {
        if self.view_mode != ViewMode::Manual {
            return false;
        }
        self.orbit.pan(delta);
        true
    }

    pub fn orbit_zoom(&mut self, delta: f32) -> bool {
        if self.view_mode != ViewMode::Manual {
            return false;
        }
        self.orbit.zoom(delta);
        true
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn flight_mode(&self) -> FlightMode {
        self.flight.mode()
    }

    pub fn flight(&self) -> &FlightController {
        &self.flight
    }

    pub fn orbit(&self) -> &OrbitInteractor {
        &self.orbit
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(FlightConfig::default(), OrbitSettings::default())
    }
}

impl PoseSource for CameraRig {
    fn pose(&self) -> CameraPose {
        CameraRig::pose(self)
    }
}
