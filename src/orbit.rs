use glam::{Mat3, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::traits::camera::PoseSource;
use crate::types::CameraPose;

/// Sensitivities and limits for the free camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    /// Radians per pixel of drag
    pub rotate_speed: f32,
    /// World units per pixel of drag, scaled by distance / 100
    pub pan_speed: f32,
    /// Fractional distance change per scroll line
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            rotate_speed: 0.01,
            pan_speed: 0.1,
            zoom_speed: 0.05,
            min_distance: 1.0,
            max_distance: 2000.0,
        }
    }
}

/// Pointer-driven orbit/pan/zoom camera used in the manual view mode
#[derive(Debug, Clone)]
pub struct OrbitInteractor {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    settings: OrbitSettings,
}

impl OrbitInteractor {
    pub fn new(settings: OrbitSettings) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            distance: 100.0_f32.clamp(settings.min_distance, settings.max_distance),
            focus_point: Vec3::ZERO,
            settings,
        }
    }

    /// Take over from an existing pose so the hand-off does not jump
    pub fn seed_from(&mut self, pose: CameraPose) {
        self.focus_point = pose.look_at;

        let offset = pose.position - pose.look_at;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        self.distance = distance.clamp(self.settings.min_distance, self.settings.max_distance);

        // Keep the incoming roll: the pose's own basis, not world Y
        let back = offset / distance;
        let right = pose.right();
        let up = back.cross(right);
        self.orientation = Quat::from_mat3(&Mat3::from_cols(right, up, back)).normalize();
    }

    pub fn rotate(&mut self, delta: Vec2) {
        // Horizontal rotation around camera's up vector
        let up = self.orientation * Vec3::Y;
        let horizontal = Quat::from_axis_angle(up, -delta.x * self.settings.rotate_speed);
        self.orientation = horizontal * self.orientation;

        // Vertical rotation around camera's right vector (after horizontal rotation)
        let right = self.orientation * Vec3::X;
        let vertical = Quat::from_axis_angle(right, -delta.y * self.settings.rotate_speed);
        self.orientation = (vertical * self.orientation).normalize();
    }

    pub fn pan(&mut self, delta: Vec2) {
        let right = self.orientation * Vec3::X;
        let up = self.orientation * Vec3::Y;
        let scale = self.settings.pan_speed * (self.distance / 100.0).max(0.1);

        self.focus_point += right * (-delta.x * scale) + up * (delta.y * scale);
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * self.settings.zoom_speed;
        self.distance = self
            .distance
            .clamp(self.settings.min_distance, self.settings.max_distance);
    }

    pub fn pose(&self) -> CameraPose {
        let back = self.orientation * Vec3::Z;
        let up = self.orientation * Vec3::Y;
        CameraPose::with_up(self.focus_point + back * self.distance, self.focus_point, up)
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }
}

impl Default for OrbitInteractor {
    fn default() -> Self {
        Self::new(OrbitSettings::default())
    }
}

impl PoseSource for OrbitInteractor {
    fn pose(&self) -> CameraPose {
        OrbitInteractor::pose(self)
    }
}
