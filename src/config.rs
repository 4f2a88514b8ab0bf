// config.rs - Flight tuning constants, loadable from JSON
use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Tuning for the flight controller.
///
/// Speeds, forces and the per-frame factors (`damping`, `look_at_lerp_factor`)
/// are expressed against a 60 Hz reference frame; the controller rescales
/// them by the actual frame delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub circuit_radius: f32,
    pub circuit_height: f32,
    /// Phase advance in radians per reference frame
    pub circuit_speed: f32,
    /// Amplitude of the vertical bob on the circuit
    pub circuit_bob: f32,
    pub inspection_radius: f32,
    pub inspection_height: f32,
    /// Inspection phase rate relative to `circuit_speed`
    pub inspection_speed_scale: f32,
    /// Inspection speed cap relative to `max_speed`
    pub inspection_speed_factor: f32,
    pub hover_height: f32,
    /// Horizontal drift amplitude while hovering, 0 for a fixed point
    pub hover_drift: f32,
    pub max_speed: f32,
    pub max_force: f32,
    /// Thrust tapers linearly to zero inside this distance of the target
    pub arrival_radius: f32,
    pub damping: f32,
    pub look_at_lerp_factor: f32,
    /// Frame deltas above this are clamped (seconds)
    pub max_frame_delta: f32,
    pub facility_center: Vec3,
    pub inspection_look_at: Vec3,
    pub hover_look_at: Vec3,
    pub start_position: Vec3,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            circuit_radius: 300.0,
            circuit_height: 150.0,
            circuit_speed: 0.001,
            circuit_bob: 10.0,
            inspection_radius: 150.0,
            inspection_height: 80.0,
            inspection_speed_scale: 1.5,
            inspection_speed_factor: 0.7,
            hover_height: 200.0,
            hover_drift: 0.0,
            max_speed: 2.5,
            max_force: 0.05,
            arrival_radius: 100.0,
            damping: 0.95,
            look_at_lerp_factor: 0.03,
            max_frame_delta: 0.1,
            facility_center: Vec3::new(0.0, 20.0, 0.0),
            inspection_look_at: Vec3::new(0.0, 30.0, 0.0),
            hover_look_at: Vec3::ZERO,
            start_position: Vec3::new(0.0, 50.0, 200.0),
        }
    }
}

/// Rejected configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotFinite(&'static str),
    NotPositive(&'static str, f32),
    OutOfUnitRange(&'static str, f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFinite(field) => write!(f, "{} must be finite", field),
            ConfigError::NotPositive(field, v) => {
                write!(f, "{} must be greater than zero (got {})", field, v)
            }
            ConfigError::OutOfUnitRange(field, v) => {
                write!(f, "{} must lie in (0, 1] (got {})", field, v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl FlightConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: FlightConfig =
            serde_json::from_str(text).context("Failed to parse flight config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize flight config")
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let scalars = [
            ("circuit_radius", self.circuit_radius),
            ("circuit_height", self.circuit_height),
            ("circuit_speed", self.circuit_speed),
            ("circuit_bob", self.circuit_bob),
            ("inspection_radius", self.inspection_radius),
            ("inspection_height", self.inspection_height),
            ("inspection_speed_scale", self.inspection_speed_scale),
            ("inspection_speed_factor", self.inspection_speed_factor),
            ("hover_height", self.hover_height),
            ("hover_drift", self.hover_drift),
            ("max_speed", self.max_speed),
            ("max_force", self.max_force),
            ("arrival_radius", self.arrival_radius),
            ("damping", self.damping),
            ("look_at_lerp_factor", self.look_at_lerp_factor),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        let points = [
            ("facility_center", self.facility_center),
            ("inspection_look_at", self.inspection_look_at),
            ("hover_look_at", self.hover_look_at),
            ("start_position", self.start_position),
        ];
        for (name, point) in points {
            if !point.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        let positive = [
            ("circuit_radius", self.circuit_radius),
            ("circuit_speed", self.circuit_speed),
            ("inspection_radius", self.inspection_radius),
            ("inspection_speed_scale", self.inspection_speed_scale),
            ("max_speed", self.max_speed),
            ("max_force", self.max_force),
            ("arrival_radius", self.arrival_radius),
            ("max_frame_delta", self.max_frame_delta),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive(name, value));
            }
        }

        let unit = [
            ("damping", self.damping),
            ("look_at_lerp_factor", self.look_at_lerp_factor),
            ("inspection_speed_factor", self.inspection_speed_factor),
        ];
        for (name, value) in unit {
            if value <= 0.0 || value > 1.0 {
                return Err(ConfigError::OutOfUnitRange(name, value));
            }
        }

        Ok(())
    }
}
