use glam::Vec3;
use log::{info, warn};

use crate::config::FlightConfig;
use crate::flight::mode::FlightMode;
use crate::flight::pattern::{compute_target, phase_rate, speed_factor, FlightPattern};
use crate::flight::telemetry::Telemetry;
use crate::traits::camera::PoseSource;
use crate::types::{steady_up, CameraPose};

/// Frame rate the per-frame tuning constants are expressed against
pub const REFERENCE_FPS: f32 = 60.0;

/// Automatic camera flight.
///
/// Each `update` recomputes the active pattern's target and steers toward it.
/// Thrust points at the target with magnitude `max_force`, tapering linearly
/// inside `arrival_radius`. Velocity follows the per-frame rule
/// `v = (v + thrust) * damping` and position adds the new velocity. A call
/// covering `delta_time * REFERENCE_FPS` reference frames evaluates that
/// recurrence in closed form: under constant thrust the result does not
/// depend on how the time is sliced, top speed is the same at any frame
/// rate, and a zero delta changes nothing.
/// Speed is then capped. The look-at point eases toward its target
/// independently.
#[derive(Debug, Clone)]
pub struct FlightController {
    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    target_position: Vec3,
    current_look_at: Vec3,
    target_look_at: Vec3,
    up: Vec3,
    pattern: FlightPattern,
    phase: f32,
    elapsed: f32,
    config: FlightConfig,
}

impl FlightController {
    pub fn new(config: FlightConfig) -> Self {
        let pattern = FlightPattern::from_config(FlightMode::default(), &config);
        let target = compute_target(&pattern, 0.0, 0.0, None);
        let forward = CameraPose::new(config.start_position, target.look_at).forward();

        Self {
            position: config.start_position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            target_position: config.start_position,
            current_look_at: target.look_at,
            target_look_at: target.look_at,
            up: steady_up(forward, Vec3::Y),
            pattern,
            phase: 0.0,
            elapsed: 0.0,
            config,
        }
    }

    /// Start from an explicit position instead of the configured one
    pub fn with_position(config: FlightConfig, position: Vec3) -> Self {
        let mut controller = Self::new(config);
        controller.position = position;
        controller.target_position = position;
        controller.refresh_up();
        controller
    }

    /// Switch pattern. The next `update` uses the new target formula; the
    /// shared phase carries over. Returns false when `mode` is already active.
    pub fn set_flight_mode(&mut self, mode: FlightMode) -> bool {
        let current = self.mode();
        if mode == current {
            return false;
        }
        info!("Flight mode: {} -> {}", current, mode);
        self.pattern = FlightPattern::from_config(mode, &self.config);
        true
    }

    pub fn cycle_flight_mode(&mut self) -> FlightMode {
        let next = self.mode().next();
        self.set_flight_mode(next);
        next
    }

    /// Advance the flight by `delta_time` seconds.
    ///
    /// `focus_point` overrides the inspection look-at for this frame only.
    pub fn update(&mut self, delta_time: f32, focus_point: Option<Vec3>) {
        let mut dt = delta_time.max(0.0);
        if dt > self.config.max_frame_delta {
            warn!(
                "Frame delta {:.3}s clamped to {:.3}s",
                dt, self.config.max_frame_delta
            );
            dt = self.config.max_frame_delta;
        }
        let steps = dt * REFERENCE_FPS;

        self.elapsed += dt;
        self.phase += self.config.circuit_speed * phase_rate(self.mode(), &self.config) * steps;

        let target = compute_target(&self.pattern, self.phase, self.elapsed, focus_point);
        self.target_position = target.position;
        self.target_look_at = target.look_at;

        self.steer(steps);

        let look_t = 1.0 - (1.0 - self.config.look_at_lerp_factor).powf(steps);
        self.current_look_at = self.current_look_at.lerp(self.target_look_at, look_t);
        if steps > 0.0 {
            self.refresh_up();
        }
    }

    fn steer(&mut self, steps: f32) {
        let offset = self.target_position - self.position;
        let distance = offset.length();

        // Close enough and slow enough: settle exactly on the target
        let tolerance = self.config.max_force;
        if distance <= tolerance && self.velocity.length() <= tolerance {
            if steps > 0.0 {
                self.position = self.target_position;
                self.velocity = Vec3::ZERO;
            }
            self.acceleration = Vec3::ZERO;
            return;
        }

        let taper = (distance / self.config.arrival_radius).min(1.0);
        self.acceleration = offset.normalize_or_zero() * (self.config.max_force * taper);

        let drift = Drift::new(self.config.damping, steps);
        let cap = self.speed_cap();
        let displacement = self.velocity * drift.velocity_sum + self.acceleration * drift.thrust_sum;
        self.velocity = (self.velocity * drift.decay + self.acceleration * drift.velocity_sum)
            .clamp_length_max(cap);
        self.position += displacement.clamp_length_max(cap * steps);
    }

    fn refresh_up(&mut self) {
        let forward = CameraPose::new(self.position, self.current_look_at).forward();
        self.up = steady_up(forward, self.up);
    }

    /// Take over from an externally supplied pose (manual camera handoff).
    /// Motion restarts from rest at that pose.
    pub fn acquire(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.current_look_at = pose.look_at;
        self.up = pose.up;
        self.velocity = Vec3::ZERO;
        self.acceleration = Vec3::ZERO;
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::with_up(self.position, self.current_look_at, self.up)
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry::from_position(self.position)
    }

    pub fn speed_cap(&self) -> f32 {
        self.config.max_speed * speed_factor(self.mode(), &self.config)
    }

    pub fn mode(&self) -> FlightMode {
        self.pattern.mode()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn target_look_at(&self) -> Vec3 {
        self.target_look_at
    }

    pub fn look_at(&self) -> Vec3 {
        self.current_look_at
    }

    /// Shared orbit angle in radians (never wrapped)
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Accumulated simulation time in seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }
}

/// Sums of the per-frame recurrence `v[k+1] = (v[k] + a) * d` over `s`
/// reference frames, with `s` allowed to be fractional:
///
/// `v[s] = d^s v[0] + a * G(s)` and `x[s] = x[0] + v[0] * G(s) + a * H(s)`
/// where `G(s) = d (1 - d^s) / (1 - d)` and `H(s) = sum of G(1..=s)`.
#[derive(Debug, Clone, Copy)]
struct Drift {
    decay: f32,
    velocity_sum: f32,
    thrust_sum: f32,
}

impl Drift {
    fn new(damping: f32, steps: f32) -> Self {
        let decay = damping.powf(steps);
        if (1.0 - damping).abs() < 1e-6 {
            return Self {
                decay,
                velocity_sum: steps,
                thrust_sum: steps * (steps + 1.0) * 0.5,
            };
        }
        let velocity_sum = damping * (1.0 - decay) / (1.0 - damping);
        Self {
            decay,
            velocity_sum,
            thrust_sum: damping / (1.0 - damping) * (steps - velocity_sum),
        }
    }
}

impl Default for FlightController {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}

impl PoseSource for FlightController {
    fn pose(&self) -> CameraPose {
        FlightController::pose(self)
    }
}
