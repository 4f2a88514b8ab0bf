// simulate.rs - Headless flight runs with deterministic frame timing
use glam::Vec3;
use serde::Serialize;

use crate::config::FlightConfig;
use crate::flight::{FlightController, FlightMode, Telemetry};
use crate::frame::FixedStepFrames;

/// One recorded frame of a headless run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TraceSample {
    pub frame: u64,
    pub time: f32,
    pub mode: FlightMode,
    pub position: Vec3,
    pub look_at: Vec3,
    pub speed: f32,
}

/// Outcome of a headless run
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub frames: u64,
    pub fps: f32,
    pub mode: FlightMode,
    pub final_position: Vec3,
    pub final_look_at: Vec3,
    pub telemetry: Telemetry,
    pub phase: f32,
    pub revolutions: f32,
    pub max_speed_seen: f32,
    pub samples: Vec<TraceSample>,
}

impl SimulationReport {
    /// Horizontal distance from the facility's vertical axis
    pub fn final_radius(&self, center: Vec3) -> f32 {
        let offset = self.final_position - center;
        Vec3::new(offset.x, 0.0, offset.z).length()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SimulationOptions {
    pub mode: FlightMode,
    pub frames: u64,
    pub fps: f32,
    /// Record every Nth frame into the trace, 0 to skip recording
    pub sample_every: u64,
    pub focus: Option<Vec3>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            mode: FlightMode::Circuit,
            frames: 600,
            fps: 60.0,
            sample_every: 0,
            focus: None,
        }
    }
}

pub fn run(config: FlightConfig, options: &SimulationOptions) -> SimulationReport {
    let mut controller = FlightController::new(config);
    controller.set_flight_mode(options.mode);

    let mut samples = Vec::new();
    let mut max_speed_seen: f32 = 0.0;

    for frame in FixedStepFrames::new(options.fps, options.frames) {
        controller.update(frame.delta, options.focus);
        let speed = controller.velocity().length();
        max_speed_seen = max_speed_seen.max(speed);

        if options.sample_every > 0 && frame.number % options.sample_every == 0 {
            samples.push(TraceSample {
                frame: frame.number,
                time: frame.time,
                mode: controller.mode(),
                position: controller.position(),
                look_at: controller.look_at(),
                speed,
            });
        }
    }

    let phase = controller.phase();
    SimulationReport {
        frames: options.frames,
        fps: options.fps,
        mode: controller.mode(),
        final_position: controller.position(),
        final_look_at: controller.look_at(),
        telemetry: controller.telemetry(),
        phase,
        revolutions: phase / std::f32::consts::TAU,
        max_speed_seen,
        samples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_strided() {
        let options = SimulationOptions {
            frames: 100,
            sample_every: 10,
            ..Default::default()
        };
        let report = run(FlightConfig::default(), &options);

        assert_eq!(report.samples.len(), 10);
        assert_eq!(report.samples[3].frame, 30);
    }

    #[test]
    fn no_samples_when_disabled() {
        let report = run(FlightConfig::default(), &SimulationOptions::default());
        assert!(report.samples.is_empty());
        assert_eq!(report.frames, 600);
    }

    #[test]
    fn report_serializes_to_json() {
        let options = SimulationOptions {
            frames: 5,
            sample_every: 1,
            ..Default::default()
        };
        let report = run(FlightConfig::default(), &options);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mode"], "circuit");
        assert_eq!(json["samples"].as_array().unwrap().len(), 5);
        assert_eq!(json["final_position"].as_array().unwrap().len(), 3);
    }
}
