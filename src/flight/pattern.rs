use crate::config::FlightConfig;
use crate::flight::mode::FlightMode;
use glam::Vec3;

/// A flight mode together with the parameters its target formula needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPattern {
    Circuit {
        center: Vec3,
        radius: f32,
        height: f32,
        bob: f32,
        look_at: Vec3,
    },
    Hover {
        overlook: Vec3,
        drift: f32,
        look_at: Vec3,
    },
    Inspection {
        center: Vec3,
        radius: f32,
        height: f32,
        look_at: Vec3,
    },
}

/// Where the camera should head this frame, and what it should look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightTarget {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl FlightPattern {
    pub fn from_config(mode: FlightMode, config: &FlightConfig) -> Self {
        let center = config.facility_center;
        match mode {
            FlightMode::Circuit => FlightPattern::Circuit {
                center,
                radius: config.circuit_radius,
                height: config.circuit_height,
                bob: config.circuit_bob,
                look_at: center,
            },
            FlightMode::Hover => FlightPattern::Hover {
                overlook: Vec3::new(center.x, config.hover_height, center.z),
                drift: config.hover_drift,
                look_at: config.hover_look_at,
            },
            FlightMode::Inspection => FlightPattern::Inspection {
                center,
                radius: config.inspection_radius,
                height: config.inspection_height,
                look_at: config.inspection_look_at,
            },
        }
    }

    pub const fn mode(&self) -> FlightMode {
        match self {
            FlightPattern::Circuit { .. } => FlightMode::Circuit,
            FlightPattern::Hover { .. } => FlightMode::Hover,
            FlightPattern::Inspection { .. } => FlightMode::Inspection,
        }
    }
}

/// Phase rate multiplier for a mode (0 when the mode holds still)
pub fn phase_rate(mode: FlightMode, config: &FlightConfig) -> f32 {
    match mode {
        FlightMode::Circuit => 1.0,
        FlightMode::Hover => 0.0,
        FlightMode::Inspection => config.inspection_speed_scale,
    }
}

/// Speed cap for a mode as a fraction of `max_speed`
pub fn speed_factor(mode: FlightMode, config: &FlightConfig) -> f32 {
    match mode {
        FlightMode::Inspection => config.inspection_speed_factor,
        FlightMode::Circuit | FlightMode::Hover => 1.0,
    }
}

/// Target pose for a pattern.
///
/// `phase` is the shared orbit angle, `elapsed` the accumulated simulation
/// time in seconds (hover drift only). `focus` overrides the inspection
/// look-at point; other patterns ignore it.
pub fn compute_target(
    pattern: &FlightPattern,
    phase: f32,
    elapsed: f32,
    focus: Option<Vec3>,
) -> FlightTarget {
    match *pattern {
        FlightPattern::Circuit {
            center,
            radius,
            height,
            bob,
            look_at,
        } => {
            // Two bob cycles per revolution
            let position = Vec3::new(
                center.x + phase.cos() * radius,
                height + (2.0 * phase).sin() * bob,
                center.z + phase.sin() * radius,
            );
            FlightTarget { position, look_at }
        }
        FlightPattern::Hover {
            overlook,
            drift,
            look_at,
        } => {
            let offset = Vec3::new((elapsed * 0.5).sin() * drift, 0.0, (elapsed * 0.4).cos() * drift);
            FlightTarget {
                position: overlook + offset,
                look_at,
            }
        }
        FlightPattern::Inspection {
            center,
            radius,
            height,
            look_at,
        } => {
            let position = Vec3::new(
                center.x + phase.cos() * radius,
                height,
                center.z + phase.sin() * radius,
            );
            FlightTarget {
                position,
                look_at: focus.unwrap_or(look_at),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, TAU};

    fn circuit() -> FlightPattern {
        FlightPattern::from_config(FlightMode::Circuit, &FlightConfig::default())
    }

    #[test]
    fn circuit_starts_on_positive_x() {
        let target = compute_target(&circuit(), 0.0, 0.0, None);

        assert!((target.position - Vec3::new(300.0, 150.0, 0.0)).length() < 1e-4);
        assert_eq!(target.look_at, Vec3::new(0.0, 20.0, 0.0));
    }

    #[test]
    fn circuit_is_periodic() {
        let pattern = circuit();
        for start in [0.0, 0.3, 1.7, 4.0] {
            let a = compute_target(&pattern, start, 0.0, None);
            let b = compute_target(&pattern, start + TAU, 0.0, None);
            assert!((a.position - b.position).length() < 1e-2, "phase {}", start);
        }
    }

    #[test]
    fn circuit_bob_peaks_twice_per_orbit() {
        let pattern = circuit();
        // sin(2θ) peaks at θ = π/4 and θ = 5π/4
        let peak1 = compute_target(&pattern, FRAC_PI_4, 0.0, None).position.y;
        let peak2 = compute_target(&pattern, FRAC_PI_4 + TAU / 2.0, 0.0, None).position.y;
        let trough = compute_target(&pattern, 3.0 * FRAC_PI_4, 0.0, None).position.y;

        assert!((peak1 - 160.0).abs() < 1e-3);
        assert!((peak2 - 160.0).abs() < 1e-3);
        assert!((trough - 140.0).abs() < 1e-3);
    }

    #[test]
    fn circuit_ignores_focus() {
        let pattern = circuit();
        let focus = Some(Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(
            compute_target(&pattern, 1.0, 0.0, focus),
            compute_target(&pattern, 1.0, 0.0, None)
        );
    }

    #[test]
    fn hover_without_drift_is_fixed() {
        let pattern = FlightPattern::from_config(FlightMode::Hover, &FlightConfig::default());
        let a = compute_target(&pattern, 0.0, 0.0, None);
        let b = compute_target(&pattern, 3.0, 42.0, None);

        assert_eq!(a, b);
        assert_eq!(a.position, Vec3::new(0.0, 200.0, 0.0));
        assert_eq!(a.look_at, Vec3::ZERO);
    }

    #[test]
    fn hover_drift_follows_elapsed_time() {
        let config = FlightConfig {
            hover_drift: 30.0,
            ..FlightConfig::default()
        };
        let pattern = FlightPattern::from_config(FlightMode::Hover, &config);

        let start = compute_target(&pattern, 0.0, 0.0, None).position;
        assert!((start - Vec3::new(0.0, 200.0, 30.0)).length() < 1e-4);

        let later = compute_target(&pattern, 0.0, std::f32::consts::PI, None).position;
        assert!((later.x - 30.0).abs() < 1e-3);
        assert_eq!(later.y, 200.0);
    }

    #[test]
    fn inspection_focus_overrides_look_at() {
        let pattern = FlightPattern::from_config(FlightMode::Inspection, &FlightConfig::default());
        let focus = Vec3::new(10.0, 5.0, -10.0);

        let default = compute_target(&pattern, 0.0, 0.0, None);
        let focused = compute_target(&pattern, 0.0, 0.0, Some(focus));

        assert_eq!(default.look_at, Vec3::new(0.0, 30.0, 0.0));
        assert_eq!(focused.look_at, focus);
        assert_eq!(focused.position, default.position);
        assert!((default.position - Vec3::new(150.0, 80.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn pattern_reports_its_mode() {
        let config = FlightConfig::default();
        for mode in FlightMode::ALL {
            assert_eq!(FlightPattern::from_config(mode, &config).mode(), mode);
        }
    }

    #[test]
    fn rates_and_caps() {
        let config = FlightConfig::default();
        assert_eq!(phase_rate(FlightMode::Hover, &config), 0.0);
        assert_eq!(phase_rate(FlightMode::Inspection, &config), 1.5);
        assert_eq!(speed_factor(FlightMode::Inspection, &config), 0.7);
        assert_eq!(speed_factor(FlightMode::Circuit, &config), 1.0);
    }
}
