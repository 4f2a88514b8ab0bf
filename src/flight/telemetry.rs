use glam::Vec3;
use serde::Serialize;
use std::fmt;

/// Rounded position readout for on-screen display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Telemetry {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Telemetry {
    pub fn from_position(position: Vec3) -> Self {
        let rounded = position.round();
        // `as` saturates, so huge values clamp rather than wrap
        Self {
            x: rounded.x as i32,
            y: rounded.y as i32,
            z: rounded.z as i32,
        }
    }

    pub const fn altitude(&self) -> i32 {
        self.y
    }
}

impl fmt::Display for Telemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}, Z: {}", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_each_axis() {
        let t = Telemetry::from_position(Vec3::new(12.4, 149.6, -3.5));
        assert_eq!(t, Telemetry { x: 12, y: 150, z: -4 });
        assert_eq!(t.altitude(), 150);
    }

    #[test]
    fn display_format() {
        let t = Telemetry::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.to_string(), "X: 1, Y: 2, Z: 3");
    }

    #[test]
    fn saturates_out_of_range() {
        let t = Telemetry::from_position(Vec3::new(1e20, -1e20, 0.0));
        assert_eq!(t.x, i32::MAX);
        assert_eq!(t.y, i32::MIN);
    }
}
