use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Automatic flight pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightMode {
    /// Wide orbit around the facility
    #[default]
    Circuit,
    /// Fixed overlook above the facility
    Hover,
    /// Tight, low orbit for detail shots
    Inspection,
}

impl FlightMode {
    pub const ALL: [FlightMode; 3] = [FlightMode::Circuit, FlightMode::Hover, FlightMode::Inspection];

    /// Circuit -> Hover -> Inspection -> Circuit
    pub const fn next(self) -> Self {
        match self {
            FlightMode::Circuit => FlightMode::Hover,
            FlightMode::Hover => FlightMode::Inspection,
            FlightMode::Inspection => FlightMode::Circuit,
        }
    }

    /// Text shown on the HUD
    pub const fn label(self) -> &'static str {
        match self {
            FlightMode::Circuit => "Facility circuit",
            FlightMode::Hover => "Overlook",
            FlightMode::Inspection => "Close inspection",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FlightMode::Circuit => "circuit",
            FlightMode::Hover => "hover",
            FlightMode::Inspection => "inspection",
        }
    }
}

impl fmt::Display for FlightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circuit" => Ok(FlightMode::Circuit),
            "hover" => Ok(FlightMode::Hover),
            "inspection" => Ok(FlightMode::Inspection),
            other => Err(format!(
                "unknown flight mode '{}' (expected circuit, hover or inspection)",
                other
            )),
        }
    }
}

/// Which component supplies the camera pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Flight controller drives the camera
    #[default]
    Automatic,
    /// Pointer-driven orbit interactor drives the camera
    Manual,
}

impl ViewMode {
    pub const fn toggled(self) -> Self {
        match self {
            ViewMode::Automatic => ViewMode::Manual,
            ViewMode::Manual => ViewMode::Automatic,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ViewMode::Automatic => "Automatic camera",
            ViewMode::Manual => "Free camera",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_mode() {
        let mut mode = FlightMode::Circuit;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(mode);
            mode = mode.next();
        }

        assert_eq!(mode, FlightMode::Circuit);
        assert_eq!(seen, FlightMode::ALL.to_vec());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Hover".parse::<FlightMode>(), Ok(FlightMode::Hover));
        assert_eq!("INSPECTION".parse::<FlightMode>(), Ok(FlightMode::Inspection));
        assert!("orbit".parse::<FlightMode>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for mode in FlightMode::ALL {
            assert_eq!(mode.to_string().parse::<FlightMode>(), Ok(mode));
        }
    }

    #[test]
    fn view_mode_toggle_is_involution() {
        assert_eq!(ViewMode::Automatic.toggled(), ViewMode::Manual);
        assert_eq!(ViewMode::Automatic.toggled().toggled(), ViewMode::Automatic);
    }
}
