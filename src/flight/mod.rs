pub mod controller;
pub mod mode;
pub mod pattern;
pub mod telemetry;

pub use controller::{FlightController, REFERENCE_FPS};
pub use mode::{FlightMode, ViewMode};
pub use pattern::{compute_target, FlightPattern, FlightTarget};
pub use telemetry::Telemetry;
