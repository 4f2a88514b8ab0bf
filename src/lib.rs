pub mod cli;
pub mod config;
pub mod core;
pub mod flight;
pub mod frame;
pub mod orbit;
pub mod rig;
pub mod session;
pub mod simulate;
pub mod traits;
pub mod types;
pub mod viewer;

pub use config::FlightConfig;
pub use flight::{FlightController, FlightMode, ViewMode};
pub use rig::CameraRig;
pub use session::FlightSession;
pub use types::CameraPose;
