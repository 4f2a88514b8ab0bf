pub mod camera;
pub mod controller;
pub mod scene;

pub use camera::*;
pub use controller::*;
pub use scene::*;
