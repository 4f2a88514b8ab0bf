use crate::types::CameraPose;

/// Anything that can position the camera for the next frame
pub trait PoseSource {
    /// Camera position and look-at point, without side effects
    fn pose(&self) -> CameraPose;
}
