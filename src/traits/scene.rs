use glam::Vec3;

/// Scene content provider - tells the camera what is worth looking at
pub trait FocusProvider {
    /// Point of interest for this frame, if any
    fn focus_point(&self) -> Option<Vec3>;

    /// Get provider name for debugging
    fn name(&self) -> &str {
        "Focus"
    }
}

/// A fixed point of interest, e.g. a building entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticFocus(pub Vec3);

impl FocusProvider for StaticFocus {
    fn focus_point(&self) -> Option<Vec3> {
        Some(self.0)
    }

    fn name(&self) -> &str {
        "Static focus"
    }
}
