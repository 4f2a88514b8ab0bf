use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Vertical field of view used when the pose is handed to the GPU (radians)
pub const FIELD_OF_VIEW_Y: f32 = std::f32::consts::FRAC_PI_3;

/// |forward.y| above which an overhead view keeps its previous up vector
const POLE_LIMIT: f32 = 0.999;
/// |forward.y| below which the horizon is held level
const LEVEL_LIMIT: f32 = 0.95;

/// Camera placement handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
    /// Up hint; only its component perpendicular to the view direction matters
    #[serde(default = "world_up")]
    pub up: Vec3,
}

fn world_up() -> Vec3 {
    Vec3::Y
}

impl CameraPose {
    /// Pose with world Y as the up hint
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self {
            position,
            look_at,
            up: Vec3::Y,
        }
    }

    pub const fn with_up(position: Vec3, look_at: Vec3, up: Vec3) -> Self {
        Self {
            position,
            look_at,
            up,
        }
    }

    /// Unit view direction. Falls back to -Z when the camera sits on its target.
    pub fn forward(&self) -> Vec3 {
        let dir = (self.look_at - self.position).normalize_or_zero();
        if dir == Vec3::ZERO {
            Vec3::NEG_Z
        } else {
            dir
        }
    }

    pub fn right(&self) -> Vec3 {
        let forward = self.forward();
        let right = forward.cross(self.up).normalize_or_zero();
        if right != Vec3::ZERO {
            return right;
        }
        // Up hint parallel to the view direction
        let right = forward.cross(pole_up(forward)).normalize_or_zero();
        if right != Vec3::ZERO {
            right
        } else {
            forward.any_orthonormal_vector()
        }
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Right-handed view matrix built from the orthonormal basis
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// GPU view of the pose. `aspect` is width over height.
    pub fn to_uniform(&self, time: f32, aspect: f32) -> CameraUniform {
        CameraUniform {
            position: self.position.to_array(),
            aspect,
            forward: self.forward().to_array(),
            tan_half_fov: (FIELD_OF_VIEW_Y * 0.5).tan(),
            right: self.right().to_array(),
            _pad: 0.0,
            up: self.up().to_array(),
            time,
        }
    }
}

/// Up vector for a view along `forward` that stays continuous with `previous`.
///
/// Away from the vertical this is world Y with the forward component removed,
/// so the horizon stays level. Looking nearly straight up or down the
/// previous up is carried over instead, and a small wobble of an overhead
/// view does not spin the image. The band between the two limits blends them.
pub fn steady_up(forward: Vec3, previous: Vec3) -> Vec3 {
    let carried = reject(previous, forward).normalize_or_zero();
    let level = reject(Vec3::Y, forward).normalize_or_zero();
    let level_weight =
        ((POLE_LIMIT - forward.y.abs()) / (POLE_LIMIT - LEVEL_LIMIT)).clamp(0.0, 1.0);

    let blended = carried.lerp(level, level_weight).normalize_or_zero();
    if blended != Vec3::ZERO {
        blended
    } else if level != Vec3::ZERO {
        level
    } else {
        pole_up(forward)
    }
}

fn reject(v: Vec3, axis: Vec3) -> Vec3 {
    v - axis * v.dot(axis)
}

/// Screen-up used when looking exactly along Y: -Z looking down, +Z looking up
fn pole_up(forward: Vec3) -> Vec3 {
    if forward.y < 0.0 {
        Vec3::NEG_Z
    } else {
        Vec3::Z
    }
}

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 3],
    pub aspect: f32,
    pub forward: [f32; 3],
    pub tan_half_fov: f32,
    pub right: [f32; 3],
    pub _pad: f32,
    pub up: [f32; 3],
    pub time: f32, // Seconds since the viewer started
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_orthonormal() {
        let pose = CameraPose::new(Vec3::new(300.0, 150.0, 0.0), Vec3::new(0.0, 20.0, 0.0));

        assert!((pose.forward().length() - 1.0).abs() < 1e-5);
        assert!((pose.right().length() - 1.0).abs() < 1e-5);
        assert!((pose.up().length() - 1.0).abs() < 1e-5);
        assert!(pose.forward().dot(pose.right()).abs() < 1e-5);
        assert!(pose.forward().dot(pose.up()).abs() < 1e-5);
        assert!(pose.up().y > 0.0);
    }

    #[test]
    fn straight_down_view_has_finite_matrix() {
        let pose = CameraPose::new(Vec3::new(0.0, 200.0, 0.0), Vec3::ZERO);
        let view = pose.view_matrix();

        assert!(view.is_finite());
        assert_eq!(pose.forward(), Vec3::NEG_Y);
    }

    #[test]
    fn coincident_target_falls_back() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let pose = CameraPose::new(p, p);

        assert_eq!(pose.forward(), Vec3::NEG_Z);
        assert!(pose.view_matrix().is_finite());
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let pose = CameraPose::new(Vec3::new(0.0, 50.0, 200.0), Vec3::new(0.0, 20.0, 0.0));
        let eye_in_view = pose.view_matrix().transform_point3(pose.position);

        assert!(eye_in_view.length() < 1e-3);
    }

    #[test]
    fn uniform_is_pod_sized() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 64);
        let pose = CameraPose::new(Vec3::ZERO, Vec3::NEG_Z);
        let uniform = pose.to_uniform(1.5, 2.0);
        let bytes: &[u8] = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 64);
        assert_eq!(uniform.time, 1.5);
        assert_eq!(uniform.aspect, 2.0);
        assert!((uniform.tan_half_fov - (30.0f32).to_radians().tan()).abs() < 1e-6);
    }

    #[test]
    fn up_hint_sets_roll() {
        let down = CameraPose::with_up(Vec3::new(0.0, 200.0, 0.0), Vec3::ZERO, Vec3::X);

        assert!((down.up() - Vec3::X).length() < 1e-5);
        assert!((down.right() - Vec3::Z).length() < 1e-5);
        assert!(down.view_matrix().is_finite());
    }

    #[test]
    fn steady_up_is_level_away_from_pole() {
        let forward = Vec3::new(1.0, -0.5, 0.0).normalize();
        // Whatever was carried, a shallow view snaps back to a level horizon
        let up = steady_up(forward, Vec3::Z);

        let pose = CameraPose::with_up(Vec3::ZERO, forward, up);
        assert!(pose.right().y.abs() < 1e-5);
        assert!(up.y > 0.0);
        assert!(up.dot(forward).abs() < 1e-5);
    }

    #[test]
    fn steady_up_carries_previous_near_pole() {
        // Tiny horizontal offsets in opposite directions
        let a = Vec3::new(1e-3, -1.0, 0.0).normalize();
        let b = Vec3::new(-1e-3, -1.0, 1e-4).normalize();

        let up_a = steady_up(a, Vec3::NEG_Z);
        let up_b = steady_up(b, up_a);

        let right_a = CameraPose::with_up(Vec3::ZERO, a, up_a).right();
        let right_b = CameraPose::with_up(Vec3::ZERO, b, up_b).right();
        assert!(right_a.dot(right_b) > 0.999, "{:?} vs {:?}", right_a, right_b);
    }

    #[test]
    fn steady_up_straight_down_from_world_up() {
        let up = steady_up(Vec3::NEG_Y, Vec3::Y);
        assert_eq!(up, Vec3::NEG_Z);
    }
}
