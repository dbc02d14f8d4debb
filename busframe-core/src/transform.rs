/// 3D transformation matrices and rotation state
use nalgebra::{Matrix4, Vector3};

/// Accumulated rotation around three axes, in degrees.
///
/// Angles are never wrapped; 360 stays 360.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Whether both states describe the same orientation, modulo full turns
    pub fn same_orientation(&self, other: &RotationState) -> bool {
        let same = |a: f32, b: f32| {
            let d = (a - b).rem_euclid(360.0);
            d < 1e-4 || 360.0 - d < 1e-4
        };
        same(self.x, other.x) && same(self.y, other.y) && same(self.z, other.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a rotation matrix from a rotation state
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        let rx = Matrix4::from_axis_angle(&Vector3::x_axis(), rotation.x.to_radians());
        let ry = Matrix4::from_axis_angle(&Vector3::y_axis(), rotation.y.to_radians());
        let rz = Matrix4::from_axis_angle(&Vector3::z_axis(), rotation.z.to_radians());

        // Apply rotations in order: Z, Y, X
        rz * ry * rx
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(x, y, z))
    }

    /// Scene rotation followed by pulling the scene `distance` units away from the viewer
    pub fn model_view(rotation: &RotationState, distance: f32) -> Matrix4<f32> {
        Self::translation_matrix(0.0, 0.0, -distance) * Self::rotation_matrix(rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(10.0, 20.0, 30.0);
        assert!((state.x - 10.0).abs() < 1e-6);
        assert!((state.y - 20.0).abs() < 1e-6);
        assert!((state.z - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::rotation_matrix(&rotation);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let matrix = Transform::rotation_matrix(&RotationState::new(0.0, 90.0, 0.0));
        let p = matrix.transform_point(&Point3::new(1.0, 0.0, 0.0));
        // Right-handed: +X swings to -Z
        assert!((p - Point3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_full_turn_is_identity() {
        let matrix = Transform::rotation_matrix(&RotationState::new(0.0, 360.0, 0.0));
        assert!((matrix - Matrix4::identity()).norm() < 1e-5);
        assert!(RotationState::new(0.0, 360.0, 0.0).same_orientation(&RotationState::zero()));
        assert!(!RotationState::new(0.0, 1.0, 0.0).same_orientation(&RotationState::zero()));
    }

    #[test]
    fn test_model_view_pushes_scene_back() {
        let mv = Transform::model_view(&RotationState::zero(), 5.0);
        let p = mv.transform_point(&Point3::origin());
        assert!((p - Point3::new(0.0, 0.0, -5.0)).norm() < 1e-6);
    }
}
