use glam::{Mat4, Vec3};

/// Perspective parameters, fixed at initialization.
pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 5.0;

/// Where the camera starts: pulled back so the nearest shapes are in view.
const INITIAL_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// First-person camera with translation on all three axes and rotation on X
/// and Y. Input events mutate it directly; the render pass reads it back as
/// a view-projection matrix.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: INITIAL_POSITION,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        let world = Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_rotation_x(self.rotation_x);
        world.inverse()
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let projection = Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            aspect,
            NEAR_PLANE,
            FAR_PLANE,
        );
        projection * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn identity_rotation_looks_down_negative_z() {
        let camera = Camera::new();
        let view = camera.view_matrix();
        // A point ahead of the camera maps to negative Z view space.
        let ahead = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(ahead.z < 0.0, "origin should be in front of the camera");
    }

    #[test]
    fn view_matrix_inverts_position() {
        let camera = Camera::new();
        let view = view_times(&camera, camera.position);
        assert!(view.length() < 1e-5, "camera position maps to view origin");
    }

    fn view_times(camera: &Camera, point: Vec3) -> Vec3 {
        let v = camera.view_matrix() * point.extend(1.0);
        v.truncate()
    }
}
