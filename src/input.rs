use winit::keyboard::KeyCode;

use crate::camera::Camera;

/// Distance one key press moves the camera.
pub const CAMERA_STEP: f32 = 0.1;

/// Pixels-to-radians divisor for the absolute pointer mapping.
const POINTER_SCALE: f32 = 100.0;

/// Maps discrete input events onto camera state. Keys apply a one-shot delta
/// per key-down (holding a key repeats through the host's key-repeat, not
/// through per-frame polling); pointer position maps absolutely onto the
/// camera orientation.
pub struct InputController;

impl InputController {
    /// Applies the movement bound to `key`, if any. Returns whether the key
    /// was mapped, so callers can skip redundant work for unmapped keys.
    pub fn key_down(camera: &mut Camera, key: KeyCode) -> bool {
        match key {
            KeyCode::KeyS => camera.position.z += CAMERA_STEP,
            KeyCode::KeyW => camera.position.z -= CAMERA_STEP,
            KeyCode::KeyA => camera.position.x -= CAMERA_STEP,
            KeyCode::KeyD => camera.position.x += CAMERA_STEP,
            _ => return false,
        }
        true
    }

    /// Absolute pointer mapping: the last known pointer position is the
    /// orientation, it does not accumulate.
    pub fn pointer_moved(camera: &mut Camera, x: f32, y: f32) {
        camera.rotation_y = -x / POINTER_SCALE;
        camera.rotation_x = -y / POINTER_SCALE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        let mut camera = Camera::new();
        let x0 = camera.position.x;

        assert!(InputController::key_down(&mut camera, KeyCode::KeyD));
        assert!(InputController::key_down(&mut camera, KeyCode::KeyA));

        assert!(
            (camera.position.x - x0).abs() < f32::EPSILON,
            "D then A should return the camera to its starting X"
        );
    }

    #[test]
    fn unmapped_key_is_ignored() {
        let mut camera = Camera::new();
        let before = camera.position;
        assert!(!InputController::key_down(&mut camera, KeyCode::KeyZ));
        assert_eq!(camera.position, before);
    }

    #[test]
    fn pointer_mapping_is_absolute() {
        let mut camera = Camera::new();

        InputController::pointer_moved(&mut camera, 200.0, 50.0);
        assert_eq!(camera.rotation_y, -2.0);
        assert_eq!(camera.rotation_x, -0.5);

        // A second report overwrites rather than accumulates.
        InputController::pointer_moved(&mut camera, 100.0, 100.0);
        assert_eq!(camera.rotation_y, -1.0);
        assert_eq!(camera.rotation_x, -1.0);
    }
}
