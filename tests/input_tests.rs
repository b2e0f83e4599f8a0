use glam::Vec3;
use shape_spinner::input::{InputController, CAMERA_STEP};
use shape_spinner::Camera;
use winit::keyboard::KeyCode;

#[test]
fn wasd_walk_lands_where_the_steps_add_up() {
    let mut camera = Camera::new();
    let start = camera.position;

    // Two forward, one back, three right, one left.
    for key in [
        KeyCode::KeyW,
        KeyCode::KeyW,
        KeyCode::KeyS,
        KeyCode::KeyD,
        KeyCode::KeyD,
        KeyCode::KeyD,
        KeyCode::KeyA,
    ] {
        assert!(InputController::key_down(&mut camera, key));
    }

    let expected = start + Vec3::new(2.0 * CAMERA_STEP, 0.0, -CAMERA_STEP);
    assert!(
        (camera.position - expected).length() < 1e-6,
        "walk should net two steps right and one forward, got {:?}",
        camera.position
    );
}

#[test]
fn movement_never_touches_height_or_orientation() {
    let mut camera = Camera::new();
    let y0 = camera.position.y;

    for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
        InputController::key_down(&mut camera, key);
    }

    assert_eq!(camera.position.y, y0, "WASD moves on the XZ plane only");
    assert_eq!(camera.rotation_x, 0.0);
    assert_eq!(camera.rotation_y, 0.0);
}

#[test]
fn look_and_move_compose_independently() {
    let mut camera = Camera::new();

    InputController::pointer_moved(&mut camera, 150.0, -50.0);
    InputController::key_down(&mut camera, KeyCode::KeyW);

    // Movement is axis-aligned; looking around does not steer it.
    assert_eq!(camera.position.z, Camera::new().position.z - CAMERA_STEP);
    assert_eq!(camera.rotation_y, -1.5);
    assert_eq!(camera.rotation_x, 0.5);
}
