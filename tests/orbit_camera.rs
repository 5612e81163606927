//! Orbit controller driving the camera, end to end.

use glam::{Mat4, Vec3, Vec4Swizzles};
use globe_engine::scene::ORIGIN;
use globe_engine::{
    mesh, AzimuthMode, Camera, CameraController, OrbitConfig, OrbitController, OrbitInput,
    RenderMode,
};
use rstest::rstest;

fn orbit(config: OrbitConfig) -> OrbitController {
    OrbitController::from_config(config).unwrap()
}

#[rstest]
#[case::saturates_at_max(75.0, 1.0, 80.0)]
#[case::saturates_at_min(-75.0, -1.0, -80.0)]
#[case::half_step(0.0, 0.5, 5.0)]
#[case::clamped_unit(0.0, 3.0, 10.0)]
fn test_elevation_steps(#[case] start: f32, #[case] unit: f32, #[case] expected: f32) {
    let mut orbit = orbit(OrbitConfig::default().with_angles(0.0, start));
    orbit.adjust_elevation(unit);
    assert_eq!(orbit.elevation(), expected);
}

#[rstest]
#[case::snaps_past_bound(AzimuthMode::SnapBack, 355.0, 1.0, 0.0)]
#[case::snaps_past_negative_bound(AzimuthMode::SnapBack, -355.0, -1.0, 0.0)]
#[case::keeps_negative(AzimuthMode::SnapBack, 0.0, -1.0, -10.0)]
#[case::wraps_past_bound(AzimuthMode::Wrap, 355.0, 1.0, 5.0)]
#[case::wraps_below_zero(AzimuthMode::Wrap, 0.0, -1.0, 350.0)]
fn test_azimuth_steps(
    #[case] mode: AzimuthMode,
    #[case] start: f32,
    #[case] unit: f32,
    #[case] expected: f32,
) {
    let mut orbit = orbit(
        OrbitConfig::default()
            .with_angles(start, 0.0)
            .with_azimuth_mode(mode),
    );
    orbit.adjust_azimuth(unit);
    assert_eq!(orbit.azimuth(), expected);
}

#[rstest]
#[case(0.0, 0.0)]
#[case(90.0, 30.0)]
#[case(-120.0, -60.0)]
#[case(270.0, 80.0)]
fn test_view_keeps_origin_straight_ahead(#[case] azimuth: f32, #[case] elevation: f32) {
    let orbit = orbit(
        OrbitConfig::default()
            .with_angles(azimuth, elevation)
            .with_radius(3.0),
    );
    let mut camera = Camera::default();
    orbit.update_camera_position(&mut camera);

    let view = camera.view_matrix_at_position();
    assert!(view
        .transform_point3(ORIGIN)
        .abs_diff_eq(Vec3::new(0.0, 0.0, -3.0), 1e-4));
}

#[test]
fn test_whole_globe_fits_default_frustum() {
    let globe = mesh::build(8).unwrap();
    let mut camera = Camera::default();
    let mut orbit = OrbitController::new();

    for step in ["right", "up", "up", "in", "out", "left"] {
        orbit.update(&mut camera, &step.parse::<OrbitInput>().unwrap());
    }

    let mvp = camera.mvp(1.0, Mat4::IDENTITY);
    for p in globe.positions() {
        let clip = mvp * p.extend(1.0);
        assert!(clip.w > 0.0);
        let depth = clip.z / clip.w;
        assert!((-1.0..=1.0).contains(&depth), "{p} projects to depth {depth}");
    }
}

#[test]
fn test_script_replay() {
    let mut camera = Camera::default();
    let mut orbit = OrbitController::new();

    let script = ["right", "right", "down", "in", "toggle"];
    let combined = script
        .iter()
        .map(|s| s.parse::<OrbitInput>().unwrap())
        .fold(OrbitInput::new(), OrbitInput::merge);
    assert_eq!(combined.azimuth, 2.0);

    for step in script {
        orbit.update(&mut camera, &step.parse::<OrbitInput>().unwrap());
    }

    assert_eq!(orbit.azimuth(), 20.0);
    assert_eq!(orbit.elevation(), -10.0);
    assert_eq!(orbit.radius(), 1.75);
    assert_eq!(orbit.render_mode(), RenderMode::Filled);
    assert_eq!(camera.position(), orbit.position());
    assert!((camera.position().length() - 1.75).abs() < 1e-5);
}

#[test]
fn test_camera_parameters_survive_invalid_updates() {
    let mut camera = Camera::default();
    camera.set_field_of_view(-5.0);
    camera.set_distance_to_far_plane(5.0);
    camera.set_distance_to_near_plane(10.0);
    assert_eq!(camera.field_of_view(), 90.0);
    assert_eq!(camera.distance_to_near_plane(), 0.1);

    camera.set_distance_to_near_plane(2.0);
    assert_eq!(camera.distance_to_near_plane(), 2.0);
    assert!(camera.distance_to_near_plane() <= camera.distance_to_far_plane());
}

#[test]
fn test_uniforms_carry_eye_position() {
    let mut camera = Camera::default();
    let orbit = orbit(OrbitConfig::default().with_angles(45.0, 20.0));
    orbit.update_camera_position(&mut camera);

    let uniforms = camera.uniforms(4.0 / 3.0, Mat4::IDENTITY);
    assert!(uniforms.position.xyz().abs_diff_eq(orbit.position(), 1e-6));
}
