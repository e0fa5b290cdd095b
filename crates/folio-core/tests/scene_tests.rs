// Host-side tests for the background scene update pass.

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use folio_core::constants::*;
use folio_core::scene::{normalized_pointer, ParticleCloud, Scene};

fn make_scene(seed: u64) -> Scene {
    let mut rng = StdRng::seed_from_u64(seed);
    Scene::new(&mut rng)
}

#[test]
fn cloud_has_the_expected_population() {
    let scene = make_scene(1);
    assert_eq!(scene.cloud.len(), PARTICLE_COUNT);
    assert_eq!(scene.cloud.colors.len(), PARTICLE_COUNT);
    assert_eq!(scene.shapes.len(), 4);
}

#[test]
fn particles_start_inside_the_spread_cube() {
    let scene = make_scene(2);
    let half = PARTICLE_SPREAD / 2.0;
    for p in &scene.cloud.positions {
        assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
    }
}

#[test]
fn particle_colors_split_roughly_into_thirds() {
    let mut rng = StdRng::seed_from_u64(3);
    let cloud = ParticleCloud::with_count(&mut rng, 10_000);
    let mut counts = [0usize; 3];
    for color in &cloud.colors {
        let idx = PALETTE[..3]
            .iter()
            .position(|&hex| hex_rgb(hex) == *color)
            .expect("color not from the palette");
        counts[idx] += 1;
    }
    // Each bucket should land within a few percent of one third.
    for &count in &counts {
        assert!((2_800..=3_900).contains(&count), "skewed bucket: {count}");
    }
}

#[test]
fn shapes_spawn_inside_their_bounds() {
    let scene = make_scene(4);
    for shape in &scene.shapes {
        assert!(shape.position.x.abs() <= SHAPE_BOUND);
        assert!(shape.position.y.abs() <= SHAPE_BOUND);
        assert!(shape.position.z >= SHAPE_Z_MIN && shape.position.z <= SHAPE_Z_MAX);
        assert!(shape.velocity.x.abs() <= SHAPE_DRIFT_MAX);
        assert!(shape.velocity.y.abs() <= SHAPE_DRIFT_MAX);
        assert!(shape.spin.abs() <= SHAPE_SPIN_MAX);
        assert_eq!(shape.opacity, OPACITY_RESTING);
        assert_eq!(shape.scale, SCALE_RESTING);
    }
}

#[test]
fn shapes_stay_near_their_bounds_over_many_frames() {
    let mut scene = make_scene(5);
    for _ in 0..100_000 {
        scene.step();
    }
    // Reflection allows at most one frame of overshoot.
    let slack = SHAPE_BOUND + SHAPE_DRIFT_MAX;
    for shape in &scene.shapes {
        assert!(shape.position.x.abs() <= slack);
        assert!(shape.position.y.abs() <= slack);
    }
}

#[test]
fn pointer_easing_converges_geometrically() {
    let mut scene = make_scene(6);
    scene.pointer.raw = Vec2::new(1.0, -1.0);
    let mut gap = (scene.pointer.raw - scene.pointer.smoothed).length();
    for _ in 0..60 {
        scene.step();
        let next_gap = (scene.pointer.raw - scene.pointer.smoothed).length();
        // Each step closes exactly (1 - POINTER_EASE) of the remaining gap.
        assert!((next_gap - gap * (1.0 - POINTER_EASE)).abs() < 1e-4);
        gap = next_gap;
    }
    assert!(gap < 0.1);
}

#[test]
fn cloud_tilt_is_set_while_turn_accumulates() {
    let mut scene = make_scene(7);
    // Pin the smoothed pointer so each step sees the same value.
    scene.pointer.raw = Vec2::new(0.5, 0.25);
    scene.pointer.smoothed = scene.pointer.raw;

    scene.step();
    let pointer = scene.pointer.smoothed;
    assert!((scene.cloud.rotation.x - pointer.y * CLOUD_TILT_FACTOR).abs() < 1e-6);
    let after_one = scene.cloud.rotation.y;

    scene.step();
    // x is overwritten every frame; y keeps growing by spin + turn.
    assert!((scene.cloud.rotation.x - pointer.y * CLOUD_TILT_FACTOR).abs() < 1e-6);
    let per_frame = CLOUD_SPIN_PER_FRAME + pointer.x * CLOUD_TURN_FACTOR;
    assert!((scene.cloud.rotation.y - after_one - per_frame).abs() < 1e-6);
}

#[test]
fn proximity_highlight_respects_the_radius() {
    let mut scene = make_scene(8);
    scene.pointer.raw = Vec2::ZERO;
    scene.pointer.smoothed = Vec2::ZERO;
    for shape in &mut scene.shapes {
        shape.velocity = Vec2::ZERO;
    }

    // Just inside the radius: highlighted.
    scene.shapes[0].position = Vec3::new(HIGHLIGHT_RADIUS - 0.01, 0.0, -20.0);
    // Just outside: resting.
    scene.shapes[1].position = Vec3::new(HIGHLIGHT_RADIUS + 0.01, 0.0, -20.0);
    scene.step();

    assert_eq!(scene.shapes[0].opacity, OPACITY_HIGHLIGHTED);
    assert_eq!(scene.shapes[0].scale, SCALE_HIGHLIGHTED);
    assert_eq!(scene.shapes[1].opacity, OPACITY_RESTING);
    assert_eq!(scene.shapes[1].scale, SCALE_RESTING);
}

#[test]
fn highlight_focus_follows_the_scaled_pointer() {
    let mut scene = make_scene(9);
    scene.pointer.raw = Vec2::new(1.0, 0.0);
    scene.pointer.smoothed = scene.pointer.raw;
    for shape in &mut scene.shapes {
        shape.velocity = Vec2::ZERO;
        shape.position = Vec3::new(-20.0, -20.0, -20.0);
    }
    // Focus sits at x = POINTER_WORLD_SCALE on this frame.
    scene.shapes[0].position = Vec3::new(POINTER_WORLD_SCALE, 0.0, -20.0);
    scene.step();

    assert_eq!(scene.shapes[0].opacity, OPACITY_HIGHLIGHTED);
    assert_eq!(scene.shapes[1].opacity, OPACITY_RESTING);
}

#[test]
fn camera_sways_with_the_smoothed_pointer() {
    let mut scene = make_scene(10);
    scene.pointer.raw = Vec2::new(0.4, -0.6);
    scene.pointer.smoothed = scene.pointer.raw;
    scene.step();

    let pointer = scene.pointer.smoothed;
    assert!((scene.camera.eye.x - pointer.x * CAMERA_SWAY).abs() < 1e-6);
    assert!((scene.camera.eye.y - pointer.y * CAMERA_SWAY).abs() < 1e-6);
    assert_eq!(scene.camera.eye.z, CAMERA_Z);
    assert_eq!(scene.camera.target, Vec3::ZERO);
}

#[test]
fn normalized_pointer_maps_corners_and_center() {
    let center = normalized_pointer(400.0, 300.0, 800.0, 600.0).unwrap();
    assert!(center.length() < 1e-6);

    let top_left = normalized_pointer(0.0, 0.0, 800.0, 600.0).unwrap();
    assert_eq!(top_left, Vec2::new(-1.0, 1.0));

    let bottom_right = normalized_pointer(800.0, 600.0, 800.0, 600.0).unwrap();
    assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
}

#[test]
fn normalized_pointer_rejects_degenerate_viewports() {
    assert!(normalized_pointer(10.0, 10.0, 0.0, 600.0).is_none());
    assert!(normalized_pointer(10.0, 10.0, 800.0, 0.0).is_none());
    assert!(normalized_pointer(10.0, 10.0, -800.0, 600.0).is_none());
}

#[test]
fn aspect_changes_leave_object_state_alone() {
    let mut wide = make_scene(12);
    let mut tall = make_scene(12);
    wide.camera.aspect = 1920.0 / 1080.0;
    tall.camera.aspect = 600.0 / 800.0;
    for _ in 0..100 {
        wide.step();
        tall.step();
    }
    for (a, b) in wide.shapes.iter().zip(tall.shapes.iter()) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.rotation, b.rotation);
    }
    assert_eq!(wide.cloud.rotation, tall.cloud.rotation);
}

#[test]
fn camera_projects_a_point_in_front_of_it() {
    let scene = make_scene(11);
    let clip = scene.camera.view_projection() * Vec3::ZERO.extend(1.0);
    // The origin sits CAMERA_Z in front of the eye, well inside the frustum.
    assert!(clip.w > 0.0);
    let ndc_z = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&ndc_z));
}
