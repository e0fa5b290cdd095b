//! Background scene state and the per-frame update pass.
//!
//! Everything here is platform-independent: the web frontend feeds pointer
//! coordinates in, calls [`Scene::step`] once per animation frame, and hands
//! the resulting state to the renderer. All randomness is injected so tests
//! can run against a seeded RNG.

use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

use crate::constants::*;

/// Geometry assigned to each of the four floating shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Torus,
    Octahedron,
    Icosahedron,
    Tetrahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Torus,
        ShapeKind::Octahedron,
        ShapeKind::Icosahedron,
        ShapeKind::Tetrahedron,
    ];
}

/// Fixed-size point cloud; positions and colors never change after creation,
/// only the whole-cloud rotation is advanced each frame.
pub struct ParticleCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub rotation: Vec3,
}

impl ParticleCloud {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_count(rng, PARTICLE_COUNT)
    }

    pub fn with_count(rng: &mut impl Rng, count: usize) -> Self {
        let half = PARTICLE_SPREAD / 2.0;
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            ));
            let pick: f32 = rng.gen();
            let idx = if pick < 1.0 / 3.0 {
                0
            } else if pick < 2.0 / 3.0 {
                1
            } else {
                2
            };
            colors.push(hex_rgb(PALETTE[idx]));
        }
        Self {
            positions,
            colors,
            rotation: Vec3::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// One drifting wireframe mesh. Position stays inside the reflective
/// `SHAPE_BOUND` box on x/y; opacity and scale are recomputed from pointer
/// proximity every frame.
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub color: [f32; 3],
    pub position: Vec3,
    pub rotation: Vec3,
    pub velocity: Vec2,
    pub spin: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl FloatingShape {
    fn new(kind: ShapeKind, color: [f32; 3], rng: &mut impl Rng) -> Self {
        Self {
            kind,
            color,
            position: Vec3::new(
                rng.gen_range(-SHAPE_BOUND..SHAPE_BOUND),
                rng.gen_range(-SHAPE_BOUND..SHAPE_BOUND),
                rng.gen_range(SHAPE_Z_MIN..SHAPE_Z_MAX),
            ),
            rotation: Vec3::new(
                rng.gen_range(0.0..std::f32::consts::PI),
                rng.gen_range(0.0..std::f32::consts::PI),
                0.0,
            ),
            velocity: Vec2::new(
                rng.gen_range(-SHAPE_DRIFT_MAX..SHAPE_DRIFT_MAX),
                rng.gen_range(-SHAPE_DRIFT_MAX..SHAPE_DRIFT_MAX),
            ),
            spin: rng.gen_range(-SHAPE_SPIN_MAX..SHAPE_SPIN_MAX),
            opacity: OPACITY_RESTING,
            scale: SCALE_RESTING,
        }
    }
}

/// Raw pointer coordinates in [-1, 1] (y up) plus the eased value the frame
/// pass chases them with. Event listeners write `raw`; only the frame pass
/// touches `smoothed`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub raw: Vec2,
    pub smoothed: Vec2,
}

impl PointerState {
    /// One step of the first-order low-pass filter toward `raw`.
    pub fn ease(&mut self) {
        self.smoothed += (self.raw - self.smoothed) * POINTER_EASE;
    }
}

/// Normalize absolute client coordinates against the viewport to [-1, 1] per
/// axis. The vertical axis is flipped so +y points up, matching world space.
/// Returns `None` for degenerate viewport dimensions.
pub fn normalized_pointer(client_x: f64, client_y: f64, view_w: f64, view_h: f64) -> Option<Vec2> {
    if view_w <= 0.0 || view_h <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (client_x / view_w) as f32 * 2.0 - 1.0,
        -((client_y / view_h) as f32) * 2.0 + 1.0,
    ))
}

/// Right-handed perspective camera; eye follows the smoothed pointer, always
/// looking at the origin.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// Static point light consumed by the wireframe shader.
#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub range: f32,
}

/// The whole background scene: one cloud, four shapes, pointer, camera and
/// lights. Constructed once, mutated in place by [`Scene::step`]; the frame
/// path performs no allocation.
pub struct Scene {
    pub cloud: ParticleCloud,
    pub shapes: Vec<FloatingShape>,
    pub pointer: PointerState,
    pub camera: Camera,
    pub ambient: f32,
    pub lights: [PointLight; 2],
}

impl Scene {
    pub fn new(rng: &mut impl Rng) -> Self {
        let shapes = ShapeKind::ALL
            .iter()
            .zip(PALETTE.iter())
            .map(|(&kind, &hex)| FloatingShape::new(kind, hex_rgb(hex), rng))
            .collect();
        Self {
            cloud: ParticleCloud::new(rng),
            shapes,
            pointer: PointerState::default(),
            camera: Camera::default(),
            ambient: AMBIENT_INTENSITY,
            lights: [
                PointLight {
                    position: Vec3::new(20.0, 20.0, 20.0),
                    color: hex_rgb(PALETTE[0]),
                    range: LIGHT_RANGE,
                },
                PointLight {
                    position: Vec3::new(-20.0, -20.0, 20.0),
                    color: hex_rgb(PALETTE[2]),
                    range: LIGHT_RANGE,
                },
            ],
        }
    }

    /// Advance the scene by one display frame.
    pub fn step(&mut self) {
        self.pointer.ease();
        let pointer = self.pointer.smoothed;

        // Cloud rotation: x is pinned to the pointer, y accumulates both the
        // constant spin and the pointer turn.
        self.cloud.rotation.y += CLOUD_SPIN_PER_FRAME;
        self.cloud.rotation.x = pointer.y * CLOUD_TILT_FACTOR;
        self.cloud.rotation.y += pointer.x * CLOUD_TURN_FACTOR;

        let focus = pointer * POINTER_WORLD_SCALE;
        for shape in &mut self.shapes {
            shape.rotation.x += shape.spin;
            shape.rotation.y += shape.spin;
            shape.position.x += shape.velocity.x;
            shape.position.y += shape.velocity.y;

            // Reflect, don't clamp; one frame of overshoot is negligible at
            // these velocities.
            if shape.position.x.abs() > SHAPE_BOUND {
                shape.velocity.x = -shape.velocity.x;
            }
            if shape.position.y.abs() > SHAPE_BOUND {
                shape.velocity.y = -shape.velocity.y;
            }

            let distance = Vec2::new(shape.position.x, shape.position.y).distance(focus);
            if distance < HIGHLIGHT_RADIUS {
                shape.opacity = OPACITY_HIGHLIGHTED;
                shape.scale = SCALE_HIGHLIGHTED;
            } else {
                shape.opacity = OPACITY_RESTING;
                shape.scale = SCALE_RESTING;
            }
        }

        self.camera.eye = Vec3::new(
            pointer.x * CAMERA_SWAY,
            pointer.y * CAMERA_SWAY,
            CAMERA_Z,
        );
        self.camera.target = Vec3::ZERO;
    }
}
