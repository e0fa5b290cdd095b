// Shared scene and effect tuning constants used by the web frontend.

// Particle cloud
pub const PARTICLE_COUNT: usize = 800;
pub const PARTICLE_OPACITY: f32 = 0.6; // additive-blended point brightness
pub const PARTICLE_SPREAD: f32 = 100.0; // cube side length, centered on origin
pub const CLOUD_SPIN_PER_FRAME: f32 = 0.0005; // constant slow y rotation
pub const CLOUD_TILT_FACTOR: f32 = 0.1; // pointer.y -> rotation.x (set each frame)
pub const CLOUD_TURN_FACTOR: f32 = 0.05; // pointer.x -> rotation.y (accumulated)

// Floating shapes
pub const SHAPE_BOUND: f32 = 30.0; // reflective |x|/|y| boundary
pub const SHAPE_Z_MIN: f32 = -25.0;
pub const SHAPE_Z_MAX: f32 = -10.0;
pub const SHAPE_DRIFT_MAX: f32 = 0.0005; // per-frame linear velocity magnitude
pub const SHAPE_SPIN_MAX: f32 = 0.005; // per-frame rotational speed magnitude

// Pointer proximity highlight
pub const POINTER_EASE: f32 = 0.05; // first-order low-pass factor per frame
pub const POINTER_WORLD_SCALE: f32 = 20.0; // smoothed pointer -> scene plane
pub const HIGHLIGHT_RADIUS: f32 = 15.0;
pub const OPACITY_RESTING: f32 = 0.15;
pub const OPACITY_HIGHLIGHTED: f32 = 0.3;
pub const SCALE_RESTING: f32 = 1.0;
pub const SCALE_HIGHLIGHTED: f32 = 1.2;

// Camera
pub const CAMERA_Z: f32 = 50.0;
pub const CAMERA_SWAY: f32 = 2.0; // smoothed pointer -> eye x/y
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Palette (hex RGB); particles sample the first three uniformly
pub const PALETTE: [u32; 4] = [0x667eea, 0x764ba2, 0xf093fb, 0x8b5cf6];

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const LIGHT_RANGE: f32 = 100.0;

// Typing effect timings (seconds)
pub const TYPE_INTERVAL: f32 = 0.1;
pub const ERASE_INTERVAL: f32 = 0.05;
pub const HOLD_DELAY: f32 = 2.0;
pub const NEXT_PHRASE_DELAY: f32 = 1.2;
pub const TYPING_START_DELAY: f32 = 2.25;

// Stat counters
pub const COUNTER_STEPS: f64 = 200.0; // frames from zero to target

// Cursor trail
pub const TRAIL_LEN: usize = 20;
pub const TRAIL_EASE: f32 = 0.3;
pub const TRAIL_MIN_VIEWPORT_WIDTH: f64 = 768.0; // disabled on narrow viewports

/// Convert a 0xRRGGBB hex color to linear-ish [0,1] RGB components.
#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
