// Parameter bounds and preview layout tuning constants

// Tint channels are 8-bit values
pub const COLOR_CHANNEL_MIN: i32 = 0;
pub const COLOR_CHANNEL_MAX: i32 = 255;
pub const DEFAULT_TINT: [i32; 3] = [0, 0, 0];

// Camera offset steps relative to the fixed look-at point
pub const CAMERA_OFFSET_MIN: i32 = -10;
pub const CAMERA_OFFSET_MAX: i32 = 10;
pub const DEFAULT_CAMERA_OFFSET: [i32; 3] = [0, 0, -5];

// Mirror counters: floor 0, ceiling fixed at 8 (see DESIGN.md)
pub const MIRROR_LEVEL_MIN: i32 = 0;
pub const MIRROR_LEVEL_MAX: i32 = 8;
pub const DEFAULT_MIRROR_LEVELS: [i32; 2] = [1, 1];

// Frame pacing comes purely from the timer; vsync is off
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

// World mapping for the schematic preview camera
pub const CAMERA_BASE_EYE: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_WORLD_STEP: f32 = 0.5; // world units per offset step
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Anchors and scales of the two tinted solids
pub const CUBE_ANCHOR: [f32; 3] = [-1.2, 0.0, 0.0];
pub const TETRAHEDRON_ANCHOR: [f32; 3] = [1.2, 0.0, 0.0];
pub const SOLID_SCALE: f32 = 1.0;

// Mirror rings around the solids
pub const BIG_MIRROR_RING_RADIUS: f32 = 2.6;
pub const SMALL_MIRROR_RING_RADIUS: f32 = 3.4;
pub const BIG_MIRROR_SCALE: f32 = 0.9;
pub const SMALL_MIRROR_SCALE: f32 = 0.35;
pub const MIRROR_TINT: [f32; 3] = [0.78, 0.82, 0.88];

// Ring placement jitter (radians / world units)
pub const MIRROR_ANGLE_JITTER: f32 = 0.12;
pub const MIRROR_RADIUS_JITTER: f32 = 0.20;

pub const DEFAULT_LAYOUT_SEED: u64 = 42;
