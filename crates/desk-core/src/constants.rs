use glam::Vec3;

// Shared motion/interaction tuning constants used by the core and the web frontend.

// Camera rig: per-frame lerp rate = clamp(distance * gain, min, max)
pub const RIG_POS_GAIN: f32 = 0.08;
pub const RIG_POS_RATE_MIN: f32 = 0.015;
pub const RIG_POS_RATE_MAX: f32 = 0.05;
pub const RIG_LOOK_GAIN: f32 = 0.05;
pub const RIG_LOOK_RATE_MIN: f32 = 0.01;
pub const RIG_LOOK_RATE_MAX: f32 = 0.035;

// Default (unfocused) framing
pub const DEFAULT_EYE: Vec3 = Vec3::new(0.0, 5.0, 11.0);
pub const DEFAULT_LOOK_AT: Vec3 = Vec3::ZERO;

// Projection
pub const CAMERA_FOVY_DEG: f32 = 55.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Hover feedback
pub const HOVER_INTENSITY: f32 = 1.08; // scale multiplier while hovered
pub const HOVER_SMOOTHING: f32 = 0.15; // fraction of the scale gap closed per 60 Hz frame
pub const HOVER_FLOAT_AMPLITUDE: f32 = 0.05;
pub const HOVER_FLOAT_FREQUENCY: f32 = 2.0; // rad/s
pub const MAIN_SUBJECT_INTRO_SCALE: f32 = 1.2;

// Hover light rig (key + fill), offsets in subject-local space
pub const KEY_LIGHT_OFFSET: Vec3 = Vec3::new(0.0, 0.5, 0.5);
pub const KEY_LIGHT_INTENSITY: f32 = 2.0;
pub const KEY_LIGHT_COLOR: [f32; 3] = [0.376, 0.647, 0.980]; // #60a5fa
pub const KEY_LIGHT_RANGE: f32 = 4.0;
pub const FILL_LIGHT_OFFSET: Vec3 = Vec3::new(0.0, -0.3, 0.0);
pub const FILL_LIGHT_INTENSITY: f32 = 0.5;
pub const FILL_LIGHT_COLOR: [f32; 3] = [0.231, 0.510, 0.965]; // #3b82f6
pub const FILL_LIGHT_RANGE: f32 = 2.0;
pub const LIGHT_DECAY: f32 = 2.0;

// Scene-wide idle motion
pub const PARALLAX_YAW_GAIN: f32 = 0.1; // rotation.y target = pointer.x * gain
pub const PARALLAX_PITCH_GAIN: f32 = 0.06; // rotation.x target = -pointer.y * gain
pub const PARALLAX_SMOOTHING: f32 = 0.03;
pub const BREATHE_AMPLITUDE: f32 = 0.02;
pub const BREATHE_FREQUENCY: f32 = 0.5; // rad/s

// Frame timing
pub const REFERENCE_FRAME_RATE: f32 = 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
