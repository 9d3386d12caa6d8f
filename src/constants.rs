/// Web-side tuning: element ids, CSS hooks and renderer defaults.
///
/// Motion tuning lives in `desk_core::constants`; this module only holds what
/// the browser front-end needs on top of it.
// DOM hooks
pub const CANVAS_ID: &str = "desk-canvas";
pub const FOCUS_ATTR: &str = "data-focus"; // <a data-focus="projects">
pub const CONFIRM_ATTR: &str = "data-confirm";
pub const RESET_ATTR: &str = "data-reset";

// Classes toggled by the presentation layer
pub const REVEALED_CLASS: &str = "revealed";
pub const FOCUS_LOCK_CLASS: &str = "focus-locked";

// Pointer movement (in canvas pixels) beyond which a press counts as a drag, not a click
pub const CLICK_SLOP_PX: f32 = 6.0;

// Delay before scrolling revealed content into view, letting the fade start first
pub const REVEAL_SCROLL_DELAY_MS: i32 = 100;

// Renderer
pub const MAX_POINT_LIGHTS: usize = 4;
pub const AMBIENT_INTENSITY: f32 = 0.15;
pub const SUN_DIRECTION: [f32; 3] = [10.0, 15.0, 8.0]; // towards the key directional light
pub const SUN_INTENSITY: f32 = 0.6;
pub const CLEAR_COLOR: [f64; 3] = [0.96, 0.93, 0.87];

// Desk slab drawn under the subjects (not interactive)
pub const DESK_CENTER: [f32; 3] = [0.0, -2.75, -2.0];
pub const DESK_HALF_EXTENTS: [f32; 3] = [13.0, 0.25, 6.0];
pub const DESK_COLOR: [f32; 3] = [0.545, 0.435, 0.278];

// Hover emphasis applied to the hovered subject's colour
pub const HOVER_BRIGHTEN: f32 = 1.25;
