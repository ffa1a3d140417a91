// Shared timing and transition tuning constants.

// Speedometer
pub const SMOOTHING_ALPHA: f64 = 0.5; // new = α*instant + (1-α)*old
pub const MHZ_DIGITS: i32 = 2;
pub const FPS_DIGITS: i32 = 0;

// Default step counts (frames) per trigger
pub const ZOOM_IN_STEPS: u32 = 60;
pub const ZOOM_OUT_STEPS: u32 = 40;
pub const ROTATE_STEPS: u32 = 60;
pub const SCROLL_STEPS: u32 = 120;
pub const SNAP_STEPS: u32 = 10;
pub const TEXTURE_ZOOM_STEPS: u32 = 30;
pub const BLEND_STEPS: u32 = 40;
pub const MONITOR_FADE_STEPS: u32 = 20;

// Geometry endpoints
pub const ZOOMED_OUT_Z: f32 = 6.0; // camera distance when zoomed out
pub const SCROLL_START_Y: f32 = -1.5; // canvas starts below the view
pub const SNAP_START_Z: f32 = -0.05; // slight pull-in before snapping to front
pub const QUARTER_TURN: f32 = 90.0; // degrees
pub const FULL_TURN: f32 = 360.0;

// Projection
pub const FOV_Y_DEGREES: f32 = 65.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;

// Eye placement relative to the canvas
pub const EYE_DISTANCE: f32 = 1.39; // distance from eye to canvas plane
pub const ROTATION_PIVOT_Z: f32 = 0.16; // depth of the x-rotation pivot

// Emulator texture and its visible display window (pixels)
pub const TEXTURE_WIDTH: f32 = 1024.0;
pub const TEXTURE_HEIGHT: f32 = 320.0;
pub const VISIBLE_X: f32 = 192.0;
pub const VISIBLE_Y: f32 = 26.0;
pub const VISIBLE_WIDTH: f32 = 736.0;
pub const VISIBLE_HEIGHT: f32 = 286.0;
