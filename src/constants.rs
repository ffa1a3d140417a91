/// Status timer and render loop pacing.
///
/// The status bar timer fires twelve times a second; the speedometer only
/// needs a sample every few ticks to stay readable.
// Periodic UI timer
pub const TIMER_HZ: u32 = 12;
pub const SPEEDOMETER_DIVIDER: u64 = 4; // 3 samples per second at 12 Hz

// Clock-speed gauge scale (gauge = factor * MHz)
pub const GAUGE_PER_MHZ: f64 = 10.0;

// Render loop
pub const RENDER_HZ: u32 = 60;
