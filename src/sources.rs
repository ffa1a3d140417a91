//! Values the front-end reads from collaborators it does not own.
//!
//! The emulation core publishes a cycle counter, the renderer publishes its
//! frame counter, and the preferences dialog publishes the eye offset. All of
//! them are plain atomics: readers tolerate a value that is one update stale.

use atomic_float::AtomicF32;
use frontend_core::EyeOffsetSource;
use glam::Vec3;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic counters sampled by the status timer.
pub trait CounterSource {
    /// Emulated clock cycles since power-on.
    fn cycle_count(&self) -> u64;
    /// Frames drawn since the renderer started.
    fn frame_count(&self) -> u64;
}

impl<T: CounterSource + ?Sized> CounterSource for Arc<T> {
    fn cycle_count(&self) -> u64 {
        (**self).cycle_count()
    }
    fn frame_count(&self) -> u64 {
        (**self).frame_count()
    }
}

/// Cycle counter written by the emulation thread, paired with the
/// renderer's frame counter.
#[derive(Debug, Default)]
pub struct SharedCounters {
    cycles: AtomicU64,
    frames: Arc<AtomicU64>,
}

impl SharedCounters {
    pub fn new(frames: Arc<AtomicU64>) -> Self {
        Self {
            cycles: AtomicU64::new(0),
            frames,
        }
    }

    pub fn add_cycles(&self, cycles: u64) {
        self.cycles.fetch_add(cycles, Ordering::Relaxed);
    }

    /// Power cycle: the counter starts over from zero.
    pub fn reset_cycles(&self) {
        self.cycles.store(0, Ordering::Relaxed);
    }
}

impl CounterSource for SharedCounters {
    fn cycle_count(&self) -> u64 {
        self.cycles.load(Ordering::Relaxed)
    }
    fn frame_count(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }
}

/// Eye offset written by the UI thread and read by the render thread.
#[derive(Debug, Default)]
pub struct SharedEyeOffsets {
    x: AtomicF32,
    y: AtomicF32,
    z: AtomicF32,
}

impl SharedEyeOffsets {
    pub fn new(eye: Vec3) -> Self {
        Self {
            x: AtomicF32::new(eye.x),
            y: AtomicF32::new(eye.y),
            z: AtomicF32::new(eye.z),
        }
    }

    pub fn set(&self, eye: Vec3) {
        self.x.store(eye.x, Ordering::Relaxed);
        self.y.store(eye.y, Ordering::Relaxed);
        self.z.store(eye.z, Ordering::Relaxed);
    }
}

impl EyeOffsetSource for SharedEyeOffsets {
    fn eye_x(&self) -> f32 {
        self.x.load(Ordering::Relaxed)
    }
    fn eye_y(&self) -> f32 {
        self.y.load(Ordering::Relaxed)
    }
    fn eye_z(&self) -> f32 {
        self.z.load(Ordering::Relaxed)
    }
}
