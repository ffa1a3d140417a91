//! Smoothed emulation-speed and frame-rate estimation.
//!
//! The status bar samples two monotonic counters from the emulation core at
//! irregular wall-clock intervals. Each sample is turned into an
//! instantaneous rate and folded into an exponential moving average, so a
//! single late timer tick does not make the readout jump.

use crate::constants::{FPS_DIGITS, MHZ_DIGITS, SMOOTHING_ALPHA};

/// Rounds `value` to `digits` decimal places, halves away from zero.
pub fn truncate(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    timestamp: f64,
    cycle: u64,
    frame: u64,
}

#[derive(Clone, Debug)]
pub struct Speedometer {
    mhz: f64,
    fps: f64,
    alpha: f64,
    latched: Option<Sample>,
}

impl Default for Speedometer {
    fn default() -> Self {
        Self::new()
    }
}

impl Speedometer {
    pub fn new() -> Self {
        Self {
            mhz: 0.0,
            fps: 0.0,
            alpha: SMOOTHING_ALPHA,
            latched: None,
        }
    }

    /// Emulated clock frequency in MHz, rounded to two digits.
    pub fn mhz(&self) -> f64 {
        truncate(self.mhz, MHZ_DIGITS)
    }

    /// Frames per second, rounded to an integer value.
    pub fn fps(&self) -> f64 {
        truncate(self.fps, FPS_DIGITS)
    }

    /// Unrounded smoothed clock frequency in MHz.
    pub fn raw_mhz(&self) -> f64 {
        self.mhz
    }

    /// Unrounded smoothed frame rate.
    pub fn raw_fps(&self) -> f64 {
        self.fps
    }

    /// Folds a new counter sample taken at `now` (seconds) into the averages.
    ///
    /// The first sample and any sample whose counters went backwards (the
    /// emulator was reset) only become the new baseline. The baseline is
    /// replaced on every call.
    pub fn update(&mut self, cycle: u64, frame: u64, now: f64) {
        if let Some(prev) = self.latched {
            if cycle < prev.cycle || frame < prev.frame {
                log::debug!(
                    "[speedometer] counters went backwards (cycle {} -> {}, frame {} -> {}), rebasing",
                    prev.cycle,
                    cycle,
                    prev.frame,
                    frame
                );
            } else {
                let elapsed = now - prev.timestamp;
                if elapsed > 0.0 {
                    let mhz = (cycle - prev.cycle) as f64 / 1_000_000.0 / elapsed;
                    let fps = (frame - prev.frame) as f64 / elapsed;
                    self.mhz = self.alpha * mhz + (1.0 - self.alpha) * self.mhz;
                    self.fps = self.alpha * fps + (1.0 - self.alpha) * self.fps;
                } else {
                    log::trace!("[speedometer] non-positive interval {elapsed}, sample skipped");
                }
            }
        }

        self.latched = Some(Sample {
            timestamp: now,
            cycle,
            frame,
        });
    }

    /// Forgets the baseline and the averages.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
