//! Periodic status-bar refresh.
//!
//! The timer callback and window teardown run on different threads, so every
//! piece of per-tick work happens while holding one lock. Once
//! [`StatusSession::shutdown`] has returned, no tick can observe or modify
//! the speedometer again.

use crate::constants::{GAUGE_PER_MHZ, SPEEDOMETER_DIVIDER};
use crate::error::SessionError;
use crate::sources::CounterSource;
use frontend_core::Speedometer;
use instant::Instant;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Text and gauge value for the clock-speed label.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusLine {
    pub mhz: f64,
    pub fps: f64,
    pub text: String,
    pub gauge: f64,
}

impl StatusLine {
    pub fn new(mhz: f64, fps: f64) -> Self {
        Self {
            mhz,
            fps,
            text: format!("{mhz:.2} MHz {fps:.0} fps"),
            gauge: GAUGE_PER_MHZ * mhz,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SessionParams {
    /// Update the speedometer on every n-th tick.
    pub speedometer_divider: u64,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            speedometer_divider: SPEEDOMETER_DIVIDER,
        }
    }
}

struct TimerState {
    speedometer: Speedometer,
    ticks: u64,
    running: bool,
}

pub struct StatusSession<C: CounterSource> {
    counters: C,
    params: SessionParams,
    state: Mutex<TimerState>,
    epoch: Instant,
}

impl<C: CounterSource> StatusSession<C> {
    pub fn new(counters: C, params: SessionParams) -> Self {
        let params = SessionParams {
            speedometer_divider: params.speedometer_divider.max(1),
        };
        Self {
            counters,
            params,
            state: Mutex::new(TimerState {
                speedometer: Speedometer::new(),
                ticks: 0,
                running: true,
            }),
            epoch: Instant::now(),
        }
    }

    pub fn counters(&self) -> &C {
        &self.counters
    }

    /// Runs one timer tick stamped with the time elapsed since creation.
    pub fn tick(&self) -> Result<Option<StatusLine>, SessionError> {
        self.tick_at(self.epoch.elapsed().as_secs_f64())
    }

    /// Runs one timer tick at `now` seconds. Returns a status line on the
    /// ticks that sample the speedometer.
    pub fn tick_at(&self, now: f64) -> Result<Option<StatusLine>, SessionError> {
        let mut state = self.lock()?;
        if !state.running {
            return Err(SessionError::Stopped);
        }

        state.ticks += 1;
        if state.ticks % self.params.speedometer_divider != 0 {
            return Ok(None);
        }

        let cycles = self.counters.cycle_count();
        let frames = self.counters.frame_count();
        state.speedometer.update(cycles, frames, now);
        let line = StatusLine::new(state.speedometer.mhz(), state.speedometer.fps());
        log::trace!("[status] {}", line.text);
        Ok(Some(line))
    }

    /// Stops the session. Safe to call more than once.
    pub fn shutdown(&self) -> Result<(), SessionError> {
        let mut state = self.lock()?;
        if state.running {
            state.running = false;
            log::info!("Status timer stopped after {} ticks", state.ticks);
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.lock().map(|s| s.running).unwrap_or(false)
    }

    pub fn ticks(&self) -> Result<u64, SessionError> {
        Ok(self.lock()?.ticks)
    }

    /// Copy of the speedometer as of the last completed tick.
    pub fn speedometer(&self) -> Result<Speedometer, SessionError> {
        Ok(self.lock()?.speedometer.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, TimerState>, SessionError> {
        self.state.lock().map_err(|_| SessionError::Poisoned)
    }
}

/// Background thread calling [`StatusSession::tick`] at a fixed interval.
pub struct TimerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl TimerHandle {
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().map_or(true, |t| t.is_finished())
    }

    /// Stops the thread and waits for it to exit.
    pub fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("[status] timer thread panicked");
            }
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.halt();
    }
}

/// Starts the periodic timer. Status lines are handed to `sink` on the
/// timer thread. The thread exits when the handle is stopped or dropped, or
/// when the session is shut down.
pub fn spawn_timer<C, F>(
    session: Arc<StatusSession<C>>,
    interval: Duration,
    mut sink: F,
) -> Result<TimerHandle, SessionError>
where
    C: CounterSource + Send + Sync + 'static,
    F: FnMut(StatusLine) + Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    let thread = thread::Builder::new()
        .name("status-timer".into())
        .spawn(move || {
            log::info!("GUI timer is up and running");
            while !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(interval);
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }
                match session.tick() {
                    Ok(Some(line)) => sink(line),
                    Ok(None) => {}
                    Err(SessionError::Stopped) => break,
                    Err(e) => {
                        log::warn!("[status] timer tick failed: {e}");
                        break;
                    }
                }
            }
        })?;

    Ok(TimerHandle {
        stop,
        thread: Some(thread),
    })
}
