// Host-side tests for the status timer session and the shared sources.

use amiga_frontend::frontend_core::EyeOffsetSource;
use amiga_frontend::*;
use glam::Vec3;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

#[derive(Default)]
struct FakeCounters {
    cycles: AtomicU64,
    frames: AtomicU64,
}

impl FakeCounters {
    fn set(&self, cycles: u64, frames: u64) {
        self.cycles.store(cycles, Ordering::Relaxed);
        self.frames.store(frames, Ordering::Relaxed);
    }
}

impl CounterSource for FakeCounters {
    fn cycle_count(&self) -> u64 {
        self.cycles.load(Ordering::Relaxed)
    }
    fn frame_count(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }
}

fn every_tick() -> SessionParams {
    SessionParams {
        speedometer_divider: 1,
    }
}

#[test]
fn status_line_format() {
    let line = StatusLine::new(7.09, 50.0);
    assert_eq!(line.text, "7.09 MHz 50 fps");
    assert!((line.gauge - 70.9).abs() < 1e-9);
    assert_eq!(StatusLine::new(0.5, 30.0).text, "0.50 MHz 30 fps");
}

#[test]
fn speedometer_sampled_on_every_fourth_tick() {
    let session = StatusSession::new(FakeCounters::default(), SessionParams::default());
    for t in 1..=3 {
        assert_eq!(session.tick_at(t as f64).unwrap(), None);
    }
    assert!(session.tick_at(4.0).unwrap().is_some());
    assert_eq!(session.ticks().unwrap(), 4);
    assert_eq!(session.tick_at(5.0).unwrap(), None);
}

#[test]
fn session_reports_smoothed_rates() {
    let session = StatusSession::new(FakeCounters::default(), every_tick());
    session.counters().set(1_000_000, 60);
    let first = session.tick_at(10.0).unwrap().unwrap();
    assert_eq!(first.text, "0.00 MHz 0 fps");

    session.counters().set(2_000_000, 120);
    let second = session.tick_at(11.0).unwrap().unwrap();
    assert_eq!(second.text, "0.50 MHz 30 fps");
    assert!((second.gauge - 5.0).abs() < 1e-9);
}

#[test]
fn shutdown_blocks_further_ticks() {
    let session = StatusSession::new(FakeCounters::default(), every_tick());
    session.counters().set(0, 0);
    session.tick_at(0.0).unwrap();
    session.counters().set(3_000_000, 50);
    session.tick_at(1.0).unwrap();
    let before = session.speedometer().unwrap().raw_mhz();

    session.shutdown().unwrap();
    assert!(!session.is_running());
    session.counters().set(9_000_000, 100);
    assert!(matches!(session.tick_at(2.0), Err(SessionError::Stopped)));
    assert_eq!(session.speedometer().unwrap().raw_mhz(), before);

    // Teardown may run twice (close + drop).
    session.shutdown().unwrap();
}

#[test]
fn zero_divider_is_treated_as_one() {
    let session = StatusSession::new(
        FakeCounters::default(),
        SessionParams {
            speedometer_divider: 0,
        },
    );
    assert!(session.tick_at(0.0).unwrap().is_some());
}

#[test]
fn timer_thread_delivers_lines_and_stops_on_shutdown() {
    let session = Arc::new(StatusSession::new(FakeCounters::default(), every_tick()));
    let (tx, rx) = mpsc::channel();
    let handle = spawn_timer(Arc::clone(&session), Duration::from_millis(5), move |line| {
        _ = tx.send(line);
    })
    .unwrap();

    let line = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert!(line.text.ends_with("fps"));

    session.shutdown().unwrap();
    let deadline = Instant::now() + Duration::from_secs(5);
    while !handle.is_finished() {
        assert!(Instant::now() < deadline, "timer thread did not exit");
        std::thread::sleep(Duration::from_millis(5));
    }
    handle.stop();
}

#[test]
fn dropping_the_handle_stops_the_timer() {
    let session = Arc::new(StatusSession::new(FakeCounters::default(), every_tick()));
    let handle = spawn_timer(Arc::clone(&session), Duration::from_millis(1), |_| {}).unwrap();
    std::thread::sleep(Duration::from_millis(20));
    drop(handle);
    let ticks = session.ticks().unwrap();
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(session.ticks().unwrap(), ticks);
    assert!(session.is_running());
}

#[test]
fn shared_counters_follow_core_and_renderer() {
    let frames = Arc::new(AtomicU64::new(0));
    let counters = SharedCounters::new(Arc::clone(&frames));
    counters.add_cycles(1_000);
    counters.add_cycles(500);
    frames.store(42, Ordering::Relaxed);
    assert_eq!(counters.cycle_count(), 1_500);
    assert_eq!(counters.frame_count(), 42);

    counters.reset_cycles();
    assert_eq!(counters.cycle_count(), 0);

    let shared: Arc<SharedCounters> = Arc::new(counters);
    assert_eq!(shared.frame_count(), 42);
}

#[test]
fn shared_eye_offsets_round_trip() {
    let eye = Arc::new(SharedEyeOffsets::new(Vec3::new(0.1, 0.2, 0.3)));
    assert_eq!(eye.eye(), Vec3::new(0.1, 0.2, 0.3));
    eye.set(Vec3::new(-1.0, 0.0, 2.0));
    assert_eq!(eye.eye_x(), -1.0);
    assert_eq!(eye.eye_z(), 2.0);
}
