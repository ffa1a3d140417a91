use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use amiga_frontend::constants::{RENDER_HZ, TIMER_HZ};
use amiga_frontend::frontend_core::{
    AnimationController, ControllerParams, Viewport, BLEND_STEPS, MONITOR_FADE_STEPS,
    SCROLL_STEPS, SNAP_STEPS, TEXTURE_ZOOM_STEPS, ZOOM_IN_STEPS, ZOOM_OUT_STEPS,
};
use amiga_frontend::{
    spawn_timer, FrameDriver, SessionParams, SharedCounters, SharedEyeOffsets, StatusSession,
};
use glam::Vec3;
use instant::Instant;

// Simulated PAL machine
const PAL_CLOCK_HZ: f64 = 7_093_790.0;
const CORE_SLICE: Duration = Duration::from_millis(20);

const WINDOW_SIZE: (u32, u32) = (1024, 768);

/// Transition requests sent from the UI thread to the render thread.
#[derive(Clone, Copy, Debug)]
enum Transition {
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    RotateUp,
    RotateDown,
    Scroll,
    SnapToFront,
    ZoomTextureOut,
    ZoomTextureIn,
    BlendOut,
    BlendIn,
    ShowMonitors,
    HideMonitors,
    RebuildMatrices,
}

type Driver = FrameDriver<Arc<SharedEyeOffsets>>;

fn apply(driver: &mut Driver, transition: Transition) {
    let c = driver.controller_mut();
    match transition {
        Transition::ZoomIn => c.zoom_in(ZOOM_IN_STEPS),
        Transition::ZoomOut => c.zoom_out(ZOOM_OUT_STEPS),
        Transition::RotateLeft => c.rotate_left(),
        Transition::RotateRight => c.rotate_right(),
        Transition::RotateUp => c.rotate_up(),
        Transition::RotateDown => c.rotate_down(),
        Transition::Scroll => c.scroll(SCROLL_STEPS),
        Transition::SnapToFront => c.snap_to_front(SNAP_STEPS),
        Transition::ZoomTextureOut => c.zoom_texture_out(TEXTURE_ZOOM_STEPS),
        Transition::ZoomTextureIn => c.zoom_texture_in(TEXTURE_ZOOM_STEPS),
        Transition::BlendOut => c.blend_out(BLEND_STEPS),
        Transition::BlendIn => c.blend_in(BLEND_STEPS),
        Transition::ShowMonitors => c.show_monitors(MONITOR_FADE_STEPS),
        Transition::HideMonitors => c.hide_monitors(MONITOR_FADE_STEPS),
        Transition::RebuildMatrices => c.rebuild_matrices(),
    }
}

/// Emulation thread stand-in: advances the cycle counter in real time.
fn run_core(counters: Arc<SharedCounters>, running: Arc<AtomicBool>) {
    let mut last = Instant::now();
    while running.load(Ordering::Relaxed) {
        thread::sleep(CORE_SLICE);
        let now = Instant::now();
        let elapsed = (now - last).as_secs_f64();
        last = now;
        counters.add_cycles((elapsed * PAL_CLOCK_HZ) as u64);
    }
}

fn run_renderer(mut driver: Driver, requests: Receiver<Transition>, running: Arc<AtomicBool>) {
    let frame_time = Duration::from_secs_f64(1.0 / RENDER_HZ as f64);
    driver.resize(Viewport::new(WINDOW_SIZE.0, WINDOW_SIZE.1));
    while running.load(Ordering::Relaxed) {
        let start = Instant::now();
        for transition in requests.try_iter() {
            apply(&mut driver, transition);
        }
        let uniforms = driver.draw();
        if driver.frames() % RENDER_HZ as u64 == 0 {
            log::debug!(
                "[render] frame={} alpha={:.2} noise={:.2} rect={:?}",
                driver.frames(),
                uniforms.alpha,
                uniforms.noise,
                uniforms.texture_rect
            );
        }
        let spent = start.elapsed();
        if spent < frame_time {
            thread::sleep(frame_time - spent);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let eye = Arc::new(SharedEyeOffsets::new(Vec3::ZERO));
    let controller = AnimationController::new(
        ControllerParams::default(),
        Arc::clone(&eye),
        Viewport::new(WINDOW_SIZE.0, WINDOW_SIZE.1),
    );
    let driver = FrameDriver::new(controller);
    let counters = Arc::new(SharedCounters::new(driver.frame_counter()));
    let session = Arc::new(StatusSession::new(
        Arc::clone(&counters),
        SessionParams::default(),
    ));

    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::channel();

    let core = {
        let counters = Arc::clone(&counters);
        let running = Arc::clone(&running);
        thread::Builder::new()
            .name("core".into())
            .spawn(move || run_core(counters, running))?
    };
    let renderer = {
        let running = Arc::clone(&running);
        thread::Builder::new()
            .name("renderer".into())
            .spawn(move || run_renderer(driver, rx, running))?
    };
    let timer = spawn_timer(
        Arc::clone(&session),
        Duration::from_secs_f64(1.0 / TIMER_HZ as f64),
        |line| log::info!("{}  [{:.0}]", line.text, line.gauge),
    )?;

    let script: &[(Transition, u64)] = &[
        (Transition::ZoomIn, 1500),
        (Transition::RotateLeft, 1200),
        (Transition::RotateRight, 1200),
        (Transition::RotateDown, 1200),
        (Transition::RotateUp, 1200),
        (Transition::ShowMonitors, 600),
        (Transition::ZoomTextureOut, 800),
        (Transition::ZoomTextureIn, 800),
        (Transition::HideMonitors, 600),
        (Transition::BlendOut, 900),
        (Transition::BlendIn, 900),
        (Transition::SnapToFront, 500),
        (Transition::Scroll, 2200),
        (Transition::ZoomOut, 1000),
    ];
    for (i, (transition, wait_ms)) in script.iter().enumerate() {
        tx.send(*transition)?;
        thread::sleep(Duration::from_millis(*wait_ms));
        if i == script.len() / 2 {
            log::info!("Power cycling the core");
            counters.reset_cycles();
            eye.set(Vec3::new(0.0, 0.1, 0.2));
            tx.send(Transition::RebuildMatrices)?;
        }
    }

    // Window teardown: stop the timer first, then the threads feeding it.
    session.shutdown()?;
    timer.stop();
    running.store(false, Ordering::Relaxed);
    if renderer.join().is_err() {
        anyhow::bail!("renderer thread panicked");
    }
    if core.join().is_err() {
        anyhow::bail!("core thread panicked");
    }
    Ok(())
}
