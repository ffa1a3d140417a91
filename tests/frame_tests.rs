// Host-side tests for the per-frame driver.

use amiga_frontend::frontend_core::*;
use amiga_frontend::{FrameDriver, FrameUniforms, SharedEyeOffsets};
use glam::{Mat4, Vec3};
use std::sync::Arc;

fn make_driver() -> FrameDriver<Vec3> {
    FrameDriver::new(AnimationController::new(
        ControllerParams::default(),
        Vec3::ZERO,
        Viewport::default(),
    ))
}

#[test]
fn draw_counts_frames() {
    let mut d = make_driver();
    let counter = d.frame_counter();
    for _ in 0..5 {
        d.draw();
    }
    assert_eq!(d.frames(), 5);
    assert_eq!(counter.load(std::sync::atomic::Ordering::Relaxed), 5);
}

#[test]
fn idle_frames_are_identical() {
    let mut d = make_driver();
    let a = d.draw();
    let b = d.draw();
    assert_eq!(a, b);
    assert_eq!(a.alpha, 1.0);
    assert_eq!(a.texture_rect, TextureLayout::default().visible.to_array());
}

#[test]
fn draw_steps_running_transitions() {
    let mut d = make_driver();
    d.controller_mut().zoom_in(ZOOM_IN_STEPS);
    let first = d.draw();
    assert!(first.alpha > 0.0 && first.alpha < 0.1);
    for _ in 0..ZOOM_IN_STEPS {
        d.draw();
    }
    assert!(!d.controller().is_animating());
    let last = d.draw();
    assert_eq!(last.alpha, 1.0);
    assert_eq!(last.noise, 0.0);
}

#[test]
fn flat_mode_uses_identity_matrix() {
    let mut d = make_driver();
    d.set_flat(true);
    assert_eq!(d.draw().mvp, Mat4::IDENTITY.to_cols_array_2d());
    d.set_flat(false);
    assert_eq!(d.draw().mvp, d.controller().mvp().to_cols_array_2d());
}

#[test]
fn uniforms_have_gpu_friendly_layout() {
    assert_eq!(std::mem::size_of::<FrameUniforms>(), 96);
    let u = make_driver().draw();
    assert_eq!(bytemuck::bytes_of(&u).len(), 96);
}

#[test]
fn eye_offset_change_applies_after_rebuild() {
    let eye = Arc::new(SharedEyeOffsets::new(Vec3::ZERO));
    let mut d = FrameDriver::new(AnimationController::new(
        ControllerParams::default(),
        Arc::clone(&eye),
        Viewport::default(),
    ));
    let before = d.draw().mvp;
    eye.set(Vec3::new(0.0, 0.3, 0.0));
    assert_eq!(d.draw().mvp, before);
    d.controller_mut().rebuild_matrices();
    assert_ne!(d.draw().mvp, before);
}

#[test]
fn resize_rebuilds_projection() {
    let mut d = make_driver();
    let before = d.draw().mvp;
    d.resize(Viewport::new(1600, 500));
    assert_ne!(d.draw().mvp, before);
}
