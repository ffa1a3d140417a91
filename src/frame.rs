use frontend_core::{AnimationController, EyeOffsetSource, Viewport};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Per-frame payload for the presentation layer's uniform buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub mvp: [[f32; 4]; 4],
    pub texture_rect: [f32; 4],
    pub alpha: f32,
    pub noise: f32,
    pub monitor_alpha: f32,
    pub _pad: f32,
}

/// Render-thread side of the front-end: counts frames and steps the
/// transitions before each frame is built.
pub struct FrameDriver<E: EyeOffsetSource> {
    controller: AnimationController<E>,
    frames: Arc<AtomicU64>,
    flat: bool,
}

impl<E: EyeOffsetSource> FrameDriver<E> {
    pub fn new(controller: AnimationController<E>) -> Self {
        Self {
            controller,
            frames: Arc::new(AtomicU64::new(0)),
            flat: false,
        }
    }

    /// Shared handle to the frame counter, sampled by the status timer.
    pub fn frame_counter(&self) -> Arc<AtomicU64> {
        Arc::clone(&self.frames)
    }

    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn controller(&self) -> &AnimationController<E> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut AnimationController<E> {
        &mut self.controller
    }

    /// Flat mode draws the canvas without perspective (stretched fullscreen).
    pub fn set_flat(&mut self, flat: bool) {
        self.flat = flat;
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.controller.resize(viewport);
    }

    /// Advances one frame and returns the uniforms to draw it with.
    pub fn draw(&mut self) -> FrameUniforms {
        self.frames.fetch_add(1, Ordering::Relaxed);

        if self.controller.is_animating() {
            self.controller.perform_animation_step();
        }

        let c = &self.controller;
        let mvp = if self.flat { c.mvp_2d() } else { c.mvp() };
        FrameUniforms {
            mvp: mvp.to_cols_array_2d(),
            texture_rect: c.texture_rect().to_array(),
            alpha: c.alpha().clamped(),
            noise: c.noise().clamped(),
            monitor_alpha: c.monitor_alpha().clamped(),
            _pad: 0.0,
        }
    }
}
