//! Canvas transitions driven once per rendered frame.
//!
//! Every animated parameter is an [`AnimatedScalar`]. Triggers assign new
//! targets and step counts and mark the affected [`AnimationGroup`]s active;
//! [`AnimationController::perform_animation_step`] advances the active groups,
//! retires those that have arrived, and rebuilds the matrices and the texture
//! cutout that depend on them.

use crate::constants::{QUARTER_TURN, ROTATE_STEPS, SCROLL_START_Y, SNAP_START_Z, ZOOMED_OUT_Z};
use crate::eye::EyeOffsetSource;
use crate::group::{ActiveGroups, AnimationGroup};
use crate::rect::{NormalizedRect, TextureLayout, Viewport};
use crate::scalar::AnimatedScalar;
use crate::transform::{background_mvp, flat_mvp, wrap_degrees, CameraRig, Projection};
use glam::{Mat4, Vec3};

#[derive(Clone, Debug, Default)]
pub struct ControllerParams {
    pub projection: Projection,
    pub texture: TextureLayout,
}

pub struct AnimationController<E: EyeOffsetSource> {
    params: ControllerParams,
    eye: E,
    viewport: Viewport,
    active: ActiveGroups,

    angle_x: AnimatedScalar,
    angle_y: AnimatedScalar,
    angle_z: AnimatedScalar,
    shift_x: AnimatedScalar,
    shift_y: AnimatedScalar,
    shift_z: AnimatedScalar,

    alpha: AnimatedScalar,
    noise: AnimatedScalar,

    cutout_x1: AnimatedScalar,
    cutout_y1: AnimatedScalar,
    cutout_x2: AnimatedScalar,
    cutout_y2: AnimatedScalar,

    monitor_alpha: AnimatedScalar,

    texture_rect: NormalizedRect,
    mvp_3d: Mat4,
    mvp_2d: Mat4,
    mvp_bg: Mat4,
}

impl<E: EyeOffsetSource> AnimationController<E> {
    pub fn new(params: ControllerParams, eye: E, viewport: Viewport) -> Self {
        let visible = params.texture.visible;
        let mut controller = Self {
            params,
            eye,
            viewport,
            active: ActiveGroups::default(),
            angle_x: AnimatedScalar::new(0.0),
            angle_y: AnimatedScalar::new(0.0),
            angle_z: AnimatedScalar::new(0.0),
            shift_x: AnimatedScalar::new(0.0),
            shift_y: AnimatedScalar::new(0.0),
            shift_z: AnimatedScalar::new(0.0),
            alpha: AnimatedScalar::new(1.0),
            noise: AnimatedScalar::new(0.0),
            cutout_x1: AnimatedScalar::new(visible.min_x()),
            cutout_y1: AnimatedScalar::new(visible.min_y()),
            cutout_x2: AnimatedScalar::new(visible.max_x()),
            cutout_y2: AnimatedScalar::new(visible.max_y()),
            monitor_alpha: AnimatedScalar::new(0.0),
            texture_rect: visible,
            mvp_3d: Mat4::IDENTITY,
            mvp_2d: flat_mvp(),
            mvp_bg: Mat4::IDENTITY,
        };
        controller.rebuild_matrices();
        controller
    }

    //
    // Accessors
    //

    pub fn active_groups(&self) -> ActiveGroups {
        self.active
    }

    /// True while any group is still in motion.
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn is_geometry_active(&self) -> bool {
        self.active.is_geometry_active()
    }

    pub fn is_alpha_active(&self) -> bool {
        self.active.is_alpha_active()
    }

    pub fn is_texture_active(&self) -> bool {
        self.active.is_texture_active()
    }

    pub fn is_monitors_active(&self) -> bool {
        self.active.is_monitors_active()
    }

    /// Model-view-projection matrix of the 3-D canvas.
    pub fn mvp(&self) -> Mat4 {
        self.mvp_3d
    }

    pub fn mvp_2d(&self) -> Mat4 {
        self.mvp_2d
    }

    pub fn mvp_background(&self) -> Mat4 {
        self.mvp_bg
    }

    /// Normalized part of the emulator texture currently sampled.
    pub fn texture_rect(&self) -> NormalizedRect {
        self.texture_rect
    }

    pub fn texture_layout(&self) -> TextureLayout {
        self.params.texture
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn eye_source(&self) -> &E {
        &self.eye
    }

    pub fn angle_x(&self) -> &AnimatedScalar {
        &self.angle_x
    }

    pub fn angle_y(&self) -> &AnimatedScalar {
        &self.angle_y
    }

    pub fn angle_z(&self) -> &AnimatedScalar {
        &self.angle_z
    }

    pub fn shift_x(&self) -> &AnimatedScalar {
        &self.shift_x
    }

    pub fn shift_y(&self) -> &AnimatedScalar {
        &self.shift_y
    }

    pub fn shift_z(&self) -> &AnimatedScalar {
        &self.shift_z
    }

    pub fn alpha(&self) -> &AnimatedScalar {
        &self.alpha
    }

    pub fn noise(&self) -> &AnimatedScalar {
        &self.noise
    }

    pub fn monitor_alpha(&self) -> &AnimatedScalar {
        &self.monitor_alpha
    }

    /// Cutout corners as `[x1, y1, x2, y2]`.
    pub fn cutout(&self) -> [&AnimatedScalar; 4] {
        [
            &self.cutout_x1,
            &self.cutout_y1,
            &self.cutout_x2,
            &self.cutout_y2,
        ]
    }

    //
    // Layout
    //

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.rebuild_matrices();
    }

    /// Rebuilds every matrix, e.g. after the eye offset preferences changed.
    pub fn rebuild_matrices(&mut self) {
        self.mvp_2d = flat_mvp();
        self.mvp_bg = background_mvp(&self.params.projection, self.viewport.aspect());
        self.build_matrices_3d();
    }

    pub fn set_texture_layout(&mut self, layout: TextureLayout) {
        self.params.texture = layout;
    }

    //
    // Stepping
    //

    /// Advances every active group by one frame. Does nothing when idle.
    pub fn perform_animation_step(&mut self) {
        if self.active.is_empty() {
            return;
        }
        log::trace!("[anim] step {:?}", self.active.iter().collect::<Vec<_>>());

        if self.active.is_geometry_active() {
            for s in self.geometry_scalars_mut() {
                s.advance();
            }
            if !self.geometry_scalars().iter().any(|s| s.is_animating()) {
                self.active.remove(AnimationGroup::Geometry);
                for angle in [&mut self.angle_x, &mut self.angle_y, &mut self.angle_z] {
                    angle.set(wrap_degrees(angle.current()));
                }
                log::debug!("[anim] geometry settled");
            }
            self.build_matrices_3d();
        }

        if self.active.is_alpha_active() {
            self.alpha.advance();
            self.noise.advance();
            if !self.alpha.is_animating() && !self.noise.is_animating() {
                self.active.remove(AnimationGroup::Alpha);
                log::debug!("[anim] alpha settled at {}", self.alpha.current());
            }
        }

        if self.active.is_texture_active() {
            for s in self.cutout_scalars_mut() {
                s.advance();
            }
            self.texture_rect = NormalizedRect::from_corners(
                self.cutout_x1.current(),
                self.cutout_y1.current(),
                self.cutout_x2.current(),
                self.cutout_y2.current(),
            );
            if !self.cutout().iter().any(|s| s.is_animating()) {
                self.active.remove(AnimationGroup::Texture);
                log::debug!("[anim] texture cutout settled at {:?}", self.texture_rect);
            }
        }

        if self.active.is_monitors_active() {
            self.monitor_alpha.advance();
            if !self.monitor_alpha.is_animating() {
                self.active.remove(AnimationGroup::Monitors);
            }
        }
    }

    //
    // Geometry animations
    //

    pub fn zoom_in(&mut self, steps: u32) {
        log::info!("Zooming in...");

        self.shift_z.set_current(ZOOMED_OUT_Z);
        self.shift_z.set_target(0.0);
        self.angle_x.set_target(0.0);
        self.angle_y.set_target(0.0);
        self.angle_z.set_target(0.0);
        self.alpha.set_current(0.0);
        self.alpha.set_target(1.0);
        self.noise.set_target(0.0);

        for s in [
            &mut self.shift_z,
            &mut self.angle_x,
            &mut self.angle_y,
            &mut self.angle_z,
            &mut self.alpha,
            &mut self.noise,
        ] {
            s.set_steps(steps);
        }

        self.active.insert(AnimationGroup::Geometry);
        self.active.insert(AnimationGroup::Alpha);
    }


    pub fn zoom_out(&mut self, steps: u32) {
        log::info!("Zooming out...");

        self.shift_z.set_target(ZOOMED_OUT_Z);
        self.angle_x.set_target(0.0);
        self.angle_y.set_target(0.0);
        self.angle_z.set_target(0.0);
        self.alpha.set_target(0.0);
        self.noise.set_target(1.0);

        for s in [
            &mut self.shift_z,
            &mut self.angle_x,
            &mut self.angle_y,
            &mut self.angle_z,
            &mut self.alpha,
            &mut self.noise,
        ] {
            s.set_steps(steps);
        }

        self.active.insert(AnimationGroup::Geometry);
        self.active.insert(AnimationGroup::Alpha);
    }


    /// Rotates the canvas to the given absolute angles (degrees).
    pub fn rotate(&mut self, x: f32, y: f32, z: f32, steps: u32) {
        log::info!("Rotating x: {x} y: {y} z: {z}...");

        self.angle_x.set_target(x);
        self.angle_y.set_target(y);
        self.angle_z.set_target(z);

        self.angle_x.set_steps(steps);
        self.angle_y.set_steps(steps);
        self.angle_z.set_steps(steps);

        self.active.insert(AnimationGroup::Geometry);
    }

    /// Rotates relative to where the canvas is heading.
    pub fn rotate_by(&mut self, dx: f32, dy: f32, dz: f32, steps: u32) {
        let x = self.angle_x.target() + dx;
        let y = self.angle_y.target() + dy;
        let z = self.angle_z.target() + dz;
        self.rotate(x, y, z, steps);
    }

    pub fn rotate_left(&mut self) {
        self.rotate_by(0.0, QUARTER_TURN, 0.0, ROTATE_STEPS);
    }

    pub fn rotate_right(&mut self) {
        self.rotate_by(0.0, -QUARTER_TURN, 0.0, ROTATE_STEPS);
    }

    pub fn rotate_down(&mut self) {
        self.rotate_by(QUARTER_TURN, 0.0, 0.0, ROTATE_STEPS);
    }

    pub fn rotate_up(&mut self) {
        self.rotate_by(-QUARTER_TURN, 0.0, 0.0, ROTATE_STEPS);
    }

    /// Slides the canvas up into view from below.
    pub fn scroll(&mut self, steps: u32) {
        log::info!("Scrolling...");

        self.shift_y.set_current(SCROLL_START_Y);
        self.shift_y.set_target(0.0);
        self.angle_x.set_target(0.0);
        self.angle_y.set_target(0.0);
        self.angle_z.set_target(0.0);

        self.shift_y.set_steps(steps);
        self.angle_x.set_steps(steps);
        self.angle_y.set_steps(steps);
        self.angle_z.set_steps(steps);

        self.alpha.set_target(1.0);
        self.alpha.set_steps(1);

        self.active.insert(AnimationGroup::Geometry);
        self.active.insert(AnimationGroup::Alpha);
    }


    pub fn snap_to_front(&mut self, steps: u32) {
        log::info!("Snapping to front...");

        self.shift_z.set_current(SNAP_START_Z);
        self.shift_z.set_target(0.0);
        self.shift_z.set_steps(steps);

        self.active.insert(AnimationGroup::Geometry);
    }


    //
    // Texture animations
    //

    pub fn zoom_texture_in(&mut self, steps: u32) {
        log::info!("Zooming texture in...");

        let target = self.params.texture.visible;
        self.set_cutout_targets(target, steps);
        self.active.insert(AnimationGroup::Texture);
    }

    pub fn zoom_texture_out(&mut self, steps: u32) {
        log::info!("Zooming texture out...");

        let current = self.texture_rect;
        self.cutout_x1.set_current(current.min_x());
        self.cutout_y1.set_current(current.min_y());
        self.cutout_x2.set_current(current.max_x());
        self.cutout_y2.set_current(current.max_y());

        let target = self.params.texture.entire;
        self.set_cutout_targets(target, steps);
        self.active.insert(AnimationGroup::Texture);
    }



    //
    // Color animations
    //

    /// Fades the canvas alpha from `from` to `to`. The background noise jumps
    /// straight to the complementary level.
    pub fn blend(&mut self, from: f32, to: f32, steps: u32) {
        log::info!("Blending {from} -> {to}...");

        self.alpha.set_range(from, to, steps);
        self.noise.set(1.0 - to.clamp(0.0, 1.0));

        self.active.insert(AnimationGroup::Alpha);
    }

    pub fn blend_in(&mut self, steps: u32) {
        self.blend(0.0, 1.0, steps);
    }

    pub fn blend_out(&mut self, steps: u32) {
        self.blend(1.0, 0.0, steps);
    }



    //
    // Activity monitors
    //

    pub fn show_monitors(&mut self, steps: u32) {
        self.monitor_alpha.set_target(1.0);
        self.monitor_alpha.set_steps(steps);
        self.active.insert(AnimationGroup::Monitors);
    }

    pub fn hide_monitors(&mut self, steps: u32) {
        self.monitor_alpha.set_target(0.0);
        self.monitor_alpha.set_steps(steps);
        self.active.insert(AnimationGroup::Monitors);
    }



    //
    // Helpers
    //

    fn set_cutout_targets(&mut self, target: NormalizedRect, steps: u32) {
        self.cutout_x1.set_target(target.min_x());
        self.cutout_y1.set_target(target.min_y());
        self.cutout_x2.set_target(target.max_x());
        self.cutout_y2.set_target(target.max_y());

        for s in self.cutout_scalars_mut() {
            s.set_steps(steps);
        }
    }

    fn camera_rig(&self) -> CameraRig {
        CameraRig {
            angles: Vec3::new(
                self.angle_x.current(),
                self.angle_y.current(),
                self.angle_z.current(),
            ),
            shift: Vec3::new(
                self.shift_x.current(),
                self.shift_y.current(),
                self.shift_z.current(),
            ),
            eye: self.eye.eye(),
            aspect: self.viewport.aspect(),
            projection: self.params.projection,
        }
    }

    fn build_matrices_3d(&mut self) {
        self.mvp_3d = self.camera_rig().mvp();
    }

    fn geometry_scalars(&self) -> [&AnimatedScalar; 6] {
        [
            &self.angle_x,
            &self.angle_y,
            &self.angle_z,
            &self.shift_x,
            &self.shift_y,
            &self.shift_z,
        ]
    }

    fn geometry_scalars_mut(&mut self) -> [&mut AnimatedScalar; 6] {
        [
            &mut self.angle_x,
            &mut self.angle_y,
            &mut self.angle_z,
            &mut self.shift_x,
            &mut self.shift_y,
            &mut self.shift_z,
        ]
    }

    fn cutout_scalars_mut(&mut self) -> [&mut AnimatedScalar; 4] {
        [
            &mut self.cutout_x1,
            &mut self.cutout_y1,
            &mut self.cutout_x2,
            &mut self.cutout_y2,
        ]
    }
}
