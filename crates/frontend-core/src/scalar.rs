//! Linear interpolation of a single float over a fixed number of frames.

/// A float that walks from `current` to `target` in `steps` equal increments.
///
/// The increment is derived whenever the target or the step count is
/// assigned, using the values in effect at that moment. Assigning the target
/// before the step count therefore uses the old step count, and writing
/// `current` through [`AnimatedScalar::set_current`] does not touch the
/// increment at all. Callers always go through the setters.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedScalar {
    current: f32,
    target: f32,
    steps: u32,
    increment: f32,
}

impl Default for AnimatedScalar {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl AnimatedScalar {
    /// Creates a scalar resting at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            steps: 1,
            increment: 0.0,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn increment(&self) -> f32 {
        self.increment
    }

    /// Current value clamped to the \[0, 1\] range (alpha and noise uniforms).
    pub fn clamped(&self) -> f32 {
        self.current.clamp(0.0, 1.0)
    }

    /// Jumps to `value` and stops any motion.
    pub fn set(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.increment = 0.0;
    }

    /// Overwrites the current value only. The increment keeps whatever was
    /// derived by the last target or step-count assignment.
    pub fn set_current(&mut self, value: f32) {
        self.current = value;
    }

    pub fn set_target(&mut self, value: f32) {
        self.target = value;
        self.recompute();
    }

    /// Panics if `steps` is zero.
    pub fn set_steps(&mut self, steps: u32) {
        assert!(steps >= 1, "animation step count must be at least 1");
        self.steps = steps;
        self.recompute();
    }

    /// Assigns current, target and step count in that order.
    pub fn set_range(&mut self, from: f32, to: f32, steps: u32) {
        self.set_current(from);
        self.set_target(to);
        self.set_steps(steps);
    }

    pub fn is_animating(&self) -> bool {
        self.current != self.target
    }

    /// Moves one step towards the target, snapping onto it once the remaining
    /// distance is shorter than a step.
    pub fn advance(&mut self) {
        if (self.current - self.target).abs() < self.increment.abs() {
            self.current = self.target;
        } else {
            self.current += self.increment;
        }
    }

    fn recompute(&mut self) {
        self.increment = (self.target - self.current) / self.steps as f32;
    }
}
