//! Timing and transition core of the emulator front-end.
//!
//! Nothing in here touches a window, a GPU or a clock: callers feed counter
//! samples and timestamps into the [`Speedometer`] and call
//! [`AnimationController::perform_animation_step`] once per displayed frame.

pub mod constants;
pub mod controller;
pub mod eye;
pub mod group;
pub mod rect;
pub mod scalar;
pub mod speedometer;
pub mod transform;

pub use constants::*;
pub use controller::*;
pub use eye::*;
pub use group::*;
pub use rect::*;
pub use scalar::*;
pub use speedometer::*;
pub use transform::*;
