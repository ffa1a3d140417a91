//! Front-end glue around the timing and transition core.
//!
//! The status timer ([`StatusSession`]) and the render loop ([`FrameDriver`])
//! run on separate threads and share nothing except the counters and eye
//! offsets in [`sources`].

pub mod constants;
pub mod error;
pub mod frame;
pub mod session;
pub mod sources;

pub use error::SessionError;
pub use frame::{FrameDriver, FrameUniforms};
pub use frontend_core;
pub use session::{spawn_timer, SessionParams, StatusLine, StatusSession, TimerHandle};
pub use sources::{CounterSource, SharedCounters, SharedEyeOffsets};
