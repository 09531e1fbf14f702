//! Core runtime for SwipeKit.
//!
//! Everything here runs on one logical thread. The host owns a [`Runtime`],
//! advances its clock and drains frames; attachments hold a [`RuntimeHandle`]
//! and register deferred work through it.

mod frame_clock;
mod owned;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use owned::{Owned, WeakOwned};
pub use platform::{Clock, DefaultScheduler, RuntimeScheduler, StdClock};
pub use runtime::{Runtime, RuntimeHandle, TimerRegistration};

pub type FrameCallbackId = u64;
pub type TimerId = u64;

pub const NANOS_PER_MILLI: u64 = 1_000_000;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
