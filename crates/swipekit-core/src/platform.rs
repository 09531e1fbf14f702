//! Host integration traits.
//!
//! The runtime never reads wall time or spins a loop itself. A host tells it
//! what time it is and gets woken through [`RuntimeScheduler`] whenever
//! deferred work is registered.

use web_time::Instant;

/// Wakes the host when the runtime has pending timers or frame callbacks.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler that ignores wake requests. Suitable for hosts that pump the
/// runtime every frame anyway, and for tests.
#[derive(Default, Debug, Clone, Copy)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Provides timing information for the runtime.
pub trait Clock {
    /// Instant type produced by this clock implementation.
    type Instant: Copy;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}

/// Monotonic clock backed by `web_time::Instant`.
#[derive(Default, Debug, Clone, Copy)]
pub struct StdClock;

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Instant) -> u64 {
        since.elapsed().as_millis() as u64
    }
}
