use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;

/// Entry point for per-frame work. Animations request one callback per frame
/// and re-register from inside it while they are still running.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Run `callback` once, with the frame time in nanoseconds, on the next
    /// [`Runtime::drain_frame_callbacks`](crate::Runtime::drain_frame_callbacks).
    ///
    /// Returns an inactive registration if the runtime is gone.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        FrameCallbackRegistration {
            id: self.runtime.register_frame_callback(callback),
            runtime: self.runtime.clone(),
        }
    }
}

/// Keeps a frame callback queued. Dropping it unqueues the callback.
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        self.unqueue();
    }

    fn unqueue(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.unqueue();
    }
}
