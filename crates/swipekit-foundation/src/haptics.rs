/// Haptic sink for the trigger crossing. Fire-and-forget; must not block.
pub trait HapticFeedback {
    fn selection_changed(&self);
}

/// Haptics for hosts without a feedback engine.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn selection_changed(&self) {}
}

impl<F: Fn()> HapticFeedback for F {
    fn selection_changed(&self) {
        self()
    }
}
