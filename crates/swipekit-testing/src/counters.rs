use std::cell::Cell;
use std::rc::Rc;

use swipekit_foundation::{ActionBinding, HapticFeedback};

/// Haptic sink that counts `selection_changed` calls.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    selections: Cell<usize>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection_count(&self) -> usize {
        self.selections.get()
    }
}

impl HapticFeedback for RecordingHaptics {
    fn selection_changed(&self) {
        self.selections.set(self.selections.get() + 1);
    }
}

/// Counts how many times the action it hands out was invoked.
#[derive(Clone, Debug, Default)]
pub struct ActionCounter {
    hits: Rc<Cell<usize>>,
}

impl ActionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.hits.get()
    }

    /// A binding whose action increments this counter.
    pub fn binding(&self, icon: &str) -> ActionBinding {
        let hits = Rc::clone(&self.hits);
        ActionBinding::new(icon, move || hits.set(hits.get() + 1))
    }
}
