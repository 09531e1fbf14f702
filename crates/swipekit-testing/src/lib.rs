//! Testing utilities and harness for SwipeKit

pub mod counters;
pub mod rule;

pub use counters::{ActionCounter, RecordingHaptics};
pub use rule::SwipeTestRule;

pub mod prelude {
    pub use crate::counters::{ActionCounter, RecordingHaptics};
    pub use crate::rule::SwipeTestRule;
}
