//! Swipe-to-reveal actions for list rows.
//!
//! [`SwipeGestureStateMachine`] turns a stream of cumulative drag samples into
//! a clamped, direction-aware row offset, latches the trigger crossing for
//! one-shot haptic feedback, and decides on release whether the leading or
//! trailing action fires. [`map_presentation`] maps that state onto geometry
//! for whatever renders the row.

pub mod action;
pub mod config;
pub mod gesture_constants;
pub mod haptics;
pub mod machine;
pub mod pointer;
pub mod presentation;
pub mod recognizer;
pub mod state;

pub use action::{ActionBinding, SwipeEdge};
pub use config::{SwipeAnimations, SwipeConfig, SwipeConfigError};
pub use haptics::{HapticFeedback, NoopHaptics};
pub use machine::SwipeGestureStateMachine;
pub use pointer::{PointerEvent, PointerEventKind, PointerId, SwipePointerInput};
pub use presentation::{map_presentation, peek_scale, SwipePresentation};
pub use recognizer::{resolve_offset, DragSample};
pub use state::{GesturePhase, GestureState};

pub mod prelude {
    pub use crate::action::{ActionBinding, SwipeEdge};
    pub use crate::config::SwipeConfig;
    pub use crate::haptics::HapticFeedback;
    pub use crate::machine::SwipeGestureStateMachine;
    pub use crate::recognizer::DragSample;
    pub use crate::state::{GesturePhase, GestureState};
}

#[cfg(test)]
#[path = "tests/recognizer_tests.rs"]
mod recognizer_tests;

#[cfg(test)]
#[path = "tests/machine_tests.rs"]
mod machine_tests;

#[cfg(test)]
#[path = "tests/machine_property_tests.rs"]
mod machine_property_tests;

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod presentation_tests;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;
