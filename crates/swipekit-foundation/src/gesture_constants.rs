//! Default thresholds and timings for swipe actions.
//!
//! Distances are in logical pixels, durations in milliseconds.

/// Horizontal travel required before a drag counts as a swipe (touch slop).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Offset beyond which releasing fires the action.
pub const DEFAULT_TRIGGER_DISTANCE: f32 = 70.0;

/// Width of the frame the action icon is centered in.
pub const DEFAULT_ICON_FRAME_WIDTH: f32 = 60.0;

/// The icon fades in over this much travel, or over the trigger distance if
/// that is shorter.
pub const PEEK_DISTANCE: f32 = 50.0;

/// Icon scale while the trigger bounce is showing.
pub const BOUNCE_SCALE: f32 = 1.1;

pub const BOUNCE_DURATION_MILLIS: u64 = 150;

pub const SETTLE_DURATION_MILLIS: u64 = 300;
