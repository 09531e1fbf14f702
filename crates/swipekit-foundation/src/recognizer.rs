//! Pure helpers that turn a cumulative drag sample into a row offset.

use crate::action::SwipeEdge;

/// Cumulative translation since the gesture started.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragSample {
    pub horizontal: f32,
    pub vertical: f32,
}

impl DragSample {
    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Horizontal-dominance gate, evaluated on every sample.
    ///
    /// A sample passes once horizontal travel exceeds both vertical travel and
    /// `min_drag_distance`. Anything else belongs to a scroll or a tap.
    pub fn is_horizontal_swipe(&self, min_drag_distance: f32) -> bool {
        let horizontal = self.horizontal.abs();
        horizontal > self.vertical.abs() && horizontal > min_drag_distance
    }
}

/// Offset for a horizontal translation, given which sides are bound and any
/// direction lock. Drags toward an unbound or locked-out side give `0`.
pub fn resolve_offset(
    horizontal: f32,
    has_leading: bool,
    has_trailing: bool,
    locked: Option<SwipeEdge>,
) -> f32 {
    if horizontal > 0.0 && has_leading {
        if locked == Some(SwipeEdge::Trailing) {
            0.0
        } else {
            horizontal
        }
    } else if horizontal < 0.0 && has_trailing {
        if locked == Some(SwipeEdge::Leading) {
            0.0
        } else {
            horizontal
        }
    } else {
        0.0
    }
}
