//! Offset-to-geometry mapping for renderers.
//!
//! Everything here is a pure function of the offset, the two latched flags and
//! the configuration. Renderers re-run it whenever the offset changes.

use swipekit_graphics::{ActionFont, Color, FontWeight, Rect, Size};

use crate::action::ActionBinding;
use crate::config::SwipeConfig;
use crate::gesture_constants::{BOUNCE_SCALE, PEEK_DISTANCE};

/// Geometry and styling derived from one offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipePresentation {
    pub offset: f32,
    pub leading_region_width: f32,
    pub trailing_region_width: f32,
    /// Icon opacity in `[0, 1]`.
    pub peek_scale: f32,
    /// Horizontal shift of the leading icon frame; never positive.
    pub leading_icon_offset: f32,
    /// Horizontal shift of the trailing icon frame; never negative.
    pub trailing_icon_offset: f32,
    pub icon_weight: FontWeight,
    pub icon_scale: f32,
    pub icon_frame_width: f32,
    pub action_spacing: f32,
    pub action_corner_radius: f32,
}

/// Icon opacity ramp over the first `min(PEEK_DISTANCE, trigger_distance)`.
pub fn peek_scale(offset: f32, trigger_distance: f32) -> f32 {
    let ramp = PEEK_DISTANCE.min(trigger_distance);
    if ramp <= 0.0 {
        return if offset == 0.0 { 0.0 } else { 1.0 };
    }
    (offset.abs() / ramp).clamp(0.0, 1.0)
}

pub fn map_presentation(
    offset: f32,
    is_triggered: bool,
    is_bouncing: bool,
    config: &SwipeConfig,
) -> SwipePresentation {
    let frame = config.icon_frame_width;
    SwipePresentation {
        offset,
        leading_region_width: offset.max(0.0),
        trailing_region_width: (-offset).max(0.0),
        peek_scale: peek_scale(offset, config.trigger_distance),
        leading_icon_offset: (offset - frame).min(0.0),
        trailing_icon_offset: (offset + frame).max(0.0),
        icon_weight: if is_triggered {
            FontWeight::BOLD
        } else {
            FontWeight::NORMAL
        },
        icon_scale: if is_bouncing { BOUNCE_SCALE } else { 1.0 },
        icon_frame_width: frame,
        action_spacing: config.action_spacing,
        action_corner_radius: config.action_corner_radius,
    }
}

impl SwipePresentation {
    /// Leading background, anchored to the row's left edge.
    pub fn leading_region(&self, row: Size) -> Rect {
        Rect::new(0.0, 0.0, self.leading_region_width, row.height)
    }

    /// Trailing background, anchored to the row's right edge.
    pub fn trailing_region(&self, row: Size) -> Rect {
        let width = self.trailing_region_width;
        Rect::new(row.width - width, 0.0, width, row.height)
    }

    /// The host element, shifted by the offset.
    pub fn content_frame(&self, row: Size) -> Rect {
        Rect::new(self.offset, 0.0, row.width, row.height)
    }

    pub fn icon_color(&self, binding: &ActionBinding) -> Color {
        binding.foreground_color.fade(self.peek_scale)
    }

    pub fn icon_font(&self, binding: &ActionBinding) -> ActionFont {
        binding.font.with_weight(self.icon_weight)
    }
}
