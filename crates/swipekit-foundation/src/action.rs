//! Per-side action descriptions.

use std::fmt;
use std::rc::Rc;

use swipekit_graphics::{ActionFont, Color};

/// Which side of the row an action lives on, and which way a swipe points.
///
/// Dragging right (positive offset) reveals the leading side; dragging left
/// reveals the trailing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeEdge {
    Leading,
    Trailing,
}

impl SwipeEdge {
    /// The edge an offset reveals, or `None` for a zero offset.
    pub fn from_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(SwipeEdge::Leading)
        } else if offset < 0.0 {
            Some(SwipeEdge::Trailing)
        } else {
            None
        }
    }
}

/// One side's action: presentation hints plus the callback to run on release.
///
/// Cloning shares the callback.
#[derive(Clone)]
pub struct ActionBinding {
    pub color: Color,
    pub foreground_color: Color,
    /// Opaque symbol name, resolved by the renderer.
    pub icon: String,
    pub font: ActionFont,
    action: Rc<dyn Fn()>,
}

impl ActionBinding {
    pub fn new(icon: impl Into<String>, action: impl Fn() + 'static) -> Self {
        Self {
            color: Color::default(),
            foreground_color: Color::WHITE,
            icon: icon.into(),
            font: ActionFont::default(),
            action: Rc::new(action),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = color;
        self
    }

    pub fn with_font(mut self, font: ActionFont) -> Self {
        self.font = font;
        self
    }

    pub(crate) fn action_handle(&self) -> Rc<dyn Fn()> {
        Rc::clone(&self.action)
    }
}

impl fmt::Debug for ActionBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionBinding")
            .field("color", &self.color)
            .field("foreground_color", &self.foreground_color)
            .field("icon", &self.icon)
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}
