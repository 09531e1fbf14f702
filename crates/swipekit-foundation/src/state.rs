use crate::action::SwipeEdge;

/// Mutable interaction state of one attachment.
///
/// Lives as long as the attachment and returns to [`GestureState::REST`]
/// after every gesture. Only the state machine and the bounce reset it
/// schedules write to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Signed horizontal displacement of the row; positive reveals leading.
    pub offset: f32,
    pub locked_direction: Option<SwipeEdge>,
    pub is_triggered: bool,
    pub is_bouncing: bool,
    pub is_dragging: bool,
}

impl GestureState {
    pub const REST: GestureState = GestureState {
        offset: 0.0,
        locked_direction: None,
        is_triggered: false,
        is_bouncing: false,
        is_dragging: false,
    };

    /// Rest, ignoring the transient bounce flag.
    pub fn is_at_rest(&self) -> bool {
        !self.is_dragging
            && self.offset == 0.0
            && self.locked_direction.is_none()
            && !self.is_triggered
    }

    pub(crate) fn reset(&mut self) {
        self.offset = 0.0;
        self.locked_direction = None;
        self.is_triggered = false;
        self.is_dragging = false;
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::REST
    }
}

/// Coarse lifecycle of an attachment, derived from its state and animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Rest,
    Dragging { triggered: bool },
    /// Released; the row is still animating back to rest.
    Settling,
}
