//! Raw pointer events and the adapter that turns them into drag samples.

use std::cell::Cell;
use std::rc::Rc;

use swipekit_graphics::Point;

use crate::action::SwipeEdge;
use crate::machine::SwipeGestureStateMachine;
use crate::recognizer::DragSample;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// Once a swipe is recognized the adapter consumes its moves, so an enclosing
/// scroll container can skip them. Vertical drags stay unconsumed and scroll
/// as usual.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

/// Tracks the pointer that started the gesture and feeds cumulative
/// translations into a [`SwipeGestureStateMachine`].
///
/// Single pointer only: events from other pointers are ignored while one is
/// down.
#[derive(Debug, Default)]
pub struct SwipePointerInput {
    active: Option<(PointerId, Point)>,
}

impl SwipePointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Route one event. Returns `true` if the event belonged to the tracked
    /// gesture. On release, the second value is the edge whose action fired.
    pub fn on_pointer_event(
        &mut self,
        machine: &mut SwipeGestureStateMachine,
        event: &PointerEvent,
    ) -> (bool, Option<SwipeEdge>) {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() {
                    return (false, None);
                }
                let stale = match self.active {
                    Some((id, _)) if id != event.id => return (false, None),
                    // Same pointer down again without an up: close the stale gesture.
                    Some(_) => machine.on_ended(),
                    None => None,
                };
                self.active = Some((event.id, event.position));
                (true, stale)
            }
            PointerEventKind::Move => {
                let Some((id, origin)) = self.active else {
                    return (false, None);
                };
                if id != event.id {
                    return (false, None);
                }
                let (horizontal, vertical) = event.position.offset_from(origin);
                machine.on_changed(DragSample::new(horizontal, vertical));
                if machine.is_dragging() {
                    event.consume();
                }
                (true, None)
            }
            PointerEventKind::Up | PointerEventKind::Cancel => match self.active {
                Some((id, _)) if id == event.id => {
                    self.active = None;
                    let fired = machine.on_ended();
                    if fired.is_some() {
                        event.consume();
                    }
                    (true, fired)
                }
                _ => (false, None),
            },
        }
    }
}
