//! Robot-style harness for driving a swipe row in tests
//!
//! # Example
//!
//! ```
//! use swipekit_foundation::SwipeConfig;
//! use swipekit_testing::SwipeTestRule;
//!
//! let mut rule = SwipeTestRule::new(SwipeConfig::default()).with_leading();
//! rule.drag_to(90.0, 0.0);
//! rule.release();
//! assert_eq!(rule.leading_count(), 1);
//! rule.settle();
//! rule.assert_at_rest();
//! ```

use std::rc::Rc;
use std::sync::Arc;

use swipekit_core::{DefaultScheduler, Runtime, NANOS_PER_MILLI};
use swipekit_foundation::{
    DragSample, GestureState, PointerEvent, PointerEventKind, SwipeConfig, SwipeEdge,
    SwipeGestureStateMachine, SwipePointerInput,
};
use swipekit_graphics::Point;

use crate::counters::{ActionCounter, RecordingHaptics};

const FRAME_MILLIS: u64 = 16;
/// Upper bound for [`SwipeTestRule::settle`], in frames.
const MAX_SETTLE_FRAMES: usize = 600;

/// Owns a runtime, a state machine and counters for everything it calls out to.
pub struct SwipeTestRule {
    runtime: Runtime,
    config: SwipeConfig,
    haptics: Rc<RecordingHaptics>,
    leading: Option<ActionCounter>,
    trailing: Option<ActionCounter>,
    machine: SwipeGestureStateMachine,
    pointer: SwipePointerInput,
}

impl SwipeTestRule {
    /// A row with no actions bound. Use [`Self::with_leading`] and
    /// [`Self::with_trailing`] to bind counting actions.
    pub fn new(config: SwipeConfig) -> Self {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let haptics = Rc::new(RecordingHaptics::new());
        let machine = Self::build_machine(&runtime, config, None, None, &haptics);
        Self {
            runtime,
            config,
            haptics,
            leading: None,
            trailing: None,
            machine,
            pointer: SwipePointerInput::new(),
        }
    }

    pub fn with_leading(mut self) -> Self {
        self.leading = Some(ActionCounter::new());
        self.rebuild();
        self
    }

    pub fn with_trailing(mut self) -> Self {
        self.trailing = Some(ActionCounter::new());
        self.rebuild();
        self
    }

    fn build_machine(
        runtime: &Runtime,
        config: SwipeConfig,
        leading: Option<&ActionCounter>,
        trailing: Option<&ActionCounter>,
        haptics: &Rc<RecordingHaptics>,
    ) -> SwipeGestureStateMachine {
        SwipeGestureStateMachine::new(
            config,
            leading.map(|counter| counter.binding("leading")),
            trailing.map(|counter| counter.binding("trailing")),
            runtime.handle(),
            haptics.clone(),
        )
    }

    fn rebuild(&mut self) {
        self.machine = Self::build_machine(
            &self.runtime,
            self.config,
            self.leading.as_ref(),
            self.trailing.as_ref(),
            &self.haptics,
        );
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn machine(&self) -> &SwipeGestureStateMachine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut SwipeGestureStateMachine {
        &mut self.machine
    }

    pub fn state(&self) -> GestureState {
        self.machine.state()
    }

    pub fn haptic_count(&self) -> usize {
        self.haptics.selection_count()
    }

    pub fn leading_count(&self) -> usize {
        self.leading.as_ref().map(ActionCounter::count).unwrap_or(0)
    }

    pub fn trailing_count(&self) -> usize {
        self.trailing.as_ref().map(ActionCounter::count).unwrap_or(0)
    }

    /// Deliver one cumulative sample.
    pub fn drag_to(&mut self, horizontal: f32, vertical: f32) {
        self.machine.on_changed(DragSample::new(horizontal, vertical));
    }

    /// Deliver samples in order, without releasing.
    pub fn drag_path(&mut self, samples: &[(f32, f32)]) {
        for &(horizontal, vertical) in samples {
            self.drag_to(horizontal, vertical);
        }
    }

    pub fn release(&mut self) -> Option<SwipeEdge> {
        self.machine.on_ended()
    }

    /// Press, move in `steps` increments and lift a pointer, through the
    /// pointer adapter. Returns the edge whose action fired.
    pub fn pointer_drag(&mut self, from: Point, to: Point, steps: usize) -> Option<SwipeEdge> {
        self.pointer_event(PointerEventKind::Down, from);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let position = Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t);
            self.pointer_event(PointerEventKind::Move, position);
        }
        self.pointer_event(PointerEventKind::Up, to).1
    }

    /// Route a single raw pointer event. Returns the event (to inspect
    /// consumption) and the edge fired, if any.
    pub fn pointer_event(
        &mut self,
        kind: PointerEventKind,
        position: Point,
    ) -> (PointerEvent, Option<SwipeEdge>) {
        let event = PointerEvent::new(kind, position);
        let (_, fired) = self.pointer.on_pointer_event(&mut self.machine, &event);
        (event, fired)
    }

    /// Advance the runtime clock in frame-sized steps so timers and
    /// animations both make progress.
    pub fn advance_time_millis(&mut self, millis: u64) {
        let target = self.runtime.now_millis() + millis;
        while self.runtime.now_millis() < target {
            let next = (self.runtime.now_millis() + FRAME_MILLIS).min(target);
            self.runtime.advance_frame(next * NANOS_PER_MILLI);
        }
    }

    /// Pump frames until no timers or animations remain.
    pub fn settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.runtime.needs_frame() {
                return;
            }
            self.advance_time_millis(FRAME_MILLIS);
        }
        panic!("swipe row did not settle within {MAX_SETTLE_FRAMES} frames");
    }

    pub fn assert_at_rest(&self) {
        let state = self.machine.state();
        assert!(state.is_at_rest(), "expected rest, got {state:?}");
        assert_eq!(self.machine.visual_offset(), 0.0, "row still displaced");
    }
}
