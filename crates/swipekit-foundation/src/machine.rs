//! Swipe gesture state machine.
//!
//! `Rest -> Dragging { triggered } -> Settling -> Rest`. Drag samples come in
//! through [`SwipeGestureStateMachine::on_changed`]; a single
//! [`SwipeGestureStateMachine::on_ended`] closes the gesture, fires at most
//! one action and starts the settle animation.
//!
//! The logical offset is what the invariants talk about and changes
//! instantly. The visual offset and icon scale are [`Animatable`]s a renderer
//! samples each frame.

use std::rc::Rc;

use swipekit_animation::{Animatable, AnimationType};
use swipekit_core::{Owned, RuntimeHandle, TimerRegistration};

use crate::action::{ActionBinding, SwipeEdge};
use crate::config::SwipeConfig;
use crate::gesture_constants::BOUNCE_SCALE;
use crate::haptics::HapticFeedback;
use crate::presentation::{map_presentation, SwipePresentation};
use crate::recognizer::{resolve_offset, DragSample};
use crate::state::{GesturePhase, GestureState};

/// Owns one attachment's gesture state and everything it schedules.
///
/// Dropping the machine cancels the pending bounce reset and any running
/// animation; nothing scheduled by it outlives it.
pub struct SwipeGestureStateMachine {
    config: SwipeConfig,
    leading: Option<ActionBinding>,
    trailing: Option<ActionBinding>,
    haptics: Rc<dyn HapticFeedback>,
    runtime: RuntimeHandle,
    state: Owned<GestureState>,
    visual_offset: Animatable<f32>,
    icon_scale: Animatable<f32>,
    bounce_reset: Option<TimerRegistration>,
}

impl SwipeGestureStateMachine {
    pub fn new(
        config: SwipeConfig,
        leading: Option<ActionBinding>,
        trailing: Option<ActionBinding>,
        runtime: RuntimeHandle,
        haptics: Rc<dyn HapticFeedback>,
    ) -> Self {
        Self {
            config: config.sanitized(),
            leading,
            trailing,
            haptics,
            visual_offset: Animatable::new(0.0, runtime.clone()),
            icon_scale: Animatable::new(1.0, runtime.clone()),
            runtime,
            state: Owned::new(GestureState::REST),
            bounce_reset: None,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn binding(&self, edge: SwipeEdge) -> Option<&ActionBinding> {
        match edge {
            SwipeEdge::Leading => self.leading.as_ref(),
            SwipeEdge::Trailing => self.trailing.as_ref(),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state.get()
    }

    pub fn offset(&self) -> f32 {
        self.state.with(|state| state.offset)
    }

    pub fn locked_direction(&self) -> Option<SwipeEdge> {
        self.state.with(|state| state.locked_direction)
    }

    pub fn is_triggered(&self) -> bool {
        self.state.with(|state| state.is_triggered)
    }

    pub fn is_bouncing(&self) -> bool {
        self.state.with(|state| state.is_bouncing)
    }

    pub fn is_dragging(&self) -> bool {
        self.state.with(|state| state.is_dragging)
    }

    pub fn phase(&self) -> GesturePhase {
        let state = self.state.get();
        if state.is_dragging {
            GesturePhase::Dragging {
                triggered: state.is_triggered,
            }
        } else if self.visual_offset.is_running() {
            GesturePhase::Settling
        } else {
            GesturePhase::Rest
        }
    }

    /// Offset the renderer should draw at, including the settle animation.
    pub fn visual_offset(&self) -> f32 {
        self.visual_offset.value()
    }

    /// Animated icon scale, following the bounce.
    pub fn icon_scale(&self) -> f32 {
        self.icon_scale.value()
    }

    pub fn is_bounce_reset_pending(&self) -> bool {
        self.bounce_reset
            .as_ref()
            .is_some_and(TimerRegistration::is_pending)
    }

    /// Geometry for the current visual offset.
    pub fn presentation(&self) -> SwipePresentation {
        let state = self.state.get();
        map_presentation(
            self.visual_offset.value(),
            state.is_triggered,
            state.is_bouncing,
            &self.config,
        )
    }

    /// Feed one cumulative drag sample.
    pub fn on_changed(&mut self, sample: DragSample) {
        if !sample.is_horizontal_swipe(self.config.min_drag_distance) {
            log::trace!(
                "swipe sample ({}, {}) rejected by horizontal gate",
                sample.horizontal,
                sample.vertical
            );
            return;
        }

        let has_leading = self.leading.is_some();
        let has_trailing = self.trailing.is_some();
        let allows_continuous_drag = self.config.allows_continuous_drag;
        let trigger_distance = self.config.trigger_distance;

        let (offset, crossed) = self.state.update(|state| {
            state.is_dragging = true;
            let offset = resolve_offset(
                sample.horizontal,
                has_leading,
                has_trailing,
                state.locked_direction,
            );
            state.offset = offset;

            if !allows_continuous_drag && state.locked_direction.is_none() {
                if let Some(edge) = SwipeEdge::from_offset(offset) {
                    log::debug!("swipe locked to {edge:?}");
                    state.locked_direction = Some(edge);
                }
            }

            let triggered = offset.abs() > trigger_distance;
            let crossed = triggered && !state.is_triggered;
            if state.is_triggered && !triggered {
                log::debug!("swipe fell back below trigger distance at {offset}");
            }
            state.is_triggered = triggered;
            if crossed {
                state.is_bouncing = true;
            }
            (offset, crossed)
        });

        log::trace!("swipe offset {offset}");
        self.visual_offset.snap_to(offset);

        if crossed {
            log::debug!("swipe crossed trigger distance at {offset}");
            self.haptics.selection_changed();
            self.start_bounce();
        }
    }

    /// Close the gesture, on release or cancellation.
    ///
    /// Returns the edge whose action ran. The state is back at rest before
    /// the action is invoked, so a panicking action leaves nothing half-reset.
    pub fn on_ended(&mut self) -> Option<SwipeEdge> {
        let trigger_distance = self.config.trigger_distance;
        let offset = self.state.update(|state| {
            let offset = state.offset;
            state.reset();
            offset
        });

        let fired = if offset.abs() > trigger_distance {
            SwipeEdge::from_offset(offset)
                .and_then(|edge| self.binding(edge).map(|binding| (edge, binding.action_handle())))
        } else {
            None
        };

        if self.visual_offset.value() != 0.0 {
            self.visual_offset
                .animate_to(0.0, self.config.animations.settle);
        } else {
            self.visual_offset.snap_to(0.0);
        }

        match fired {
            Some((edge, action)) => {
                log::debug!("swipe released at {offset}, firing {edge:?} action");
                action();
                Some(edge)
            }
            None => {
                log::debug!("swipe released at {offset}, no action");
                None
            }
        }
    }

    fn start_bounce(&mut self) {
        self.icon_scale.animate_to(
            BOUNCE_SCALE,
            AnimationType::Tween(self.config.animations.bounce_in),
        );

        // Re-crossing before the previous reset fired supersedes it, so the
        // flag always clears one full delay after the latest crossing.
        if let Some(previous) = self.bounce_reset.take() {
            if previous.cancel() {
                log::debug!("swipe bounce reset superseded by a new crossing");
            }
        }

        let state = self.state.downgrade();
        let icon_scale = self.icon_scale.downgrade();
        let bounce_out = self.config.animations.bounce_out;
        let registration = self.runtime.schedule_after(
            self.config.animations.bounce_reset_delay_millis,
            move || {
                if state.update(|state| state.is_bouncing = false).is_none() {
                    return;
                }
                log::debug!("swipe bounce reset");
                if let Some(icon_scale) = icon_scale.upgrade() {
                    icon_scale.animate_to(1.0, AnimationType::Tween(bounce_out));
                }
            },
        );
        self.bounce_reset = Some(registration);
    }
}

impl std::fmt::Debug for SwipeGestureStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeGestureStateMachine")
            .field("config", &self.config)
            .field("leading", &self.leading)
            .field("trailing", &self.trailing)
            .field("state", &self.state.get())
            .field("bounce_reset", &self.bounce_reset)
            .finish_non_exhaustive()
    }
}
