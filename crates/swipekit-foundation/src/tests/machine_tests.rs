use crate::*;

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;
use std::sync::Arc;

use swipekit_core::{DefaultScheduler, Runtime};

struct Fixture {
    runtime: Runtime,
    machine: SwipeGestureStateMachine,
    haptics: Rc<Cell<usize>>,
    leading_hits: Rc<Cell<usize>>,
    trailing_hits: Rc<Cell<usize>>,
}

fn counting_binding(icon: &str, hits: &Rc<Cell<usize>>) -> ActionBinding {
    let hits = Rc::clone(hits);
    ActionBinding::new(icon, move || hits.set(hits.get() + 1))
}

fn fixture(config: SwipeConfig, leading: bool, trailing: bool) -> Fixture {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let haptics = Rc::new(Cell::new(0));
    let leading_hits = Rc::new(Cell::new(0));
    let trailing_hits = Rc::new(Cell::new(0));
    let sink = {
        let haptics = Rc::clone(&haptics);
        Rc::new(move || haptics.set(haptics.get() + 1))
    };
    let machine = SwipeGestureStateMachine::new(
        config,
        leading.then(|| counting_binding("archive", &leading_hits)),
        trailing.then(|| counting_binding("trash", &trailing_hits)),
        runtime.handle(),
        sink,
    );
    Fixture {
        runtime,
        machine,
        haptics,
        leading_hits,
        trailing_hits,
    }
}

fn drag(machine: &mut SwipeGestureStateMachine, horizontal: f32) {
    machine.on_changed(DragSample::new(horizontal, 0.0));
}

#[test]
fn leading_drag_past_trigger_fires_leading_action() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, false);

    drag(&mut f.machine, 40.0);
    assert_eq!(f.machine.offset(), 40.0);
    assert!(!f.machine.is_triggered());
    assert_eq!(f.haptics.get(), 0);

    drag(&mut f.machine, 80.0);
    assert_eq!(f.machine.offset(), 80.0);
    assert!(f.machine.is_triggered());
    assert_eq!(f.haptics.get(), 1);

    assert_eq!(f.machine.on_ended(), Some(SwipeEdge::Leading));
    assert_eq!(f.leading_hits.get(), 1);
    assert_eq!(f.trailing_hits.get(), 0);

    let state = f.machine.state();
    assert_eq!(state.offset, 0.0);
    assert_eq!(state.locked_direction, None);
    assert!(!state.is_triggered);
    assert!(!state.is_dragging);
}

#[test]
fn drag_toward_unbound_side_stays_at_rest() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, false);

    for horizontal in [-10.0, -40.0, -80.0] {
        drag(&mut f.machine, horizontal);
        assert_eq!(f.machine.offset(), 0.0);
        assert!(!f.machine.is_triggered());
    }

    assert_eq!(f.machine.on_ended(), None);
    assert_eq!(f.leading_hits.get(), 0);
    assert_eq!(f.haptics.get(), 0);
}

#[test]
fn locked_direction_clamps_reversal_to_zero() {
    let config = SwipeConfig::default()
        .with_trigger_distance(70.0)
        .with_continuous_drag(false);
    let mut f = fixture(config, true, true);

    drag(&mut f.machine, 90.0);
    assert_eq!(f.machine.locked_direction(), Some(SwipeEdge::Leading));
    assert!(f.machine.is_triggered());

    drag(&mut f.machine, -20.0);
    assert_eq!(f.machine.offset(), 0.0);
    assert!(!f.machine.is_triggered());
    assert_eq!(f.machine.locked_direction(), Some(SwipeEdge::Leading));

    assert_eq!(f.machine.on_ended(), None);
    assert_eq!(f.leading_hits.get(), 0);
    assert_eq!(f.trailing_hits.get(), 0);
    assert_eq!(f.machine.locked_direction(), None);
}

#[test]
fn lock_holds_for_whole_gesture_and_clears_on_release() {
    let config = SwipeConfig::default().with_continuous_drag(false);
    let mut f = fixture(config, true, true);

    let path = [-15.0, -60.0, 30.0, 120.0, -90.0, 5.0, -200.0];
    for horizontal in path {
        drag(&mut f.machine, horizontal);
        assert!(f.machine.offset() <= 0.0, "offset crossed sign at {horizontal}");
    }
    f.machine.on_ended();

    drag(&mut f.machine, 30.0);
    assert_eq!(f.machine.offset(), 30.0);
    assert_eq!(f.machine.locked_direction(), Some(SwipeEdge::Leading));
}

#[test]
fn continuous_drag_can_cross_sides() {
    let mut f = fixture(SwipeConfig::default(), true, true);

    drag(&mut f.machine, 50.0);
    drag(&mut f.machine, -50.0);
    assert_eq!(f.machine.offset(), -50.0);
    assert_eq!(f.machine.locked_direction(), None);

    drag(&mut f.machine, -100.0);
    assert_eq!(f.machine.on_ended(), Some(SwipeEdge::Trailing));
    assert_eq!(f.trailing_hits.get(), 1);
    assert_eq!(f.leading_hits.get(), 0);
}

#[test]
fn triggered_tracks_offset_after_every_sample() {
    let config = SwipeConfig::default().with_trigger_distance(70.0);
    let mut f = fixture(config, true, true);

    let path = [10.0, 69.0, 70.0, 70.5, 140.0, 20.0, -71.0, -70.0, -300.0, 9.0];
    for horizontal in path {
        drag(&mut f.machine, horizontal);
        assert_eq!(
            f.machine.is_triggered(),
            f.machine.offset().abs() > 70.0,
            "latch out of sync at {horizontal}"
        );
    }
}

#[test]
fn haptic_fires_once_per_upward_crossing() {
    let config = SwipeConfig::default().with_trigger_distance(70.0);
    let mut f = fixture(config, true, false);

    for horizontal in [60.0, 80.0, 90.0, 120.0] {
        drag(&mut f.machine, horizontal);
    }
    assert_eq!(f.haptics.get(), 1);

    // Falling back is silent.
    drag(&mut f.machine, 50.0);
    assert_eq!(f.haptics.get(), 1);

    drag(&mut f.machine, 75.0);
    assert_eq!(f.haptics.get(), 2);
}

#[test]
fn release_below_threshold_fires_nothing() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, true);
    drag(&mut f.machine, 120.0);
    drag(&mut f.machine, 70.0);

    assert_eq!(f.machine.on_ended(), None);
    assert_eq!(f.leading_hits.get(), 0);
    assert_eq!(f.trailing_hits.get(), 0);
}

#[test]
fn vertical_dominant_samples_mutate_nothing() {
    let mut f = fixture(SwipeConfig::default(), true, true);

    f.machine.on_changed(DragSample::new(30.0, 45.0));
    assert_eq!(f.machine.state(), GestureState::REST);

    f.machine.on_changed(DragSample::new(5.0, 0.0));
    assert_eq!(f.machine.state(), GestureState::REST);
    assert_eq!(f.machine.phase(), GesturePhase::Rest);
}

#[test]
fn recognition_is_not_revoked_by_later_vertical_motion() {
    let mut f = fixture(SwipeConfig::default(), true, true);

    f.machine.on_changed(DragSample::new(40.0, 5.0));
    assert!(f.machine.is_dragging());

    f.machine.on_changed(DragSample::new(45.0, 80.0));
    assert!(f.machine.is_dragging());
    assert_eq!(f.machine.offset(), 40.0);

    f.machine.on_changed(DragSample::new(90.0, 80.0));
    assert_eq!(f.machine.offset(), 90.0);
}

#[test]
fn bounce_flag_resets_after_delay() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, false);

    drag(&mut f.machine, 80.0);
    assert!(f.machine.is_bouncing());
    assert!(f.machine.is_bounce_reset_pending());

    f.runtime.advance_time_by(149);
    assert!(f.machine.is_bouncing());

    f.runtime.advance_time_by(1);
    assert!(!f.machine.is_bouncing());
    assert!(!f.machine.is_bounce_reset_pending());
}

#[test]
fn bounce_reset_delay_is_configurable() {
    let animations = SwipeAnimations {
        bounce_reset_delay_millis: 40,
        ..SwipeAnimations::default()
    };
    let config = SwipeConfig::default()
        .with_trigger_distance(70.0)
        .with_animations(animations);
    let mut f = fixture(config, true, false);

    drag(&mut f.machine, 80.0);
    f.runtime.advance_time_by(39);
    assert!(f.machine.is_bouncing());
    f.runtime.advance_time_by(1);
    assert!(!f.machine.is_bouncing());
}

#[test]
fn recrossing_supersedes_pending_bounce_reset() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, false);

    drag(&mut f.machine, 80.0);
    f.runtime.advance_time_by(100);
    drag(&mut f.machine, 60.0);
    drag(&mut f.machine, 80.0);
    assert_eq!(f.haptics.get(), 2);

    // The first crossing's reset would have fired at 150ms.
    f.runtime.advance_time_by(60);
    assert!(f.machine.is_bouncing());

    f.runtime.advance_time_by(90);
    assert!(!f.machine.is_bouncing());
    assert!(!f.runtime.has_pending_timers());
}

#[test]
fn release_does_not_cut_bounce_short() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, false);
    drag(&mut f.machine, 80.0);
    f.machine.on_ended();

    assert!(f.machine.is_bouncing());
    f.runtime.advance_time_by(150);
    assert!(!f.machine.is_bouncing());
}

#[test]
fn dropping_machine_cancels_bounce_reset() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, false);
    drag(&mut f.machine, 80.0);
    assert!(f.runtime.has_pending_timers());

    let Fixture { runtime, machine, .. } = f;
    drop(machine);
    assert!(!runtime.has_pending_timers());
    assert!(!runtime.has_frame_callbacks());
    runtime.advance_time_by(500);
}

#[test]
fn visual_offset_settles_after_release() {
    let mut f = fixture(SwipeConfig::default(), true, false);
    drag(&mut f.machine, 50.0);
    assert_eq!(f.machine.visual_offset(), 50.0);

    f.machine.on_ended();
    assert_eq!(f.machine.offset(), 0.0);
    assert_eq!(f.machine.visual_offset(), 50.0);
    assert_eq!(f.machine.phase(), GesturePhase::Settling);

    let mut frame_time = 0;
    while f.runtime.needs_frame() && frame_time < 1_000_000_000 {
        frame_time += 16_000_000;
        f.runtime.advance_frame(frame_time);
    }
    assert_eq!(f.machine.visual_offset(), 0.0);
    assert_eq!(f.machine.phase(), GesturePhase::Rest);
}

#[test]
fn icon_scale_pops_and_returns() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, false);
    drag(&mut f.machine, 80.0);

    let mut peak = 1.0f32;
    let mut frame_time = 0;
    while f.runtime.needs_frame() && frame_time < 1_000_000_000 {
        frame_time += 16_000_000;
        f.runtime.advance_frame(frame_time);
        peak = peak.max(f.machine.icon_scale());
    }
    assert!(peak > 1.05, "icon should scale up, peak was {peak}");
    assert_eq!(f.machine.icon_scale(), 1.0);
}

#[test]
fn panicking_action_still_leaves_state_at_rest() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let mut machine = SwipeGestureStateMachine::new(
        SwipeConfig::default().with_trigger_distance(70.0),
        None,
        Some(ActionBinding::new("trash", || panic!("delete failed"))),
        runtime.handle(),
        Rc::new(NoopHaptics),
    );
    machine.on_changed(DragSample::new(-100.0, 0.0));

    let result = catch_unwind(AssertUnwindSafe(|| machine.on_ended()));
    assert!(result.is_err());
    assert!(machine.state().is_at_rest());
}

#[test]
fn phase_reports_trigger_substate() {
    let mut f = fixture(SwipeConfig::default().with_trigger_distance(70.0), true, false);
    drag(&mut f.machine, 30.0);
    assert_eq!(f.machine.phase(), GesturePhase::Dragging { triggered: false });
    drag(&mut f.machine, 75.0);
    assert_eq!(f.machine.phase(), GesturePhase::Dragging { triggered: true });
}

#[test]
fn negative_config_is_sanitized_on_attach() {
    let config = SwipeConfig::default()
        .with_min_drag_distance(-5.0)
        .with_icon_frame_width(f32::NAN);
    let f = fixture(config, true, false);

    assert_eq!(f.machine.config().min_drag_distance, 0.0);
    assert_eq!(
        f.machine.config().icon_frame_width,
        gesture_constants::DEFAULT_ICON_FRAME_WIDTH
    );
}
