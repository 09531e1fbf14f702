//! End-to-end swipe scenarios driven through the test rule: samples in,
//! actions, haptics and settled geometry out.

use swipekit_foundation::{GesturePhase, SwipeConfig, SwipeEdge};
use swipekit_graphics::{Point, Size};
use swipekit_testing::SwipeTestRule;

fn config() -> SwipeConfig {
    SwipeConfig::default().with_trigger_distance(70.0)
}

#[test]
fn full_leading_swipe_fires_once_and_settles() {
    let mut rule = SwipeTestRule::new(config()).with_leading();

    rule.drag_to(40.0, 0.0);
    assert_eq!(rule.state().offset, 40.0);
    assert!(!rule.state().is_triggered);

    rule.drag_to(80.0, 0.0);
    assert!(rule.state().is_triggered);
    assert_eq!(rule.haptic_count(), 1);

    assert_eq!(rule.release(), Some(SwipeEdge::Leading));
    assert_eq!(rule.leading_count(), 1);
    assert_eq!(rule.machine().phase(), GesturePhase::Settling);

    rule.settle();
    rule.assert_at_rest();
    assert_eq!(rule.machine().phase(), GesturePhase::Rest);
    assert!(!rule.state().is_bouncing);
    assert_eq!(rule.machine().icon_scale(), 1.0);
}

#[test]
fn trailing_swipe_without_trailing_binding_is_inert() {
    let mut rule = SwipeTestRule::new(config()).with_leading();

    rule.drag_path(&[(-20.0, 0.0), (-50.0, 2.0), (-80.0, 3.0)]);
    assert_eq!(rule.state().offset, 0.0);
    assert_eq!(rule.release(), None);
    assert_eq!(rule.leading_count(), 0);
    assert_eq!(rule.haptic_count(), 0);
    rule.assert_at_rest();
}

#[test]
fn locked_swipe_reversal_fires_nothing() {
    let mut rule = SwipeTestRule::new(config().with_continuous_drag(false))
        .with_leading()
        .with_trailing();

    rule.drag_to(90.0, 0.0);
    assert_eq!(rule.state().locked_direction, Some(SwipeEdge::Leading));
    rule.drag_to(-20.0, 0.0);
    assert_eq!(rule.state().offset, 0.0);

    assert_eq!(rule.release(), None);
    assert_eq!(rule.leading_count(), 0);
    assert_eq!(rule.trailing_count(), 0);
    assert_eq!(rule.state().locked_direction, None);
}

#[test]
fn at_most_one_action_per_release() {
    let mut rule = SwipeTestRule::new(config()).with_leading().with_trailing();

    rule.drag_path(&[(100.0, 0.0), (-100.0, 0.0)]);
    assert_eq!(rule.release(), Some(SwipeEdge::Trailing));
    assert_eq!(rule.leading_count() + rule.trailing_count(), 1);

    // Releasing again without a gesture does nothing.
    assert_eq!(rule.release(), None);
    assert_eq!(rule.trailing_count(), 1);
}

#[test]
fn consecutive_gestures_start_from_rest() {
    let mut rule = SwipeTestRule::new(config()).with_leading().with_trailing();

    rule.drag_to(120.0, 0.0);
    rule.release();
    rule.drag_to(-30.0, 0.0);
    assert_eq!(rule.state().offset, -30.0);
    assert!(!rule.state().is_triggered);
    rule.release();

    assert_eq!(rule.leading_count(), 1);
    assert_eq!(rule.trailing_count(), 0);
}

#[test]
fn bounce_clears_one_delay_after_latest_crossing() {
    let mut rule = SwipeTestRule::new(config()).with_leading();

    rule.drag_to(80.0, 0.0);
    rule.advance_time_millis(100);
    rule.drag_to(60.0, 0.0);
    rule.drag_to(85.0, 0.0);
    assert_eq!(rule.haptic_count(), 2);

    rule.advance_time_millis(100);
    assert!(rule.state().is_bouncing);
    rule.advance_time_millis(50);
    assert!(!rule.state().is_bouncing);
}

#[test]
fn presentation_follows_visual_offset_while_settling() {
    let mut rule = SwipeTestRule::new(config()).with_trailing();
    let row = Size::new(320.0, 44.0);

    rule.drag_to(-60.0, 0.0);
    let dragging = rule.machine().presentation();
    assert_eq!(dragging.trailing_region(row).width, 60.0);
    assert_eq!(dragging.peek_scale, 1.0);

    rule.release();
    rule.advance_time_millis(100);
    let settling = rule.machine().presentation();
    assert!(settling.trailing_region_width > 0.0);
    assert!(settling.trailing_region_width < 60.0);

    rule.settle();
    let rest = rule.machine().presentation();
    assert_eq!(rest.trailing_region_width, 0.0);
    assert_eq!(rest.peek_scale, 0.0);
}

#[test]
fn pointer_drag_reaches_the_action() {
    let mut rule = SwipeTestRule::new(config()).with_leading();

    let fired = rule.pointer_drag(Point::new(20.0, 20.0), Point::new(120.0, 24.0), 10);
    assert_eq!(fired, Some(SwipeEdge::Leading));
    assert_eq!(rule.leading_count(), 1);
    assert_eq!(rule.haptic_count(), 1);
}

#[test]
fn vertical_pointer_drag_passes_through() {
    let mut rule = SwipeTestRule::new(config()).with_leading().with_trailing();

    let fired = rule.pointer_drag(Point::new(20.0, 20.0), Point::new(30.0, 220.0), 10);
    assert_eq!(fired, None);
    assert_eq!(rule.leading_count(), 0);
    rule.assert_at_rest();
}
