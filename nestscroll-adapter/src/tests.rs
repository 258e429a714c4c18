use crate::*;

use nestscroll::{BehaviorKind, Motion, PhysicsOptions, ScrollState};
use proptest::prelude::*;

const FRAME: f64 = 1.0 / 60.0;

type Pair = GestureCoordinator<ScrollState, ScrollState>;

/// Outer region of 3000 points in a 600 point viewport, with the inner region starting at
/// `inner_origin` inside it.
fn nested(outer_offset: f64, inner_origin: f64, inner_offset: f64) -> Pair {
    nested_in(outer_offset, inner_origin, inner_offset, 600.0)
}

fn nested_in(outer_offset: f64, inner_origin: f64, inner_offset: f64, viewport: f64) -> Pair {
    let outer = ScrollState::new(outer_offset, 3_000.0, viewport);
    let inner = ScrollState::new(inner_offset, 20_000.0, viewport).with_origin(inner_origin);
    GestureCoordinator::new(outer, inner)
}

/// Ticks until the coordinator settles, returning every tick result.
fn settle(c: &mut Pair) -> Vec<nestscroll::TickResult> {
    let mut out = Vec::new();
    while let Some(r) = c.tick(FRAME) {
        out.push(r);
        assert!(out.len() < 5_000, "coordinator never settled");
    }
    out
}

#[test]
fn drag_up_within_headroom_scrolls_outer() {
    let mut c = nested(50.0, 150.0, 0.0);
    c.begin();
    let d = c.change(-30.0);
    assert_eq!(d.outer_delta, -30.0);
    assert_eq!(c.outer().offset, 80.0);
    assert_eq!(c.inner().offset, 0.0);
    assert_eq!(c.phase(), Phase::Dragging);
    assert_eq!(c.last_translation(), Some(-30.0));
}

#[test]
fn drag_up_past_headroom_hands_over_to_inner() {
    let mut c = nested(10.0, 20.0, 0.0);
    c.begin();
    c.change(-30.0);
    assert_eq!(c.outer().offset, 20.0);
    assert_eq!(c.inner().offset, 20.0);
}

#[test]
fn drag_down_past_top_is_rubber_banded() {
    let mut c = nested_in(-5.0, 400.0, 0.0, 300.0);
    c.begin();
    let d = c.change(10.0);
    assert!(d.rubber_banded);
    assert!((d.outer_delta - 9.747).abs() < 1e-3);
    assert!((c.outer().offset - (-5.0 - d.outer_delta)).abs() < 1e-12);
    assert_eq!(c.inner().offset, 0.0);

    // No spring while the finger is still down.
    assert!(!c.needs_tick());
    assert_eq!(c.phase(), Phase::Dragging);
}

#[test]
fn release_at_top_bounces_without_fling() {
    let mut c = nested(0.0, 400.0, 0.0);
    c.begin();
    c.end(1_500.0);
    assert_eq!(c.phase(), Phase::Settling);
    assert_eq!(c.active_behavior(), Some(BehaviorKind::Bounce));
    assert!(c.is_bouncing());

    let ticks = settle(&mut c);
    assert!(ticks.iter().all(|r| r.kind == BehaviorKind::Bounce));
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.outer().offset, 0.0);
}

#[test]
fn release_while_overscrolled_springs_back() {
    let mut c = nested(0.0, 400.0, 0.0);
    c.begin();
    c.change(60.0);
    let pulled = c.outer().offset;
    assert!(pulled < 0.0);

    c.end(0.0);
    assert!(!c.inner_interaction_enabled());

    let mut prev = pulled;
    while let Some(r) = c.tick(FRAME) {
        let Motion::Position(y) = r.motion else {
            panic!("bounce must report positions");
        };
        assert_eq!(c.outer().offset, y);
        assert!(y >= prev && y <= 0.0);
        prev = y;
    }
    assert_eq!(c.outer().offset, 0.0);
    assert!(c.inner_interaction_enabled());
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn release_without_velocity_goes_idle() {
    let mut c = nested(100.0, 400.0, 0.0);
    c.begin();
    c.change(-10.0);
    c.end(0.0);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.needs_tick());

    c.begin();
    c.end(f64::NAN);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn upward_fling_fills_headroom_then_scrolls_inner() {
    let mut c = nested(100.0, 400.0, 0.0);
    c.begin();
    c.end(-2_000.0);
    assert!(c.is_flinging());
    assert!(!c.inner_interaction_enabled());

    let ticks = settle(&mut c);
    assert!(ticks.iter().all(|r| r.kind == BehaviorKind::Inertial));
    assert!(ticks.last().unwrap().terminated);
    assert!((c.outer().offset - 400.0).abs() < 1e-9);
    assert!(c.inner().offset > 600.0);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.inner_interaction_enabled());
}

#[test]
fn downward_fling_crossing_top_turns_into_bounce() {
    let mut c = nested(100.0, 400.0, 0.0);
    c.begin();
    c.end(3_000.0);
    assert_eq!(c.active_behavior(), Some(BehaviorKind::Inertial));

    let mut lowest = f64::MAX;
    let mut kinds = Vec::new();
    for r in settle(&mut c) {
        if kinds.last() != Some(&r.kind) {
            kinds.push(r.kind);
        }
        if let Motion::Position(y) = r.motion {
            lowest = lowest.min(y);
        }
    }
    assert_eq!(kinds, vec![BehaviorKind::Inertial, BehaviorKind::Bounce]);
    assert!(lowest < 0.0);
    assert_eq!(c.outer().offset, 0.0);
    assert_eq!(c.inner().offset, 0.0);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn fling_drains_inner_before_outer() {
    let mut c = nested(400.0, 400.0, 300.0);
    c.begin();
    c.end(400.0);
    let first = c.tick(FRAME).unwrap();
    assert_eq!(first.kind, BehaviorKind::Inertial);
    assert_eq!(c.outer().offset, 400.0);
    assert!(c.inner().offset < 300.0);
}

#[test]
fn begin_cancels_settling_synchronously() {
    let mut c = nested(-40.0, 400.0, 0.0);
    c.begin();
    c.end(0.0);
    c.tick(FRAME);
    c.tick(FRAME);
    let frozen = c.outer().offset;
    assert!(frozen < 0.0);

    c.handle(GestureEvent::Began);
    assert_eq!(c.phase(), Phase::Dragging);
    assert!(!c.needs_tick());
    assert_eq!(c.tick(FRAME), None);
    assert_eq!(c.outer().offset, frozen);
}

#[test]
fn change_without_begin_starts_a_gesture() {
    let mut c = nested(-40.0, 400.0, 0.0);
    c.begin();
    c.end(0.0);
    assert!(c.needs_tick());

    c.change(-5.0);
    assert_eq!(c.phase(), Phase::Dragging);
    assert!(!c.needs_tick());
}

#[test]
fn end_and_cancel_need_an_active_gesture() {
    let mut c = nested(100.0, 400.0, 0.0);
    c.end(2_000.0);
    assert_eq!(c.phase(), Phase::Idle);
    assert!(!c.needs_tick());

    c.cancel();
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn cancel_settles_overscroll_only() {
    let mut c = nested(50.0, 400.0, 0.0);
    c.begin();
    c.change(-10.0);
    c.handle(GestureEvent::Cancelled);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.last_translation(), None);

    let mut c = nested(0.0, 400.0, 0.0);
    c.begin();
    c.change(30.0);
    c.cancel();
    assert_eq!(c.phase(), Phase::Settling);
    assert!(c.is_bouncing());
    settle(&mut c);
    assert_eq!(c.outer().offset, 0.0);
}

#[test]
fn inner_stops_at_its_bottom() {
    let outer = ScrollState::new(0.0, 600.0, 600.0);
    let inner = ScrollState::new(390.0, 1_000.0, 600.0);
    let mut c = GestureCoordinator::new(outer, inner);
    c.begin();
    c.change(-50.0);
    assert_eq!(c.outer().offset, 0.0);
    assert_eq!(c.inner().offset, 400.0);
}

#[test]
fn handle_dispatches_gesture_events() {
    let mut c = nested(50.0, 400.0, 0.0);
    let mut pan = PanTracker::new();
    c.handle(GestureEvent::Began);
    c.handle(pan.changed(-10.0));
    c.handle(pan.changed(-25.0));
    assert_eq!(c.last_translation(), Some(-15.0));
    assert_eq!(c.outer().offset, 75.0);

    c.handle(GestureEvent::Ended { velocity: -500.0 });
    assert!(c.is_flinging());
}

#[test]
fn borrowed_surfaces_are_written_through() {
    let mut outer = ScrollState::new(50.0, 3_000.0, 600.0);
    let mut inner = ScrollState::new(0.0, 20_000.0, 600.0).with_origin(150.0);
    {
        let mut c = GestureCoordinator::new(&mut outer, &mut inner);
        c.begin();
        c.change(-30.0);
    }
    assert_eq!(outer.offset, 80.0);
    assert_eq!(inner.offset, 0.0);
}

#[test]
fn invalid_options_are_rejected() {
    let outer = ScrollState::new(0.0, 1_000.0, 600.0);
    let inner = ScrollState::new(0.0, 1_000.0, 600.0);
    let bad = PhysicsOptions::default().with_resistance(-1.0);
    assert!(GestureCoordinator::try_new(outer, inner, bad).is_err());

    let good = PhysicsOptions::default().with_resistance(4.0);
    let ok = GestureCoordinator::try_new(outer, inner, good).unwrap();
    assert_eq!(ok.options().resistance, 4.0);
}

#[test]
fn tick_at_uses_frame_timestamps() {
    let mut c = nested(-40.0, 400.0, 0.0);
    assert_eq!(c.tick_at(0), None);

    c.begin();
    c.end(0.0);
    let mut now_ms = 1_000u64;
    while c.tick_at(now_ms).is_some() {
        now_ms += 16;
        assert!(now_ms < 10_000);
    }
    assert_eq!(c.outer().offset, 0.0);
    assert_eq!(c.phase(), Phase::Idle);
}

#[test]
fn frame_clock_steps() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.advance(500), NOMINAL_FRAME_SECS);
    assert!((clock.advance(516) - 0.016).abs() < 1e-12);
    assert_eq!(clock.advance(2_000), MAX_FRAME_SECS);
    assert_eq!(clock.advance(1_990), 0.0);
    assert!((clock.advance(2_010) - 0.010).abs() < 1e-12);

    clock.reset();
    assert_eq!(clock.advance(0), NOMINAL_FRAME_SECS);
}

#[test]
fn pan_tracker_reports_increments() {
    let mut pan = PanTracker::new();
    assert_eq!(pan.delta(10.0), 10.0);
    assert_eq!(pan.delta(25.0), 15.0);
    assert_eq!(pan.delta(20.0), -5.0);
    pan.reset();
    assert_eq!(pan.changed(5.0), GestureEvent::Changed { translation: 5.0 });
}

proptest! {
    #[test]
    fn any_gesture_settles_in_bounds(
        outer_offset in 0.0f64..800.0,
        headroom in 0.0f64..800.0,
        inner_offset in 0.0f64..2_000.0,
        drags in proptest::collection::vec(-200.0f64..200.0, 0..20),
        velocity in -8_000.0f64..8_000.0,
    ) {
        let mut c = nested(outer_offset, outer_offset + headroom, inner_offset);
        c.begin();
        for d in drags {
            c.change(d);
            prop_assert!(c.inner().offset >= 0.0);
            prop_assert!(c.inner().offset <= c.inner().max_offset());
        }
        c.end(velocity);

        let mut ticks = 0usize;
        while c.tick(FRAME).is_some() {
            ticks += 1;
            prop_assert!(ticks < 2_000);
        }
        prop_assert_eq!(c.phase(), Phase::Idle);
        prop_assert!(c.outer().offset >= 0.0);
        prop_assert!(c.inner().offset >= 0.0);
        prop_assert!(c.inner().offset <= c.inner().max_offset());
        prop_assert!(c.inner_interaction_enabled());
    }
}
