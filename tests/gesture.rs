//! Host-level tests for the button-to-timer gesture pipeline.
//!
//! Drives the same pieces the firmware control loop drives, one edge at a
//! time, with hand-picked timestamps.

use embassy_time::{Duration, Instant};
use wheel_timer::{
    ButtonEdge, EdgeEvent, FAST_REPEAT_COUNT, HoldTimer, RemoteButton, TriplePress, WIRE_PRESSED,
    WIRE_RELEASED,
};

fn press(at_ms: u64) -> EdgeEvent {
    EdgeEvent {
        edge: ButtonEdge::Press,
        at: Instant::from_millis(at_ms),
    }
}

fn release(at_ms: u64) -> EdgeEvent {
    EdgeEvent {
        edge: ButtonEdge::Release,
        at: Instant::from_millis(at_ms),
    }
}

/// One control-loop step: apply the edge, and on a completed pair let the
/// rapid-press detector reset the timer.
fn drive(hold: &mut HoldTimer, triple: &mut TriplePress, event: EdgeEvent) {
    if let Some(completed) = hold.apply_edge(event) {
        if triple.observe(completed.held) {
            hold.reset();
        }
    }
}

#[test]
fn current_mirrors_every_processed_edge() {
    let remote = RemoteButton::new_static();
    let mut hold = HoldTimer::new();

    for (event, expected) in [
        (press(10), ButtonEdge::Press),
        (release(20), ButtonEdge::Release),
        (release(30), ButtonEdge::Release),
        (press(40), ButtonEdge::Press),
    ] {
        remote.publish(event);
        let pending = remote.take_pending().unwrap();
        hold.apply_edge(pending);
        assert_eq!(hold.current(), expected);
    }
}

#[test]
fn hold_over_threshold_arms_with_zero_elapsed() {
    let mut hold = HoldTimer::new();
    hold.apply_edge(press(1_000));
    let completed = hold.apply_edge(release(6_001)).unwrap();
    assert!(completed.armed_timer);
    assert!(hold.is_armed());
    assert_eq!(
        hold.elapsed(Instant::from_millis(6_001)),
        Duration::from_ticks(0)
    );
    assert_eq!(
        hold.elapsed(Instant::from_millis(7_501)),
        Duration::from_millis(1_500)
    );
}

#[test]
fn hold_at_or_under_threshold_does_not_arm() {
    let mut hold = HoldTimer::new();
    hold.apply_edge(press(0));
    let exactly_at = hold.apply_edge(release(5_000)).unwrap();
    assert!(!exactly_at.armed_timer);
    assert!(!hold.is_armed());

    hold.apply_edge(press(10_000));
    let just_under = hold.apply_edge(release(14_999)).unwrap();
    assert!(!just_under.armed_timer);
    assert!(!hold.is_armed());
    assert_eq!(
        hold.elapsed(Instant::from_millis(20_000)),
        Duration::from_ticks(0)
    );
}

#[test]
fn release_without_press_never_arms() {
    let mut hold = HoldTimer::new();
    assert!(hold.apply_edge(release(7_000)).is_none());
    assert!(!hold.is_armed());
}

#[test]
fn five_fast_pairs_reset_the_timer() {
    let mut hold = HoldTimer::new();
    let mut triple = TriplePress::new();

    // Arm with a six-second hold.
    drive(&mut hold, &mut triple, press(0));
    drive(&mut hold, &mut triple, release(6_000));
    assert!(hold.is_armed());

    // Five rapid pairs, 100 ms held each.
    let mut at = 10_000;
    for pair in 1..=u64::from(FAST_REPEAT_COUNT) {
        drive(&mut hold, &mut triple, press(at));
        drive(&mut hold, &mut triple, release(at + 100));
        // Still armed until the run completes.
        assert_eq!(hold.is_armed(), pair < u64::from(FAST_REPEAT_COUNT));
        at += 1_000;
    }
    assert_eq!(
        hold.elapsed(Instant::from_millis(at)),
        Duration::from_ticks(0)
    );

    // A new qualifying hold arms again.
    drive(&mut hold, &mut triple, press(100_000));
    drive(&mut hold, &mut triple, release(106_000));
    assert!(hold.is_armed());
}

#[test]
fn slow_pair_breaks_a_fast_run() {
    let mut hold = HoldTimer::new();
    let mut triple = TriplePress::new();

    drive(&mut hold, &mut triple, press(0));
    drive(&mut hold, &mut triple, release(6_000));
    assert!(hold.is_armed());

    // Four fast pairs, one slow pair, four fast pairs: never fires.
    let mut at = 10_000;
    for _ in 0..4 {
        drive(&mut hold, &mut triple, press(at));
        drive(&mut hold, &mut triple, release(at + 50));
        at += 1_000;
    }
    drive(&mut hold, &mut triple, press(at));
    drive(&mut hold, &mut triple, release(at + 400));
    at += 1_000;
    for _ in 0..4 {
        drive(&mut hold, &mut triple, press(at));
        drive(&mut hold, &mut triple, release(at + 50));
        at += 1_000;
    }
    assert!(hold.is_armed());
}

#[test]
fn pending_edge_is_consumed_once_and_latest_wins() {
    let remote = RemoteButton::new_static();
    assert!(remote.take_pending().is_none());

    remote.publish(press(100));
    remote.publish(release(105));

    let pending = remote.take_pending().unwrap();
    assert_eq!(pending, release(105));
    assert!(remote.take_pending().is_none());
}

#[test]
fn wire_payloads_other_than_edges_are_ignored() {
    let remote = RemoteButton::new_static();

    assert!(remote.on_wire_event(2, Instant::from_millis(1)).is_none());
    assert!(remote.on_wire_event(-1, Instant::from_millis(2)).is_none());
    assert!(remote.take_pending().is_none());

    assert_eq!(
        remote.on_wire_event(WIRE_PRESSED, Instant::from_millis(3)),
        Some(ButtonEdge::Press)
    );
    assert_eq!(remote.take_pending().unwrap(), press(3));

    assert_eq!(
        remote.on_wire_event(WIRE_RELEASED, Instant::from_millis(4)),
        Some(ButtonEdge::Release)
    );
    assert_eq!(remote.take_pending().unwrap(), release(4));
}
