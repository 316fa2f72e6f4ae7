//! Integration tests for tracepad-core.
//!
//! Drives the public API end-to-end with realistic event sequences, then
//! checks the machine's invariants over arbitrary sequences.

use proptest::prelude::*;
use tracepad_core::{
    DrawCommand, GestureTracker, Outcome, Point, PointerInput, RecordingCanvas, RecordingStatus,
    SurfaceOffset, TouchId, TouchRecord, STATUS_CANCEL_OTHER_TOUCH,
};

fn record(id: i32, x: f32, y: f32) -> TouchRecord {
    TouchRecord::new(TouchId::new(id), Point::new(x, y))
}

struct Surface {
    tracker: GestureTracker,
    canvas: RecordingCanvas,
    status: RecordingStatus,
}

impl Surface {
    fn new() -> Self {
        Self {
            tracker: GestureTracker::new(SurfaceOffset::ZERO),
            canvas: RecordingCanvas::new(),
            status: RecordingStatus::new(),
        }
    }

    fn dispatch(&mut self, input: PointerInput) -> Outcome {
        self.tracker
            .handle(&input, &mut self.canvas, &mut self.status)
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_touch_drag_with_interfering_second_finger() {
    let mut s = Surface::new();

    s.dispatch(PointerInput::TouchStart {
        touches: vec![record(1, 0.0, 0.0)],
    });
    // A second finger lands mid-gesture: reported, nothing corrupted.
    let outcome = s.dispatch(PointerInput::TouchStart {
        touches: vec![record(2, 99.0, 99.0)],
    });
    assert!(matches!(outcome, Outcome::Violation(_)));

    // Moves of the second finger are inert; moves of ours track.
    s.dispatch(PointerInput::TouchMove {
        changed: vec![record(2, 80.0, 80.0)],
    });
    s.dispatch(PointerInput::TouchMove {
        changed: vec![record(1, 10.0, 20.0)],
    });

    // The end event lists both fingers; ours is among them, so it ends.
    let outcome = s.dispatch(PointerInput::TouchEnd {
        changed: vec![record(2, 80.0, 80.0), record(1, 10.0, 20.0)],
    });
    assert_eq!(outcome, Outcome::Acted);
    assert!(s.tracker.is_idle());

    assert_eq!(
        s.canvas.commands(),
        &[
            DrawCommand::Circle {
                center: Point::ORIGIN
            },
            DrawCommand::Line {
                from: Point::ORIGIN,
                to: Point::new(10.0, 20.0)
            },
            DrawCommand::Circle {
                center: Point::new(10.0, 20.0)
            },
        ]
    );
}

#[test]
fn test_device_switch_between_gestures() {
    let mut s = Surface::new();

    s.dispatch(PointerInput::TouchStart {
        touches: vec![record(3, 1.0, 1.0)],
    });
    s.dispatch(PointerInput::TouchMove {
        changed: vec![record(3, 2.0, 2.0)],
    });
    s.dispatch(PointerInput::TouchEnd {
        changed: vec![record(3, 2.0, 2.0)],
    });

    // Once idle, the mouse may own the next gesture.
    s.dispatch(PointerInput::MouseDown {
        page: Point::new(5.0, 5.0),
    });
    s.dispatch(PointerInput::MouseUp {
        page: Point::new(6.0, 6.0),
    });

    assert!(s.tracker.is_idle());
    assert_eq!(s.canvas.command_count(), 6);
}

#[test]
fn test_synthesized_mouse_events_during_touch_are_inert() {
    // Browsers replay a touch press as mousedown/mouseup; neither may start
    // or end anything while the touch owns the gesture.
    let mut s = Surface::new();

    s.dispatch(PointerInput::TouchStart {
        touches: vec![record(1, 0.0, 0.0)],
    });
    let down = s.dispatch(PointerInput::MouseDown {
        page: Point::new(0.0, 0.0),
    });
    let up = s.dispatch(PointerInput::MouseUp {
        page: Point::new(0.0, 0.0),
    });
    assert!(down.is_ignored());
    assert!(up.is_ignored());

    s.dispatch(PointerInput::TouchEnd {
        changed: vec![record(1, 0.0, 0.0)],
    });
    assert!(s.tracker.is_idle());
    // Only the touch's start marker was drawn.
    assert_eq!(s.canvas.command_count(), 1);
}

#[test]
fn test_cancel_unblocks_a_stuck_surface() {
    let mut s = Surface::new();

    s.dispatch(PointerInput::TouchStart {
        touches: vec![record(1, 0.0, 0.0)],
    });
    // The end for touch 1 never arrives; further touch starts are refused.
    let outcome = s.dispatch(PointerInput::TouchStart {
        touches: vec![record(2, 9.0, 9.0)],
    });
    assert!(matches!(outcome, Outcome::Violation(_)));

    // A cancel (even one not listing our touch) frees the surface.
    let outcome = s.dispatch(PointerInput::TouchCancel {
        changed: vec![record(2, 9.0, 9.0)],
    });
    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(s.status.last(), Some(STATUS_CANCEL_OTHER_TOUCH));

    let outcome = s.dispatch(PointerInput::TouchStart {
        touches: vec![record(2, 9.0, 9.0)],
    });
    assert_eq!(outcome, Outcome::Acted);
}

#[test]
fn test_mouse_recovery_produces_one_gesture() {
    let mut s = Surface::new();

    s.dispatch(PointerInput::MouseDown {
        page: Point::new(1.0, 1.0),
    });
    // Lost mouse-up; the second down restarts instead of failing.
    s.dispatch(PointerInput::MouseDown {
        page: Point::new(10.0, 10.0),
    });
    s.dispatch(PointerInput::MouseUp {
        page: Point::new(20.0, 20.0),
    });

    assert!(s.tracker.is_idle());
    // Two start markers, then the line and end marker of the second gesture.
    assert_eq!(
        s.canvas.commands(),
        &[
            DrawCommand::Circle {
                center: Point::new(1.0, 1.0)
            },
            DrawCommand::Circle {
                center: Point::new(10.0, 10.0)
            },
            DrawCommand::Line {
                from: Point::new(10.0, 10.0),
                to: Point::new(20.0, 20.0)
            },
            DrawCommand::Circle {
                center: Point::new(20.0, 20.0)
            },
        ]
    );
}

// =============================================================================
// Property Tests
// =============================================================================

fn arb_point() -> impl Strategy<Value = Point> {
    (-50.0f32..400.0, -50.0f32..400.0).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_record() -> impl Strategy<Value = TouchRecord> {
    // A small identifier space forces collisions and reuse.
    (0..4i32, arb_point()).prop_map(|(id, page)| TouchRecord::new(TouchId::new(id), page))
}

fn arb_input() -> impl Strategy<Value = PointerInput> {
    let records = || proptest::collection::vec(arb_record(), 0..3);
    prop_oneof![
        records().prop_map(|touches| PointerInput::TouchStart { touches }),
        records().prop_map(|changed| PointerInput::TouchMove { changed }),
        records().prop_map(|changed| PointerInput::TouchEnd { changed }),
        records().prop_map(|changed| PointerInput::TouchCancel { changed }),
        arb_point().prop_map(|page| PointerInput::MouseDown { page }),
        arb_point().prop_map(|page| PointerInput::MouseUp { page }),
    ]
}

proptest! {
    /// At most one device ever owns the gesture, whatever the host throws at
    /// the tracker.
    #[test]
    fn prop_devices_are_mutually_exclusive(
        inputs in proptest::collection::vec(arb_input(), 0..50)
    ) {
        let mut s = Surface::new();
        for input in inputs {
            s.dispatch(input);
            prop_assert!(!(s.tracker.is_touch_active() && s.tracker.is_mouse_active()));
        }
    }

    /// Ignored events are observably inert: no state change, no drawing, no
    /// status update, no default suppression.
    #[test]
    fn prop_ignored_events_change_nothing(
        inputs in proptest::collection::vec(arb_input(), 0..50)
    ) {
        let mut s = Surface::new();
        for input in inputs {
            let state_before = s.tracker.state();
            let commands_before = s.canvas.command_count();
            let updates_before = s.status.updates().len();

            let outcome = s.dispatch(input);

            if outcome.is_ignored() {
                prop_assert_eq!(s.tracker.state(), state_before);
                prop_assert_eq!(s.canvas.command_count(), commands_before);
                prop_assert_eq!(s.status.updates().len(), updates_before);
                prop_assert!(!outcome.should_suppress_default());
            }
        }
    }

    /// A violation reports but never moves the machine.
    #[test]
    fn prop_violations_keep_state(
        inputs in proptest::collection::vec(arb_input(), 0..50)
    ) {
        let mut s = Surface::new();
        for input in inputs {
            let state_before = s.tracker.state();
            let outcome = s.dispatch(input);
            if matches!(outcome, Outcome::Violation(_)) {
                prop_assert_eq!(s.tracker.state(), state_before);
            }
        }
    }

    /// Point updates only happen for the identifier that owns the gesture.
    #[test]
    fn prop_only_owner_moves_tracked_point(
        start in arb_record(),
        moves in proptest::collection::vec(arb_record(), 0..20)
    ) {
        let mut s = Surface::new();
        s.dispatch(PointerInput::TouchStart { touches: vec![start] });

        for m in moves {
            let outcome = s.dispatch(PointerInput::TouchMove { changed: vec![m] });
            if m.id == start.id {
                prop_assert_eq!(outcome, Outcome::Acted);
            } else {
                prop_assert!(outcome.is_ignored());
            }
        }
    }
}
