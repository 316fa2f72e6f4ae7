//! The gesture state machine.
//!
//! [`GestureTracker`] folds the touch and mouse event streams of one surface
//! into a single drag gesture. Touch and mouse are mutually exclusive:
//! browsers may synthesize both for a single physical tap, and without
//! exclusion one tap would draw two overlapping gestures. The touch
//! identifier is the correlation key across start/move/end/cancel; mouse
//! events carry no identifier, so at most one mouse gesture can exist and the
//! state itself is the correlation.

use crate::canvas::Canvas;
use crate::event::{PointerInput, TouchId, TouchRecord};
use crate::geometry::{Point, SurfaceOffset};
use crate::outcome::{Anomaly, IgnoreReason, Outcome, ProtocolViolation};
use crate::status::StatusSink;

/// Status text when a gesture activates.
pub const STATUS_ACTIVE: &str = "gesture active";
/// Status text when a mouse-down arrives while a mouse gesture is still open.
pub const STATUS_MISSING_MOUSE_UP: &str = "missing mouse-up from previous gesture; restarting";
/// Status text when cancelled records include the active touch.
pub const STATUS_CANCEL_ACTIVE_TOUCH: &str = "touch cancelled; active touch ended";
/// Status text when cancelled records do not include the active touch.
pub const STATUS_CANCEL_OTHER_TOUCH: &str =
    "touch cancelled; active touch not among the cancelled records";
/// Status text when a second touch-start arrives mid-gesture.
pub const STATUS_OVERLAPPING_TOUCH_START: &str =
    "second touch-start while a touch gesture is active";

/// Touch gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveTouch {
    /// Identifier of the contact that opened the gesture.
    pub id: TouchId,
    /// Where the gesture started, surface-local.
    pub start: Point,
    /// Latest tracked position; absent until the first matching move. End
    /// events use this, not their own coordinates (touch-end coordinates are
    /// not meaningful on all devices).
    pub tracked: Option<Point>,
}

/// Mouse gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveMouse {
    /// Where the gesture started, surface-local.
    pub start: Point,
}

/// The per-surface gesture state.
///
/// A sum type instead of ad hoc flag/identifier fields: both devices active
/// at once is unrepresentable, and returning to [`GestureState::Idle`] drops
/// every tracked point by construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A touch owns the gesture.
    TouchActive(ActiveTouch),
    /// The mouse owns the gesture.
    MouseActive(ActiveMouse),
}

/// Which device a unified pointer transition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerSource {
    Touch(TouchId),
    Mouse,
}

/// Per-surface gesture tracker.
///
/// Invoked synchronously once per dispatched input event; events are
/// processed strictly in delivery order. Every anomaly path degrades to a
/// silent ignore, a status message, or a reported violation; the tracker
/// stays serviceable for the next event.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureTracker {
    offset: SurfaceOffset,
    state: GestureState,
}

impl GestureTracker {
    /// Create a tracker for a surface at the given page offset.
    #[must_use]
    pub const fn new(offset: SurfaceOffset) -> Self {
        Self {
            offset,
            state: GestureState::Idle,
        }
    }

    /// Current gesture state.
    #[must_use]
    pub const fn state(&self) -> GestureState {
        self.state
    }

    /// Check if no gesture is in progress.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    /// Check if a touch owns the gesture.
    #[must_use]
    pub const fn is_touch_active(&self) -> bool {
        matches!(self.state, GestureState::TouchActive(_))
    }

    /// Check if the mouse owns the gesture.
    #[must_use]
    pub const fn is_mouse_active(&self) -> bool {
        matches!(self.state, GestureState::MouseActive(_))
    }

    /// Identifier of the active touch, if a touch owns the gesture.
    #[must_use]
    pub const fn active_touch_id(&self) -> Option<TouchId> {
        match self.state {
            GestureState::TouchActive(active) => Some(active.id),
            _ => None,
        }
    }

    /// Refresh the surface's page offset (the surface may have moved).
    pub fn set_offset(&mut self, offset: SurfaceOffset) {
        self.offset = offset;
    }

    /// Drop any active gesture and return to idle.
    ///
    /// There is no timeout: a missed `touch-end` otherwise leaves the surface
    /// in `TouchActive` until a `touch-cancel` arrives. Hosts can call this
    /// for manual recovery.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Feed one input event through the state machine.
    ///
    /// Draw and status side effects go to `canvas` and `status`; the returned
    /// [`Outcome`] tells the host whether to suppress the browser's default
    /// handling ([`Outcome::should_suppress_default`]).
    pub fn handle(
        &mut self,
        input: &PointerInput,
        canvas: &mut dyn Canvas,
        status: &mut dyn StatusSink,
    ) -> Outcome {
        match input {
            PointerInput::TouchStart { touches } => self.on_touch_start(touches, canvas, status),
            PointerInput::TouchMove { changed } => self.on_touch_move(changed),
            PointerInput::TouchEnd { changed } => self.on_touch_end(changed, canvas),
            PointerInput::TouchCancel { changed } => self.on_touch_cancel(changed, status),
            PointerInput::MouseDown { page } => self.on_mouse_down(*page, canvas, status),
            PointerInput::MouseUp { page } => self.on_mouse_up(*page, canvas),
        }
    }

    fn on_touch_start(
        &mut self,
        touches: &[TouchRecord],
        canvas: &mut dyn Canvas,
        status: &mut dyn StatusSink,
    ) -> Outcome {
        match self.state {
            GestureState::TouchActive(active) => {
                // Two fingers claiming the single active slot is an
                // input-system inconsistency; report and keep the tracked
                // coordinates untouched.
                status.update(STATUS_OVERLAPPING_TOUCH_START);
                Outcome::Violation(ProtocolViolation::OverlappingTouchStart { active: active.id })
            }
            GestureState::MouseActive(_) => Outcome::Ignored(IgnoreReason::OtherDeviceActive),
            GestureState::Idle => match touches {
                [touch] => {
                    self.begin(PointerSource::Touch(touch.id), touch.page, canvas);
                    status.update(STATUS_ACTIVE);
                    Outcome::Acted
                }
                _ => Outcome::Ignored(IgnoreReason::AmbiguousTouchStart),
            },
        }
    }

    fn on_touch_move(&mut self, changed: &[TouchRecord]) -> Outcome {
        let offset = self.offset;
        match &mut self.state {
            GestureState::TouchActive(active) => {
                match changed.iter().find(|t| t.id == active.id) {
                    Some(touch) => {
                        active.tracked = Some(offset.to_local(touch.page));
                        Outcome::Acted
                    }
                    None => Outcome::Ignored(IgnoreReason::ForeignTouch),
                }
            }
            _ => Outcome::Ignored(IgnoreReason::NoActiveTouch),
        }
    }

    fn on_touch_end(&mut self, changed: &[TouchRecord], canvas: &mut dyn Canvas) -> Outcome {
        match self.state {
            GestureState::TouchActive(active) => {
                if changed.iter().any(|t| t.id == active.id) {
                    self.finish(active.start, active.tracked, canvas);
                    Outcome::Acted
                } else {
                    Outcome::Ignored(IgnoreReason::ForeignTouch)
                }
            }
            _ => Outcome::Ignored(IgnoreReason::NoActiveTouch),
        }
    }

    fn on_touch_cancel(&mut self, changed: &[TouchRecord], status: &mut dyn StatusSink) -> Outcome {
        match self.state {
            GestureState::TouchActive(active) => {
                // Cancel unconditionally, even if our touch is not among the
                // cancelled records; the status says which case it was.
                let matched = changed.iter().any(|t| t.id == active.id);
                self.state = GestureState::Idle;
                status.update(if matched {
                    STATUS_CANCEL_ACTIVE_TOUCH
                } else {
                    STATUS_CANCEL_OTHER_TOUCH
                });
                Outcome::Acted
            }
            _ => Outcome::Ignored(IgnoreReason::NoActiveTouch),
        }
    }

    fn on_mouse_down(
        &mut self,
        page: Point,
        canvas: &mut dyn Canvas,
        status: &mut dyn StatusSink,
    ) -> Outcome {
        match self.state {
            GestureState::TouchActive(_) => Outcome::Ignored(IgnoreReason::OtherDeviceActive),
            GestureState::MouseActive(_) => {
                // The previous gesture's mouse-up never arrived; restart.
                status.update(STATUS_MISSING_MOUSE_UP);
                self.begin(PointerSource::Mouse, page, canvas);
                Outcome::Recovered(Anomaly::MissingMouseUp)
            }
            GestureState::Idle => {
                self.begin(PointerSource::Mouse, page, canvas);
                status.update(STATUS_ACTIVE);
                Outcome::Acted
            }
        }
    }

    fn on_mouse_up(&mut self, page: Point, canvas: &mut dyn Canvas) -> Outcome {
        match self.state {
            GestureState::MouseActive(active) => {
                let end = self.offset.to_local(page);
                self.finish(active.start, Some(end), canvas);
                Outcome::Acted
            }
            _ => Outcome::Ignored(IgnoreReason::NoActiveMouse),
        }
    }

    /// Unified down-transition for both devices: record the start point and
    /// draw the start marker.
    fn begin(&mut self, source: PointerSource, page: Point, canvas: &mut dyn Canvas) {
        let start = self.offset.to_local(page);
        canvas.draw_circle(start);
        self.state = match source {
            PointerSource::Touch(id) => GestureState::TouchActive(ActiveTouch {
                id,
                start,
                tracked: None,
            }),
            PointerSource::Mouse => GestureState::MouseActive(ActiveMouse { start }),
        };
    }

    /// Unified up-transition: draw the connecting line and end marker when an
    /// end point is known, then return to idle.
    fn finish(&mut self, start: Point, end: Option<Point>, canvas: &mut dyn Canvas) {
        if let Some(end) = end {
            canvas.draw_line(start, end);
            canvas.draw_circle(end);
        }
        self.state = GestureState::Idle;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(SurfaceOffset::ZERO)
    }
}
