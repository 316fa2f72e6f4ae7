//! What the tracker did with an input event.

use crate::event::TouchId;
use std::fmt;

/// Benign reasons an event was ignored.
///
/// Ignores have no user-visible effect: no draw, no status update, no state
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A `touch-start` carried zero or several records; there is no single
    /// unambiguous gesture origin.
    AmbiguousTouchStart,
    /// A touch move/end/cancel arrived while no touch gesture was active.
    NoActiveTouch,
    /// The changed records did not include the active touch's identifier.
    ForeignTouch,
    /// A `mouse-up` arrived while no mouse gesture was active.
    NoActiveMouse,
    /// The other device owns the active gesture. Browsers synthesize mouse
    /// events for touch presses (and may deliver both for one physical tap),
    /// so the duplicate is expected and inert.
    OtherDeviceActive,
}

/// A device/input inconsistency the tracker recovers from by restarting the
/// gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// A `mouse-down` arrived while a mouse gesture was still open: the
    /// previous gesture's `mouse-up` never reached us.
    MissingMouseUp,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMouseUp => write!(f, "missing mouse-up from previous gesture"),
        }
    }
}

impl std::error::Error for Anomaly {}

/// An input sequence inconsistent with the single-active-gesture contract.
///
/// Reported, never fatal: the tracker stays in its current state rather than
/// guessing a recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolViolation {
    /// A second `touch-start` arrived before the active touch ended.
    OverlappingTouchStart {
        /// The touch that owns the active gesture.
        active: TouchId,
    },
}

impl fmt::Display for ProtocolViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverlappingTouchStart { active } => {
                write!(f, "touch-start while touch {} is active", active.0)
            }
        }
    }
}

impl std::error::Error for ProtocolViolation {}

/// Result of feeding one input event to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A guard matched and the state machine advanced.
    Acted,
    /// A recoverable anomaly was reported and the gesture restarted.
    Recovered(Anomaly),
    /// A protocol violation was reported; the state is unchanged.
    Violation(ProtocolViolation),
    /// Nothing to do.
    Ignored(IgnoreReason),
}

impl Outcome {
    /// Whether the host should suppress the browser's default handling.
    ///
    /// True exactly when a transition occurred (including an anomaly
    /// restart); ignored events and violations leave default behavior
    /// untouched.
    #[must_use]
    pub const fn should_suppress_default(&self) -> bool {
        matches!(self, Self::Acted | Self::Recovered(_))
    }

    /// Check if the event was a benign no-op.
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
