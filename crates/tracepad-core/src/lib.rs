//! Core types and the gesture state machine for tracepad.
//!
//! This crate provides the platform-independent half of the tracker:
//! - Geometric primitives: [`Point`], [`SurfaceOffset`]
//! - Input model: [`PointerInput`], [`TouchId`], [`TouchRecord`]
//! - Draw boundary: [`Canvas`], [`DrawCommand`], [`RecordingCanvas`]
//! - Status channel: [`StatusSink`], [`RecordingStatus`]
//! - The state machine: [`GestureTracker`], [`GestureState`], [`Outcome`]

mod canvas;
mod event;
mod geometry;
mod outcome;
mod status;
mod tracker;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use event::{PointerInput, TouchId, TouchRecord};
pub use geometry::{Point, SurfaceOffset};
pub use outcome::{Anomaly, IgnoreReason, Outcome, ProtocolViolation};
pub use status::{RecordingStatus, StatusSink};
pub use tracker::{
    ActiveMouse, ActiveTouch, GestureState, GestureTracker, STATUS_ACTIVE,
    STATUS_CANCEL_ACTIVE_TOUCH, STATUS_CANCEL_OTHER_TOUCH, STATUS_MISSING_MOUSE_UP,
    STATUS_OVERLAPPING_TOUCH_START,
};
