//! tracepad: pointer interaction tracking for canvas surfaces.
//!
//! Folds touch and mouse input into one drag gesture per surface and renders
//! it as a start marker, an end marker, and a connecting line. The state
//! machine lives in `tracepad-core`; this crate adds the browser runtime.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { App } from './tracepad.js';
//!
//! async function main() {
//!     await init();
//!     const app = new App('canvas', 'msgpara');
//! }
//! ```

pub mod browser;

pub use tracepad_core::{
    ActiveMouse, ActiveTouch, Anomaly, Canvas, DrawCommand, GestureState, GestureTracker,
    IgnoreReason, Outcome, Point, PointerInput, ProtocolViolation, RecordingCanvas,
    RecordingStatus, StatusSink, SurfaceOffset, TouchId, TouchRecord,
};
