//! Browser runtime for tracepad.
//!
//! Bridges DOM pointer events and the Canvas2D API to the core tracker.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
pub mod events;

#[cfg(target_arch = "wasm32")]
pub use app::{App, ParagraphStatus};
#[cfg(target_arch = "wasm32")]
pub use canvas2d::{Canvas2DRenderer, RenderStyle};
