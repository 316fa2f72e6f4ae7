//! The drawing boundary between the state machine and its renderer.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Rendering capability handed to the gesture tracker.
///
/// The tracker decides geometry only; style (marker radius, stroke width,
/// colors) belongs to the implementation.
pub trait Canvas {
    /// Draw a gesture marker circle centered at `center`.
    fn draw_circle(&mut self, center: Point);

    /// Draw a line from `from` to `to`.
    fn draw_line(&mut self, from: Point, to: Point);

    /// Erase the whole surface. Available to hosts that want to reset the
    /// drawing; the state machine never calls it on its own.
    fn clear(&mut self);
}

/// A recorded draw operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Marker circle.
    Circle {
        /// Center in surface-local coordinates.
        center: Point,
    },
    /// Connecting line.
    Line {
        /// Line start.
        from: Point,
        /// Line end.
        to: Point,
    },
    /// Full-surface erase.
    Clear,
}

/// A Canvas implementation that records draw operations as [`DrawCommand`]s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (ship commands to a remote renderer)
/// - Diffing (compare render outputs)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_circle(&mut self, center: Point) {
        self.commands.push(DrawCommand::Circle { center });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
}
