//! Geometric primitives: `Point` and `SurfaceOffset`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A 2D point in surface-local coordinates, relative to the surface's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A surface's offset from the page origin.
///
/// Pointer events arrive in page-absolute coordinates; the offset maps them
/// into the surface-local frame. Well-defined once the surface is attached to
/// the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceOffset {
    /// Distance from the page's left edge to the surface's left edge.
    pub left: f32,
    /// Distance from the page's top edge to the surface's top edge.
    pub top: f32,
}

impl SurfaceOffset {
    /// Zero offset (surface at the page origin).
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
    };

    /// Create a new offset.
    #[must_use]
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Translate a page-absolute point into surface-local coordinates.
    #[must_use]
    pub fn to_local(&self, page: Point) -> Point {
        Point::new(page.x - self.left, page.y - self.top)
    }
}
