//! Raw pointer input delivered by the host.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Touch identifier correlating start/move/end/cancel records that belong to
/// the same physical contact.
///
/// Assigned by the input system; unique among currently-pressed touches but
/// reusable after release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub i32);

impl TouchId {
    /// Create a new touch ID.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }
}

/// One device-reported touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchRecord {
    /// Identifier of the contact.
    pub id: TouchId,
    /// Position in page-absolute coordinates.
    pub page: Point,
}

impl TouchRecord {
    /// Create a new touch record.
    #[must_use]
    pub const fn new(id: TouchId, page: Point) -> Self {
        Self { id, page }
    }
}

/// A pointer input event, in page-absolute coordinates.
///
/// Touch events carry the device-reported record lists; mouse events carry a
/// single coordinate pair and no identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerInput {
    /// One or more touches began.
    TouchStart {
        /// Touches currently on the surface.
        touches: Vec<TouchRecord>,
    },
    /// Touches moved.
    TouchMove {
        /// Records that changed in this event.
        changed: Vec<TouchRecord>,
    },
    /// Touches lifted.
    TouchEnd {
        /// Records that changed in this event.
        changed: Vec<TouchRecord>,
    },
    /// Touches cancelled by the system (e.g. the user left the page).
    TouchCancel {
        /// Records that changed in this event.
        changed: Vec<TouchRecord>,
    },
    /// Mouse button pressed.
    MouseDown {
        /// Position of the press.
        page: Point,
    },
    /// Mouse button released.
    MouseUp {
        /// Position of the release.
        page: Point,
    },
}

impl PointerInput {
    /// Check if this is a touch event.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. }
                | Self::TouchMove { .. }
                | Self::TouchEnd { .. }
                | Self::TouchCancel { .. }
        )
    }

    /// Check if this is a mouse event.
    #[must_use]
    pub const fn is_mouse(&self) -> bool {
        matches!(self, Self::MouseDown { .. } | Self::MouseUp { .. })
    }

    /// Get the touch records if this is a touch event.
    #[must_use]
    pub fn touch_records(&self) -> Option<&[TouchRecord]> {
        match self {
            Self::TouchStart { touches } => Some(touches),
            Self::TouchMove { changed } | Self::TouchEnd { changed } | Self::TouchCancel { changed } => {
                Some(changed)
            }
            Self::MouseDown { .. } | Self::MouseUp { .. } => None,
        }
    }

    /// Check whether a touch event's records include the given identifier.
    #[must_use]
    pub fn mentions_touch(&self, id: TouchId) -> bool {
        self.touch_records()
            .is_some_and(|records| records.iter().any(|t| t.id == id))
    }
}
