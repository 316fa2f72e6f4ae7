//! Browser event handling - converts web events to tracepad inputs.

use tracepad_core::{Point, PointerInput, SurfaceOffset, TouchId, TouchRecord};
use web_sys::{HtmlElement, MouseEvent, Touch, TouchEvent, TouchList};

/// Read a surface's current offset from the page origin.
///
/// Re-read per event: the surface may move as the page reflows.
pub fn surface_offset(element: &HtmlElement) -> SurfaceOffset {
    SurfaceOffset::new(element.offset_left() as f32, element.offset_top() as f32)
}

fn touch_to_record(touch: &Touch) -> TouchRecord {
    TouchRecord::new(
        TouchId::new(touch.identifier()),
        Point::new(touch.page_x() as f32, touch.page_y() as f32),
    )
}

fn list_to_records(list: &TouchList) -> Vec<TouchRecord> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| touch_to_record(&t))
        .collect()
}

/// Convert a web_sys `TouchEvent` to a tracepad input.
///
/// Start events report the touches currently on the surface; the others
/// report only the records that changed.
pub fn touch_event_to_input(event: &TouchEvent, event_type: &str) -> PointerInput {
    match event_type {
        "touchstart" => PointerInput::TouchStart {
            touches: list_to_records(&event.touches()),
        },
        "touchend" => PointerInput::TouchEnd {
            changed: list_to_records(&event.changed_touches()),
        },
        "touchcancel" => PointerInput::TouchCancel {
            changed: list_to_records(&event.changed_touches()),
        },
        _ => PointerInput::TouchMove {
            changed: list_to_records(&event.changed_touches()),
        },
    }
}

/// Convert a web_sys `MouseEvent` to a tracepad input.
pub fn mouse_event_to_input(event: &MouseEvent, event_type: &str) -> PointerInput {
    let page = Point::new(event.page_x() as f32, event.page_y() as f32);
    match event_type {
        "mousedown" => PointerInput::MouseDown { page },
        _ => PointerInput::MouseUp { page },
    }
}
