//! WASM application entry point.

use super::canvas2d::Canvas2DRenderer;
use super::events::{mouse_event_to_input, surface_offset, touch_event_to_input};
use std::cell::RefCell;
use std::rc::Rc;
use tracepad_core::{Canvas, GestureTracker, Outcome, PointerInput, StatusSink};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

/// Status text shown once the handlers are wired.
const STATUS_READY: &str = "pointer tracker ready (touch or mouse)";

/// Status sink writing to a message paragraph on the host page.
pub struct ParagraphStatus {
    element: HtmlElement,
}

impl ParagraphStatus {
    /// Wrap a paragraph (or any text-bearing element).
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl StatusSink for ParagraphStatus {
    fn update(&mut self, text: &str) {
        self.element.set_inner_text(text);
    }
}

/// Everything an event handler touches, behind one shared cell.
struct Shared {
    tracker: GestureTracker,
    renderer: Canvas2DRenderer,
    status: ParagraphStatus,
    surface: HtmlCanvasElement,
}

impl Shared {
    fn dispatch(&mut self, input: &PointerInput) -> Outcome {
        // The surface may have moved since the last event.
        self.tracker.set_offset(surface_offset(&self.surface));
        self.tracker
            .handle(input, &mut self.renderer, &mut self.status)
    }
}

/// Main application runner for the browser.
///
/// Owns the tracker, renderer, and status paragraph, and keeps the event
/// closures alive for the page's lifetime.
#[wasm_bindgen]
pub struct App {
    shared: Rc<RefCell<Shared>>,
    touch_callbacks: Vec<Closure<dyn FnMut(TouchEvent)>>,
    mousedown_callback: Option<Closure<dyn FnMut(MouseEvent)>>,
    mouseup_callback: Option<Closure<dyn FnMut(MouseEvent)>>,
}

#[wasm_bindgen]
impl App {
    /// Attach to a canvas and a message paragraph by element ID.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, status_id: &str) -> Result<App, JsValue> {
        console_error_panic_hook::set_once();

        let document = window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| format!("Canvas '{canvas_id}' not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "Element is not a canvas")?;

        let msgpara = document
            .get_element_by_id(status_id)
            .ok_or_else(|| format!("Status element '{status_id}' not found"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| "Status element is not an HTML element")?;

        let renderer = Canvas2DRenderer::new(canvas.clone()).map_err(|e| JsValue::from_str(&e))?;

        let shared = Rc::new(RefCell::new(Shared {
            tracker: GestureTracker::new(surface_offset(&canvas)),
            renderer,
            status: ParagraphStatus::new(msgpara),
            surface: canvas.clone(),
        }));

        let mut app = Self {
            shared,
            touch_callbacks: Vec::new(),
            mousedown_callback: None,
            mouseup_callback: None,
        };
        app.install_listeners(&canvas, &document)?;
        app.shared.borrow_mut().status.update(STATUS_READY);
        Ok(app)
    }

    /// Dispatch an input event given as JSON, e.g. from host-page scripts or
    /// tests. Returns whether the default handling should be suppressed.
    pub fn dispatch_json(&self, json: &str) -> Result<bool, JsValue> {
        let input: PointerInput = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {e}")))?;
        let outcome = self.shared.borrow_mut().dispatch(&input);
        Ok(outcome.should_suppress_default())
    }

    /// Erase the surface. Never triggered by the tracker itself.
    pub fn clear(&self) {
        self.shared.borrow_mut().renderer.clear();
    }

    /// Drop any active gesture and return the tracker to idle.
    pub fn reset(&self) {
        self.shared.borrow_mut().tracker.reset();
    }
}

impl App {
    fn install_listeners(
        &mut self,
        canvas: &HtmlCanvasElement,
        document: &Document,
    ) -> Result<(), JsValue> {
        for event_type in ["touchstart", "touchmove", "touchend", "touchcancel"] {
            let shared = Rc::clone(&self.shared);
            let cb = Closure::<dyn FnMut(TouchEvent)>::new(move |e: TouchEvent| {
                let input = touch_event_to_input(&e, event_type);
                let outcome = shared.borrow_mut().dispatch(&input);
                if outcome.should_suppress_default() {
                    e.prevent_default();
                }
            });
            canvas.add_event_listener_with_callback(event_type, cb.as_ref().unchecked_ref())?;
            self.touch_callbacks.push(cb);
        }

        let mousedown = {
            let shared = Rc::clone(&self.shared);
            Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                let input = mouse_event_to_input(&e, "mousedown");
                let outcome = shared.borrow_mut().dispatch(&input);
                if outcome.should_suppress_default() {
                    e.prevent_default();
                }
            })
        };
        canvas.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        self.mousedown_callback = Some(mousedown);

        // A mouse-up does not necessarily land on the element that took its
        // mouse-down; listen on the body.
        let body = document.body().ok_or("No document body")?;
        let mouseup = {
            let shared = Rc::clone(&self.shared);
            Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
                let input = mouse_event_to_input(&e, "mouseup");
                let outcome = shared.borrow_mut().dispatch(&input);
                if outcome.should_suppress_default() {
                    e.prevent_default();
                }
            })
        };
        body.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;
        self.mouseup_callback = Some(mouseup);

        Ok(())
    }
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
