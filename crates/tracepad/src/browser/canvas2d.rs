//! Canvas2D renderer - draws gesture markers to an HTML5 canvas.

use tracepad_core::{Canvas, Point};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Visual style for gesture rendering.
#[derive(Debug, Clone)]
pub struct RenderStyle {
    /// Radius of the start/end markers, in pixels.
    pub circle_radius: f64,
    /// Stroke width for markers and the connecting line.
    pub line_width: f64,
    /// CSS stroke color.
    pub stroke_color: String,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            circle_radius: 40.0,
            line_width: 1.0,
            stroke_color: "#303030".to_string(),
        }
    }
}

/// Renderer that draws to an HTML5 Canvas 2D context.
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    style: RenderStyle,
}

impl Canvas2DRenderer {
    /// Create a new renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        Self::with_style(canvas, RenderStyle::default())
    }

    /// Create a renderer with a custom style.
    pub fn with_style(canvas: HtmlCanvasElement, style: RenderStyle) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {e:?}"))?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self { canvas, ctx, style })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Get the current style.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    fn apply_stroke_style(&self) {
        self.ctx.set_stroke_style_str(&self.style.stroke_color);
        self.ctx.set_line_width(self.style.line_width);
    }
}

impl Canvas for Canvas2DRenderer {
    fn draw_circle(&mut self, center: Point) {
        self.ctx.save();
        self.ctx.begin_path();
        self.apply_stroke_style();
        self.ctx
            .arc(
                f64::from(center.x),
                f64::from(center.y),
                self.style.circle_radius,
                0.0,
                std::f64::consts::TAU,
            )
            .ok();
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.ctx.save();
        self.ctx.begin_path();
        self.apply_stroke_style();
        self.ctx.move_to(f64::from(from.x), f64::from(from.y));
        self.ctx.line_to(f64::from(to.x), f64::from(to.y));
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }
}
