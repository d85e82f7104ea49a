use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::view::local::LocalHost;

/// World units between background grid lines.
const TILE_SIZE: f64 = 64.0;
const BACKGROUND: &str = "#101418";
const GRID: &str = "#1f2a33";
const PLAYER: &str = "#3fd0ff";

/// Draws a [`LocalHost`] onto a 2D canvas.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn draw(&self, host: &LocalHost) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        let offset = host.camera.offset;
        let (ox, oy) = (offset.x as f64, offset.y as f64);

        self.ctx.set_fill_style_str(BACKGROUND);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        // Tiled background, only for the world area under the viewport
        let bounds = host.bounds();
        let (world_w, world_h) = (bounds.width as f64, bounds.height as f64);
        self.ctx.set_stroke_style_str(GRID);
        self.ctx.set_line_width(1.0);
        self.ctx.begin_path();
        let mut x = (ox / TILE_SIZE).floor() * TILE_SIZE;
        while x <= (ox + w).min(world_w) {
            self.ctx.move_to(x - ox, 0.0);
            self.ctx.line_to(x - ox, (world_h - oy).min(h));
            x += TILE_SIZE;
        }
        let mut y = (oy / TILE_SIZE).floor() * TILE_SIZE;
        while y <= (oy + h).min(world_h) {
            self.ctx.move_to(0.0, y - oy);
            self.ctx.line_to((world_w - ox).min(w), y - oy);
            y += TILE_SIZE;
        }
        self.ctx.stroke();

        self.ctx.set_fill_style_str(PLAYER);
        for body in host.bodies() {
            let p = host.camera.world_to_screen(body.pos - body.half_extent);
            let size = body.half_extent * 2.0;
            self.ctx.fill_rect(p.x as f64, p.y as f64, size.x as f64, size.y as f64);
        }

        self.ctx.set_text_baseline("top");
        for text in &host.texts {
            let at = if text.style.fixed_to_camera {
                text.at
            } else {
                host.camera.world_to_screen(text.at)
            };
            self.ctx.set_font(&text.style.font);
            self.ctx.set_text_align(text.style.align.as_css());
            self.ctx.set_fill_style_str(&text.style.fill);
            if let Err(e) = self.ctx.fill_text(&text.text, at.x as f64, at.y as f64) {
                tracing::warn!(?e, "fill_text failed");
            }
        }
    }
}
