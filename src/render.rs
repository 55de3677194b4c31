use crate::constants::DOT_COLOR;
use crate::core::{plot, world_map, DotSink, Viewport, WorldMap};
use crate::dom;
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas-backed dot sink; coordinates are CSS pixels after `scale(ratio)`.
struct CanvasDots<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl DotSink for CanvasDots<'_> {
    #[inline]
    fn fill_dot(&mut self, x: f64, y: f64, size: f64) {
        self.ctx.fill_rect(x, y, size, size);
    }
}

pub struct DotMap {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    map: WorldMap,
}

impl DotMap {
    /// `None` when the canvas has no 2D context to draw with.
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok()?,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("2d context error: {:?}", e);
                return None;
            }
        };
        Some(Self {
            canvas,
            ctx,
            map: world_map(),
        })
    }

    /// Viewport the next redraw would use, `None` for a detached canvas.
    pub fn measure(&self) -> Option<Viewport> {
        let window = web::window()?;
        let size = dom::parent_client_size(&self.canvas)?;
        Some(Viewport::new(
            size.x,
            size.y,
            dom::device_pixel_ratio(&window),
        ))
    }

    /// Full redraw at the current container size; returns the dot count.
    pub fn redraw(&self) -> usize {
        let Some(viewport) = self.measure() else {
            log::debug!("dot map: canvas has no container, skipping");
            return 0;
        };
        let started = Instant::now();
        let (w_px, h_px) = viewport.backing_size();
        // Resizing the backing buffer also resets the context transform.
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        dom::set_style(&self.canvas, "width", &format!("{}px", viewport.width()));
        dom::set_style(&self.canvas, "height", &format!("{}px", viewport.height()));
        _ = self.ctx.scale(viewport.ratio, viewport.ratio);
        self.ctx.clear_rect(0.0, 0.0, viewport.width(), viewport.height());
        self.ctx.set_fill_style_str(DOT_COLOR);

        let drawn = plot(&self.map, viewport.size, CanvasDots { ctx: &self.ctx });
        log::debug!(
            "dot map: {} dots at {}x{} @{} in {:.2}ms",
            drawn,
            viewport.width(),
            viewport.height(),
            viewport.ratio,
            started.elapsed().as_secs_f64() * 1000.0
        );
        drawn
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}
