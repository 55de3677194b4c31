use crate::core::{globe_transform, resolve_scroll_offset, FrameGate};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rotates the globe from the scroll offset, at most once per animation frame.
pub struct GlobeSpin {
    window: web::Window,
    gate: Rc<FrameGate>,
    tick: Closure<dyn FnMut()>,
}

impl GlobeSpin {
    pub fn new(window: web::Window, globe: web::HtmlElement) -> Self {
        let gate = Rc::new(FrameGate::new());
        let gate_tick = gate.clone();
        let window_tick = window.clone();
        let tick = Closure::wrap(Box::new(move || {
            apply_rotation(&window_tick, &globe);
            gate_tick.release();
        }) as Box<dyn FnMut()>);
        Self { window, gate, tick }
    }

    /// Called for every scroll event; only the first one per frame schedules.
    pub fn on_scroll(&self) -> bool {
        self.gate.request(|| {
            match self
                .window
                .request_animation_frame(self.tick.as_ref().unchecked_ref())
            {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("requestAnimationFrame: {:?}", e);
                    false
                }
            }
        })
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }
}

pub fn current_scroll_offset(window: &web::Window) -> f64 {
    resolve_scroll_offset(window.scroll_y().ok(), window.page_y_offset().ok())
}

fn apply_rotation(window: &web::Window, globe: &web::HtmlElement) {
    let offset = current_scroll_offset(window);
    dom::set_style(globe, "transform", &globe_transform(offset));
}
