use crate::constants::{DOT_MAP_ID, RESIZE_DEBOUNCE_MS};
use crate::core::Debounce;
use crate::dom;
use crate::render::DotMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draw the dot map once, then redraw it after each burst of resizes settles.
pub fn wire_dot_map(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(document, DOT_MAP_ID) else {
        log::debug!("[dot-map] #{} missing, map disabled", DOT_MAP_ID);
        return Ok(());
    };
    let Some(dot_map) = DotMap::new(canvas) else {
        log::warn!("[dot-map] no 2d context, map disabled");
        return Ok(());
    };
    let dot_map = Rc::new(dot_map);
    dot_map.redraw();

    let debounce = Rc::new(Debounce::new());
    let debounce_fire = debounce.clone();
    let dot_map_fire = dot_map.clone();
    let redraw = Closure::wrap(Box::new(move || {
        debounce_fire.fired();
        dot_map_fire.redraw();
    }) as Box<dyn FnMut()>);

    let window_resize = window.clone();
    dom::add_window_listener(window, "resize", move || {
        debounce.rearm(
            |handle| window_resize.clear_timeout_with_handle(handle),
            || {
                window_resize
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        redraw.as_ref().unchecked_ref(),
                        RESIZE_DEBOUNCE_MS,
                    )
                    .map_err(|e| log::warn!("setTimeout: {:?}", e))
                    .ok()
            },
        );
    })
}
