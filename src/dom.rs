use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it, `None` if absent or of another type.
pub fn element_by_id<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    let el = document.get_element_by_id(element_id)?;
    match el.dyn_into::<T>() {
        Ok(t) => Some(t),
        Err(_) => {
            log::warn!("#{} has an unexpected element type", element_id);
            None
        }
    }
}

/// Register a page-lifetime listener on the window.
pub fn add_window_listener(
    window: &web::Window,
    event: &str,
    handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
    closure.forget();
    Ok(())
}

#[inline]
pub fn device_pixel_ratio(window: &web::Window) -> f64 {
    let dpr = window.device_pixel_ratio();
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

/// Content size of the element's parent in CSS pixels.
pub fn parent_client_size(el: &web::Element) -> Option<DVec2> {
    let parent = el.parent_element()?;
    Some(DVec2::new(
        parent.client_width() as f64,
        parent.client_height() as f64,
    ))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("set {}: {:?}", property, e);
    }
}
