use crate::constants::{HERO_ID, HERO_VISIBILITY_THRESHOLD, NAV_ID};
use crate::core::visibility;
use crate::dom;
use crate::nav;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Toggle the sticky nav whenever the hero enters or leaves the viewport.
pub fn wire_sticky_nav(document: &web::Document) -> anyhow::Result<()> {
    let (Some(hero), Some(nav_el)) = (
        dom::element_by_id::<web::Element>(document, HERO_ID),
        dom::element_by_id::<web::Element>(document, NAV_ID),
    ) else {
        log::debug!("[nav] #{} or #{} missing, sticky nav disabled", HERO_ID, NAV_ID);
        return Ok(());
    };

    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            let flags = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|entry| entry.is_intersecting());
            if let Some(change) = visibility::settle(flags) {
                nav::apply(&nav_el, change);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(HERO_VISIBILITY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(&hero);
    closure.forget();
    log::debug!("[nav] observing #{}", HERO_ID);
    Ok(())
}
