use crate::constants::GLOBE_ID;
use crate::dom;
use crate::frame::GlobeSpin;
use web_sys as web;

pub fn wire_globe_spin(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(globe) = dom::element_by_id::<web::HtmlElement>(document, GLOBE_ID) else {
        log::debug!("[globe] #{} missing, spin disabled", GLOBE_ID);
        return Ok(());
    };
    let spin = GlobeSpin::new(window.clone(), globe);
    dom::add_window_listener(window, "scroll", move || {
        spin.on_scroll();
    })
}
