#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
pub mod nav;
mod render;

pub use frame::GlobeSpin;
pub use render::DotMap;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    wire_all(&window, &document);
    Ok(())
}

/// Attach every effect whose elements exist. Each one is independent, so a
/// failure is logged and the rest are still wired.
pub fn wire_all(window: &web::Window, document: &web::Document) {
    if let Err(e) = events::wire_sticky_nav(document) {
        log::error!("[nav] {:?}", e);
    }
    if let Err(e) = events::wire_globe_spin(window, document) {
        log::error!("[globe] {:?}", e);
    }
    if let Err(e) = events::wire_dot_map(window, document) {
        log::error!("[dot-map] {:?}", e);
    }
}
