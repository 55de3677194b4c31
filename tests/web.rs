#![cfg(target_arch = "wasm32")]

use site_fx::constants::{DOT_MAP_ID, HERO_ID, NAV_ID, NAV_VISIBLE_CLASS};
use site_fx::core::ClassChange;
use site_fx::{nav, DotMap, GlobeSpin};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn mount<T: JsCast>(tag: &str, parent: &web::Node) -> T {
    let el = document().create_element(tag).unwrap();
    parent.append_child(&el).unwrap();
    el.dyn_into::<T>().unwrap()
}

#[wasm_bindgen_test]
fn nav_class_follows_changes() {
    let body = document().body().unwrap();
    let el: web::Element = mount("nav", &body);
    nav::apply(&el, ClassChange::Add);
    assert!(nav::is_visible(&el));
    assert!(el.class_list().contains(NAV_VISIBLE_CLASS));
    nav::apply(&el, ClassChange::Add);
    nav::apply(&el, ClassChange::Remove);
    assert!(!nav::is_visible(&el));
    el.remove();
}

#[wasm_bindgen_test]
async fn globe_spin_applies_rotation_once_per_frame() {
    let body = document().body().unwrap();
    let globe: web::HtmlElement = mount("div", &body);
    let spin = GlobeSpin::new(web::window().unwrap(), globe.clone());
    assert!(spin.on_scroll());
    assert!(!spin.on_scroll());
    assert!(!spin.on_scroll());
    assert!(spin.is_pending());

    // The spin's frame callback was queued first, so it has run by now.
    next_frame().await;
    let transform = globe.style().get_property_value("transform").unwrap();
    assert!(
        transform.starts_with("translateY(-50%) rotateY("),
        "unexpected transform {:?}",
        transform
    );
    assert!(!spin.is_pending());

    // Released gate lets the next scroll schedule again
    assert!(spin.on_scroll());
    next_frame().await;
    assert!(!spin.is_pending());
    globe.remove();
}

#[wasm_bindgen_test]
fn dot_map_sizes_canvas_to_container() {
    let window = web::window().unwrap();
    let body = document().body().unwrap();
    let container: web::HtmlElement = mount("div", &body);
    container
        .set_attribute("style", "width:900px;height:400px;padding:0")
        .unwrap();
    let canvas: web::HtmlCanvasElement = mount("canvas", &container);
    canvas.set_id(DOT_MAP_ID);

    let dot_map = DotMap::new(canvas).expect("2d context");
    let first = dot_map.redraw();
    assert!(first > 0);

    let dpr = window.device_pixel_ratio();
    let canvas = dot_map.canvas();
    assert_eq!(canvas.width(), (900.0 * dpr) as u32);
    assert_eq!(canvas.height(), (400.0 * dpr) as u32);
    let style = canvas.style();
    assert_eq!(style.get_property_value("width").unwrap(), "900px");
    assert_eq!(style.get_property_value("height").unwrap(), "400px");

    // Same container and ratio draw the same dots
    assert_eq!(dot_map.redraw(), first);
    container.remove();
}

#[wasm_bindgen_test]
async fn wiring_attaches_effects_to_present_elements() {
    let window = web::window().unwrap();
    let body = document().body().unwrap();

    let hero: web::HtmlElement = mount("section", &body);
    hero.set_id(HERO_ID);
    hero.set_attribute("style", "position:fixed;top:0;left:0;width:100px;height:100px").unwrap();
    let nav_el: web::Element = mount("nav", &body);
    nav_el.set_id(NAV_ID);
    nav::apply(&nav_el, ClassChange::Add);

    let container: web::HtmlElement = mount("div", &body);
    container
        .set_attribute("style", "width:600px;height:300px;padding:0")
        .unwrap();
    let canvas: web::HtmlCanvasElement = mount("canvas", &container);
    canvas.set_id(DOT_MAP_ID);

    site_fx::wire_all(&window, &document());

    // The dot map draws immediately on wiring
    let dpr = window.device_pixel_ratio();
    assert_eq!(canvas.width(), (600.0 * dpr) as u32);
    assert_eq!(canvas.height(), (300.0 * dpr) as u32);
    let style = canvas.style();
    assert_eq!(style.get_property_value("width").unwrap(), "600px");
    assert_eq!(style.get_property_value("height").unwrap(), "300px");

    // A hero pinned in the viewport drops the nav's visible class
    for _ in 0..10 {
        if !nav::is_visible(&nav_el) {
            break;
        }
        next_frame().await;
    }
    assert!(!nav::is_visible(&nav_el));

    hero.remove();
    nav_el.remove();
    container.remove();
}

#[wasm_bindgen_test]
fn wiring_tolerates_missing_elements() {
    let window = web::window().unwrap();
    let body = document().body().unwrap();
    let before = body.child_element_count();
    assert!(document().get_element_by_id(DOT_MAP_ID).is_none());

    site_fx::wire_all(&window, &document());
    assert_eq!(body.child_element_count(), before);
}
