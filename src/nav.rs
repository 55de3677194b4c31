use crate::constants::NAV_VISIBLE_CLASS;
use crate::core::ClassChange;
use web_sys as web;

#[inline]
pub fn apply(nav: &web::Element, change: ClassChange) {
    let cl = nav.class_list();
    _ = match change {
        ClassChange::Add => cl.add_1(NAV_VISIBLE_CLASS),
        ClassChange::Remove => cl.remove_1(NAV_VISIBLE_CLASS),
    };
}

#[inline]
pub fn is_visible(nav: &web::Element) -> bool {
    nav.class_list().contains(NAV_VISIBLE_CLASS)
}
