use crate::constants::{GLOBE_DEGREES_PER_PX, GLOBE_TRANSLATE_Y};

/// Vertical scroll offset, preferring `scrollY` and falling back to
/// `pageYOffset` for engines that leave the former unset or zero.
#[inline]
pub fn resolve_scroll_offset(scroll_y: Option<f64>, page_y_offset: Option<f64>) -> f64 {
    scroll_y
        .filter(|v| *v != 0.0 && !v.is_nan())
        .or(page_y_offset)
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

#[inline]
pub fn rotation_degrees(scroll_offset: f64) -> f64 {
    scroll_offset * GLOBE_DEGREES_PER_PX
}

/// CSS transform for the globe at the given scroll offset.
pub fn globe_transform(scroll_offset: f64) -> String {
    format!(
        "translateY({}) rotateY({}deg)",
        GLOBE_TRANSLATE_Y,
        rotation_degrees(scroll_offset)
    )
}
