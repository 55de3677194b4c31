// Host-side tests for the globe transform.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod transform {
    include!("../src/core/transform.rs");
}

use transform::*;

#[test]
fn rotation_is_proportional_to_scroll() {
    for s in [0.0, 1.0, 100.0, 333.0, 2400.0, 10_000.0] {
        assert_eq!(rotation_degrees(s), s * 0.15);
    }
}

#[test]
fn transform_combines_translate_and_rotate() {
    assert_eq!(globe_transform(0.0), "translateY(-50%) rotateY(0deg)");
    assert_eq!(globe_transform(100.0), "translateY(-50%) rotateY(15deg)");
    assert_eq!(globe_transform(150.0), "translateY(-50%) rotateY(22.5deg)");
    for s in [1.0, 7.0, 1234.0] {
        let t = globe_transform(s);
        assert!(t.starts_with("translateY(-50%) rotateY("));
        assert!(t.ends_with("deg)"));
        let angle: f64 = t["translateY(-50%) rotateY(".len()..t.len() - "deg)".len()]
            .parse()
            .unwrap();
        assert_eq!(angle, s * 0.15);
    }
}

#[test]
fn scroll_offset_prefers_scroll_y() {
    assert_eq!(resolve_scroll_offset(Some(420.0), Some(10.0)), 420.0);
    assert_eq!(resolve_scroll_offset(Some(420.0), None), 420.0);
}

#[test]
fn scroll_offset_falls_back_to_page_offset() {
    assert_eq!(resolve_scroll_offset(None, Some(64.0)), 64.0);
    assert_eq!(resolve_scroll_offset(Some(0.0), Some(64.0)), 64.0);
    assert_eq!(resolve_scroll_offset(Some(f64::NAN), Some(64.0)), 64.0);
}

#[test]
fn scroll_offset_defaults_to_zero() {
    assert_eq!(resolve_scroll_offset(None, None), 0.0);
    assert_eq!(resolve_scroll_offset(Some(0.0), None), 0.0);
    assert_eq!(resolve_scroll_offset(None, Some(f64::NAN)), 0.0);
}
