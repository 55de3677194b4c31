/// Element ids, class names and tuning constants for the page effects.
///
/// Every behaviour looks its elements up by these ids; a missing element
/// simply disables the behaviour that needs it.
// Element ids
pub const HERO_ID: &str = "hero";
pub const NAV_ID: &str = "nav";
pub const GLOBE_ID: &str = "globe";
pub const DOT_MAP_ID: &str = "dot-map";

// Sticky nav
pub const NAV_VISIBLE_CLASS: &str = "nav--visible";
pub const HERO_VISIBILITY_THRESHOLD: f64 = 0.05; // fraction of hero that counts as "in view"

// Globe spin
pub const GLOBE_DEGREES_PER_PX: f64 = 0.15; // rotation per CSS pixel of vertical scroll
pub const GLOBE_TRANSLATE_Y: &str = "-50%"; // keeps the globe vertically centred

// Dot map
pub const RESIZE_DEBOUNCE_MS: i32 = 200;
pub const DOT_MIN_SIZE: f64 = 2.0;
pub const DOT_WIDTH_DIVISOR: f64 = 300.0; // dot size grows with container width
pub const DOT_GAP_FACTOR: f64 = 1.8; // horizontal pitch as a multiple of dot size
pub const DOT_COLOR: &str = "#4a4a4a";
