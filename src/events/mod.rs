pub mod intersection;
pub mod resize;
pub mod scroll;

pub use intersection::wire_sticky_nav;
pub use resize::wire_dot_map;
pub use scroll::wire_globe_spin;
