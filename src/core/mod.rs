pub mod dot_grid;
pub mod schedule;
pub mod transform;
pub mod visibility;
pub mod world_map;

pub use dot_grid::{plot, DotSink, Viewport};
pub use schedule::{Debounce, FrameGate};
pub use transform::{globe_transform, resolve_scroll_offset};
pub use visibility::{nav_class_change, ClassChange};
pub use world_map::{world_map, WorldMap};
