use super::world_map::WorldMap;
use crate::constants::{DOT_GAP_FACTOR, DOT_MIN_SIZE, DOT_WIDTH_DIVISOR};
use glam::DVec2;

/// CSS size of the drawing area plus the device pixel ratio backing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: DVec2,
    pub ratio: f64,
}

impl Viewport {
    /// Non-finite or non-positive ratios fall back to 1.
    pub fn new(width: f64, height: f64, ratio: f64) -> Self {
        let ratio = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            1.0
        };
        Self {
            size: DVec2::new(width, height),
            ratio,
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Backing buffer dimensions in device pixels, truncated like the DOM does
    /// when a fractional value is assigned to `canvas.width`.
    pub fn backing_size(&self) -> (u32, u32) {
        let px = self.size * self.ratio;
        (px.x as u32, px.y as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGrid {
    pub dot_size: f64,
    pub gap: f64,
}

impl DotGrid {
    pub fn for_width(width: f64) -> Self {
        let dot_size = DOT_MIN_SIZE.max(width / DOT_WIDTH_DIVISOR);
        Self {
            dot_size,
            gap: dot_size * DOT_GAP_FACTOR,
        }
    }
}

/// Anything that can receive square dots in CSS pixel coordinates.
pub trait DotSink {
    fn fill_dot(&mut self, x: f64, y: f64, size: f64);
}

impl<S: DotSink + ?Sized> DotSink for &mut S {
    fn fill_dot(&mut self, x: f64, y: f64, size: f64) {
        (**self).fill_dot(x, y, size)
    }
}

/// Dot x positions from `start` (inclusive) to `end` (exclusive).
///
/// Positions are accumulated by repeated addition so they match the
/// incremental stepping the map was tuned with.
#[derive(Debug, Clone)]
pub struct Columns {
    next: f64,
    end: f64,
    step: f64,
}

impl Iterator for Columns {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next < self.end {
            let x = self.next;
            self.next += self.step;
            Some(x)
        } else {
            None
        }
    }
}

#[inline]
pub fn columns(start: f64, end: f64, step: f64) -> Columns {
    // A non-positive step would never reach `end`.
    let end = if step > 0.0 { end } else { start };
    Columns {
        next: start,
        end,
        step,
    }
}

#[inline]
pub fn row_y(index: usize, total: usize, height: f64) -> f64 {
    (index as f64 / total as f64) * height
}

/// Plot every segment of `map` into `sink`, returning the number of dots.
pub fn plot<S: DotSink>(map: &WorldMap, size: DVec2, mut sink: S) -> usize {
    let (width, height) = (size.x, size.y);
    let grid = DotGrid::for_width(width);
    let total = map.len();
    let mut drawn = 0usize;
    for (index, row) in map.rows().iter().enumerate() {
        let y = row_y(index, total, height);
        if !(0.0..=height).contains(&y) {
            continue;
        }
        for (start, end) in row.segments() {
            for x in columns(start * width, end * width, grid.gap) {
                sink.fill_dot(x, y, grid.dot_size);
                drawn += 1;
            }
        }
    }
    drawn
}
