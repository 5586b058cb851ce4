// Core types shared by every stage of the frame pipeline.
// One frame flows through them strictly in order:
// Frame -> Mask -> Point -> HoverState -> (Frame, mutated in place).

use image::{GrayImage, RgbImage};

/// A camera frame: 3 channels, 8 bits each, origin top-left, row-major.
/// The frame loop owns it for one iteration; the compositor writes into it.
pub type Frame = RgbImage;

/// Binary presence mask, 0 or 255 per pixel. Always the size of the frame it came from.
pub type Mask = GrayImage;

/// Which gallery entry the marker is over, if any.
/// `None` is the "no selection" sentinel; `Some(i)` is always `< catalog.len()`.
pub type HoverState = Option<usize>;

/// Integer position in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Returned by the centroid estimator when the mask is empty.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in frame coordinates.
/// Origin may be negative (slot partly off-frame); size never is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Half-open containment: `[x, x+w) × [y, y+h)`.
    pub fn contains(&self, p: Point) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        let (x, y) = (self.x as i64, self.y as i64);
        px >= x && px < x + self.width as i64 && py >= y && py < y + self.height as i64
    }

    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
