// Where each gallery entry lives on screen.
// Visual: entry 0 sits centered horizontally, a little below the middle;
// every following entry is shifted right by `stride`. The row as a whole
// is *not* centered, so a long catalog runs off the right edge.

use crate::config::Config;
use crate::types::Rect;

/// Base-size slot for catalog entry `index` in a `frame_w × frame_h` frame.
pub fn slot_rect(frame_w: u32, frame_h: u32, index: usize, cfg: &Config) -> Rect {
    let x = (frame_w / 2) as i32 - (cfg.display_width / 2) as i32 + index as i32 * cfg.stride;
    let y = (frame_h / 2) as i32 - (cfg.display_height / 2) as i32 + cfg.vertical_offset;
    Rect::new(x, y, cfg.display_width, cfg.display_height)
}

/// One unclipped base-size slot per catalog entry, in catalog order.
pub fn layout(frame_w: u32, frame_h: u32, entries: usize, cfg: &Config) -> Vec<Rect> {
    (0..entries)
        .map(|i| slot_rect(frame_w, frame_h, i, cfg))
        .collect()
}

impl Rect {
    /// Fit this slot into a `frame_w × frame_h` frame.
    ///
    /// Clipping is deliberately asymmetric:
    /// 1. A negative origin is clamped to 0 and the size is left alone.
    /// 2. Whatever then hangs past the right/bottom edge is cut off.
    ///
    /// The result may be empty (slot entirely off-frame) but never negative.
    /// Since the source image is always read from its top-left corner,
    /// the returned size is also the size of the source region to copy.
    pub fn clip_to_frame(&self, frame_w: u32, frame_h: u32) -> Rect {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let width = shrink_to_fit(x, self.width, frame_w);
        let height = shrink_to_fit(y, self.height, frame_h);
        Rect::new(x, y, width, height)
    }
}

// `origin` is already >= 0 here.
fn shrink_to_fit(origin: i32, len: u32, limit: u32) -> u32 {
    let room = limit as i64 - origin as i64;
    if room <= 0 {
        return 0;
    }
    (len as i64).min(room) as u32
}
