// Software compositing onto the live frame.
// Visual effects provided here:
// 1) The gallery row drawn over the camera image (hovered entry zoomed in).
// 2) A red square around the tracked badge.

use crate::config::Config;
use crate::layout::slot_rect;
use crate::types::{Frame, HoverState, Point};
use image::imageops::{self, FilterType};
use image::RgbImage;
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect as DrawRect;

/// Draw every gallery entry into its slot, in catalog order.
/// Visual: a row of thumbnails; the hovered one shows the top-left of a 1.5× zoom
/// inside the same slot (the slot itself never moves or grows).
pub fn draw_gallery(frame: &mut Frame, catalog: &[RgbImage], hover: HoverState, cfg: &Config) {
    if cfg.display_width == 0 || cfg.display_height == 0 {
        return;
    }
    let (frame_w, frame_h) = frame.dimensions();

    for (i, entry) in catalog.iter().enumerate() {
        // 1) Base-size thumbnail.
        let mut scaled = imageops::resize(entry, cfg.display_width, cfg.display_height, FilterType::Triangle);

        // 2) Hovered entry gets resized again; position is unaffected.
        if hover == Some(i) {
            let (ew, eh) = cfg.enlarged_size();
            if ew > 0 && eh > 0 {
                scaled = imageops::resize(&scaled, ew, eh, FilterType::Triangle);
            }
        }

        // 3) + 4) Base-size slot, clipped to the frame.
        let dst = slot_rect(frame_w, frame_h, i, cfg).clip_to_frame(frame_w, frame_h);

        // 5) Fully off-frame: nothing to draw.
        if dst.is_empty() {
            continue;
        }
        blit_top_left(frame, &scaled, dst.x as u32, dst.y as u32, dst.width, dst.height);
    }
}

/// Copy the top-left `w × h` block of `src` into `frame` at (x, y).
/// Caller guarantees the destination block is inside the frame.
fn blit_top_left(frame: &mut Frame, src: &RgbImage, x: u32, y: u32, w: u32, h: u32) {
    let w = w.min(src.width());
    let h = h.min(src.height());
    for sy in 0..h {
        for sx in 0..w {
            frame.put_pixel(x + sx, y + sy, *src.get_pixel(sx, sy));
        }
    }
}

/// Square outline of half-side `badge_radius` around `center`.
/// Visual: a red box follows the badge; parts outside the frame are simply not drawn.
pub fn draw_marker_box(frame: &mut Frame, center: Point, cfg: &Config) {
    let r = cfg.badge_radius.max(0);
    let side = (2 * r + 1) as u32;
    // Thickness grows inward, one ring per pixel.
    for t in 0..cfg.box_thickness {
        let inner = side.saturating_sub(2 * t);
        if inner == 0 {
            break;
        }
        let ring = DrawRect::at(center.x - r + t as i32, center.y - r + t as i32).of_size(inner, inner);
        draw_hollow_rect_mut(frame, ring, cfg.box_color);
    }
}

/// Gallery first, then the marker box on top. Mutates `frame` in place.
pub fn composite(frame: &mut Frame, catalog: &[RgbImage], hover: HoverState, marker: Option<Point>, cfg: &Config) {
    draw_gallery(frame, catalog, hover, cfg);
    if let Some(center) = marker {
        draw_marker_box(frame, center, cfg);
    }
}
