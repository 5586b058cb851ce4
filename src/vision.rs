// Marker detection for one frame: color segmentation, then centroid.
// Visual expectation: the mask is white exactly where the badge color shows up,
// and the centroid lands in the middle of that white blob.
use crate::config::HsvRange;
use crate::types::{Frame, Mask, Point};
use image::Luma;

/// Convert one RGB pixel to 8-bit hue/saturation/value.
/// Hue is in half-degrees (0..180) so it fits a byte; S and V are 0..255.
pub fn rgb_to_hsv(rgb: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as f32;

    // Value is the brightest channel; saturation is spread relative to it.
    let v = max;
    let s = if max == 0 {
        0
    } else {
        (delta * 255.0 / max as f32).round() as u8
    };

    // Which channel is the max decides the 60° sector.
    let (rf, gf, bf) = (r as f32, g as f32, b as f32);
    let mut h_deg = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (gf - bf) / delta
    } else if max == g {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    if h_deg < 0.0 {
        h_deg += 360.0;
    }
    let mut h = (h_deg / 2.0).round() as u32;
    if h >= 180 {
        h -= 180;
    }

    [h as u8, s, v]
}

/// Build the presence mask: 255 where the pixel's HSV falls inside `range` (inclusive), 0 elsewhere.
/// What you'd *see* if you showed it: a black frame with the badge cut out in white.
pub fn segment(frame: &Frame, range: &HsvRange) -> Mask {
    let (w, h) = frame.dimensions();
    Mask::from_fn(w, h, |x, y| {
        let px = frame.get_pixel(x, y);
        if range.contains(rgb_to_hsv(px.0)) {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    })
}

/// Mean position of all "on" pixels, rounded to the nearest integer.
/// An all-off mask has no centroid; `Point::ORIGIN` is returned instead of dividing by zero.
pub fn centroid(mask: &Mask) -> Point {
    find_marker(mask).unwrap_or(Point::ORIGIN)
}

/// Like `centroid`, but keeps "nothing detected" distinct from a real blob near (0,0).
pub fn find_marker(mask: &Mask) -> Option<Point> {
    // Binary moments: any non-zero pixel weighs 1.
    let (mut m00, mut m10, mut m01) = (0u64, 0u64, 0u64);
    for (x, y, px) in mask.enumerate_pixels() {
        if px[0] == 0 {
            continue;
        }
        m00 += 1;
        m10 += x as u64;
        m01 += y as u64;
    }

    if m00 == 0 {
        return None;
    }

    let cx = (m10 as f64 / m00 as f64).round_ties_even() as i32;
    let cy = (m01 as f64 / m00 as f64).round_ties_even() as i32;
    Some(Point::new(cx, cy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_map_to_half_degree_hues() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
        assert_eq!(rgb_to_hsv([255, 255, 0]), [30, 255, 255]);
    }

    #[test]
    fn grays_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsv([0, 0, 0]), [0, 0, 0]);
        assert_eq!(rgb_to_hsv([128, 128, 128]), [0, 0, 128]);
        assert_eq!(rgb_to_hsv([255, 255, 255]), [0, 0, 255]);
    }

    #[test]
    fn hue_just_below_red_wraps_into_range() {
        // 359° would round to 180 half-degrees, which is the same as 0.
        let [h, _, _] = rgb_to_hsv([255, 0, 1]);
        assert!(h < 180);
    }
}
