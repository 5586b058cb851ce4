// Layout and detection constants, collected in one place.
// Defaults reproduce the original kiosk layout exactly; the CLI can override any of them.

use image::Rgb;

/// Gallery slot width/height before any hover enlargement.
pub const DEFAULT_DISPLAY_SIZE: (u32, u32) = (100, 100);
/// Horizontal distance between consecutive gallery slots.
pub const DEFAULT_STRIDE: i32 = 150;
/// The gallery row sits this far below the frame's vertical center.
pub const DEFAULT_VERTICAL_OFFSET: i32 = 50;
/// Half-side of the square drawn around the marker.
pub const DEFAULT_BADGE_RADIUS: i32 = 30;
/// Hovered entries are resized by this factor.
pub const DEFAULT_MAGNIFICATION: f32 = 1.5;
/// Camera frames are scaled up by this factor before anything else runs.
pub const DEFAULT_UPSCALE: u32 = 2;
pub const DEFAULT_BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const DEFAULT_BOX_THICKNESS: u32 = 2;

/// Inclusive hue/saturation/value window.
/// Hue uses the 0..180 half-degree scale, saturation and value use 0..255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl HsvRange {
    /// Yellow badge.
    pub const YELLOW: HsvRange = HsvRange {
        lower: [20, 100, 100],
        upper: [40, 255, 255],
    };

    #[inline]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| hsv[c] >= self.lower[c] && hsv[c] <= self.upper[c])
    }
}

impl Default for HsvRange {
    fn default() -> Self {
        Self::YELLOW
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub marker_range: HsvRange,
    pub display_width: u32,
    pub display_height: u32,
    pub stride: i32,
    pub vertical_offset: i32,
    pub badge_radius: i32,
    pub magnification: f32,
    pub upscale: u32,
    pub box_color: Rgb<u8>,
    pub box_thickness: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker_range: HsvRange::YELLOW,
            display_width: DEFAULT_DISPLAY_SIZE.0,
            display_height: DEFAULT_DISPLAY_SIZE.1,
            stride: DEFAULT_STRIDE,
            vertical_offset: DEFAULT_VERTICAL_OFFSET,
            badge_radius: DEFAULT_BADGE_RADIUS,
            magnification: DEFAULT_MAGNIFICATION,
            upscale: DEFAULT_UPSCALE,
            box_color: DEFAULT_BOX_COLOR,
            box_thickness: DEFAULT_BOX_THICKNESS,
        }
    }
}

impl Config {
    /// Size a hovered entry is resized to. Fractional pixels are truncated.
    pub fn enlarged_size(&self) -> (u32, u32) {
        (
            (self.display_width as f32 * self.magnification) as u32,
            (self.display_height as f32 * self.magnification) as u32,
        )
    }
}
