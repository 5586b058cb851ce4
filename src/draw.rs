// Window that shows the composited kiosk frame.
// Visual: a window titled "Gallery Art" with the live camera, gallery and marker box.

use gallery_art::{Error, Frame, FrameSink};
use minifb::{Key, Window, WindowOptions};

pub struct Drawer {
    window: Window,      // the on-screen window you see
    packed: Vec<u32>,    // reused 0x00RRGGBB buffer for minifb
}

impl Drawer {
    /// Create a window sized to the (upscaled) frame.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, packed: Vec::with_capacity(width * height) })
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// 'q' is the kiosk's quit key; ESC works too.
    pub fn quit_pressed(&self) -> bool {
        self.window.is_key_down(Key::Q) || self.window.is_key_down(Key::Escape)
    }
}

impl FrameSink for Drawer {
    /// Pack RGB into 0x00RRGGBB and push it to the screen.
    fn present(&mut self, frame: &Frame) -> Result<(), Error> {
        self.packed.clear();
        self.packed.extend(frame.pixels().map(|p| {
            let [r, g, b] = p.0;
            ((r as u32) << 16) | ((g as u32) << 8) | b as u32
        }));
        self.window
            .update_with_buffer(&self.packed, frame.width() as usize, frame.height() as usize)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        !self.is_open() || self.quit_pressed()
    }
}
