// The acquire → detect → hover → composite → present loop.
// Visual expectation: the window shows the (upscaled) live camera with the gallery
// row on top; holding the yellow badge over a thumbnail zooms it in.

use crate::compose::composite;
use crate::config::Config;
use crate::error::Error;
use crate::hover::resolve_hover;
use crate::layout::layout;
use crate::types::{Frame, HoverState};
use crate::vision::{find_marker, segment};
use image::imageops::{self, FilterType};
use image::RgbImage;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// Supplies camera frames. Blocks until one is ready.
/// `Ok(None)` means the stream delivered an empty frame and is finished.
pub trait FrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, Error>;
}

/// Receives each composited frame and owns the quit signal.
pub trait FrameSink {
    fn present(&mut self, frame: &Frame) -> Result<(), Error>;

    /// Polled once per iteration, after `present`.
    fn quit_requested(&self) -> bool;
}

/// Why `Kiosk::run` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The sink asked to stop (quit key or window closed).
    Quit,
    /// The source ran dry or failed.
    EndOfStream,
}

/// Per-process state: the read-only catalog plus the hover index carried between frames.
pub struct Kiosk {
    cfg: Config,
    catalog: Vec<RgbImage>,
    hover: HoverState,
}

impl Kiosk {
    pub fn new(cfg: Config, catalog: Vec<RgbImage>) -> Self {
        Self { cfg, catalog, hover: None }
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn catalog(&self) -> &[RgbImage] {
        &self.catalog
    }

    /// Run the whole pipeline on one camera frame and return what should be shown.
    /// Every stage reads the same (upscaled) frame; nothing here races the next capture.
    pub fn process_frame(&mut self, live: &Frame) -> Frame {
        /* 1) Upscale the working frame. */
        let mut frame = if self.cfg.upscale > 1 {
            let (w, h) = live.dimensions();
            imageops::resize(live, w * self.cfg.upscale, h * self.cfg.upscale, FilterType::Triangle)
        } else {
            live.clone()
        };
        let (w, h) = frame.dimensions();

        /* 2) Badge color → mask → marker position. */
        let mask = segment(&frame, &self.cfg.marker_range);
        let marker = find_marker(&mask);

        /* 3) Hover against this frame's base-size slots. */
        let hover = match marker {
            Some(p) => resolve_hover(p, &layout(w, h, self.catalog.len(), &self.cfg)),
            None => None,
        };
        if hover != self.hover {
            debug!("Hover: {:?} -> {:?}", self.hover, hover);
        }
        self.hover = hover;

        /* 4) Gallery + marker box drawn straight into the frame. */
        composite(&mut frame, &self.catalog, self.hover, marker, &self.cfg);
        frame
    }

    /// Pull, process and present frames until the sink quits or the source ends.
    pub fn run<S: FrameSource, K: FrameSink>(&mut self, source: &mut S, sink: &mut K) -> Result<LoopExit, Error> {
        let mut last_fps_time = Instant::now();
        let mut frames_this_second: u32 = 0;

        loop {
            let live = match source.next_frame() {
                Ok(Some(f)) if f.width() > 0 && f.height() > 0 => f,
                Ok(_) => {
                    info!("Camera delivered an empty frame; stopping");
                    return Ok(LoopExit::EndOfStream);
                }
                Err(e) => {
                    warn!("{e}; stopping");
                    return Ok(LoopExit::EndOfStream);
                }
            };

            let shown = self.process_frame(&live);
            sink.present(&shown)?;

            if sink.quit_requested() {
                info!("Quit requested");
                return Ok(LoopExit::Quit);
            }

            frames_this_second += 1;
            let now = Instant::now();
            if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
                let secs = now.duration_since(last_fps_time).as_secs_f32();
                info!("FPS: {:.1}", frames_this_second as f32 / secs);
                frames_this_second = 0;
                last_fps_time = now;
            }
        }
    }
}
