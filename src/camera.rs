// Opens the default camera and hands out RGB frames to the kiosk loop.
// Visual expectation: each `next_frame()` is one fresh picture of what the camera sees.

use gallery_art::{Error, Frame, FrameSource};

// Bring in nokhwa types for camera control.
use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

// A small wrapper around nokhwa::Camera so the frame loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,
    height: u32,
}

impl CameraCapture {
    /// Try to open camera `index` at a target resolution (falls back if not exact).
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        // The actual stream might choose a slightly different resolution.
        let actual = cam.resolution();

        Ok(Self {
            cam,
            width: actual.width(),
            height: actual.height(),
        })
    }

    /// Report the actual resolution the camera is delivering.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl FrameSource for CameraCapture {
    /// Blocks until the camera has a new frame, then decodes it to RGB.
    fn next_frame(&mut self) -> Result<Option<Frame>, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let rgb_img = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        let (w, h) = rgb_img.dimensions();
        if w == 0 || h == 0 {
            return Ok(None);
        }

        // Re-wrap the raw bytes so we don't depend on nokhwa's `image` version.
        let rgb = Frame::from_raw(w, h, rgb_img.into_raw())
            .ok_or_else(|| Error::CameraFrame("Decoded buffer size mismatch".into()))?;
        Ok(Some(rgb))
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        let _ = self.cam.stop_stream();
    }
}
