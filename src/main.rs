// What you SEE:
// • Live camera (scaled up) is always the base image.
// • A row of gallery pictures sits just below the middle of the window.
// • Hold a yellow badge up to the camera: a red box tracks it, and the
//   picture under the box zooms in.
// • Q (or ESC, or closing the window) quits.

mod camera;
mod draw;

use camera::CameraCapture;
use clap::Parser;
use draw::Drawer;
use gallery_art::config::{self, Config, HsvRange};
use gallery_art::gallery::{default_gallery_paths, load_catalog};
use gallery_art::{Error, Kiosk};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gallery-art")]
#[command(about = "Hover over a picture gallery with a colored badge held up to the camera")]
struct Cli {
    /// Gallery images, in display order (missing files are skipped)
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Camera device index
    #[arg(long, default_value_t = 0)]
    camera: u32,

    /// Requested capture width (the camera may pick something close)
    #[arg(long, default_value_t = 640)]
    capture_width: u32,

    /// Requested capture height
    #[arg(long, default_value_t = 480)]
    capture_height: u32,

    /// Scale factor applied to every camera frame
    #[arg(long, default_value_t = config::DEFAULT_UPSCALE)]
    upscale: u32,

    /// Gallery slot width
    #[arg(long, default_value_t = config::DEFAULT_DISPLAY_SIZE.0)]
    display_width: u32,

    /// Gallery slot height
    #[arg(long, default_value_t = config::DEFAULT_DISPLAY_SIZE.1)]
    display_height: u32,

    /// Horizontal distance between gallery slots
    #[arg(long, default_value_t = config::DEFAULT_STRIDE)]
    stride: i32,

    /// Distance of the gallery row below the frame center
    #[arg(long, default_value_t = config::DEFAULT_VERTICAL_OFFSET, allow_hyphen_values = true)]
    offset: i32,

    /// Half-side of the box drawn around the badge
    #[arg(long, default_value_t = config::DEFAULT_BADGE_RADIUS)]
    badge_radius: i32,

    /// Zoom factor for the hovered picture
    #[arg(long, default_value_t = config::DEFAULT_MAGNIFICATION)]
    magnification: f32,

    /// Lower H,S,V bound of the badge color (H in 0..180)
    #[arg(long, value_delimiter = ',', num_args = 3, default_values_t = HsvRange::YELLOW.lower)]
    hsv_lower: Vec<u8>,

    /// Upper H,S,V bound of the badge color
    #[arg(long, value_delimiter = ',', num_args = 3, default_values_t = HsvRange::YELLOW.upper)]
    hsv_upper: Vec<u8>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_config(&self) -> Config {
        Config {
            marker_range: HsvRange {
                lower: hsv_triplet(&self.hsv_lower, HsvRange::YELLOW.lower),
                upper: hsv_triplet(&self.hsv_upper, HsvRange::YELLOW.upper),
            },
            display_width: self.display_width,
            display_height: self.display_height,
            stride: self.stride,
            vertical_offset: self.offset,
            badge_radius: self.badge_radius,
            magnification: self.magnification,
            upscale: self.upscale.max(1),
            ..Config::default()
        }
    }
}

// clap enforces exactly three values; fall back anyway rather than index out of bounds.
fn hsv_triplet(v: &[u8], fallback: [u8; 3]) -> [u8; 3] {
    match v {
        [h, s, val] => [*h, *s, *val],
        _ => fallback,
    }
}

fn main() -> Result<(), Error> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let cfg = args.to_config();
    info!("Config: {cfg:?}");

    /* --- Gallery (once, read-only afterwards) --- */
    let paths = if args.images.is_empty() { default_gallery_paths() } else { args.images.clone() };
    let catalog = load_catalog(&paths);

    /* --- Camera + window ---
       The window matches the upscaled frame, since that is what gets shown. */
    let mut cam = CameraCapture::new(args.camera, args.capture_width, args.capture_height)?;
    let (w, h) = cam.resolution();
    info!("Camera: {w}x{h}, shown at {}x{}", w * cfg.upscale, h * cfg.upscale);
    let mut drawer = Drawer::new("Gallery Art", (w * cfg.upscale) as usize, (h * cfg.upscale) as usize)?;

    /* ------------------------------ Main loop ------------------------------ */
    let mut kiosk = Kiosk::new(cfg, catalog);
    let exit = kiosk.run(&mut cam, &mut drawer)?;
    info!("Stopped: {exit:?}");

    Ok(())
}
