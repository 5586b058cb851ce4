// Loads the gallery catalog once at startup.
// Visual expectation: each file that decodes becomes one thumbnail in the row,
// in the order given; files that are missing or broken just leave no slot.
use image::{ImageReader, RgbImage};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// How many numbered images the kiosk looks for by default.
pub const DEFAULT_GALLERY_LEN: usize = 4;

/// `image1.jpg`, `image2.jpg`, ... in the current directory.
pub fn default_gallery_paths() -> Vec<PathBuf> {
    (1..=DEFAULT_GALLERY_LEN)
        .map(|i| PathBuf::from(format!("image{i}.jpg")))
        .collect()
}

/// Decode every path into an RGB image, silently dropping the ones that fail.
/// The catalog may come back shorter than `paths` (even empty).
pub fn load_catalog<P: AsRef<Path>>(paths: &[P]) -> Vec<RgbImage> {
    let catalog: Vec<RgbImage> = paths
        .iter()
        .filter_map(|p| load_entry(p.as_ref()))
        .collect();
    info!("Gallery: {} of {} images loaded", catalog.len(), paths.len());
    catalog
}

fn load_entry(path: &Path) -> Option<RgbImage> {
    let decoded = ImageReader::open(path)
        .map_err(|e| e.to_string())
        .and_then(|r| r.decode().map_err(|e| e.to_string()));
    match decoded {
        Ok(img) => {
            debug!("Gallery: loaded {} ({}x{})", path.display(), img.width(), img.height());
            Some(img.to_rgb8())
        }
        Err(e) => {
            debug!("Gallery: skipping {}: {e}", path.display());
            None
        }
    }
}
