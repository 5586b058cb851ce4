// tests/test_gallery.rs — loading the gallery catalog from disk.

use gallery_art::gallery::{default_gallery_paths, load_catalog};
use image::{Rgb, RgbImage};
use std::path::PathBuf;

#[test]
fn default_paths_are_numbered_jpegs() {
    let names: Vec<PathBuf> = default_gallery_paths();
    assert_eq!(
        names,
        ["image1.jpg", "image2.jpg", "image3.jpg", "image4.jpg"]
            .iter()
            .map(PathBuf::from)
            .collect::<Vec<_>>()
    );
}

#[test]
fn missing_and_broken_files_are_skipped_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::TempDir::new()?;

    let first = dir.path().join("first.png");
    RgbImage::from_pixel(4, 3, Rgb([10, 20, 30])).save(&first)?;
    let second = dir.path().join("second.png");
    RgbImage::from_pixel(7, 2, Rgb([200, 100, 0])).save(&second)?;
    let broken = dir.path().join("broken.png");
    std::fs::write(&broken, b"not an image")?;
    let missing = dir.path().join("missing.png");

    let catalog = load_catalog(&[missing, first, broken, second]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].dimensions(), (4, 3));
    assert_eq!(*catalog[0].get_pixel(0, 0), Rgb([10, 20, 30]));
    assert_eq!(catalog[1].dimensions(), (7, 2));
    Ok(())
}

#[test]
fn nothing_loadable_gives_empty_catalog() {
    let catalog = load_catalog(&[PathBuf::from("/definitely/not/here.jpg")]);
    assert!(catalog.is_empty());
}
