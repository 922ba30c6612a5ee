//! Image variants
//!
//! Loads one image (download or local file) and derives a fixed set of
//! transformed copies, each saved as a JPEG.

use std::path::{Path, PathBuf};

use image::imageops::colorops::{dither, BiLevel};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgb};
use imageproc::geometric_transformations::{rotate_about_center, Interpolation};

use crate::config::VariantPreferences;
use crate::error::{GenError, Result};

/// One derived image and the file name it is saved under
#[derive(Debug, Clone)]
pub struct Variant {
    pub file_name: &'static str,
    pub image: DynamicImage,
}

/// Outcome of [`save_variants`]
#[derive(Debug, Default)]
pub struct SaveSummary {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<(&'static str, GenError)>,
}

/// Download an image with a single blocking GET and decode it
pub fn fetch_image(url: &str) -> Result<DynamicImage> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;
    log::info!("downloaded {} bytes from {}", bytes.len(), url);
    load_image_from_bytes(&bytes)
}

/// Decode an image held in memory
pub fn load_image_from_bytes(bytes: &[u8]) -> Result<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Load from a local path if one exists, otherwise treat `source` as a URL
pub fn load_source(source: &str) -> Result<DynamicImage> {
    let path = Path::new(source);
    if path.is_file() {
        return Ok(image::open(path)?);
    }
    fetch_image(source)
}

/// Build every variant in output order
///
/// The crop is skipped when its box lies entirely outside the image.
pub fn build_variants(image: &DynamicImage, prefs: &VariantPreferences) -> Vec<Variant> {
    let mut variants = vec![
        Variant {
            file_name: "image.jpg",
            image: DynamicImage::ImageRgb8(image.to_rgb8()),
        },
        Variant {
            file_name: "resized_image.jpg",
            image: resize_to_width(image, prefs.resize_width),
        },
        Variant {
            file_name: "rotated_image.jpg",
            image: rotate(image, prefs.rotate_degrees),
        },
    ];

    match crop(image, prefs.crop) {
        Some(cropped) => variants.push(Variant {
            file_name: "cropped_image.jpg",
            image: cropped,
        }),
        None => log::warn!("crop box {:?} lies outside the image, skipping", prefs.crop),
    }

    variants.push(Variant {
        file_name: "grayscale_image.jpg",
        image: DynamicImage::ImageLuma8(image.to_luma8()),
    });
    variants.push(Variant {
        file_name: "black_and_white_image.jpg",
        image: monochrome(image),
    });

    variants
}

/// Scale to `width`, keeping the aspect ratio (height rounded down)
pub fn resize_to_width(image: &DynamicImage, width: u32) -> DynamicImage {
    let (w, h) = image.dimensions();
    let width = width.max(1);
    let height = ((width as u64 * h as u64) / w.max(1) as u64).max(1) as u32;
    image.resize_exact(width, height, FilterType::CatmullRom)
}

/// Rotate counter-clockwise about the centre on a same-sized black canvas
pub fn rotate(image: &DynamicImage, degrees: f32) -> DynamicImage {
    let rgb = image.to_rgb8();
    // imageproc turns clockwise for positive angles
    let rotated = rotate_about_center(
        &rgb,
        -degrees.to_radians(),
        Interpolation::Nearest,
        Rgb([0, 0, 0]),
    );
    DynamicImage::ImageRgb8(rotated)
}

/// Crop to `[left, top, right, bottom]`, clamped to the image bounds
pub fn crop(image: &DynamicImage, [left, top, right, bottom]: [u32; 4]) -> Option<DynamicImage> {
    let (w, h) = image.dimensions();
    let right = right.min(w);
    let bottom = bottom.min(h);
    if left >= right || top >= bottom {
        return None;
    }
    Some(image.crop_imm(left, top, right - left, bottom - top))
}

/// Grayscale reduced to pure black and white with error diffusion
pub fn monochrome(image: &DynamicImage) -> DynamicImage {
    let mut gray = image.to_luma8();
    dither(&mut gray, &BiLevel);
    DynamicImage::ImageLuma8(gray)
}

/// Write each variant into `dir`; a failing variant does not stop the rest
pub fn save_variants(variants: &[Variant], dir: &Path) -> SaveSummary {
    let mut summary = SaveSummary::default();
    for variant in variants {
        let path = dir.join(variant.file_name);
        match variant.image.save(&path) {
            Ok(()) => {
                log::info!("wrote {}", path.display());
                summary.saved.push(path);
            }
            Err(e) => summary.failed.push((variant.file_name, e.into())),
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn white_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([255, 255, 255])))
    }

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        let mut img = RgbImage::new(width, height);
        for x in 0..width {
            for y in 0..height {
                let v = ((x + y) as f32 / (width + height) as f32 * 255.0) as u8;
                img.put_pixel(x, y, Rgb([v, v, v]));
            }
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_resize_keeps_aspect() {
        let resized = resize_to_width(&white_image(400, 300), 800);
        assert_eq!(resized.dimensions(), (800, 600));

        let resized = resize_to_width(&white_image(3, 2), 800);
        assert_eq!(resized.dimensions(), (800, 533));
    }

    #[test]
    fn test_rotate_keeps_canvas_and_fills_black() {
        let rotated = rotate(&white_image(400, 300), 45.0).to_rgb8();
        assert_eq!(rotated.dimensions(), (400, 300));
        assert_eq!(rotated.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(rotated.get_pixel(200, 150).0, [255, 255, 255]);
    }

    #[test]
    fn test_crop_box_and_clamping() {
        let image = white_image(400, 300);
        assert_eq!(crop(&image, [100, 100, 300, 300]).unwrap().dimensions(), (200, 200));

        let small = white_image(150, 120);
        assert_eq!(crop(&small, [100, 100, 300, 300]).unwrap().dimensions(), (50, 20));

        let tiny = white_image(50, 50);
        assert!(crop(&tiny, [100, 100, 300, 300]).is_none());
    }

    #[test]
    fn test_monochrome_is_bilevel() {
        let mono = monochrome(&gradient_image(64, 64)).to_luma8();
        assert!(mono.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
        assert!(mono.pixels().any(|p| p.0[0] == 0));
        assert!(mono.pixels().any(|p| p.0[0] == 255));
    }

    #[test]
    fn test_build_variants_order() {
        let variants = build_variants(&gradient_image(400, 300), &VariantPreferences::default());
        let names: Vec<&str> = variants.iter().map(|v| v.file_name).collect();
        assert_eq!(
            names,
            vec![
                "image.jpg",
                "resized_image.jpg",
                "rotated_image.jpg",
                "cropped_image.jpg",
                "grayscale_image.jpg",
                "black_and_white_image.jpg",
            ]
        );
    }

    #[test]
    fn test_build_variants_skips_empty_crop() {
        let variants = build_variants(&white_image(60, 40), &VariantPreferences::default());
        assert_eq!(variants.len(), 5);
        assert!(variants.iter().all(|v| v.file_name != "cropped_image.jpg"));
    }

    #[test]
    fn test_save_variants_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let variants = build_variants(&gradient_image(320, 240), &VariantPreferences::default());
        let summary = save_variants(&variants, dir.path());

        assert!(summary.failed.is_empty());
        assert_eq!(summary.saved.len(), 6);
        let gray = image::open(dir.path().join("grayscale_image.jpg")).unwrap();
        assert_eq!(gray.dimensions(), (320, 240));
    }

    #[test]
    fn test_save_variants_reports_failures() {
        let dir = tempfile::tempdir().unwrap();
        let variants = build_variants(&white_image(200, 200), &VariantPreferences::default());
        let summary = save_variants(&variants, &dir.path().join("missing"));
        assert!(summary.saved.is_empty());
        assert_eq!(summary.failed.len(), variants.len());
    }

    #[test]
    fn test_load_source_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        white_image(10, 8).save(&path).unwrap();
        let loaded = load_source(&path.to_string_lossy()).unwrap();
        assert_eq!(loaded.dimensions(), (10, 8));
    }

    #[test]
    fn test_load_from_bytes_rejects_garbage() {
        assert!(matches!(load_image_from_bytes(b"nope"), Err(GenError::Image(_))));
    }
}
