// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the viewer and the thumbnail gallery.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

/// A decoded image ready to be handed to the Iced image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Loads and decodes the image at `path` at full size.
///
/// EXIF orientation is honored so portrait shots from cameras display
/// upright. Scaling to the window is left to the widget layer.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and
/// [`Error::Decode`] when the bytes are not a decodable image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img = decode_oriented(path.as_ref())?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Decodes the image at `path` and downscales it to fit within
/// `max_dim` x `max_dim`, preserving aspect ratio.
///
/// Used by the gallery; the returned handle goes straight into the
/// thumbnail cache.
pub fn load_thumbnail<P: AsRef<Path>>(path: P, max_dim: u32) -> Result<image::Handle> {
    let img = decode_oriented(path.as_ref())?;

    let thumb = img.thumbnail(max_dim, max_dim);
    let (width, height) = thumb.dimensions();
    let pixels = thumb.to_rgba8().into_vec();

    Ok(image::Handle::from_rgba(width, height, pixels))
}

fn decode_oriented(path: &Path) -> Result<image_rs::DynamicImage> {
    let img_bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;

    let img =
        image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Decode(e.to_string()))?;

    Ok(apply_orientation(img, exif_orientation(&img_bytes)))
}

/// Reads the EXIF orientation tag, defaulting to 1 (upright) when the file
/// carries no EXIF data.
fn exif_orientation(bytes: &[u8]) -> u32 {
    let mut cursor = std::io::Cursor::new(bytes);
    exif::Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|data| {
            data.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .unwrap_or(1)
}

/// Applies an EXIF orientation value (1-8) to a decoded image.
fn apply_orientation(img: image_rs::DynamicImage, orientation: u32) -> image_rs::DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn thumbnail_fits_within_bounds_and_keeps_aspect() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("wide.png");

        let image = RgbaImage::from_pixel(400, 100, Rgba([0, 255, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        // Decode through the same path the gallery uses; the handle itself
        // is opaque, so verify via the underlying thumbnail math.
        load_thumbnail(&image_path, 64).expect("thumbnail should decode");
        let img = image_rs::open(&image_path).expect("reopen");
        let thumb = img.thumbnail(64, 64);
        assert_eq!(thumb.dimensions(), (64, 16));
    }

    #[test]
    fn thumbnail_of_unreadable_file_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("gone.jpg");

        assert!(load_thumbnail(&missing, 64).is_err());
    }

    #[test]
    fn orientation_six_rotates_quarter_turn() {
        let img = image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            4,
            2,
            Rgba([0, 0, 255, 255]),
        ));
        let rotated = apply_orientation(img, 6);
        assert_eq!(rotated.dimensions(), (2, 4));
    }

    #[test]
    fn orientation_one_and_unknown_values_leave_image_untouched() {
        let img = image_rs::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            4,
            2,
            Rgba([0, 0, 255, 255]),
        ));
        assert_eq!(apply_orientation(img.clone(), 1).dimensions(), (4, 2));
        assert_eq!(apply_orientation(img, 9).dimensions(), (4, 2));
    }

    #[test]
    fn png_without_exif_defaults_to_upright() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("plain.png");
        RgbaImage::from_pixel(3, 5, Rgba([9, 9, 9, 255]))
            .save(&image_path)
            .expect("failed to write temporary png");

        let bytes = fs::read(&image_path).expect("read back png");
        assert_eq!(exif_orientation(&bytes), 1);
    }
}
