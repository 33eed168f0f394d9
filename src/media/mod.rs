// SPDX-License-Identifier: MPL-2.0
//! Media handling: format detection, image decoding, and thumbnail
//! generation.

pub mod image;

pub use image::{load_image, load_thumbnail, ImageData};

use std::path::Path;

/// File extensions accepted by the scanner and the gallery.
///
/// Detection is by extension only, not content sniffing; GIFs decode to
/// their first frame.
pub mod extensions {
    pub const IMAGE_EXTENSIONS: &[&str] =
        &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff"];
}

/// Checks if a file has a supported image extension (case-insensitive).
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let Some(extension) = path.extension() else {
        return false;
    };

    let extension = extension.to_string_lossy().to_lowercase();
    extensions::IMAGE_EXTENSIONS.contains(&extension.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_supported_extensions() {
        assert!(is_supported_image("photo.jpg"));
        assert!(is_supported_image("photo.jpeg"));
        assert!(is_supported_image("photo.png"));
        assert!(is_supported_image("photo.gif"));
        assert!(is_supported_image("photo.bmp"));
        assert!(is_supported_image("photo.webp"));
        assert!(is_supported_image("photo.tif"));
        assert!(is_supported_image("photo.tiff"));
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert!(is_supported_image("photo.JPG"));
        assert!(is_supported_image("photo.Png"));
    }

    #[test]
    fn rejects_unsupported_formats() {
        assert!(!is_supported_image("notes.txt"));
        assert!(!is_supported_image("report.pdf"));
        assert!(!is_supported_image("clip.mp4"));
        assert!(!is_supported_image("drawing.svg"));
    }

    #[test]
    fn rejects_paths_without_extension() {
        assert!(!is_supported_image("Makefile"));
        assert!(!is_supported_image(".hidden"));
    }
}
