// SPDX-License-Identifier: MPL-2.0
//! Optional bundled monospaced font.
//!
//! Packaging may drop a `mono.ttf` into `assets/fonts/` before building.
//! When present it is embedded and becomes the default font; when absent
//! the UI falls back to the system monospace font. The core has no other
//! dependency on how the binary is packaged.

use iced::Font;
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/fonts"]
struct FontAssets;

const FONT_FILE: &str = "mono.ttf";

/// Family name the bundled font is registered under. Must match the
/// family inside the TTF for Iced to resolve it.
pub const FONT_FAMILY: &str = "PicCull Mono";

/// Returns the bytes of the bundled font, if one was packaged.
pub fn embedded_font() -> Option<Cow<'static, [u8]>> {
    FontAssets::get(FONT_FILE).map(|file| file.data)
}

/// The default UI font: the bundled font when present, otherwise the
/// system monospace font.
pub fn default_font() -> Font {
    if embedded_font().is_some() {
        Font::with_name(FONT_FAMILY)
    } else {
        Font::MONOSPACE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_font_matches_embedding_state() {
        // The repo ships without a bundled font; packaging adds one.
        match embedded_font() {
            Some(bytes) => {
                assert!(!bytes.is_empty());
                assert_eq!(default_font(), Font::with_name(FONT_FAMILY));
            }
            None => assert_eq!(default_font(), Font::MONOSPACE),
        }
    }
}
