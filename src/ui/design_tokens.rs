// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the minimalist monochrome look.

use iced::Color;

pub mod palette {
    use super::Color;

    // Dark mode surfaces
    pub const BG: Color = Color::from_rgb(0.066, 0.066, 0.066); // #111111
    pub const PANEL: Color = Color::from_rgb(0.10, 0.10, 0.10); // #1A1A1A
    pub const BORDER: Color = Color::from_rgb(0.165, 0.165, 0.165); // #2A2A2A
    pub const FG: Color = Color::from_rgb(0.918, 0.918, 0.918); // #EAEAEA
    pub const MUTED: Color = Color::from_rgb(0.533, 0.533, 0.533); // #888888

    // Light mode surfaces
    pub const BG_LIGHT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const PANEL_LIGHT: Color = Color::from_rgb(0.88, 0.88, 0.88);
    pub const BORDER_LIGHT: Color = Color::from_rgb(0.78, 0.78, 0.78);
    pub const FG_LIGHT: Color = Color::from_rgb(0.10, 0.10, 0.10);

    pub const ERROR: Color = Color::from_rgb(1.0, 0.333, 0.333); // #FF5555
    pub const ACCENT: Color = Color::from_rgb(0.60, 0.60, 0.60);
}

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Edge length of a gallery cell, in logical pixels.
    pub const GALLERY_CELL: f32 = 200.0;
    /// Width of the jump dialog panel.
    pub const DIALOG_WIDTH: f32 = 280.0;
}

pub mod typography {
    pub const TITLE: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}
