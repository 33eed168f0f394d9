// SPDX-License-Identifier: MPL-2.0
//! Shared style functions for containers and buttons.
//!
//! Everything derives from the monochrome palette; light mode swaps the
//! surface colors while keeping the same flat, borderless look.

use crate::ui::design_tokens::palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        palette::PANEL
    } else {
        palette::PANEL_LIGHT
    }
}

fn edge(theme: &Theme) -> Color {
    if is_dark(theme) {
        palette::BORDER
    } else {
        palette::BORDER_LIGHT
    }
}

pub fn foreground(theme: &Theme) -> Color {
    if is_dark(theme) {
        palette::FG
    } else {
        palette::FG_LIGHT
    }
}

pub fn background_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        palette::BG
    } else {
        palette::BG_LIGHT
    }
}

/// Root surface behind the image canvas and the gallery.
pub fn canvas(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background_color(theme))),
        text_color: Some(foreground(theme)),
        ..Default::default()
    }
}

/// Toolbar and status bar strip.
pub fn bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(foreground(theme)),
        ..Default::default()
    }
}

/// Semi-transparent backdrop behind the jump dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

/// The jump dialog panel itself.
pub fn dialog_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(foreground(theme)),
        border: Border {
            color: edge(theme),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Flat toolbar button.
pub fn toolbar_button(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => edge(theme),
        _ => surface(theme),
    };
    let text_color = match status {
        button::Status::Disabled => palette::MUTED,
        _ => foreground(theme),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: edge(theme),
            width: 1.0,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}

/// Counter in the status bar; looks like text, acts like a button.
pub fn link_button(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => foreground(theme),
        _ => palette::MUTED,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

/// Gallery cell, with a visible border on the selected entry.
pub fn gallery_cell(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let border_color = if selected {
            foreground(theme)
        } else if matches!(status, button::Status::Hovered) {
            palette::ACCENT
        } else {
            edge(theme)
        };

        button::Style {
            background: Some(Background::Color(surface(theme))),
            text_color: foreground(theme),
            border: Border {
                color: border_color,
                width: if selected { 2.0 } else { 1.0 },
                radius: 2.0.into(),
            },
            ..Default::default()
        }
    }
}
