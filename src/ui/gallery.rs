// SPDX-License-Identifier: MPL-2.0
//! Thumbnail gallery: a scrollable grid over the session's sequence.
//!
//! Cells render whatever the thumbnail store has for them (decoded handle,
//! failure placeholder, or a pending hint) so the grid is cheap to rebuild
//! on every update. Scrolling near the bottom asks the app for another
//! batch.

use crate::app::Message;
use crate::thumbnails::{ThumbState, ThumbnailStore};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{alignment, ContentFit, Element, Length};
use std::path::{Path, PathBuf};

/// Number of cells per grid row.
pub const COLUMNS: usize = 4;

/// Relative scroll offset past which another batch is requested.
pub const NEAR_BOTTOM: f32 = 0.8;

pub fn view<'a>(
    images: &'a [PathBuf],
    store: &'a ThumbnailStore,
    current_index: Option<usize>,
) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::SM).padding(spacing::SM);

    for (row_start, chunk) in images.chunks(COLUMNS).enumerate().map(|(i, c)| (i * COLUMNS, c)) {
        let mut row = Row::new().spacing(spacing::SM);
        for (offset, path) in chunk.iter().enumerate() {
            let index = row_start + offset;
            row = row.push(cell(index, path, store, current_index == Some(index)));
        }
        grid = grid.push(row);
    }

    let grid = scrollable(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::GalleryScrolled);

    container(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::canvas)
        .into()
}

fn cell<'a>(
    index: usize,
    path: &'a Path,
    store: &'a ThumbnailStore,
    selected: bool,
) -> Element<'a, Message> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let thumb: Element<'a, Message> = match store.state_for(path) {
        ThumbState::Loaded(handle) => iced::widget::image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ThumbState::Failed => placeholder("unreadable"),
        ThumbState::Pending => placeholder("..."),
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            container(thumb)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .push(
            text(file_name)
                .size(typography::CAPTION)
                .color(palette::MUTED),
        );

    button(content)
        .width(Length::Fixed(sizing::GALLERY_CELL))
        .height(Length::Fixed(sizing::GALLERY_CELL))
        .padding(spacing::XS)
        .style(styles::gallery_cell(selected))
        .on_press(Message::OpenThumbnail(index))
        .into()
}

fn placeholder<'a>(hint: &'a str) -> Element<'a, Message> {
    container(text(hint).size(typography::CAPTION).color(palette::MUTED))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
