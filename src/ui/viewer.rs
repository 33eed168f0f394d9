// SPDX-License-Identifier: MPL-2.0
//! Single-image viewer: toolbar, scaled-to-fit image pane, and status bar.

use crate::app::Message;
use crate::media::ImageData;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment, ContentFit, Element, Length};

/// Everything the viewer needs to render one frame.
pub struct ViewModel<'a> {
    pub image: Option<&'a ImageData>,
    /// Decode failure for the current entry, shown in place of the image.
    pub decode_error: Option<&'a str>,
    pub current_index: Option<usize>,
    pub total: usize,
    pub status: &'a str,
    /// Whether a folder has been opened at all (changes the empty-state
    /// wording).
    pub has_folder: bool,
    pub can_undo: bool,
}

pub fn view<'a>(model: ViewModel<'a>) -> Element<'a, Message> {
    let has_images = model.total > 0;

    let content: Element<'a, Message> = if let Some(error) = model.decode_error {
        decode_error_pane(error)
    } else if let Some(image) = model.image {
        iced::widget::image(image.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else if has_images {
        // Decode still in flight for the current entry.
        centered_hint("Loading...")
    } else {
        empty_state(model.has_folder)
    };

    let image_pane = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .style(styles::canvas);

    Column::new()
        .push(toolbar(has_images, model.can_undo))
        .push(image_pane)
        .push(status_bar(model.current_index, model.total, model.status))
        .into()
}

fn toolbar<'a>(has_images: bool, can_undo: bool) -> Element<'a, Message> {
    let bar_button = |label: &'a str, message: Option<Message>| {
        button(text(label).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .style(styles::toolbar_button)
            .on_press_maybe(message)
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .push(bar_button("Open", Some(Message::OpenFolderDialog)))
        .push(bar_button(
            "Prev",
            has_images.then_some(Message::NavigatePrevious),
        ))
        .push(bar_button("Next", has_images.then_some(Message::NavigateNext)))
        .push(bar_button(
            "Delete",
            has_images.then_some(Message::DeleteCurrent),
        ))
        .push(bar_button("Undo", can_undo.then_some(Message::UndoDelete)))
        .push(bar_button(
            "Gallery",
            has_images.then_some(Message::OpenGallery),
        ));

    container(row).width(Length::Fill).style(styles::bar).into()
}

fn status_bar<'a>(
    current_index: Option<usize>,
    total: usize,
    status: &'a str,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::SM])
        .align_y(alignment::Vertical::Center);

    if let Some(index) = current_index {
        // Clicking the counter opens the jump dialog.
        row = row.push(
            button(text(format!("{}/{}", index + 1, total)).size(typography::BODY))
                .padding(0)
                .style(styles::link_button)
                .on_press(Message::OpenJumpDialog),
        );
    }

    row = row.push(
        text(status)
            .size(typography::CAPTION)
            .color(palette::MUTED),
    );

    container(row).width(Length::Fill).style(styles::bar).into()
}

fn empty_state<'a>(has_folder: bool) -> Element<'a, Message> {
    let hint = if has_folder {
        "No images found"
    } else {
        "Pick a folder to begin"
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(text(hint).size(typography::TITLE).color(palette::MUTED))
        .push(
            button(text("Open Folder").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::toolbar_button)
                .on_press(Message::OpenFolderDialog),
        );

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn decode_error_pane<'a>(error: &'a str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            text("Could not display this image")
                .size(typography::BODY)
                .color(palette::ERROR),
        )
        .push(text(error).size(typography::CAPTION).color(palette::MUTED));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn centered_hint<'a>(hint: &'a str) -> Element<'a, Message> {
    container(text(hint).size(typography::BODY).color(palette::MUTED))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
