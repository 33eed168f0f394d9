// SPDX-License-Identifier: MPL-2.0
//! Modal dialog for jumping straight to an image by its counter position.
//!
//! Input is validated on submit: non-numeric or out-of-range values keep
//! the dialog open without a transition.

use crate::app::Message;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{alignment, Element, Length};

pub fn view<'a>(input: &'a str, total: usize) -> Element<'a, Message> {
    let field = text_input("image number", input)
        .size(typography::BODY)
        .on_input(Message::JumpInputChanged)
        .on_submit(Message::JumpSubmit);

    let buttons = Row::new()
        .spacing(spacing::SM)
        .push(
            button(text("Go").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::toolbar_button)
                .on_press(Message::JumpSubmit),
        )
        .push(
            button(text("Cancel").size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::toolbar_button)
                .on_press(Message::CloseJumpDialog),
        );

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(text("Jump to image").size(typography::TITLE))
        .push(field)
        .push(
            text(format!("1 - {}", total))
                .size(typography::CAPTION)
                .color(palette::MUTED),
        )
        .push(buttons);

    let panel = container(panel)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::dialog_panel);

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::backdrop)
        .into()
}
