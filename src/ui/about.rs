// SPDX-License-Identifier: MPL-2.0
//! About screen: application name, version, and credits.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Text},
    Element, Length, Theme,
};

/// Render the about screen. Emits no messages of its own.
pub fn view<'a, Message: 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(i18n.tr("about-title")).size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("about-description")).size(typography::BODY))
            .push(
                Text::new(i18n.tr_with_args(
                    "about-version",
                    &[("version", env!("CARGO_PKG_VERSION"))],
                ))
                .size(typography::CAPTION),
            )
            .push(Text::new(i18n.tr("about-credits")).size(typography::CAPTION)),
    )
    .max_width(sizing::CONTENT_MAX_WIDTH)
    .padding(spacing::LG)
    .style(|theme: &Theme| styles::container::card(theme));

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
