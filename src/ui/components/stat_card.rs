// SPDX-License-Identifier: MPL-2.0
//! Small summary card used on the dashboard (label on top, value below).

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::{
    alignment::Vertical,
    widget::{Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Renders one stat card with an icon, a caption label, and a large value.
pub fn view<'a, Message: 'a>(
    icon: Svg<'static>,
    label: String,
    value: String,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_SM))
        .push(Text::new(label).size(typography::CAPTION));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(Text::new(value).size(typography::TITLE_MD));

    Container::new(content)
        .width(Length::Fixed(sizing::STAT_CARD_WIDTH))
        .padding(spacing::MD)
        .style(|theme: &Theme| styles::container::card(theme))
        .into()
}
