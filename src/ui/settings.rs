// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language and theme selection.
//!
//! The screen itself is stateless; the selected values live on the
//! application and changes are reported upward as events so the app can
//! apply and persist them.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{pick_list, radio, Column, Container, Text},
    Element, Length, Theme,
};

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(String),
    ThemeSelected(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LanguageChanged(String),
    ThemeChanged(ThemeMode),
}

/// Process a settings message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::ThemeSelected(mode) => Event::ThemeChanged(mode),
    }
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Render the settings screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let locales: Vec<String> = ctx
        .i18n
        .available_locales
        .iter()
        .map(ToString::to_string)
        .collect();
    let current = ctx.i18n.current_locale().to_string();

    let language_section = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-language")).size(typography::CAPTION))
        .push(pick_list(locales, Some(current), Message::LanguageSelected));

    let mut theme_section = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("settings-theme")).size(typography::CAPTION));
    for mode in ThemeMode::ALL {
        theme_section = theme_section.push(radio(
            ctx.i18n.tr(mode.i18n_key()),
            mode,
            Some(ctx.theme_mode),
            Message::ThemeSelected,
        ));
    }

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(language_section)
            .push(theme_section),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(|theme: &Theme| styles::container::card(theme));

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(card);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
}
