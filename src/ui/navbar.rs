// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar carries one tab per main screen plus a hamburger menu that
//! opens Settings and About.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Main screens reachable from the navbar tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Projects,
    Chat,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Projects, Tab::Chat, Tab::Profile];

    fn i18n_key(self) -> &'static str {
        match self {
            Tab::Dashboard => "navbar-dashboard",
            Tab::Projects => "navbar-projects",
            Tab::Chat => "navbar-chat",
            Tab::Profile => "navbar-profile",
        }
    }

    fn icon(self) -> Svg<'static> {
        match self {
            Tab::Dashboard => icons::home(),
            Tab::Projects => icons::folder(),
            Tab::Chat => icons::chat_bubble(),
            Tab::Profile => icons::user(),
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_tab: Option<Tab>,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    SelectTab(Tab),
    OpenSettings,
    OpenAbout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    SelectTab(Tab),
    OpenSettings,
    OpenAbout,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::SelectTab(tab) => {
            *menu_open = false;
            Event::SelectTab(tab)
        }
        Message::OpenSettings => {
            *menu_open = false;
            Event::OpenSettings
        }
        Message::OpenAbout => {
            *menu_open = false;
            Event::OpenAbout
        }
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// Build the top bar with one button per tab and the hamburger menu.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    for tab in Tab::ALL {
        let label = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::sized(tab.icon(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr(tab.i18n_key())).size(typography::BODY));

        let mut tab_button = button(label)
            .on_press(Message::SelectTab(tab))
            .padding([spacing::XS, spacing::SM]);
        tab_button = if ctx.active_tab == Some(tab) {
            tab_button.style(styles::button::selected)
        } else {
            tab_button.style(styles::button::flat)
        };
        row = row.push(tab_button);
    }

    let menu_button = button(icons::sized(icons::menu(), sizing::ICON_MD))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::flat);
    row = row
        .push(iced::widget::space::horizontal())
        .push(menu_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(styles::container::toolbar)
        .into()
}

/// Build the dropdown menu with Settings and About options.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let settings_item = build_menu_item(ctx.i18n.tr("navbar-settings"), Message::OpenSettings);
    let about_item = build_menu_item(ctx.i18n.tr("navbar-about"), Message::OpenAbout);

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(settings_item)
        .push(about_item);

    Container::new(
        Container::new(menu_column)
            .padding(spacing::XS)
            .width(Length::Fixed(sizing::MENU_WIDTH))
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                border: Border {
                    radius: radius::SM.into(),
                    width: 1.0,
                    color: theme.extended_palette().background.strong.color,
                },
                ..Default::default()
            }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding([0.0, spacing::SM])
    .into()
}

/// Build a single menu item.
fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::flat)
        .into()
}
