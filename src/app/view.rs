// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, with the navbar above and the toast overlay
//! stacked on top.

use super::{Message, Screen};
use crate::account::Session;
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::chat::{self, ViewContext as ChatViewContext};
use crate::ui::dashboard::{self, ViewContext as DashboardViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::profile::{self, ViewContext as ProfileViewContext};
use crate::ui::projects::{self, ViewContext as ProjectsViewContext};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub session: &'a Session,
    pub projects: &'a projects::State,
    pub chat: &'a chat::State,
    pub profile: &'a profile::State,
    pub theme_mode: ThemeMode,
    pub menu_open: bool,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active_tab: ctx.screen.tab(),
        menu_open: ctx.menu_open,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Dashboard => dashboard::view(DashboardViewContext {
            i18n: ctx.i18n,
            session: ctx.session,
        })
        .map(Message::Dashboard),
        Screen::Projects => projects::view(ProjectsViewContext {
            i18n: ctx.i18n,
            session: ctx.session,
            state: ctx.projects,
        })
        .map(Message::Projects),
        Screen::Chat => chat::view(ChatViewContext {
            i18n: ctx.i18n,
            state: ctx.chat,
        })
        .map(Message::Chat),
        Screen::Profile => profile::view(ProfileViewContext {
            i18n: ctx.i18n,
            customer: &ctx.session.customer,
            state: ctx.profile,
        })
        .map(Message::Profile),
        Screen::Settings => settings::view(SettingsViewContext {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        })
        .map(Message::Settings),
        Screen::About => about::view(ctx.i18n),
    };

    let base = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    // Toast overlay floats above whatever screen is showing.
    let overlay = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(overlay)
        .into()
}
