// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers for each screen.
//! Every handler takes the shared [`UpdateContext`] so screens can navigate,
//! push notifications, or persist settings without reaching into `App`.

use super::{Message, Screen};
use crate::account::Session;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::chat::{self, Action as ChatAction};
use crate::ui::dashboard::{self, Event as DashboardEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::profile::{self, Event as ProfileEvent};
use crate::ui::projects;
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Duration;

/// Delay before the scripted assistant reply appears.
pub const ASSISTANT_REPLY_DELAY: Duration = Duration::from_millis(700);

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub session: &'a mut Session,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub projects: &'a mut projects::State,
    pub chat: &'a mut chat::State,
    pub profile: &'a mut profile::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles navbar messages: tab switches and the hamburger menu.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => {}
        NavbarEvent::SelectTab(tab) => *ctx.screen = Screen::from(tab),
        NavbarEvent::OpenSettings => *ctx.screen = Screen::Settings,
        NavbarEvent::OpenAbout => *ctx.screen = Screen::About,
    }
    Task::none()
}

/// Handles dashboard shortcut buttons.
pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: &dashboard::Message,
) -> Task<Message> {
    match dashboard::update(message) {
        DashboardEvent::OpenProjects => *ctx.screen = Screen::Projects,
        DashboardEvent::OpenChat => *ctx.screen = Screen::Chat,
    }
    Task::none()
}

/// Handles project list interaction.
pub fn handle_projects_message(
    ctx: &mut UpdateContext<'_>,
    message: &projects::Message,
) -> Task<Message> {
    projects::update(ctx.projects, message);
    Task::none()
}

/// Handles chat messages and schedules the delayed assistant reply.
pub fn handle_chat_message(ctx: &mut UpdateContext<'_>, message: chat::Message) -> Task<Message> {
    match ctx.chat.update(message, ctx.i18n) {
        ChatAction::None => Task::none(),
        ChatAction::ScheduleReply(body) => Task::perform(
            async move {
                tokio::time::sleep(ASSISTANT_REPLY_DELAY).await;
                body
            },
            |body| Message::Chat(chat::Message::AssistantReplied(body)),
        ),
    }
}

/// Handles profile edits. A successful save updates the session and shows a
/// titled success toast; an empty name is rejected with an error toast.
pub fn handle_profile_message(
    ctx: &mut UpdateContext<'_>,
    message: profile::Message,
) -> Task<Message> {
    let current_name = ctx.session.customer.display_name.clone();
    match ctx.profile.update(message, &current_name) {
        ProfileEvent::None => {}
        ProfileEvent::SaveName(name) => {
            ctx.session.customer.display_name = name;
            ctx.notifications.push(
                Notification::success(ctx.i18n.tr("notification-profile-saved"))
                    .with_title(ctx.i18n.tr("notification-profile-saved-title")),
            );
        }
        ProfileEvent::RejectEmptyName => {
            ctx.notifications
                .push(Notification::error(ctx.i18n.tr("notification-profile-name-empty")));
        }
    }
    Task::none()
}

/// Handles settings changes: applies them immediately, then persists.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match settings::update(message) {
        SettingsEvent::LanguageChanged(locale_str) => {
            if let Ok(locale) = locale_str.parse() {
                ctx.i18n.set_locale(locale);
            }
            persist_preferences(ctx);
        }
        SettingsEvent::ThemeChanged(mode) => {
            *ctx.theme_mode = mode;
            persist_preferences(ctx);
        }
    }
    Task::none()
}

/// Writes the current preferences to the settings file and reports the
/// outcome as a toast.
fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    let config = config::Config {
        language: Some(ctx.i18n.current_locale().to_string()),
        theme: Some(*ctx.theme_mode),
    };
    match config::save(&config) {
        Ok(()) => {
            ctx.notifications
                .push(Notification::success(ctx.i18n.tr("notification-settings-saved")));
        }
        Err(_) => {
            ctx.notifications
                .push(Notification::error(ctx.i18n.tr("notification-settings-save-error")));
        }
    }
}
