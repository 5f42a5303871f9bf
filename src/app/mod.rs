// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (session data, localization,
//! settings, notifications) and translates messages into side effects like
//! config persistence. Policy decisions (window size, persistence format,
//! locale switching) stay close to the main update loop so it is easy to
//! audit user-facing behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::account::Session;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::chat;
use crate::ui::notifications;
use crate::ui::profile;
use crate::ui::projects;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    session: Session,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    projects: projects::State,
    chat: chat::State,
    profile: profile::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Dashboard,
            session: Session::sample(),
            theme_mode: ThemeMode::System,
            menu_open: false,
            projects: projects::State::new(),
            chat: chat::State::new(),
            profile: profile::State::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and installs
    /// the process-wide notifier.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.theme.unwrap_or_default();
        app.notifications.install_notifier();

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Ticks run while anything is visible or a notifier channel is
        // installed; remote pushes are drained on the next tick.
        subscription::create_tick_subscription(
            self.notifications.has_notifications() || self.notifications.has_remote(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // Collect anything queued through the process-wide notifier first so
        // remote pushes become visible in the same cycle.
        self.notifications.drain_remote();

        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            session: &mut self.session,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            projects: &mut self.projects,
            chat: &mut self.chat,
            profile: &mut self.profile,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard_message(&mut ctx, &dashboard_message)
            }
            Message::Projects(projects_message) => {
                update::handle_projects_message(&mut ctx, &projects_message)
            }
            Message::Chat(chat_message) => update::handle_chat_message(&mut ctx, chat_message),
            Message::Profile(profile_message) => {
                update::handle_profile_message(&mut ctx, profile_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Expire notifications whose deadline has passed.
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            session: &self.session,
            projects: &self.projects,
            chat: &self.chat,
            profile: &self.profile,
            theme_mode: self.theme_mode,
            menu_open: self.menu_open,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;
    use crate::ui::notifications::notifier::{self, test_support};
    use crate::ui::settings;
    use std::fs;
    use std::time::Instant;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = test_support::global_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(config::CONFIG_DIR_ENV).ok();
        std::env::set_var(config::CONFIG_DIR_ENV, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(config::CONFIG_DIR_ENV, value);
        } else {
            std::env::remove_var(config::CONFIG_DIR_ENV);
        }
    }

    #[test]
    fn new_starts_on_dashboard() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Dashboard);
            assert!(app.notifications.is_empty());
        });
    }

    #[test]
    fn new_installs_the_notifier() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(notifier::try_notifier().is_some());
            drop(app);
            assert!(notifier::try_notifier().is_none());
        });
    }

    #[test]
    fn navbar_tab_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::SelectTab(
            navbar::Tab::Chat,
        )));
        assert_eq!(app.screen, Screen::Chat);
    }

    #[test]
    fn menu_opens_settings_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);
        assert!(!app.menu_open);
    }

    #[test]
    fn profile_save_updates_session_and_notifies() {
        let mut app = App::default();
        let _ = app.update(Message::Profile(crate::ui::profile::Message::EditPressed));
        let _ = app.update(Message::Profile(crate::ui::profile::Message::NameChanged(
            "Alice M.".into(),
        )));
        let _ = app.update(Message::Profile(crate::ui::profile::Message::SavePressed));

        assert_eq!(app.session.customer.display_name, "Alice M.");
        assert_eq!(app.notifications.len(), 1);
        assert_eq!(
            app.notifications.entries()[0].kind(),
            notifications::Kind::Success
        );
        assert!(app.notifications.entries()[0].title().is_some());
    }

    #[test]
    fn empty_profile_name_is_rejected_with_error_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Profile(crate::ui::profile::Message::EditPressed));
        let _ = app.update(Message::Profile(crate::ui::profile::Message::NameChanged(
            "   ".into(),
        )));
        let _ = app.update(Message::Profile(crate::ui::profile::Message::SavePressed));

        assert_eq!(app.session.customer.display_name, "Alice Martin");
        assert_eq!(
            app.notifications.entries()[0].kind(),
            notifications::Kind::Error
        );
    }

    #[test]
    fn language_selected_updates_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                "fr".into(),
            )));

            assert_eq!(app.i18n.current_locale().to_string(), "fr");
            let config_path = config_root.join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains("fr"));
        });
    }

    #[test]
    fn theme_change_persists_and_reports_success() {
        with_temp_config_dir(|_| {
            let mut app = App::default();
            let _ = app.update(Message::Settings(settings::Message::ThemeSelected(
                ThemeMode::Dark,
            )));

            assert_eq!(app.theme_mode, ThemeMode::Dark);
            assert_eq!(
                app.notifications.entries()[0].kind(),
                notifications::Kind::Success
            );
        });
    }

    #[test]
    fn dismissing_a_toast_removes_it() {
        let mut app = App::default();
        let _ = app.update(Message::Profile(crate::ui::profile::Message::EditPressed));
        let _ = app.update(Message::Profile(crate::ui::profile::Message::NameChanged(
            "Bob".into(),
        )));
        let _ = app.update(Message::Profile(crate::ui::profile::Message::SavePressed));
        let id = app.notifications.entries()[0].id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn tick_message_reaches_the_manager() {
        let mut app = App::default();
        // Nothing visible: the tick is a no-op but must not panic.
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn subscription_is_idle_without_notifications() {
        let app = App::default();
        // No toasts and no notifier installed: nothing to tick for.
        assert!(!app.notifications.has_notifications());
        assert!(!app.notifications.has_remote());
        let _ = app.subscription();
    }

    #[test]
    fn tick_stays_armed_while_notifier_is_installed() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            // The channel must be polled even with nothing on screen, so a
            // remote push surfaces without waiting for user interaction.
            assert!(app.notifications.is_empty());
            assert!(app.notifications.has_remote());
            let _ = app.subscription();
        });
    }

    #[test]
    fn update_drains_remote_notifications() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(Flags::default());
            notifier::notifier().info("queued remotely");

            let _ = app.update(Message::Tick(Instant::now()));

            assert_eq!(app.notifications.len(), 1);
            assert_eq!(app.notifications.entries()[0].message(), "queued remotely");
        });
    }

    #[test]
    fn dashboard_shortcut_opens_projects() {
        let mut app = App::default();
        let _ = app.update(Message::Dashboard(
            crate::ui::dashboard::Message::OpenProjects,
        ));
        assert_eq!(app.screen, Screen::Projects);
    }

    #[test]
    fn chat_send_schedules_a_reply() {
        let mut app = App::default();
        let _ = app.update(Message::Chat(chat::Message::DraftChanged("hello".into())));
        let _ = app.update(Message::Chat(chat::Message::Send));
        assert!(app.chat.awaiting_reply());

        let _ = app.update(Message::Chat(chat::Message::AssistantReplied(
            "welcome".into(),
        )));
        assert!(!app.chat.awaiting_reply());
        assert_eq!(app.chat.entries().len(), 2);
    }
}
