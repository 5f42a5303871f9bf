// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Tab;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Projects,
    Chat,
    Profile,
    Settings,
    About,
}

impl Screen {
    /// The navbar tab highlighted for this screen, if any. Settings and
    /// About are reached through the hamburger menu and have no tab.
    #[must_use]
    pub fn tab(self) -> Option<Tab> {
        match self {
            Screen::Dashboard => Some(Tab::Dashboard),
            Screen::Projects => Some(Tab::Projects),
            Screen::Chat => Some(Tab::Chat),
            Screen::Profile => Some(Tab::Profile),
            Screen::Settings | Screen::About => None,
        }
    }
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Dashboard => Screen::Dashboard,
            Tab::Projects => Screen::Projects,
            Tab::Chat => Screen::Chat,
            Tab::Profile => Screen::Profile,
        }
    }
}
