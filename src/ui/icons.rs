// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small in-source SVG documents rendered through `iced::widget::svg`,
//! so they scale cleanly at any size and render identically on every platform.
//! Handles are cached using `OnceLock` so each document is parsed once.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_notification`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $doc:literal, $svg:expr) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($svg.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    checkmark,
    "Checkmark icon: single tick.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<path fill="#7a7a7a" d="M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z"/></svg>"##
    )
);

define_icon!(
    info,
    "Info icon: lowercase i in a circle.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<circle cx="12" cy="12" r="10" fill="#7a7a7a"/>"##,
        r##"<rect x="11" y="10" width="2" height="7" fill="#ffffff"/>"##,
        r##"<rect x="11" y="6" width="2" height="2" fill="#ffffff"/></svg>"##
    )
);

define_icon!(
    warning,
    "Warning icon: exclamation mark in a triangle.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<path fill="#7a7a7a" d="M1 21h22L12 2 1 21z"/>"##,
        r##"<rect x="11" y="9" width="2" height="6" fill="#ffffff"/>"##,
        r##"<rect x="11" y="17" width="2" height="2" fill="#ffffff"/></svg>"##
    )
);

define_icon!(
    cross,
    "Cross icon: diagonal X.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<path fill="#7a7a7a" d="M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 "##,
        r##"6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z"/></svg>"##
    )
);

define_icon!(
    menu,
    "Hamburger menu icon: three horizontal bars.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<rect x="3" y="5" width="18" height="2" fill="#7a7a7a"/>"##,
        r##"<rect x="3" y="11" width="18" height="2" fill="#7a7a7a"/>"##,
        r##"<rect x="3" y="17" width="18" height="2" fill="#7a7a7a"/></svg>"##
    )
);

define_icon!(
    user,
    "User icon: head and shoulders silhouette.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<circle cx="12" cy="8" r="4" fill="#7a7a7a"/>"##,
        r##"<path fill="#7a7a7a" d="M4 20c0-4 3.6-6 8-6s8 2 8 6v1H4z"/></svg>"##
    )
);

define_icon!(
    chat_bubble,
    "Chat icon: rounded speech bubble.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<path fill="#7a7a7a" d="M4 4h16a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2H9l-5 4v-4H4"##,
        r##" a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z"/></svg>"##
    )
);

define_icon!(
    folder,
    "Folder icon: tabbed folder outline.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<path fill="#7a7a7a" d="M2 5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2v11"##,
        r##" a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2z"/></svg>"##
    )
);

define_icon!(
    clock,
    "Clock icon: round face with hands.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<circle cx="12" cy="12" r="10" fill="#7a7a7a"/>"##,
        r##"<path fill="#ffffff" d="M11 6h2v7h-5v-2h3z"/></svg>"##
    )
);

define_icon!(
    home,
    "Home icon: house with a door.",
    concat!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"##,
        r##"<path fill="#7a7a7a" d="M12 3 2 12h3v9h6v-6h2v6h6v-9h3z"/></svg>"##
    )
);

/// Applies a uniform size to an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_constructible() {
        let _ = checkmark();
        let _ = info();
        let _ = warning();
        let _ = cross();
        let _ = menu();
        let _ = user();
        let _ = chat_bubble();
        let _ = folder();
        let _ = clock();
        let _ = home();
    }

    #[test]
    fn sized_icon_does_not_panic() {
        let _ = sized(checkmark(), 24.0);
    }
}
