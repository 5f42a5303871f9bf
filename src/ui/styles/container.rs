// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised card with a subtle border (stat cards, project rows).
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(base.color)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Banner with a brand accent (business-hours strip).
pub fn accent_banner(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Toolbar strip along the top of the window (navbar background).
pub fn toolbar(theme: &Theme) -> container::Style {
    let weak = theme.extended_palette().background.weak;
    container::Style {
        background: Some(Background::Color(weak.color)),
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Speech bubble for a chat entry; visitor bubbles are brand-tinted.
pub fn chat_bubble(theme: &Theme, from_visitor: bool) -> container::Style {
    let background = if from_visitor {
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        }
    } else {
        theme.extended_palette().background.weak.color
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
