// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: greeting, project summary cards, business-hours banner.

use crate::account::Session;
use crate::format;
use crate::i18n::fluent::I18n;
use crate::ui::components::{hours_banner, stat_card};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use iced::{
    widget::{scrollable, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
}

/// Messages emitted by the dashboard screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenProjects,
    OpenChat,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenProjects,
    OpenChat,
}

/// Process a dashboard message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenProjects => Event::OpenProjects,
        Message::OpenChat => Event::OpenChat,
    }
}

/// Render the dashboard screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let greeting = Text::new(ctx.i18n.tr_with_args(
        "dashboard-greeting",
        &[("name", &ctx.session.customer.display_name)],
    ))
    .size(typography::TITLE_LG);

    let banner = hours_banner::view(ctx.i18n);

    let delivered = ctx
        .session
        .projects
        .iter()
        .filter(|p| !p.status.is_active())
        .count();

    let cards = Row::new()
        .spacing(spacing::MD)
        .push(stat_card::view(
            icons::folder(),
            ctx.i18n.tr("dashboard-card-active-projects"),
            ctx.session.active_project_count().to_string(),
        ))
        .push(stat_card::view(
            icons::checkmark(),
            ctx.i18n.tr("dashboard-card-delivered-projects"),
            delivered.to_string(),
        ))
        .push(stat_card::view(
            icons::home(),
            ctx.i18n.tr("dashboard-card-balance"),
            format::format_currency(ctx.session.customer.balance_cents, "€"),
        ));

    let mut latest_section = Column::new().spacing(spacing::XS).push(
        Text::new(ctx.i18n.tr("dashboard-latest-update")).size(typography::TITLE_SM),
    );
    if let Some(latest) = ctx.session.projects.iter().find(|p| p.status.is_active()) {
        latest_section = latest_section.push(
            iced::widget::button(
                Text::new(format!("{}: {}", latest.name, latest.updated)).size(typography::BODY),
            )
            .on_press(Message::OpenProjects)
            .style(crate::ui::styles::button::flat),
        );
    }
    latest_section = latest_section.push(
        iced::widget::button(Text::new(ctx.i18n.tr("navbar-chat")).size(typography::BODY))
            .on_press(Message::OpenChat)
            .style(crate::ui::styles::button::flat),
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(greeting)
        .push(banner)
        .push(cards)
        .push(latest_section);

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_maps_messages_to_events() {
        assert!(matches!(update(&Message::OpenProjects), Event::OpenProjects));
        assert!(matches!(update(&Message::OpenChat), Event::OpenChat));
    }
}
