// SPDX-License-Identifier: MPL-2.0
//! Projects screen: tracked projects with status badges and expandable detail.

use crate::account::Session;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, scrollable, Column, Container, Row, Text},
    Background, Border, Color, Element, Length, Theme,
};

/// Screen state: which project row is expanded, if any.
#[derive(Debug, Default)]
pub struct State {
    expanded: Option<usize>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }
}

/// Contextual data needed to render the projects screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub state: &'a State,
}

/// Messages emitted by the projects screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle the detail section of the row at this index.
    ToggleDetail(usize),
}

/// Process a projects screen message.
pub fn update(state: &mut State, message: &Message) {
    match message {
        Message::ToggleDetail(index) => {
            state.expanded = if state.expanded == Some(*index) {
                None
            } else {
                Some(*index)
            };
        }
    }
}

/// Render the projects screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("projects-title")).size(typography::TITLE_LG);

    let mut list = Column::new().spacing(spacing::SM);
    if ctx.session.projects.is_empty() {
        list = list.push(Text::new(ctx.i18n.tr("projects-empty")).size(typography::BODY));
    }

    for (index, project) in ctx.session.projects.iter().enumerate() {
        let badge = status_badge(ctx.i18n, project);
        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new(project.name.as_str())
                    .size(typography::BODY_LG)
                    .width(Length::Fill),
            )
            .push(badge);

        let mut card = Column::new().spacing(spacing::XS).push(
            button(header)
                .on_press(Message::ToggleDetail(index))
                .width(Length::Fill)
                .padding(spacing::XXS)
                .style(styles::button::flat),
        );

        if ctx.state.expanded == Some(index) {
            card = card
                .push(Text::new(project.summary.as_str()).size(typography::BODY))
                .push(
                    Text::new(ctx.i18n.tr_with_args(
                        "projects-updated",
                        &[("date", project.updated.as_str())],
                    ))
                    .size(typography::CAPTION),
                );
        }

        list = list.push(
            Container::new(card)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(|theme: &Theme| styles::container::card(theme)),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(list);

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
}

/// Small pill with the status label in the status accent color.
fn status_badge<'a>(i18n: &I18n, project: &crate::account::Project) -> Element<'a, Message> {
    let accent = project.status.color();
    let label = i18n.tr(project.status.i18n_key());

    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            border: Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            text_color: None,
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = State::new();
        update(&mut state, &Message::ToggleDetail(1));
        assert_eq!(state.expanded(), Some(1));

        update(&mut state, &Message::ToggleDetail(1));
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn toggle_switches_between_rows() {
        let mut state = State::new();
        update(&mut state, &Message::ToggleDetail(0));
        update(&mut state, &Message::ToggleDetail(2));
        assert_eq!(state.expanded(), Some(2));
    }
}
