// SPDX-License-Identifier: MPL-2.0
//! Profile screen: masked account fields and an editable display name.
//!
//! Email, phone, and billing account are always rendered masked; the raw
//! values never reach the widget tree.

use crate::account::Customer;
use crate::format;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Profile screen state.
#[derive(Debug, Default)]
pub struct State {
    editing: bool,
    draft_name: String,
}

/// Messages emitted by the profile screen.
#[derive(Debug, Clone)]
pub enum Message {
    EditPressed,
    NameChanged(String),
    SavePressed,
    CancelPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The visitor saved a new, non-empty display name.
    SaveName(String),
    /// The visitor tried to save an empty display name.
    RejectEmptyName,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Process a profile message. `current_name` seeds the edit field.
    pub fn update(&mut self, message: Message, current_name: &str) -> Event {
        match message {
            Message::EditPressed => {
                self.editing = true;
                self.draft_name = current_name.to_string();
                Event::None
            }
            Message::NameChanged(draft) => {
                self.draft_name = draft;
                Event::None
            }
            Message::SavePressed => {
                let name = self.draft_name.trim().to_string();
                if name.is_empty() {
                    return Event::RejectEmptyName;
                }
                self.editing = false;
                Event::SaveName(name)
            }
            Message::CancelPressed => {
                self.editing = false;
                Event::None
            }
        }
    }
}

/// Contextual data needed to render the profile screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub customer: &'a Customer,
    pub state: &'a State,
}

/// Render the profile screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("profile-title")).size(typography::TITLE_LG);

    let name_row: Element<'_, Message> = if ctx.state.is_editing() {
        let input = text_input(
            &ctx.i18n.tr("profile-display-name"),
            &ctx.state.draft_name,
        )
        .on_input(Message::NameChanged)
        .on_submit(Message::SavePressed)
        .padding(spacing::XS);

        Row::new()
            .spacing(spacing::SM)
            .push(input)
            .push(
                button(Text::new(ctx.i18n.tr("profile-save-button")).size(typography::BODY))
                    .on_press(Message::SavePressed)
                    .style(styles::button::primary),
            )
            .push(
                button(Text::new(ctx.i18n.tr("profile-cancel-button")).size(typography::BODY))
                    .on_press(Message::CancelPressed)
                    .style(styles::button::flat),
            )
            .into()
    } else {
        Row::new()
            .spacing(spacing::SM)
            .push(
                Text::new(ctx.customer.display_name.as_str())
                    .size(typography::BODY_LG)
                    .width(Length::Fill),
            )
            .push(
                button(Text::new(ctx.i18n.tr("profile-edit-button")).size(typography::BODY))
                    .on_press(Message::EditPressed)
                    .style(styles::button::flat),
            )
            .into()
    };

    let fields = Column::new()
        .spacing(spacing::SM)
        .push(field(
            ctx.i18n.tr("profile-display-name"),
            name_row,
        ))
        .push(field_text(
            ctx.i18n.tr("profile-email"),
            format::mask_email(&ctx.customer.email),
        ))
        .push(field_text(
            ctx.i18n.tr("profile-phone"),
            format::mask_phone(&ctx.customer.phone),
        ))
        .push(field_text(
            ctx.i18n.tr("profile-billing-account"),
            format::mask_account(&ctx.customer.billing_account),
        ));

    let card = Container::new(fields)
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

/// Caption label over an arbitrary value widget.
fn field(label: String, value: Element<'_, Message>) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(value)
        .into()
}

/// Caption label over a plain text value.
fn field_text<'a>(label: String, value: String) -> Element<'a, Message> {
    field(label, Text::new(value).size(typography::BODY_LG).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_seeds_draft_with_current_name() {
        let mut state = State::new();
        state.update(Message::EditPressed, "Alice Martin");
        assert!(state.is_editing());
        assert_eq!(state.draft_name, "Alice Martin");
    }

    #[test]
    fn save_emits_trimmed_name_and_leaves_edit_mode() {
        let mut state = State::new();
        state.update(Message::EditPressed, "Alice");
        state.update(Message::NameChanged("  Alice M.  ".into()), "Alice");

        let event = state.update(Message::SavePressed, "Alice");

        assert_eq!(event, Event::SaveName("Alice M.".to_string()));
        assert!(!state.is_editing());
    }

    #[test]
    fn save_rejects_empty_name_and_stays_editing() {
        let mut state = State::new();
        state.update(Message::EditPressed, "Alice");
        state.update(Message::NameChanged("   ".into()), "Alice");

        let event = state.update(Message::SavePressed, "Alice");

        assert_eq!(event, Event::RejectEmptyName);
        assert!(state.is_editing());
    }

    #[test]
    fn cancel_discards_the_draft() {
        let mut state = State::new();
        state.update(Message::EditPressed, "Alice");
        state.update(Message::NameChanged("Bob".into()), "Alice");

        let event = state.update(Message::CancelPressed, "Alice");

        assert_eq!(event, Event::None);
        assert!(!state.is_editing());
    }
}
