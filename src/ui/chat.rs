// SPDX-License-Identifier: MPL-2.0
//! Support chat screen with a scripted, fully client-side assistant.
//!
//! There is no backend: the assistant matches a few keywords in the
//! visitor's message and schedules a canned reply after a short delay so the
//! exchange reads like a conversation.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text_input, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Who wrote a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Visitor,
    Assistant,
}

/// One bubble in the conversation log.
#[derive(Debug, Clone)]
pub struct Entry {
    pub author: Author,
    pub body: String,
}

/// Chat screen state.
#[derive(Debug, Default)]
pub struct State {
    entries: Vec<Entry>,
    draft: String,
    awaiting_reply: bool,
}

/// Messages emitted by the chat screen.
#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Send,
    /// The scheduled assistant reply is ready to display.
    AssistantReplied(String),
}

/// Effect the parent application must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Schedule an assistant reply; the body is already localized.
    ScheduleReply(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Process a chat message. Replies are localized with the current
    /// locale at send time.
    pub fn update(&mut self, message: Message, i18n: &I18n) -> Action {
        match message {
            Message::DraftChanged(draft) => {
                self.draft = draft;
                Action::None
            }
            Message::Send => {
                let body = self.draft.trim().to_string();
                if body.is_empty() || self.awaiting_reply {
                    return Action::None;
                }

                let reply = i18n.tr(script_key(&body));
                self.entries.push(Entry {
                    author: Author::Visitor,
                    body,
                });
                self.draft.clear();
                self.awaiting_reply = true;
                Action::ScheduleReply(reply)
            }
            Message::AssistantReplied(body) => {
                self.entries.push(Entry {
                    author: Author::Assistant,
                    body,
                });
                self.awaiting_reply = false;
                Action::None
            }
        }
    }
}

/// Picks the script entry for a visitor message by keyword.
fn script_key(visitor_message: &str) -> &'static str {
    let lower = visitor_message.to_lowercase();

    if ["hour", "open", "close", "horaire", "ouvert"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        "chat-script-hours"
    } else if ["price", "quote", "cost", "tarif", "devis", "prix"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        "chat-script-pricing"
    } else if ["status", "project", "progress", "projet", "avancement"]
        .iter()
        .any(|kw| lower.contains(kw))
    {
        "chat-script-status"
    } else {
        "chat-script-fallback"
    }
}

/// Contextual data needed to render the chat screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the chat screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("chat-title")).size(typography::TITLE_LG);

    let mut log = Column::new().spacing(spacing::SM).width(Length::Fill);

    // Standing intro bubble so the screen never starts empty.
    log = log.push(bubble(
        ctx.i18n.tr("chat-script-intro"),
        Author::Assistant,
    ));
    for entry in ctx.state.entries() {
        log = log.push(bubble(entry.body.clone(), entry.author));
    }
    if ctx.state.awaiting_reply() {
        log = log.push(
            Text::new(format!(
                "{} {}",
                ctx.i18n.tr("chat-assistant-name"),
                ctx.i18n.tr("chat-typing")
            ))
            .size(typography::CAPTION),
        );
    }

    let input = text_input(&ctx.i18n.tr("chat-placeholder"), ctx.state.draft())
        .on_input(Message::DraftChanged)
        .on_submit(Message::Send)
        .padding(spacing::SM);

    let send_button = button(Text::new(ctx.i18n.tr("chat-send-button")).size(typography::BODY))
        .on_press(Message::Send)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let composer = Row::new()
        .spacing(spacing::SM)
        .push(input)
        .push(send_button);

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(title)
        .push(
            Container::new(scrollable(log).anchor_bottom())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(composer);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
}

/// Renders one speech bubble, aligned by author.
fn bubble<'a>(body: String, author: Author) -> Element<'a, Message> {
    let from_visitor = author == Author::Visitor;

    let bubble = Container::new(Text::new(body).size(typography::BODY))
        .max_width(sizing::CHAT_BUBBLE_MAX_WIDTH)
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::container::chat_bubble(theme, from_visitor));

    Container::new(bubble)
        .width(Length::Fill)
        .align_x(if from_visitor {
            Horizontal::Right
        } else {
            Horizontal::Left
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_appends_visitor_entry_and_schedules_reply() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.update(Message::DraftChanged("When are you open?".into()), &i18n);

        let action = state.update(Message::Send, &i18n);

        assert!(matches!(action, Action::ScheduleReply(_)));
        assert_eq!(state.entries().len(), 1);
        assert_eq!(state.entries()[0].author, Author::Visitor);
        assert!(state.draft().is_empty());
        assert!(state.awaiting_reply());
    }

    #[test]
    fn send_with_blank_draft_is_ignored() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.update(Message::DraftChanged("   ".into()), &i18n);

        let action = state.update(Message::Send, &i18n);

        assert_eq!(action, Action::None);
        assert!(state.entries().is_empty());
    }

    #[test]
    fn second_send_waits_for_pending_reply() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.update(Message::DraftChanged("hello".into()), &i18n);
        state.update(Message::Send, &i18n);

        state.update(Message::DraftChanged("more".into()), &i18n);
        let action = state.update(Message::Send, &i18n);

        assert_eq!(action, Action::None);
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn reply_closes_the_exchange() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.update(Message::DraftChanged("hello".into()), &i18n);
        state.update(Message::Send, &i18n);

        state.update(Message::AssistantReplied("welcome".into()), &i18n);

        assert_eq!(state.entries().len(), 2);
        assert_eq!(state.entries()[1].author, Author::Assistant);
        assert!(!state.awaiting_reply());
    }

    #[test]
    fn script_key_matches_keywords() {
        assert_eq!(script_key("What are your opening hours?"), "chat-script-hours");
        assert_eq!(script_key("Combien coûte un devis ?"), "chat-script-pricing");
        assert_eq!(script_key("Any progress on my project?"), "chat-script-status");
        assert_eq!(script_key("Bonjour !"), "chat-script-fallback");
    }
}
