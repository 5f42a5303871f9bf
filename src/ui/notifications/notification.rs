// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum used
//! throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a notification stays visible unless dismissed earlier.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Unique identifier for a notification.
///
/// Ids are drawn from a process-wide monotonic counter, so an id is never
/// reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity kind: determines the icon and accent color, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Error requiring attention (red).
    Error,
    /// Informational message (blue).
    #[default]
    Info,
    /// Warning that doesn't block operation (orange).
    Warning,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
        }
    }
}

/// A notification to be displayed to the user.
///
/// The message and optional title are literal, already-localized strings;
/// translation happens at the call site.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// Optional short heading above the message.
    title: Option<String>,
    /// The message body.
    message: String,
    /// When this notification was created.
    created_at: Instant,
    /// Custom display duration (overrides [`DEFAULT_DURATION`]).
    custom_duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given kind and message.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: None,
            message: message.into(),
            created_at: Instant::now(),
            custom_duration: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Adds a short title rendered above the message.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a custom display duration, overriding [`DEFAULT_DURATION`].
    ///
    /// Useful for notifications that need more time to read.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.custom_duration = Some(duration);
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity kind.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the optional title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the effective display duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.custom_duration.unwrap_or(DEFAULT_DURATION)
    }

    /// Restarts the display clock so the deadline becomes `now + duration()`.
    ///
    /// Time spent queued in the notifier channel must not count against the
    /// visible lifetime; the manager calls this when the entry enters the
    /// visible list.
    pub(super) fn mark_visible_at(&mut self, now: Instant) {
        self.created_at = now;
    }

    /// Returns the instant at which this notification expires.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.created_at + self.duration()
    }

    /// Returns whether the deadline has passed at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn kind_colors_are_distinct() {
        let success = Kind::Success.color();
        let error = Kind::Error.color();
        let info = Kind::Info.color();
        let warning = Kind::Warning.color();

        assert_ne!(success, error);
        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(error, info);
        assert_ne!(error, warning);
        assert_ne!(info, warning);
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn default_duration_applies_without_override() {
        let notification = Notification::info("test");
        assert_eq!(notification.duration(), DEFAULT_DURATION);
    }

    #[test]
    fn custom_duration_overrides_default() {
        let notification = Notification::info("test").with_duration(Duration::from_secs(1));
        assert_eq!(notification.duration(), Duration::from_secs(1));
    }

    #[test]
    fn not_expired_before_deadline() {
        let notification = Notification::info("test").with_duration(Duration::from_secs(1));
        let just_before = notification.created_at() + Duration::from_millis(999);
        assert!(!notification.is_expired_at(just_before));
    }

    #[test]
    fn expired_at_and_after_deadline() {
        let notification = Notification::info("test").with_duration(Duration::from_secs(1));
        let deadline = notification.deadline();
        assert!(notification.is_expired_at(deadline));
        assert!(notification.is_expired_at(deadline + Duration::from_millis(1)));
    }

    #[test]
    fn mark_visible_at_restarts_the_display_clock() {
        let mut notification = Notification::info("queued").with_duration(Duration::from_millis(100));
        let after_wait = notification.created_at() + Duration::from_millis(150);
        assert!(notification.is_expired_at(after_wait));

        notification.mark_visible_at(after_wait);
        assert!(!notification.is_expired_at(after_wait));
        assert_eq!(notification.deadline(), after_wait + Duration::from_millis(100));
    }

    #[test]
    fn builder_sets_title_and_message() {
        let notification = Notification::error("disk full").with_title("Save failed");
        assert_eq!(notification.kind(), Kind::Error);
        assert_eq!(notification.title(), Some("Save failed"));
        assert_eq!(notification.message(), "disk full");
    }

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), Kind::Success);
        assert_eq!(Notification::error("").kind(), Kind::Error);
        assert_eq!(Notification::info("").kind(), Kind::Info);
        assert_eq!(Notification::warning("").kind(), Kind::Warning);
    }
}
