// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered list of visible notifications. Each entry
//! carries its own expiry deadline; a periodic tick removes entries whose
//! deadline has passed, and manual dismissal removes them earlier. Whichever
//! happens first wins: the entry is gone, so the other path degrades to a
//! no-op. The list is append-only and unbounded, notification volume is low
//! by construction, and insertion order is what the overlay renders.

use super::notification::{Notification, NotificationId};
use super::notifier::{self, Notifier};
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking expiry deadlines.
    Tick,
}

/// Manages the ordered list of visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Visible notifications in insertion order.
    entries: Vec<Notification>,
    /// Receiving end of the process-wide notifier channel, when installed.
    remote: Option<UnboundedReceiver<Notification>>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the process-wide [`Notifier`] backed by this manager.
    ///
    /// Remote notifications are collected with [`Manager::drain_remote`].
    /// The notifier stays installed until this manager is dropped.
    pub fn install_notifier(&mut self) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.remote = Some(rx);
        notifier::install(Notifier::new(tx));
    }

    /// Appends a notification and returns its id.
    ///
    /// The entry becomes visible immediately and stays until its deadline
    /// passes or it is dismissed. Never blocks.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        self.entries.push(notification);
        id
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Dismissing
    /// an absent id is a no-op, never an error: the entry may simply have
    /// expired first.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.entries.iter().position(|n| n.id() == id) {
            self.entries.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes every entry whose deadline has passed at `now`.
    pub fn tick_at(&mut self, now: Instant) {
        self.entries.retain(|n| !n.is_expired_at(now));
    }

    /// Processes a tick event against the current time.
    ///
    /// Should be called periodically (e.g., every 100-500ms) while
    /// notifications are visible.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Moves queued remote notifications (pushed through the process-wide
    /// notifier) into the visible list.
    ///
    /// Called at the top of every update cycle; a no-op when no notifier is
    /// installed or nothing is queued. Each drained entry has its display
    /// clock restarted so time spent in the channel does not count against
    /// its visible lifetime.
    pub fn drain_remote(&mut self) {
        if let Some(rx) = self.remote.as_mut() {
            let now = Instant::now();
            while let Ok(mut notification) = rx.try_recv() {
                notification.mark_visible_at(now);
                self.entries.push(notification);
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the visible notifications in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the visible list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether there is anything to display or expire.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns whether the process-wide notifier channel is installed.
    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Clears all notifications and their deadlines (teardown).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Drop for Manager {
    fn drop(&mut self) {
        // Tear down the process-wide notifier installed by this manager so a
        // stale handle cannot outlive its channel.
        if self.remote.is_some() {
            notifier::uninstall();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::notifier::test_support;
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_preserves_insertion_order_with_unique_ids() {
        let mut manager = Manager::new();
        let id_a = manager.push(Notification::info("A"));
        let id_b = manager.push(Notification::info("B"));
        let id_c = manager.push(Notification::info("C"));

        assert_ne!(id_a, id_b);
        assert_ne!(id_b, id_c);
        let messages: Vec<&str> = manager.entries().iter().map(Notification::message).collect();
        assert_eq!(messages, ["A", "B", "C"]);
    }

    #[test]
    fn dismiss_removes_exactly_one_and_keeps_order() {
        let mut manager = Manager::new();
        let id_a = manager.push(Notification::info("A"));
        manager.push(Notification::info("B"));
        manager.push(Notification::info("C"));

        assert!(manager.dismiss(id_a));
        let messages: Vec<&str> = manager.entries().iter().map(Notification::message).collect();
        assert_eq!(messages, ["B", "C"]);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("Saved"));

        assert!(manager.dismiss(id));
        // Second removal of the same id changes nothing and does not error.
        assert!(!manager.dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let unknown = Notification::info("never pushed").id();
        assert!(!manager.dismiss(unknown));
    }

    #[test]
    fn tick_expires_entries_past_their_deadline() {
        let mut manager = Manager::new();
        let short = Notification::info("short").with_duration(Duration::from_millis(1000));
        let created = short.created_at();
        manager.push(short);
        manager.push(Notification::info("long"));

        // Just before the deadline nothing happens.
        manager.tick_at(created + Duration::from_millis(999));
        assert_eq!(manager.len(), 2);

        // At the deadline the short entry goes, the long one stays.
        manager.tick_at(created + Duration::from_millis(1000));
        let messages: Vec<&str> = manager.entries().iter().map(Notification::message).collect();
        assert_eq!(messages, ["long"]);
    }

    #[test]
    fn manual_dismiss_cancels_pending_expiry() {
        let mut manager = Manager::new();
        let notification = Notification::info("gone early").with_duration(Duration::from_millis(50));
        let deadline = notification.deadline();
        let id = manager.push(notification);
        manager.push(Notification::info("stays"));

        assert!(manager.dismiss(id));

        // The expiry that would have fired later must have no further
        // effect: no double removal, no error.
        manager.tick_at(deadline + Duration::from_secs(1));
        let messages: Vec<&str> = manager.entries().iter().map(Notification::message).collect();
        assert_eq!(messages, ["stays"]);
    }

    #[test]
    fn success_scenario_push_then_dismiss() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::success("Saved"));

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.entries()[0].kind(), super::super::Kind::Success);
        assert_eq!(manager.entries()[0].message(), "Saved");

        manager.dismiss(id);
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Notification::info(format!("test-{i}")));
        }

        manager.clear();
        assert!(manager.is_empty());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let id = manager.push(Notification::info("test"));

        manager.handle_message(&Message::Dismiss(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn drain_remote_collects_notifier_pushes() {
        let _guard = test_support::global_lock();
        let mut manager = Manager::new();
        manager.install_notifier();

        let handle = notifier::notifier();
        handle.success("from afar");
        handle.info("also remote");

        assert!(manager.is_empty());
        manager.drain_remote();
        let messages: Vec<&str> = manager.entries().iter().map(Notification::message).collect();
        assert_eq!(messages, ["from afar", "also remote"]);
    }

    #[test]
    fn drained_notifications_restart_their_display_clock() {
        let _guard = test_support::global_lock();
        let mut manager = Manager::new();
        manager.install_notifier();

        let queued = Notification::info("slow to arrive").with_duration(Duration::from_millis(100));
        let queued_deadline = queued.deadline();
        notifier::notifier().notify(queued);

        // Sit in the channel past the original deadline before draining.
        std::thread::sleep(Duration::from_millis(150));
        manager.drain_remote();
        assert_eq!(manager.len(), 1);

        // Channel time does not count: the entry survives a tick that is
        // already past the deadline stamped at construction.
        manager.tick();
        assert_eq!(manager.len(), 1);
        assert!(manager.entries()[0].deadline() > queued_deadline);
    }

    #[test]
    fn dropping_manager_uninstalls_notifier() {
        let _guard = test_support::global_lock();
        {
            let mut manager = Manager::new();
            manager.install_notifier();
            assert!(notifier::try_notifier().is_some());
        }
        assert!(notifier::try_notifier().is_none());
    }

    #[test]
    fn drain_remote_without_notifier_is_noop() {
        let mut manager = Manager::new();
        manager.drain_remote();
        assert!(manager.is_empty());
    }
}
