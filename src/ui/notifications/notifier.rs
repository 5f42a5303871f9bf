// SPDX-License-Identifier: MPL-2.0
//! Process-wide handle for enqueueing notifications.
//!
//! Screens normally raise notifications through their update path, but async
//! tasks and deeply nested helpers have no line back to the manager. The
//! [`Notifier`] is a cheap clone-able handle installed by the manager on app
//! boot; any code can grab it with [`notifier`] and push without threading a
//! reference through every call.
//!
//! Acquiring the handle while no manager has installed one is a wiring
//! defect, not a runtime condition: [`notifier`] panics so the mistake
//! surfaces immediately during development. Call sites that can degrade
//! gracefully use [`try_notifier`] instead.

use super::notification::Notification;
use std::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

static NOTIFIER: RwLock<Option<Notifier>> = RwLock::new(None);

/// Clone-able sender half of the notification channel.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: UnboundedSender<Notification>,
}

impl Notifier {
    pub(super) fn new(tx: UnboundedSender<Notification>) -> Self {
        Self { tx }
    }

    /// Enqueues a notification. Never blocks.
    ///
    /// If the manager has already been torn down the notification is
    /// silently dropped; there is nobody left to show it to.
    pub fn notify(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }

    /// Enqueues a success notification.
    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notification::success(message));
    }

    /// Enqueues an error notification.
    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notification::error(message));
    }

    /// Enqueues an info notification.
    pub fn info(&self, message: impl Into<String>) {
        self.notify(Notification::info(message));
    }

    /// Enqueues a warning notification.
    pub fn warning(&self, message: impl Into<String>) {
        self.notify(Notification::warning(message));
    }
}

/// Installs the process-wide notifier. Called by the manager on boot.
pub(super) fn install(notifier: Notifier) {
    let mut slot = NOTIFIER.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    *slot = Some(notifier);
}

/// Removes the process-wide notifier. Called by the manager on teardown.
pub(super) fn uninstall() {
    let mut slot = NOTIFIER.write().unwrap_or_else(std::sync::PoisonError::into_inner);
    *slot = None;
}

/// Returns the installed notifier.
///
/// # Panics
///
/// Panics if no notification manager has installed a notifier. That means
/// the caller runs outside the app's provider scope, which is a programming
/// error.
#[must_use]
pub fn notifier() -> Notifier {
    try_notifier().expect(
        "notifications::notifier() called with no manager installed; \
         the notification manager must be created before use",
    )
}

/// Returns the installed notifier, or `None` when no manager is active.
#[must_use]
pub fn try_notifier() -> Option<Notifier> {
    NOTIFIER
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

    /// Serializes tests that touch the global notifier slot.
    pub fn global_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_notifier_is_none_without_manager() {
        let _guard = test_support::global_lock();
        uninstall();
        assert!(try_notifier().is_none());
    }

    #[test]
    #[should_panic(expected = "no manager installed")]
    fn notifier_panics_without_manager() {
        let _guard = test_support::global_lock();
        uninstall();
        let _ = notifier();
    }

    #[test]
    fn installed_notifier_delivers_notifications() {
        let _guard = test_support::global_lock();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        install(Notifier::new(tx));

        let handle = notifier();
        handle.success("saved");
        handle.warning("careful");

        let first = rx.try_recv().expect("first notification should arrive");
        assert_eq!(first.message(), "saved");
        let second = rx.try_recv().expect("second notification should arrive");
        assert_eq!(second.message(), "careful");

        uninstall();
    }

    #[test]
    fn notify_after_teardown_is_silent() {
        let _guard = test_support::global_lock();
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Notification>();
        let handle = Notifier::new(tx);
        drop(rx);

        // Receiver gone; send must not panic.
        handle.info("nobody listening");
    }
}
