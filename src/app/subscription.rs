// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for the notification lifecycle.
///
/// The tick drives both expiry of visible toasts and draining of the
/// process-wide notifier channel, so it stays active while a notifier is
/// installed even when nothing is on screen. A push from an async task then
/// surfaces within one tick instead of waiting for the next user interaction.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
