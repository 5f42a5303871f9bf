// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (profile saved, settings errors, etc.) without
//! blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity kinds
//! - [`manager`] - `Manager` owning the visible list and expiry deadlines
//! - [`notifier`] - Process-wide handle for enqueueing from anywhere
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! let id = manager.push(Notification::success("Profile saved"));
//!
//! // In the view function, render the overlay
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//!
//! // Periodically, expire entries
//! manager.tick();
//!
//! // Or remove one early
//! manager.dismiss(id);
//! ```
//!
//! # Lifecycle
//!
//! Every pushed notification is eventually removed exactly once: either its
//! expiry deadline passes during a tick, or it is dismissed manually,
//! whichever comes first. Dismissing an already-removed id is a no-op.

mod manager;
mod notification;
pub mod notifier;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Kind, Notification, NotificationId, DEFAULT_DURATION};
pub use notifier::{notifier, try_notifier, Notifier};
pub use toast::Toast;
