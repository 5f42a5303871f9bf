// SPDX-License-Identifier: MPL-2.0
//! `clientdesk` is a small customer portal built with the Iced GUI framework.
//!
//! It gives a customer of a small business one place to check their projects,
//! their account details, and the shop's opening hours, with a scripted
//! support chat and toast notifications for feedback. It also demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/clientdesk/0.2.0")]

pub mod account;
pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod i18n;
pub mod ui;
