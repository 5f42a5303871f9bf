// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`dashboard`] - Account overview with summary cards and business hours
//! - [`projects`] - Tracked projects with status badges
//! - [`chat`] - Support chat with the scripted assistant
//! - [`profile`] - Masked account details and display-name editing
//! - [`settings`] - Application preferences and configuration
//! - [`about`] - Application version and credits
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (hours banner, stat card)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering (visual primitives)
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod chat;
pub mod components;
pub mod dashboard;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod profile;
pub mod projects;
pub mod settings;
pub mod styles;
pub mod theming;
