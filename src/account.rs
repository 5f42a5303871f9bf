// SPDX-License-Identifier: MPL-2.0
//! Data model for the signed-in customer session.
//!
//! The app is an offline client: the session is seeded with the sample
//! account below. Backend synchronization is out of scope.

use crate::ui::design_tokens::palette;
use iced::Color;

/// The signed-in customer shown on the profile screen.
#[derive(Debug, Clone)]
pub struct Customer {
    pub display_name: String,
    pub email: String,
    pub phone: String,
    /// Billing account reference (masked before display).
    pub billing_account: String,
    /// Outstanding balance in minor units (cents).
    pub balance_cents: i64,
}

/// Lifecycle stage of a tracked project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Review,
    Delivered,
}

impl ProjectStatus {
    /// i18n key for the status label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ProjectStatus::Planning => "project-status-planning",
            ProjectStatus::InProgress => "project-status-in-progress",
            ProjectStatus::Review => "project-status-review",
            ProjectStatus::Delivered => "project-status-delivered",
        }
    }

    /// Badge accent color for the status.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ProjectStatus::Planning => palette::INFO_500,
            ProjectStatus::InProgress => palette::WARNING_500,
            ProjectStatus::Review => palette::PRIMARY_500,
            ProjectStatus::Delivered => palette::SUCCESS_500,
        }
    }

    /// Whether the project still needs attention from the business.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, ProjectStatus::Delivered)
    }
}

/// A project or service tracked for the customer.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub status: ProjectStatus,
    pub summary: String,
    /// Last update, ISO date shown as-is in the detail view.
    pub updated: String,
}

/// Everything the UI needs about the current session.
#[derive(Debug, Clone)]
pub struct Session {
    pub customer: Customer,
    pub projects: Vec<Project>,
}

impl Session {
    /// Seeds the demo session.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            customer: Customer {
                display_name: "Alice Martin".to_string(),
                email: "alice.martin@example.com".to_string(),
                phone: "+33 6 12 34 56 78".to_string(),
                billing_account: "FR76-3000-6000-0112".to_string(),
                balance_cents: 48_250,
            },
            projects: vec![
                Project {
                    name: "Storefront redesign".to_string(),
                    status: ProjectStatus::InProgress,
                    summary: "New landing page and checkout flow.".to_string(),
                    updated: "2026-08-21".to_string(),
                },
                Project {
                    name: "Photo shoot".to_string(),
                    status: ProjectStatus::Review,
                    summary: "Product photography for the autumn catalog.".to_string(),
                    updated: "2026-08-18".to_string(),
                },
                Project {
                    name: "Brand guidelines".to_string(),
                    status: ProjectStatus::Delivered,
                    summary: "Logo refresh and typography rules.".to_string(),
                    updated: "2026-07-02".to_string(),
                },
            ],
        }
    }

    /// Number of projects still in flight.
    #[must_use]
    pub fn active_project_count(&self) -> usize {
        self.projects.iter().filter(|p| p.status.is_active()).count()
    }
}
