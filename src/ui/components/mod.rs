// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared between screens.

pub mod hours_banner;
pub mod stat_card;
