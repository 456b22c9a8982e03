// SPDX-License-Identifier: MPL-2.0
//! Widgets and styling.
//!
//! Every submodule renders from state owned elsewhere and raises its own
//! `Message` enum; the application maps those into the top-level message.

pub mod admin_panel;
pub mod design_tokens;
pub mod notifications;
pub mod overlay;
pub mod portfolio;
