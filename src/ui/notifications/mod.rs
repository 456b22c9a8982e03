// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Every caught failure in the application degrades to one of these toasts;
//! nothing surfaces as a raw error. Success and info toasts dismiss after
//! 3 seconds, warnings and errors after 5, matching how long each deserves
//! to stay on screen.
//!
//! - [`notification`] - `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle
//! - [`toast`] - widget rendering the visible stack

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, Severity};
pub use toast::view_overlay;
