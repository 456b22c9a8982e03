// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{AuthStatus, LoginResponse, UploadResponse, Work};
use crate::error::Error;
use crate::ui::{admin_panel, notifications, overlay, portfolio};
use std::path::PathBuf;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Portfolio(portfolio::Message),
    Overlay(overlay::Message),
    Admin(admin_panel::Message),
    Notification(notifications::Message),
    /// Result of the public work list fetch.
    WorksFetched(Result<Vec<Work>, Error>),
    /// Result of the admin work list fetch.
    AdminWorksFetched(Result<Vec<Work>, Error>),
    AuthStatusChecked(Result<AuthStatus, Error>),
    LoginCompleted(Result<LoginResponse, Error>),
    LogoutCompleted(Result<(), Error>),
    ContactSent(Result<(), Error>),
    WorkCreated(Result<Work, Error>),
    WorkUpdated(Result<(), Error>),
    WorkDeleted(Result<(), Error>),
    /// Files chosen in the native picker, `None` when cancelled.
    ImagesPicked(Option<Vec<PathBuf>>),
    /// One immediate upload finished (edit mode).
    ImageUploaded {
        display_name: String,
        result: Result<UploadResponse, Error>,
    },
    /// The whole queued batch finished after a create.
    PendingUploadsFinished {
        uploaded: usize,
        /// One `"name: reason"` entry per failed file.
        failed: Vec<String>,
    },
    /// A server-side image delete finished (edit mode).
    ImageDeleted {
        filename: String,
        result: Result<(), Error>,
    },
    /// A remote image download finished.
    ImageFetched {
        filename: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Raw runtime event forwarded while the overlay is open.
    RawEvent(iced::Event),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// The overlay fade-out delay elapsed. Stale generations are ignored so
    /// a reopen during the fade does not clear the fresh snapshot.
    OverlayFadeElapsed(u64),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional backend base URL override (`--server`).
    pub server: Option<String>,
    /// Start on the admin screen (`--admin`).
    pub admin: bool,
    /// Optional config directory override (`--config-dir`). Takes precedence
    /// over `POSTPRESS_STUDIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
