// SPDX-License-Identifier: MPL-2.0
//! Wire types for the portfolio REST API.
//!
//! Shapes mirror what the backend actually sends; optional fields default so
//! a sparse work record never fails deserialization.

use serde::{Deserialize, Serialize};

/// One portfolio work: an ordered image set with its description.
///
/// Read-only to the gallery viewer; image order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Editable fields of a work, sent on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkFields {
    pub title: String,
    pub description: String,
    pub area: String,
}

/// Response of `GET /api/auth/status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<String>,
}

/// Response of `POST /api/login`. A session cookie rides along on success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of a single image upload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
}

/// Payload of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub message: String,
}

/// Error body the backend attaches to non-2xx responses. Both field names
/// occur in the wild, so accept either.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// The most specific message available, or an empty string.
    pub fn into_message(self) -> String {
        self.error.or(self.message).unwrap_or_default()
    }
}
