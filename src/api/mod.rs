// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the portfolio backend.
//!
//! One `Client` instance lives for the whole application. It owns a cookie
//! store so the admin session cookie set by `POST /api/login` is attached to
//! every subsequent request; this is the single credential policy for the
//! whole client, public reads included.

mod types;

pub use types::{
    ApiErrorBody, AuthStatus, ContactRequest, LoginResponse, UploadResponse, Work, WorkFields,
};

use crate::error::{Error, Result};
use std::time::Duration;

const USER_AGENT: &str = concat!("PostpressStudio/", env!("CARGO_PKG_VERSION"));

/// Typed access to the backend REST contract.
///
/// Cheap to clone; clones share the underlying connection pool and cookie
/// store.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Builds a client against `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Plain-settings constructor for when the tuned builder cannot be
    /// built. Loses the timeout and cookie store but keeps the app usable.
    pub fn fallback(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The server this client talks to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a non-2xx response to `Error::Api`, pulling the message out of
    /// the JSON body when the backend provided one.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .unwrap_or_default()
            .into_message();
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// `GET /api/works` — the full work list, replacing any prior snapshot.
    pub async fn fetch_works(&self) -> Result<Vec<Work>> {
        let response = self.http.get(self.url("/api/works")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `GET /api/auth/status`.
    pub async fn auth_status(&self) -> Result<AuthStatus> {
        let response = self.http.get(self.url("/api/auth/status")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `POST /api/login`. On success the session cookie lands in the store.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        // The backend answers 401 with the same body shape, so decode both.
        let status = response.status();
        if status.is_success() || status.as_u16() == 401 {
            Ok(response.json().await?)
        } else {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .unwrap_or_default()
                .into_message();
            Err(Error::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// `POST /api/logout`. Callers treat failures as best-effort.
    pub async fn logout(&self) -> Result<()> {
        let response = self.http.post(self.url("/api/logout")).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST /api/works` — creates a work and returns it with its new id.
    pub async fn create_work(&self, fields: &WorkFields) -> Result<Work> {
        let response = self
            .http
            .post(self.url("/api/works"))
            .json(fields)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `PUT /api/works/:id`.
    pub async fn update_work(&self, id: &str, fields: &WorkFields) -> Result<()> {
        let response = self
            .http
            .put(self.url(&format!("/api/works/{id}")))
            .json(fields)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `DELETE /api/works/:id` — removes the work and, implicitly, its images.
    pub async fn delete_work(&self, id: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/works/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST /api/works/:id/images` — uploads one image as multipart field
    /// `image` and returns the server-assigned filename.
    pub async fn upload_image(
        &self,
        work_id: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| Error::Http(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .http
            .post(self.url(&format!("/api/works/{work_id}/images")))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// `DELETE /api/works/:id/images/:filename`.
    pub async fn delete_image(&self, work_id: &str, filename: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/works/{work_id}/images/{filename}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// `POST /api/contact` — records a contact inquiry.
    pub async fn send_contact(&self, request: &ContactRequest) -> Result<()> {
        let response = self
            .http
            .post(self.url("/api/contact"))
            .json(request)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Downloads an uploaded image from `/uploads/:filename`.
    pub async fn fetch_image(&self, filename: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(self.url(&format!("/uploads/{filename}")))
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
