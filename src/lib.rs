// SPDX-License-Identifier: MPL-2.0
//! `postpress_studio` is a desktop client for a print-shop portfolio site,
//! built with the Iced GUI framework.
//!
//! It shows the public works gallery with a full-screen image overlay, and
//! gives the site owner an admin panel for managing works and images against
//! the backend REST API.

#![doc(html_root_url = "https://docs.rs/postpress_studio/0.1.0")]

pub mod admin;
pub mod api;
pub mod app;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod media;
pub mod ui;
