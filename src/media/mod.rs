// SPDX-License-Identifier: MPL-2.0
//! Image handling: client-side preparation before upload and an in-memory
//! cache of images fetched from the backend.

mod cache;
mod prepare;

pub use cache::{placeholder_handle, ImageCache};
pub use prepare::{prepare_for_upload, PreparedImage, MAX_UPLOAD_EDGE_PX};
