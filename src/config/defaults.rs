// SPDX-License-Identifier: MPL-2.0
//! Default values and fixed limits shared across the application.

/// Backend the client talks to unless overridden by config or `--server`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How many decoded remote images to keep in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 64;

/// Hard cap the backend enforces on a single upload.
pub const MAX_UPLOAD_BYTES: u64 = 32 * 1024 * 1024;

/// How many images may queue in the creation flow before the work exists.
pub const MAX_PENDING_IMAGES: usize = 10;

/// Extensions the backend accepts; checked client-side before any upload.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 7] =
    ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff"];

/// Title length rules enforced before create/update requests.
pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;

/// Overlay fade-out before the modal leaves the display.
pub const OVERLAY_FADE_MS: u64 = 300;

/// Horizontal drag distance that counts as a swipe gesture.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

pub fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

pub fn default_image_cache_entries() -> usize {
    DEFAULT_IMAGE_CACHE_ENTRIES
}
