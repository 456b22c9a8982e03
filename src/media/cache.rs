// SPDX-License-Identifier: MPL-2.0
//! LRU cache of remote images, keyed by server filename.
//!
//! The portfolio grid and the overlay both look images up here; a miss marks
//! the filename as in flight so the application schedules exactly one fetch
//! per file.

use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

const DEFAULT_CAPACITY: usize = 64;

/// Cached decoded image handles plus the set of outstanding fetches.
#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, Handle>,
    in_flight: HashSet<String>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            in_flight: HashSet::new(),
        }
    }

    /// Looks up a handle, refreshing its recency.
    pub fn get(&mut self, filename: &str) -> Option<Handle> {
        self.entries.get(filename).cloned()
    }

    /// Looks up a handle without touching recency. Views use this so that
    /// rendering never reorders the eviction queue.
    pub fn peek(&self, filename: &str) -> Option<Handle> {
        self.entries.peek(filename).cloned()
    }

    /// Whether a fetch for `filename` should be started. Returns `false`
    /// when the image is already cached or already being fetched, and marks
    /// it in flight otherwise.
    pub fn begin_fetch(&mut self, filename: &str) -> bool {
        if self.entries.contains(filename) || self.in_flight.contains(filename) {
            return false;
        }
        self.in_flight.insert(filename.to_string());
        true
    }

    /// Stores fetched bytes as a handle and clears the in-flight mark.
    pub fn insert(&mut self, filename: &str, bytes: Vec<u8>) {
        self.in_flight.remove(filename);
        self.entries
            .put(filename.to_string(), Handle::from_bytes(bytes));
    }

    /// Clears the in-flight mark after a failed fetch so a later view can
    /// retry.
    pub fn abort_fetch(&mut self, filename: &str) {
        self.in_flight.remove(filename);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle shown when a work has no images or a download has not finished.
/// Built from raw pixels so no asset file is required.
pub fn placeholder_handle() -> Handle {
    const WIDTH: u32 = 8;
    const HEIGHT: u32 = 6;
    // Neutral gray, fully opaque.
    let pixels: Vec<u8> = std::iter::repeat([64u8, 66, 70, 255])
        .take((WIDTH * HEIGHT) as usize)
        .flatten()
        .collect();
    Handle::from_rgba(WIDTH, HEIGHT, pixels)
}
