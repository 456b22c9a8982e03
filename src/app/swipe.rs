// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection over raw mouse events.
//!
//! The overlay subscription feeds cursor and button events here; a press
//! followed by a release more than [`SWIPE_THRESHOLD_PX`] away horizontally
//! counts as a swipe. Vertical movement is ignored.

use crate::config::defaults::SWIPE_THRESHOLD_PX;

/// Direction the pointer travelled between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Tracks one press-drag-release cycle.
#[derive(Debug, Default)]
pub struct Tracker {
    cursor_x: f32,
    press_x: Option<f32>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_moved(&mut self, x: f32) {
        self.cursor_x = x;
    }

    pub fn pressed(&mut self) {
        self.press_x = Some(self.cursor_x);
    }

    /// Ends the gesture. Returns the direction when the drag exceeded the
    /// threshold, `None` for a plain click or a short drag.
    pub fn released(&mut self) -> Option<Direction> {
        let start = self.press_x.take()?;
        let delta = self.cursor_x - start;
        if delta <= -SWIPE_THRESHOLD_PX {
            Some(Direction::Left)
        } else if delta >= SWIPE_THRESHOLD_PX {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Discards any in-progress gesture, e.g. when the overlay closes.
    pub fn reset(&mut self) {
        self.press_x = None;
    }
}
