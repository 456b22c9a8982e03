// SPDX-License-Identifier: MPL-2.0
//! Gallery session state machine.
//!
//! This module owns the snapshot of portfolio works and the two indices
//! (active work, active image) that drive the full-screen overlay. It is a
//! single source of truth shared by the overlay view and the input handlers,
//! and deliberately knows nothing about rendering so transitions can be
//! tested without a windowing environment.

mod view_model;

pub use view_model::{
    render, ImageSlot, OverlayViewModel, ThumbnailViewModel, NO_DESCRIPTION, UNTITLED,
};

use crate::api::Work;
use std::fmt;

/// Overlay position within the work list.
///
/// `Closed` is both the initial and the terminal state. While `Open`, the
/// indices satisfy `work < works.len()` and, whenever the active work has
/// images, `image < images.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    Closed,
    Open { work: usize, image: usize },
}

/// Error returned when `open` is asked for a work that does not exist.
///
/// The session stays `Closed`; callers surface this as a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkOutOfRange {
    pub requested: usize,
    pub available: usize,
}

impl fmt::Display for WorkOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "work {} does not exist ({} available)",
            self.requested, self.available
        )
    }
}

/// Manages browsing through the portfolio works inside the modal overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    works: Vec<Work>,
    overlay: Overlay,
}

impl Session {
    /// Creates a session with no works and the overlay closed.
    pub fn new() -> Self {
        Self {
            works: Vec::new(),
            overlay: Overlay::Closed,
        }
    }

    /// Replaces the work snapshot wholesale after a successful load.
    ///
    /// There is no incremental merge; the previous snapshot is discarded. If
    /// the overlay was open on a work that no longer exists, it closes. If
    /// the work survives but its image list shrank below the active image
    /// index, the index resets to 0 so it stays in range.
    pub fn replace_works(&mut self, works: Vec<Work>) {
        self.works = works;
        if let Overlay::Open { work, image } = self.overlay {
            if work >= self.works.len() {
                self.overlay = Overlay::Closed;
            } else if image >= self.works[work].images.len() {
                self.overlay = Overlay::Open { work, image: 0 };
            }
        }
    }

    /// Returns the current work snapshot.
    pub fn works(&self) -> &[Work] {
        &self.works
    }

    /// Whether the overlay is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self.overlay, Overlay::Open { .. })
    }

    /// Index of the active work, while the overlay is open.
    pub fn work_index(&self) -> Option<usize> {
        match self.overlay {
            Overlay::Open { work, .. } => Some(work),
            Overlay::Closed => None,
        }
    }

    /// Index of the active image within the active work, while open.
    pub fn image_index(&self) -> Option<usize> {
        match self.overlay {
            Overlay::Open { image, .. } => Some(image),
            Overlay::Closed => None,
        }
    }

    /// The active work, while the overlay is open.
    pub fn active_work(&self) -> Option<&Work> {
        self.work_index().and_then(|i| self.works.get(i))
    }

    /// Opens the overlay on the given work, starting at its first image.
    ///
    /// An out-of-range index leaves the session `Closed` and untouched; the
    /// caller is expected to notify the user.
    pub fn open(&mut self, index: usize) -> Result<(), WorkOutOfRange> {
        if index >= self.works.len() {
            return Err(WorkOutOfRange {
                requested: index,
                available: self.works.len(),
            });
        }
        self.overlay = Overlay::Open {
            work: index,
            image: 0,
        };
        Ok(())
    }

    /// Closes the overlay. A no-op when already closed.
    pub fn close(&mut self) {
        self.overlay = Overlay::Closed;
    }

    /// Advances to the next image of the active work, wrapping to the first.
    ///
    /// A no-op when closed or when the work has at most one image.
    pub fn next_image(&mut self) {
        self.step_image(1);
    }

    /// Retreats to the previous image of the active work, wrapping to the last.
    pub fn prev_image(&mut self) {
        self.step_image(-1);
    }

    fn step_image(&mut self, delta: isize) {
        if let Overlay::Open { work, image } = self.overlay {
            let len = self.works[work].images.len();
            if len <= 1 {
                return;
            }
            let next = (image as isize + delta).rem_euclid(len as isize) as usize;
            self.overlay = Overlay::Open { work, image: next };
        }
    }

    /// Jumps directly to image `index` of the active work (thumbnail click).
    ///
    /// Out-of-range indices are ignored.
    pub fn jump_to_image(&mut self, index: usize) {
        if let Overlay::Open { work, .. } = self.overlay {
            if index < self.works[work].images.len() {
                self.overlay = Overlay::Open { work, image: index };
            }
        }
    }

    /// Moves to the next work, wrapping circularly across the list.
    ///
    /// The image index always resets to 0, even when the list has a single
    /// work and the navigation lands on the same entry.
    pub fn next_work(&mut self) {
        self.step_work(1);
    }

    /// Moves to the previous work, wrapping circularly across the list.
    pub fn prev_work(&mut self) {
        self.step_work(-1);
    }

    fn step_work(&mut self, delta: isize) {
        if let Overlay::Open { work, .. } = self.overlay {
            let len = self.works.len();
            let next = (work as isize + delta).rem_euclid(len as isize) as usize;
            self.overlay = Overlay::Open {
                work: next,
                image: 0,
            };
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(id: &str, images: &[&str]) -> Work {
        Work {
            id: id.to_string(),
            title: Some(format!("Work {id}")),
            description: None,
            area: None,
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn session(images_per_work: &[&[&str]]) -> Session {
        let mut s = Session::new();
        s.replace_works(
            images_per_work
                .iter()
                .enumerate()
                .map(|(i, imgs)| work(&i.to_string(), imgs))
                .collect(),
        );
        s
    }

    #[test]
    fn new_session_is_closed() {
        let s = Session::new();
        assert!(!s.is_open());
        assert_eq!(s.work_index(), None);
        assert_eq!(s.image_index(), None);
    }

    #[test]
    fn open_sets_both_indices() {
        let mut s = session(&[&["a.jpg"], &["b.jpg", "c.jpg"]]);
        s.open(1).expect("open failed");
        assert!(s.is_open());
        assert_eq!(s.work_index(), Some(1));
        assert_eq!(s.image_index(), Some(0));
    }

    #[test]
    fn open_out_of_range_stays_closed() {
        let mut s = session(&[&["a.jpg"]]);
        let err = s.open(5).expect_err("expected out of range");
        assert_eq!(err.requested, 5);
        assert_eq!(err.available, 1);
        assert!(!s.is_open());
        assert_eq!(s.work_index(), None);
        assert_eq!(s.image_index(), None);
    }

    #[test]
    fn open_on_empty_list_fails() {
        let mut s = Session::new();
        assert!(s.open(0).is_err());
        assert!(!s.is_open());
    }

    #[test]
    fn next_image_wraps_to_first() {
        let mut s = session(&[&["a.jpg", "b.jpg", "c.jpg"]]);
        s.open(0).expect("open failed");

        for _ in 0..3 {
            s.next_image();
        }
        // Full cycle returns to index 0.
        assert_eq!(s.image_index(), Some(0));
    }

    #[test]
    fn prev_image_from_first_wraps_to_last() {
        let mut s = session(&[&["a.jpg", "b.jpg", "c.jpg"]]);
        s.open(0).expect("open failed");

        s.prev_image();
        assert_eq!(s.image_index(), Some(2));
    }

    #[test]
    fn image_navigation_is_noop_with_single_image() {
        let mut s = session(&[&["only.jpg"]]);
        s.open(0).expect("open failed");

        s.next_image();
        assert_eq!(s.image_index(), Some(0));
        s.prev_image();
        assert_eq!(s.image_index(), Some(0));
    }

    #[test]
    fn image_navigation_is_noop_with_no_images() {
        let mut s = session(&[&[]]);
        s.open(0).expect("open failed");

        s.next_image();
        s.prev_image();
        assert_eq!(s.image_index(), Some(0));
    }

    #[test]
    fn jump_to_image_in_range() {
        let mut s = session(&[&["a.jpg", "b.jpg", "c.jpg"]]);
        s.open(0).expect("open failed");

        s.jump_to_image(2);
        assert_eq!(s.image_index(), Some(2));
    }

    #[test]
    fn jump_to_image_out_of_range_is_ignored() {
        let mut s = session(&[&["a.jpg", "b.jpg"]]);
        s.open(0).expect("open failed");
        s.jump_to_image(1);

        s.jump_to_image(7);
        assert_eq!(s.image_index(), Some(1));
    }

    #[test]
    fn next_work_resets_image_index() {
        let mut s = session(&[&["a.jpg", "b.jpg"], &["c.jpg", "d.jpg"]]);
        s.open(0).expect("open failed");
        s.next_image();
        assert_eq!(s.image_index(), Some(1));

        s.next_work();
        assert_eq!(s.work_index(), Some(1));
        assert_eq!(s.image_index(), Some(0));
    }

    #[test]
    fn work_navigation_wraps_circularly() {
        let mut s = session(&[&["a.jpg"], &["b.jpg"], &["c.jpg"]]);
        s.open(2).expect("open failed");

        s.next_work();
        assert_eq!(s.work_index(), Some(0));
        s.prev_work();
        assert_eq!(s.work_index(), Some(2));
    }

    #[test]
    fn single_work_navigation_still_resets_image() {
        let mut s = session(&[&["a.jpg", "b.jpg"]]);
        s.open(0).expect("open failed");
        s.next_image();

        s.next_work();
        assert_eq!(s.work_index(), Some(0));
        assert_eq!(s.image_index(), Some(0));
    }

    #[test]
    fn close_returns_to_closed() {
        let mut s = session(&[&["a.jpg"]]);
        s.open(0).expect("open failed");
        s.close();
        assert!(!s.is_open());

        // Closing twice stays closed.
        s.close();
        assert!(!s.is_open());
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let mut s = session(&[&["a.jpg", "b.jpg"]]);
        s.next_image();
        s.prev_image();
        s.jump_to_image(1);
        s.next_work();
        s.prev_work();
        assert!(!s.is_open());
    }

    #[test]
    fn replace_works_closes_overlay_when_index_disappears() {
        let mut s = session(&[&["a.jpg"], &["b.jpg"]]);
        s.open(1).expect("open failed");

        s.replace_works(vec![work("solo", &["c.jpg"])]);
        assert!(!s.is_open());
        assert_eq!(s.works().len(), 1);
    }

    #[test]
    fn replace_works_resets_image_when_list_shrinks() {
        let mut s = session(&[&["a.jpg", "b.jpg", "c.jpg"]]);
        s.open(0).expect("open failed");
        s.jump_to_image(2);

        s.replace_works(vec![work("trimmed", &["only.jpg"])]);
        assert!(s.is_open());
        assert_eq!(s.image_index(), Some(0));
    }

    #[test]
    fn replace_works_keeps_image_index_still_in_range() {
        let mut s = session(&[&["a.jpg", "b.jpg", "c.jpg"]]);
        s.open(0).expect("open failed");
        s.jump_to_image(1);

        s.replace_works(vec![work("same", &["x.jpg", "y.jpg"])]);
        assert_eq!(s.image_index(), Some(1));
    }

    #[test]
    fn replace_works_keeps_overlay_when_index_survives() {
        let mut s = session(&[&["a.jpg"], &["b.jpg"]]);
        s.open(0).expect("open failed");

        s.replace_works(vec![work("x", &["c.jpg"]), work("y", &["d.jpg"])]);
        assert!(s.is_open());
        assert_eq!(s.work_index(), Some(0));
    }
}
