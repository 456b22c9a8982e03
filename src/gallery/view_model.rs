// SPDX-License-Identifier: MPL-2.0
//! Pure projection of the gallery session into a renderable description.
//!
//! Keeping this as a plain function keeps the overlay widget free of policy:
//! which image to show, whether navigation controls exist, and what the
//! counter reads are all decided here and asserted in tests.

use super::Session;

/// Fallback title for works saved without one.
pub const UNTITLED: &str = "Untitled";

/// Fallback description for works saved without one.
pub const NO_DESCRIPTION: &str = "No description provided";

/// What the main image area should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    /// An uploaded image, addressed by its server filename.
    Remote(String),
    /// The built-in placeholder, used when the work has no images.
    Placeholder,
}

/// One entry of the thumbnail strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailViewModel {
    pub index: usize,
    pub filename: String,
    pub active: bool,
}

/// Everything the overlay widget needs to draw one consistent frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayViewModel {
    pub title: String,
    pub description: String,
    pub area: Option<String>,
    pub image: ImageSlot,
    /// `"n / total"` over the active work's images; absent when the work
    /// has no images.
    pub counter: Option<String>,
    /// Empty unless the work has more than one image.
    pub thumbnails: Vec<ThumbnailViewModel>,
    /// Prev/next image arrows; shown only with more than one image.
    pub show_image_nav: bool,
    /// Prev/next work controls; shown only with more than one work.
    pub show_work_nav: bool,
}

/// Renders the session into a view model, or `None` while closed.
pub fn render(session: &Session) -> Option<OverlayViewModel> {
    let work = session.active_work()?;
    let image_index = session.image_index()?;

    let image = match work.images.get(image_index) {
        Some(filename) => ImageSlot::Remote(filename.clone()),
        None => ImageSlot::Placeholder,
    };

    let counter = if work.images.is_empty() {
        None
    } else {
        Some(format!("{} / {}", image_index + 1, work.images.len()))
    };

    let thumbnails = if work.images.len() > 1 {
        work.images
            .iter()
            .enumerate()
            .map(|(index, filename)| ThumbnailViewModel {
                index,
                filename: filename.clone(),
                active: index == image_index,
            })
            .collect()
    } else {
        Vec::new()
    };

    Some(OverlayViewModel {
        title: work
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED.to_string()),
        description: work
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        area: work.area.clone().filter(|a| !a.is_empty()),
        image,
        counter,
        thumbnails,
        show_image_nav: work.images.len() > 1,
        show_work_nav: session.works().len() > 1,
    })
}
