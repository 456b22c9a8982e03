// SPDX-License-Identifier: MPL-2.0
//! Client-side validation for the work editor.
//!
//! Everything here runs before a network call; a rejection aborts the
//! operation with no partial state change.

use crate::config::defaults::{
    ALLOWED_IMAGE_EXTENSIONS, MAX_UPLOAD_BYTES, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::error::{Error, Result};
use std::path::Path;

/// Checks the work title: required, 3 to 100 characters after trimming.
pub fn validate_title(title: &str) -> Result<()> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("Project title is required".to_string()));
    }
    let chars = trimmed.chars().count();
    if chars < TITLE_MIN_CHARS {
        return Err(Error::Validation(format!(
            "Project title must be at least {TITLE_MIN_CHARS} characters"
        )));
    }
    if chars > TITLE_MAX_CHARS {
        return Err(Error::Validation(format!(
            "Project title is too long (maximum {TITLE_MAX_CHARS} characters)"
        )));
    }
    Ok(())
}

/// Checks a picked file before it is queued or uploaded: non-empty, within
/// the 32 MB cap, and carrying an extension the backend accepts.
pub fn validate_image_file(path: &Path, size_bytes: u64) -> Result<()> {
    let name = file_name(path);
    if size_bytes == 0 {
        return Err(Error::Validation(format!(
            "File \"{name}\" is empty or damaged"
        )));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(Error::Validation(format!(
            "File \"{name}\" is too large (maximum 32 MB)"
        )));
    }

    let allowed = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_IMAGE_EXTENSIONS.iter().any(|a| *a == ext)
        })
        .unwrap_or(false);
    if !allowed {
        return Err(Error::Validation(format!(
            "File \"{name}\" is not a supported image type"
        )));
    }
    Ok(())
}

/// Display name of a path for user-facing messages.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Aggregate result of a multi-image upload. Individual failures are
/// reported separately; successes are never rolled back.
pub fn upload_summary(uploaded: usize, failed: usize) -> Option<(String, bool)> {
    match (uploaded, failed) {
        (0, 0) => None,
        (n, 0) => Some((format!("All {n} images uploaded"), false)),
        (0, m) => Some((format!("All {m} image uploads failed"), true)),
        (n, m) => Some((format!("Uploaded {n} images, {m} failed"), true)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn title_must_not_be_empty() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn title_minimum_is_three_characters() {
        assert!(validate_title("ab").is_err());
        assert!(validate_title("abc").is_ok());
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        // Three Cyrillic characters, six bytes.
        assert!(validate_title("кор").is_ok());
    }

    #[test]
    fn title_maximum_is_one_hundred_characters() {
        let exactly = "x".repeat(100);
        assert!(validate_title(&exactly).is_ok());
        let too_long = "x".repeat(101);
        assert!(validate_title(&too_long).is_err());
    }

    #[test]
    fn title_is_trimmed_before_measuring() {
        assert!(validate_title("  ab  ").is_err());
        assert!(validate_title("  abc  ").is_ok());
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = validate_image_file(&PathBuf::from("box.jpg"), 0).expect_err("expected error");
        assert!(format!("{err}").contains("empty"));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let path = PathBuf::from("huge.png");
        assert!(validate_image_file(&path, MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_image_file(&path, MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn extension_allow_list_is_enforced() {
        assert!(validate_image_file(&PathBuf::from("a.jpg"), 100).is_ok());
        assert!(validate_image_file(&PathBuf::from("a.JPEG"), 100).is_ok());
        assert!(validate_image_file(&PathBuf::from("a.webp"), 100).is_ok());
        assert!(validate_image_file(&PathBuf::from("a.pdf"), 100).is_err());
        assert!(validate_image_file(&PathBuf::from("noext"), 100).is_err());
    }

    #[test]
    fn upload_summary_matches_outcomes() {
        assert_eq!(upload_summary(0, 0), None);
        assert_eq!(
            upload_summary(3, 0),
            Some(("All 3 images uploaded".to_string(), false))
        );
        assert_eq!(
            upload_summary(0, 2),
            Some(("All 2 image uploads failed".to_string(), true))
        );
        assert_eq!(
            upload_summary(2, 1),
            Some(("Uploaded 2 images, 1 failed".to_string(), true))
        );
    }
}
