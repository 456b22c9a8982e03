// SPDX-License-Identifier: MPL-2.0
//! Admin session state: authentication, the managed work list, and the work
//! editor draft.
//!
//! Like the gallery session, this is plain state with explicit constructors
//! and reset paths, so the admin flows are testable without a UI. Network
//! effects live in the application update loop.

mod validate;

pub use validate::{
    file_name, upload_summary, validate_image_file, validate_title,
};

use crate::api::{Work, WorkFields};
use crate::config::defaults::MAX_PENDING_IMAGES;
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Authentication status as last reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Status check has not completed yet.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn {
        user: Option<String>,
    },
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthState::LoggedIn { .. })
    }
}

/// Login form fields plus its inline error line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
}

/// An image picked locally but not uploaded yet (creation flow only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl PendingImage {
    /// Display name for previews and error messages.
    pub fn name(&self) -> String {
        file_name(&self.path)
    }
}

/// Editor draft for creating or editing one work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkDraft {
    /// `None` while creating; the server id once editing an existing work.
    pub work_id: Option<String>,
    pub title: String,
    pub description: String,
    pub area: String,
    /// Images already stored on the server, by filename.
    pub existing_images: Vec<String>,
    /// Images queued locally, uploaded after the work is created.
    pub pending_images: Vec<PendingImage>,
    pub saving: bool,
}

impl WorkDraft {
    /// Fresh draft for the creation flow.
    pub fn for_new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing work.
    pub fn for_existing(work: &Work) -> Self {
        Self {
            work_id: Some(work.id.clone()),
            title: work.title.clone().unwrap_or_default(),
            description: work.description.clone().unwrap_or_default(),
            area: work.area.clone().unwrap_or_default(),
            existing_images: work.images.clone(),
            pending_images: Vec::new(),
            saving: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.work_id.is_some()
    }

    /// Validates and assembles the fields sent on create/update.
    pub fn fields(&self) -> Result<WorkFields> {
        validate_title(&self.title)?;
        Ok(WorkFields {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            area: self.area.trim().to_string(),
        })
    }

    /// Queues a picked file for upload after creation.
    ///
    /// Enforces the file rules and the ten-image cap of the creation flow.
    /// Edit mode uploads immediately instead of queuing.
    pub fn queue_image(&mut self, path: PathBuf, size_bytes: u64) -> Result<()> {
        validate_image_file(&path, size_bytes)?;
        if self.pending_images.len() >= MAX_PENDING_IMAGES {
            return Err(Error::Validation(format!(
                "At most {MAX_PENDING_IMAGES} images can be attached"
            )));
        }
        self.pending_images.push(PendingImage { path, size_bytes });
        Ok(())
    }

    /// Drops a queued image locally. Out-of-range indices are ignored.
    pub fn remove_pending(&mut self, index: usize) {
        if index < self.pending_images.len() {
            self.pending_images.remove(index);
        }
    }

    /// Removes a server-side image from the draft after a successful DELETE.
    pub fn remove_existing(&mut self, filename: &str) {
        self.existing_images.retain(|f| f != filename);
    }
}

/// The whole admin panel state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub auth: AuthState,
    pub works: Vec<Work>,
    pub login: LoginForm,
    pub editor: Option<WorkDraft>,
    /// Work id awaiting delete confirmation.
    pub pending_delete: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_works(&mut self, works: Vec<Work>) {
        self.works = works;
    }

    pub fn work_by_id(&self, id: &str) -> Option<&Work> {
        self.works.iter().find(|w| w.id == id)
    }

    /// Opens the editor in creation mode, discarding any previous draft.
    pub fn start_create(&mut self) {
        self.editor = Some(WorkDraft::for_new());
    }

    /// Opens the editor on an existing work. Returns `false` when the id is
    /// not in the current list.
    pub fn start_edit(&mut self, id: &str) -> bool {
        match self.work_by_id(id) {
            Some(work) => {
                self.editor = Some(WorkDraft::for_existing(work));
                true
            }
            None => false,
        }
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn request_delete(&mut self, id: String) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Logs out locally regardless of what the server said, clearing every
    /// piece of admin state.
    pub fn local_logout(&mut self) {
        *self = Self {
            auth: AuthState::LoggedOut,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(id: &str, images: &[&str]) -> Work {
        Work {
            id: id.to_string(),
            title: Some("Gift box".to_string()),
            description: Some("Matte lamination".to_string()),
            area: Some("Premium".to_string()),
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn start_edit_prefills_draft_from_work() {
        let mut session = Session::new();
        session.set_works(vec![work("w1", &["a.jpg", "b.jpg"])]);

        assert!(session.start_edit("w1"));
        let draft = session.editor.as_ref().expect("expected draft");
        assert_eq!(draft.work_id.as_deref(), Some("w1"));
        assert_eq!(draft.title, "Gift box");
        assert_eq!(draft.existing_images, vec!["a.jpg", "b.jpg"]);
        assert!(draft.pending_images.is_empty());
    }

    #[test]
    fn start_edit_with_unknown_id_keeps_editor_closed() {
        let mut session = Session::new();
        assert!(!session.start_edit("ghost"));
        assert!(session.editor.is_none());
    }

    #[test]
    fn start_create_discards_previous_draft() {
        let mut session = Session::new();
        session.set_works(vec![work("w1", &[])]);
        session.start_edit("w1");

        session.start_create();
        let draft = session.editor.as_ref().expect("expected draft");
        assert!(!draft.is_edit());
        assert!(draft.title.is_empty());
    }

    #[test]
    fn draft_fields_require_valid_title() {
        let mut draft = WorkDraft::for_new();
        draft.title = "ab".to_string();
        assert!(draft.fields().is_err());

        draft.title = "  Luxury box  ".to_string();
        draft.description = " embossed ".to_string();
        let fields = draft.fields().expect("expected fields");
        assert_eq!(fields.title, "Luxury box");
        assert_eq!(fields.description, "embossed");
    }

    #[test]
    fn queue_image_enforces_the_cap() {
        let mut draft = WorkDraft::for_new();
        for i in 0..MAX_PENDING_IMAGES {
            draft
                .queue_image(PathBuf::from(format!("img{i}.jpg")), 100)
                .expect("queue failed");
        }
        let err = draft
            .queue_image(PathBuf::from("one-too-many.jpg"), 100)
            .expect_err("expected cap error");
        assert!(format!("{err}").contains("10"));
        assert_eq!(draft.pending_images.len(), MAX_PENDING_IMAGES);
    }

    #[test]
    fn queue_image_rejects_invalid_files() {
        let mut draft = WorkDraft::for_new();
        assert!(draft.queue_image(PathBuf::from("a.jpg"), 0).is_err());
        assert!(draft.queue_image(PathBuf::from("a.txt"), 100).is_err());
        assert!(draft.pending_images.is_empty());
    }

    #[test]
    fn remove_pending_ignores_out_of_range() {
        let mut draft = WorkDraft::for_new();
        draft
            .queue_image(PathBuf::from("a.jpg"), 100)
            .expect("queue failed");
        draft.remove_pending(5);
        assert_eq!(draft.pending_images.len(), 1);
        draft.remove_pending(0);
        assert!(draft.pending_images.is_empty());
    }

    #[test]
    fn remove_existing_drops_by_filename() {
        let mut draft = WorkDraft::for_existing(&work("w1", &["a.jpg", "b.jpg"]));
        draft.remove_existing("a.jpg");
        assert_eq!(draft.existing_images, vec!["b.jpg"]);
    }

    #[test]
    fn local_logout_clears_everything() {
        let mut session = Session::new();
        session.auth = AuthState::LoggedIn {
            user: Some("admin".to_string()),
        };
        session.set_works(vec![work("w1", &[])]);
        session.login.username = "admin".to_string();
        session.start_create();

        session.local_logout();
        assert_eq!(session.auth, AuthState::LoggedOut);
        assert!(session.works.is_empty());
        assert!(session.editor.is_none());
        assert!(session.login.username.is_empty());
    }
}
