// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! State mutation happens synchronously here; every network call runs as a
//! [`Task`] whose result comes back as another message, so the handlers stay
//! testable by feeding in result messages directly.

use super::swipe::Direction;
use super::{App, LoadState, Message, Screen};
use crate::admin::{self, AuthState, LoginForm};
use crate::api::{AuthStatus, LoginResponse, UploadResponse, Work};
use crate::config::defaults::{ALLOWED_IMAGE_EXTENSIONS, OVERLAY_FADE_MS};
use crate::error::Error;
use crate::gallery;
use crate::media::prepare_for_upload;
use crate::ui::notifications::Notification;
use crate::ui::{admin_panel, overlay, portfolio};
use iced::{keyboard, mouse, Task};
use std::path::PathBuf;
use std::time::Duration;

impl App {
    pub(super) fn switch_screen(&mut self, screen: Screen) -> Task<Message> {
        self.screen = screen;
        if screen == Screen::Admin && self.admin.auth == AuthState::Unknown {
            return self.check_auth();
        }
        Task::none()
    }

    pub(super) fn check_auth(&mut self) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move { client.auth_status().await },
            Message::AuthStatusChecked,
        )
    }

    pub(super) fn fetch_portfolio_works(&mut self) -> Task<Message> {
        self.portfolio_load = LoadState::Loading;
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_works().await },
            Message::WorksFetched,
        )
    }

    pub(super) fn fetch_admin_works(&mut self) -> Task<Message> {
        self.admin_load = LoadState::Loading;
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_works().await },
            Message::AdminWorksFetched,
        )
    }

    /// Schedules downloads for every filename not cached or in flight.
    fn fetch_images(&mut self, filenames: Vec<String>) -> Task<Message> {
        let mut tasks = Vec::new();
        for filename in filenames {
            if !self.images.begin_fetch(&filename) {
                continue;
            }
            let client = self.client.clone();
            tasks.push(Task::perform(
                async move {
                    let result = client.fetch_image(&filename).await;
                    (filename, result)
                },
                |(filename, result)| Message::ImageFetched { filename, result },
            ));
        }
        Task::batch(tasks)
    }

    /// First image of each work, for grid cards.
    fn card_images(works: &[Work]) -> Vec<String> {
        works
            .iter()
            .filter_map(|work| work.images.first().cloned())
            .collect()
    }

    fn refresh_overlay(&mut self) {
        self.overlay_vm = gallery::render(&self.gallery);
    }

    fn fetch_active_work_images(&mut self) -> Task<Message> {
        let filenames = self
            .gallery
            .active_work()
            .map(|work| work.images.clone())
            .unwrap_or_default();
        self.fetch_images(filenames)
    }

    fn open_overlay(&mut self, index: usize) -> Task<Message> {
        match self.gallery.open(index) {
            Ok(()) => {
                // Coalesce with a fade still in progress.
                self.closing_overlay = None;
                self.refresh_overlay();
                self.fetch_active_work_images()
            }
            Err(err) => {
                self.notifications
                    .push(Notification::error(format!("Could not open work: {err}")));
                Task::none()
            }
        }
    }

    fn close_overlay(&mut self) -> Task<Message> {
        let Some(snapshot) = self.overlay_vm.take() else {
            return Task::none();
        };
        self.gallery.close();
        self.swipe.reset();
        self.closing_overlay = Some(snapshot);
        self.fade_generation += 1;
        let generation = self.fade_generation;
        Task::perform(
            async move {
                tokio::time::sleep(Duration::from_millis(OVERLAY_FADE_MS)).await;
                generation
            },
            Message::OverlayFadeElapsed,
        )
    }

    pub(super) fn on_fade_elapsed(&mut self, generation: u64) -> Task<Message> {
        if generation == self.fade_generation {
            self.closing_overlay = None;
        }
        Task::none()
    }

    pub(super) fn handle_portfolio(&mut self, message: portfolio::Message) -> Task<Message> {
        match message {
            portfolio::Message::OpenWork(index) => self.open_overlay(index),
            portfolio::Message::RetryLoad => self.fetch_portfolio_works(),
            portfolio::Message::NameChanged(value) => {
                self.contact.set_name(value);
                Task::none()
            }
            portfolio::Message::PhoneChanged(value) => {
                self.contact.set_phone(&value);
                Task::none()
            }
            portfolio::Message::EmailChanged(value) => {
                self.contact.set_email(value);
                Task::none()
            }
            portfolio::Message::InquiryChanged(value) => {
                self.contact.set_message(value);
                Task::none()
            }
            portfolio::Message::SubmitContact => match self.contact.to_request() {
                Ok(request) => {
                    self.contact.sending = true;
                    let client = self.client.clone();
                    Task::perform(
                        async move { client.send_contact(&request).await },
                        Message::ContactSent,
                    )
                }
                Err(err) => {
                    self.notifications.push(Notification::error(err.to_string()));
                    Task::none()
                }
            },
        }
    }

    pub(super) fn handle_overlay(&mut self, message: overlay::Message) -> Task<Message> {
        match message {
            overlay::Message::Close => self.close_overlay(),
            overlay::Message::NextImage => {
                self.gallery.next_image();
                self.refresh_overlay();
                Task::none()
            }
            overlay::Message::PrevImage => {
                self.gallery.prev_image();
                self.refresh_overlay();
                Task::none()
            }
            overlay::Message::JumpToImage(index) => {
                self.gallery.jump_to_image(index);
                self.refresh_overlay();
                Task::none()
            }
            overlay::Message::NextWork => {
                self.gallery.next_work();
                self.refresh_overlay();
                self.fetch_active_work_images()
            }
            overlay::Message::PrevWork => {
                self.gallery.prev_work();
                self.refresh_overlay();
                self.fetch_active_work_images()
            }
        }
    }

    pub(super) fn handle_raw_event(&mut self, event: iced::Event) -> Task<Message> {
        if !self.gallery.is_open() {
            return Task::none();
        }
        match event {
            iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    self.gallery.next_image();
                    self.refresh_overlay();
                    Task::none()
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    self.gallery.prev_image();
                    self.refresh_overlay();
                    Task::none()
                }
                keyboard::Key::Named(keyboard::key::Named::Escape) => self.close_overlay(),
                _ => Task::none(),
            },
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.swipe.cursor_moved(position.x);
                Task::none()
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                self.swipe.pressed();
                Task::none()
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                match self.swipe.released() {
                    Some(Direction::Left) => {
                        self.gallery.next_image();
                        self.refresh_overlay();
                    }
                    Some(Direction::Right) => {
                        self.gallery.prev_image();
                        self.refresh_overlay();
                    }
                    None => {}
                }
                Task::none()
            }
            _ => Task::none(),
        }
    }

    pub(super) fn handle_admin(&mut self, message: admin_panel::Message) -> Task<Message> {
        match message {
            admin_panel::Message::UsernameChanged(value) => {
                self.admin.login.username = value;
                Task::none()
            }
            admin_panel::Message::PasswordChanged(value) => {
                self.admin.login.password = value;
                Task::none()
            }
            admin_panel::Message::SubmitLogin => self.submit_login(),
            admin_panel::Message::Logout => {
                self.admin.local_logout();
                self.admin_load = LoadState::Loading;
                self.notifications.push(Notification::info("Logged out"));
                let client = self.client.clone();
                Task::perform(async move { client.logout().await }, Message::LogoutCompleted)
            }
            admin_panel::Message::RetryLoad => self.fetch_admin_works(),
            admin_panel::Message::StartCreate => {
                self.admin.start_create();
                Task::none()
            }
            admin_panel::Message::StartEdit(id) => {
                let filenames = self
                    .admin
                    .work_by_id(&id)
                    .map(|work| work.images.clone())
                    .unwrap_or_default();
                if self.admin.start_edit(&id) {
                    self.fetch_images(filenames)
                } else {
                    Task::none()
                }
            }
            admin_panel::Message::RequestDelete(id) => {
                self.admin.request_delete(id);
                Task::none()
            }
            admin_panel::Message::CancelDelete => {
                self.admin.cancel_delete();
                Task::none()
            }
            admin_panel::Message::ConfirmDelete => {
                let Some(id) = self.admin.pending_delete.take() else {
                    return Task::none();
                };
                let client = self.client.clone();
                Task::perform(
                    async move { client.delete_work(&id).await },
                    Message::WorkDeleted,
                )
            }
            admin_panel::Message::TitleChanged(value) => {
                if let Some(draft) = self.admin.editor.as_mut() {
                    draft.title = value;
                }
                Task::none()
            }
            admin_panel::Message::DescriptionChanged(value) => {
                if let Some(draft) = self.admin.editor.as_mut() {
                    draft.description = value;
                }
                Task::none()
            }
            admin_panel::Message::AreaChanged(value) => {
                if let Some(draft) = self.admin.editor.as_mut() {
                    draft.area = value;
                }
                Task::none()
            }
            admin_panel::Message::PickImages => {
                Task::perform(pick_images(), Message::ImagesPicked)
            }
            admin_panel::Message::RemovePending(index) => {
                if let Some(draft) = self.admin.editor.as_mut() {
                    draft.remove_pending(index);
                }
                Task::none()
            }
            admin_panel::Message::RemoveExisting(filename) => {
                let Some(work_id) = self
                    .admin
                    .editor
                    .as_ref()
                    .and_then(|draft| draft.work_id.clone())
                else {
                    return Task::none();
                };
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client.delete_image(&work_id, &filename).await;
                        (filename, result)
                    },
                    |(filename, result)| Message::ImageDeleted { filename, result },
                )
            }
            admin_panel::Message::SaveDraft => self.save_draft(),
            admin_panel::Message::CloseEditor => {
                self.admin.close_editor();
                Task::none()
            }
        }
    }

    fn submit_login(&mut self) -> Task<Message> {
        if self.admin.login.username.trim().is_empty() || self.admin.login.password.is_empty() {
            self.admin.login.error = Some("Enter both username and password".to_string());
            return Task::none();
        }
        self.admin.login.error = None;
        self.admin.login.submitting = true;
        let client = self.client.clone();
        let username = self.admin.login.username.clone();
        let password = self.admin.login.password.clone();
        Task::perform(
            async move { client.login(&username, &password).await },
            Message::LoginCompleted,
        )
    }

    fn save_draft(&mut self) -> Task<Message> {
        let Some(draft) = self.admin.editor.as_mut() else {
            return Task::none();
        };
        let fields = match draft.fields() {
            Ok(fields) => fields,
            Err(err) => {
                self.notifications.push(Notification::error(err.to_string()));
                return Task::none();
            }
        };
        draft.saving = true;
        let client = self.client.clone();
        match draft.work_id.clone() {
            Some(id) => Task::perform(
                async move { client.update_work(&id, &fields).await },
                Message::WorkUpdated,
            ),
            None => Task::perform(
                async move { client.create_work(&fields).await },
                Message::WorkCreated,
            ),
        }
    }

    pub(super) fn on_works_fetched(&mut self, result: Result<Vec<Work>, Error>) -> Task<Message> {
        match result {
            Ok(works) => {
                let card_images = Self::card_images(&works);
                self.gallery.replace_works(works);
                self.refresh_overlay();
                self.portfolio_load = LoadState::Loaded;
                self.fetch_images(card_images)
            }
            Err(err) => {
                self.portfolio_load = LoadState::Failed(format!("Could not load works: {err}"));
                Task::none()
            }
        }
    }

    pub(super) fn on_admin_works_fetched(
        &mut self,
        result: Result<Vec<Work>, Error>,
    ) -> Task<Message> {
        match result {
            Ok(works) => {
                let card_images = Self::card_images(&works);
                self.admin.set_works(works);
                self.admin_load = LoadState::Loaded;
                self.fetch_images(card_images)
            }
            Err(err) => {
                self.admin_load = LoadState::Failed(format!("Could not load works: {err}"));
                Task::none()
            }
        }
    }

    pub(super) fn on_auth_status(&mut self, result: Result<AuthStatus, Error>) -> Task<Message> {
        match result {
            Ok(status) if status.authenticated => {
                self.admin.auth = AuthState::LoggedIn { user: status.user };
                self.fetch_admin_works()
            }
            Ok(_) => {
                self.admin.auth = AuthState::LoggedOut;
                Task::none()
            }
            Err(err) => {
                self.admin.auth = AuthState::LoggedOut;
                self.notifications
                    .push(Notification::error(format!("Session check failed: {err}")));
                Task::none()
            }
        }
    }

    pub(super) fn on_login_completed(
        &mut self,
        result: Result<LoginResponse, Error>,
    ) -> Task<Message> {
        self.admin.login.submitting = false;
        match result {
            Ok(response) if response.success => {
                self.admin.auth = AuthState::LoggedIn {
                    user: response.user,
                };
                self.admin.login = LoginForm::default();
                self.notifications.push(Notification::success("Signed in"));
                self.fetch_admin_works()
            }
            Ok(response) => {
                self.admin.login.error = Some(
                    response
                        .message
                        .unwrap_or_else(|| "Invalid username or password".to_string()),
                );
                Task::none()
            }
            Err(err) => {
                self.admin.login.error = Some(err.to_string());
                Task::none()
            }
        }
    }

    pub(super) fn on_logout_completed(&mut self, result: Result<(), Error>) -> Task<Message> {
        // Local state is already cleared; the server call is best-effort.
        if let Err(err) = result {
            eprintln!("logout: {err}");
        }
        Task::none()
    }

    pub(super) fn on_contact_sent(&mut self, result: Result<(), Error>) -> Task<Message> {
        self.contact.sending = false;
        match result {
            Ok(()) => {
                self.contact.reset();
                self.notifications.push(Notification::success(
                    "Message sent. We will be in touch soon.",
                ));
            }
            Err(err) => {
                self.notifications
                    .push(Notification::error(format!("Could not send message: {err}")));
            }
        }
        Task::none()
    }

    pub(super) fn on_work_created(&mut self, result: Result<Work, Error>) -> Task<Message> {
        match result {
            Ok(work) => {
                let pending = self
                    .admin
                    .editor
                    .as_mut()
                    .map(|draft| std::mem::take(&mut draft.pending_images))
                    .unwrap_or_default();
                if pending.is_empty() {
                    self.notifications.push(Notification::success("Work created"));
                    self.admin.close_editor();
                    return Task::batch([
                        self.fetch_admin_works(),
                        self.fetch_portfolio_works(),
                    ]);
                }
                let client = self.client.clone();
                let work_id = work.id;
                Task::perform(
                    async move {
                        let mut uploaded = 0usize;
                        let mut failed = Vec::new();
                        for image in pending {
                            let name = image.name();
                            match std::fs::read(&image.path) {
                                Ok(bytes) => {
                                    let prepared = prepare_for_upload(&name, bytes);
                                    match client
                                        .upload_image(&work_id, &prepared.filename, prepared.bytes)
                                        .await
                                    {
                                        Ok(_) => uploaded += 1,
                                        Err(err) => failed.push(format!("{name}: {err}")),
                                    }
                                }
                                Err(err) => failed.push(format!("{name}: {err}")),
                            }
                        }
                        (uploaded, failed)
                    },
                    |(uploaded, failed)| Message::PendingUploadsFinished { uploaded, failed },
                )
            }
            Err(err) => {
                if let Some(draft) = self.admin.editor.as_mut() {
                    draft.saving = false;
                }
                self.notifications
                    .push(Notification::error(format!("Could not create work: {err}")));
                Task::none()
            }
        }
    }

    pub(super) fn on_pending_uploads_finished(
        &mut self,
        uploaded: usize,
        failed: Vec<String>,
    ) -> Task<Message> {
        for failure in &failed {
            self.notifications.push(Notification::error(failure.clone()));
        }
        if let Some((message, is_error)) = admin::upload_summary(uploaded, failed.len()) {
            let notification = if is_error {
                Notification::error(message)
            } else {
                Notification::success(message)
            };
            self.notifications.push(notification);
        }
        self.admin.close_editor();
        Task::batch([self.fetch_admin_works(), self.fetch_portfolio_works()])
    }

    pub(super) fn on_work_updated(&mut self, result: Result<(), Error>) -> Task<Message> {
        match result {
            Ok(()) => {
                self.notifications.push(Notification::success("Work updated"));
                self.admin.close_editor();
                Task::batch([self.fetch_admin_works(), self.fetch_portfolio_works()])
            }
            Err(err) => {
                if let Some(draft) = self.admin.editor.as_mut() {
                    draft.saving = false;
                }
                self.notifications
                    .push(Notification::error(format!("Could not save work: {err}")));
                Task::none()
            }
        }
    }

    pub(super) fn on_work_deleted(&mut self, result: Result<(), Error>) -> Task<Message> {
        match result {
            Ok(()) => {
                self.notifications.push(Notification::success("Work deleted"));
                Task::batch([self.fetch_admin_works(), self.fetch_portfolio_works()])
            }
            Err(err) => {
                self.notifications
                    .push(Notification::error(format!("Could not delete work: {err}")));
                Task::none()
            }
        }
    }

    pub(super) fn on_images_picked(&mut self, paths: Option<Vec<PathBuf>>) -> Task<Message> {
        let Some(paths) = paths else {
            return Task::none();
        };
        let Some(draft) = self.admin.editor.as_ref() else {
            return Task::none();
        };

        if let Some(work_id) = draft.work_id.clone() {
            // Edit mode: validate and upload each file immediately.
            let mut tasks = Vec::new();
            for path in paths {
                let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                if let Err(err) = admin::validate_image_file(&path, size) {
                    self.notifications.push(Notification::error(err.to_string()));
                    continue;
                }
                let client = self.client.clone();
                let work_id = work_id.clone();
                let display_name = admin::file_name(&path);
                tasks.push(Task::perform(
                    async move {
                        let result = match std::fs::read(&path) {
                            Ok(bytes) => {
                                let prepared = prepare_for_upload(&display_name, bytes);
                                client
                                    .upload_image(&work_id, &prepared.filename, prepared.bytes)
                                    .await
                            }
                            Err(err) => Err(Error::Image(err.to_string())),
                        };
                        (display_name, result)
                    },
                    |(display_name, result)| Message::ImageUploaded {
                        display_name,
                        result,
                    },
                ));
            }
            Task::batch(tasks)
        } else {
            // Creation mode: queue locally, upload after the work exists.
            for path in paths {
                let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
                let outcome = self
                    .admin
                    .editor
                    .as_mut()
                    .map(|draft| draft.queue_image(path, size));
                if let Some(Err(err)) = outcome {
                    self.notifications.push(Notification::error(err.to_string()));
                }
            }
            Task::none()
        }
    }

    pub(super) fn on_image_uploaded(
        &mut self,
        display_name: String,
        result: Result<UploadResponse, Error>,
    ) -> Task<Message> {
        match result {
            Ok(response) => {
                if let Some(draft) = self.admin.editor.as_mut() {
                    draft.existing_images.push(response.filename.clone());
                }
                self.notifications
                    .push(Notification::success(format!("{display_name} uploaded")));
                self.fetch_images(vec![response.filename])
            }
            Err(err) => {
                self.notifications
                    .push(Notification::error(format!("{display_name}: {err}")));
                Task::none()
            }
        }
    }

    pub(super) fn on_image_deleted(
        &mut self,
        filename: String,
        result: Result<(), Error>,
    ) -> Task<Message> {
        match result {
            Ok(()) => {
                if let Some(draft) = self.admin.editor.as_mut() {
                    draft.remove_existing(&filename);
                }
                self.notifications.push(Notification::success("Image removed"));
            }
            Err(err) => {
                self.notifications
                    .push(Notification::error(format!("Could not remove image: {err}")));
            }
        }
        Task::none()
    }

    pub(super) fn on_image_fetched(
        &mut self,
        filename: String,
        result: Result<Vec<u8>, Error>,
    ) -> Task<Message> {
        match result {
            Ok(bytes) => self.images.insert(&filename, bytes),
            Err(err) => {
                // Leave retry to the next view that needs the file.
                self.images.abort_fetch(&filename);
                eprintln!("image fetch {filename}: {err}");
            }
        }
        Task::none()
    }
}

/// Opens the native multi-file picker filtered to the accepted extensions.
async fn pick_images() -> Option<Vec<PathBuf>> {
    let files = rfd::AsyncFileDialog::new()
        .add_filter("Images", &ALLOWED_IMAGE_EXTENSIONS)
        .pick_files()
        .await?;
    Some(
        files
            .into_iter()
            .map(|file| file.path().to_path_buf())
            .collect(),
    )
}
