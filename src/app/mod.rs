// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` wires the domains together: the public gallery session, the admin
//! session, the contact form, the shared HTTP client and the image cache.
//! Policy decisions with user-visible consequences (what each server result
//! does to the screen, when the overlay fades out) live in `update.rs` next
//! to the update loop so they are easy to audit.

mod message;
mod screen;
mod subscription;
mod swipe;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::admin;
use crate::api;
use crate::config;
use crate::contact;
use crate::gallery;
use crate::media::ImageCache;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::time::Duration;

/// Lifecycle of a server-backed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

/// Root application state.
#[derive(Debug)]
pub struct App {
    client: api::Client,
    screen: Screen,
    gallery: gallery::Session,
    /// Rendered projection of the open overlay, refreshed on every gallery
    /// mutation so the view borrows stable state.
    overlay_vm: Option<gallery::OverlayViewModel>,
    /// Snapshot kept on screen while the close fade runs.
    closing_overlay: Option<gallery::OverlayViewModel>,
    fade_generation: u64,
    portfolio_load: LoadState,
    contact: contact::Form,
    admin: admin::Session,
    admin_load: LoadState,
    images: ImageCache,
    notifications: notifications::Manager,
    swipe: swipe::Tracker,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants Fn for boot; the RefCell lets the one-shot flags move
    // through it.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            client: api::Client::fallback(config::DEFAULT_BASE_URL),
            screen: Screen::Portfolio,
            gallery: gallery::Session::new(),
            overlay_vm: None,
            closing_overlay: None,
            fade_generation: 0,
            portfolio_load: LoadState::Loading,
            contact: contact::Form::new(),
            admin: admin::Session::new(),
            admin_load: LoadState::Loading,
            images: ImageCache::new(),
            notifications: notifications::Manager::new(),
            swipe: swipe::Tracker::new(),
        }
    }
}

impl App {
    /// Builds the initial state from config and flags, and kicks off the
    /// first work list fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let base_url = flags
            .server
            .clone()
            .unwrap_or_else(|| config.server.base_url.clone());
        let timeout = Duration::from_secs(config.server.timeout_secs);

        let mut notifications = notifications::Manager::new();
        if let Some(warning) = config_warning {
            notifications.push(notifications::Notification::warning(warning));
        }

        let client = match api::Client::new(&base_url, timeout) {
            Ok(client) => client,
            Err(err) => {
                notifications.push(notifications::Notification::error(format!(
                    "HTTP client setup failed, using defaults: {err}"
                )));
                api::Client::fallback(&base_url)
            }
        };

        let mut app = App {
            client,
            screen: if flags.admin {
                Screen::Admin
            } else {
                Screen::Portfolio
            },
            images: ImageCache::with_capacity(config.cache.image_entries),
            notifications,
            ..Self::default()
        };

        let mut tasks = vec![app.fetch_portfolio_works()];
        if app.screen == Screen::Admin {
            tasks.push(app.check_auth());
        }
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        "Postpress Studio".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let events = subscription::overlay_events(self.gallery.is_open());
        let tick = subscription::tick(
            self.notifications.has_notifications() || self.closing_overlay.is_some(),
        );
        Subscription::batch([events, tick])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SwitchScreen(screen) => self.switch_screen(screen),
            Message::Portfolio(m) => self.handle_portfolio(m),
            Message::Overlay(m) => self.handle_overlay(m),
            Message::Admin(m) => self.handle_admin(m),
            Message::Notification(m) => {
                self.notifications.handle_message(&m);
                Task::none()
            }
            Message::WorksFetched(result) => self.on_works_fetched(result),
            Message::AdminWorksFetched(result) => self.on_admin_works_fetched(result),
            Message::AuthStatusChecked(result) => self.on_auth_status(result),
            Message::LoginCompleted(result) => self.on_login_completed(result),
            Message::LogoutCompleted(result) => self.on_logout_completed(result),
            Message::ContactSent(result) => self.on_contact_sent(result),
            Message::WorkCreated(result) => self.on_work_created(result),
            Message::WorkUpdated(result) => self.on_work_updated(result),
            Message::WorkDeleted(result) => self.on_work_deleted(result),
            Message::ImagesPicked(paths) => self.on_images_picked(paths),
            Message::ImageUploaded {
                display_name,
                result,
            } => self.on_image_uploaded(display_name, result),
            Message::PendingUploadsFinished { uploaded, failed } => {
                self.on_pending_uploads_finished(uploaded, failed)
            }
            Message::ImageDeleted { filename, result } => self.on_image_deleted(filename, result),
            Message::ImageFetched { filename, result } => self.on_image_fetched(filename, result),
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
            Message::OverlayFadeElapsed(generation) => self.on_fade_elapsed(generation),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::AuthState;
    use crate::api::{AuthStatus, LoginResponse, Work};
    use crate::error::Error;
    use crate::gallery::ImageSlot;
    use crate::ui::{admin_panel, overlay, portfolio};
    use iced::{keyboard, mouse, Point};

    fn work(id: &str, images: &[&str]) -> Work {
        Work {
            id: id.to_string(),
            title: Some(format!("Work {id}")),
            description: None,
            area: None,
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn app_with_works(works: Vec<Work>) -> App {
        let mut app = App::default();
        let _ = app.update(Message::WorksFetched(Ok(works)));
        app
    }

    fn key_press(named: keyboard::key::Named) -> iced::Event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::ArrowRight),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    fn drag(app: &mut App, from: f32, to: f32) {
        let _ = app.update(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::CursorMoved {
                position: Point::new(from, 100.0),
            },
        )));
        let _ = app.update(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::ButtonPressed(mouse::Button::Left),
        )));
        let _ = app.update(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::CursorMoved {
                position: Point::new(to, 100.0),
            },
        )));
        let _ = app.update(Message::RawEvent(iced::Event::Mouse(
            mouse::Event::ButtonReleased(mouse::Button::Left),
        )));
    }

    #[test]
    fn works_fetched_populates_gallery() {
        let app = app_with_works(vec![work("w1", &["a.jpg"]), work("w2", &[])]);
        assert_eq!(app.portfolio_load, LoadState::Loaded);
        assert_eq!(app.gallery.works().len(), 2);
        assert!(app.overlay_vm.is_none());
    }

    #[test]
    fn works_fetch_failure_enters_retry_state() {
        let mut app = App::default();
        let _ = app.update(Message::WorksFetched(Err(Error::Http("refused".into()))));
        assert!(matches!(app.portfolio_load, LoadState::Failed(_)));
    }

    #[test]
    fn open_work_shows_overlay_with_first_image() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg", "b.jpg"])]);
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(0)));

        let vm = app.overlay_vm.as_ref().expect("overlay should be open");
        assert_eq!(vm.image, ImageSlot::Remote("a.jpg".to_string()));
        assert_eq!(vm.counter.as_deref(), Some("1 / 2"));
    }

    #[test]
    fn open_out_of_range_work_is_ignored() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg"])]);
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(7)));
        assert!(app.overlay_vm.is_none());
        assert!(!app.gallery.is_open());
        // The bad index degrades to a toast, never a fault.
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn arrow_keys_navigate_images() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg", "b.jpg", "c.jpg"])]);
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(0)));

        let _ = app.update(Message::RawEvent(key_press(
            keyboard::key::Named::ArrowRight,
        )));
        let vm = app.overlay_vm.as_ref().expect("overlay open");
        assert_eq!(vm.counter.as_deref(), Some("2 / 3"));

        let _ = app.update(Message::RawEvent(key_press(keyboard::key::Named::ArrowLeft)));
        let _ = app.update(Message::RawEvent(key_press(keyboard::key::Named::ArrowLeft)));
        let vm = app.overlay_vm.as_ref().expect("overlay open");
        assert_eq!(vm.counter.as_deref(), Some("3 / 3"));
    }

    #[test]
    fn escape_closes_overlay_and_keeps_fade_snapshot() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg"])]);
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(0)));

        let _ = app.update(Message::RawEvent(key_press(keyboard::key::Named::Escape)));
        assert!(!app.gallery.is_open());
        assert!(app.overlay_vm.is_none());
        assert!(app.closing_overlay.is_some());

        let _ = app.update(Message::OverlayFadeElapsed(app.fade_generation));
        assert!(app.closing_overlay.is_none());
    }

    #[test]
    fn reopen_during_fade_drops_stale_snapshot() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg"]), work("w2", &["b.jpg"])]);
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(0)));
        let _ = app.update(Message::Overlay(overlay::Message::Close));
        let stale_generation = app.fade_generation;

        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(1)));
        assert!(app.closing_overlay.is_none());
        assert!(app.overlay_vm.is_some());

        // The stale fade timer must not clear anything when it fires later.
        let _ = app.update(Message::Overlay(overlay::Message::Close));
        let _ = app.update(Message::OverlayFadeElapsed(stale_generation));
        assert!(app.closing_overlay.is_some());
    }

    #[test]
    fn swipe_past_threshold_navigates() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg", "b.jpg"])]);
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(0)));

        drag(&mut app, 400.0, 200.0);
        let vm = app.overlay_vm.as_ref().expect("overlay open");
        assert_eq!(vm.counter.as_deref(), Some("2 / 2"));

        drag(&mut app, 200.0, 400.0);
        let vm = app.overlay_vm.as_ref().expect("overlay open");
        assert_eq!(vm.counter.as_deref(), Some("1 / 2"));
    }

    #[test]
    fn short_drag_does_not_navigate() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg", "b.jpg"])]);
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(0)));

        drag(&mut app, 300.0, 280.0);
        let vm = app.overlay_vm.as_ref().expect("overlay open");
        assert_eq!(vm.counter.as_deref(), Some("1 / 2"));
    }

    #[test]
    fn raw_events_ignored_while_overlay_closed() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg", "b.jpg"])]);
        let _ = app.update(Message::RawEvent(key_press(
            keyboard::key::Named::ArrowRight,
        )));
        assert!(app.overlay_vm.is_none());
        assert!(!app.gallery.is_open());
    }

    #[test]
    fn contact_submit_without_name_raises_error_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Portfolio(portfolio::Message::SubmitContact));
        assert!(app.notifications.has_notifications());
        assert!(!app.contact.sending);
    }

    #[test]
    fn contact_sent_resets_the_form() {
        let mut app = App::default();
        let _ = app.update(Message::Portfolio(portfolio::Message::NameChanged(
            "Ivan".to_string(),
        )));
        let _ = app.update(Message::Portfolio(portfolio::Message::PhoneChanged(
            "89161234567".to_string(),
        )));
        assert_eq!(app.contact.phone, "+7 (916) 123-45-67");

        let _ = app.update(Message::ContactSent(Ok(())));
        assert!(app.contact.name.is_empty());
        assert!(app.contact.phone.is_empty());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn auth_status_authenticated_loads_admin_works() {
        let mut app = App::default();
        let _ = app.update(Message::AuthStatusChecked(Ok(AuthStatus {
            authenticated: true,
            user: Some("admin".to_string()),
        })));
        assert!(app.admin.auth.is_logged_in());
        assert_eq!(app.admin_load, LoadState::Loading);
    }

    #[test]
    fn failed_login_sets_inline_error_not_toast() {
        let mut app = App::default();
        app.admin.login.submitting = true;
        let _ = app.update(Message::LoginCompleted(Ok(LoginResponse {
            success: false,
            user: None,
            message: Some("Invalid credentials".to_string()),
        })));

        assert!(!app.admin.login.submitting);
        assert_eq!(app.admin.login.error.as_deref(), Some("Invalid credentials"));
        assert!(!app.admin.auth.is_logged_in());
    }

    #[test]
    fn successful_login_clears_the_form() {
        let mut app = App::default();
        app.admin.login.username = "admin".to_string();
        app.admin.login.password = "secret".to_string();
        let _ = app.update(Message::LoginCompleted(Ok(LoginResponse {
            success: true,
            user: Some("admin".to_string()),
            message: None,
        })));

        assert!(app.admin.auth.is_logged_in());
        assert!(app.admin.login.username.is_empty());
        assert!(app.admin.login.password.is_empty());
    }

    #[test]
    fn logout_clears_admin_state_immediately() {
        let mut app = App::default();
        app.admin.auth = AuthState::LoggedIn {
            user: Some("admin".to_string()),
        };
        app.admin.set_works(vec![work("w1", &[])]);

        let _ = app.update(Message::Admin(admin_panel::Message::Logout));
        assert_eq!(app.admin.auth, AuthState::LoggedOut);
        assert!(app.admin.works.is_empty());
    }

    #[test]
    fn image_fetched_lands_in_cache() {
        let mut app = App::default();
        let _ = app.update(Message::ImageFetched {
            filename: "a.jpg".to_string(),
            result: Ok(vec![1, 2, 3]),
        });
        assert!(app.images.peek("a.jpg").is_some());
    }

    #[test]
    fn failed_image_fetch_allows_retry() {
        let mut app = App::default();
        assert!(app.images.begin_fetch("a.jpg"));
        let _ = app.update(Message::ImageFetched {
            filename: "a.jpg".to_string(),
            result: Err(Error::Http("timeout".into())),
        });
        assert!(app.images.begin_fetch("a.jpg"));
    }

    #[test]
    fn work_saved_closes_editor_and_notifies() {
        let mut app = App::default();
        app.admin.set_works(vec![work("w1", &[])]);
        app.admin.start_edit("w1");

        let _ = app.update(Message::WorkUpdated(Ok(())));
        assert!(app.admin.editor.is_none());
        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn failed_save_keeps_editor_open() {
        let mut app = App::default();
        app.admin.start_create();
        if let Some(draft) = app.admin.editor.as_mut() {
            draft.saving = true;
        }

        let _ = app.update(Message::WorkCreated(Err(Error::Api {
            status: 500,
            message: "boom".to_string(),
        })));
        let draft = app.admin.editor.as_ref().expect("editor stays open");
        assert!(!draft.saving);
    }

    #[test]
    fn pending_upload_failures_surface_per_file() {
        let mut app = App::default();
        app.admin.start_create();

        let _ = app.update(Message::PendingUploadsFinished {
            uploaded: 2,
            failed: vec!["bad.jpg: too large".to_string()],
        });
        assert!(app.admin.editor.is_none());
        // One failure toast plus the aggregate summary.
        assert!(app.notifications.visible_count() >= 2);
    }

    #[test]
    fn replacing_works_while_overlay_open_on_vanished_index_closes_it() {
        let mut app = app_with_works(vec![work("w1", &["a.jpg"]), work("w2", &["b.jpg"])]);
        let _ = app.update(Message::Portfolio(portfolio::Message::OpenWork(1)));
        assert!(app.overlay_vm.is_some());

        let _ = app.update(Message::WorksFetched(Ok(vec![work("w1", &["a.jpg"])])));
        assert!(app.overlay_vm.is_none());
        assert!(!app.gallery.is_open());
    }
}
