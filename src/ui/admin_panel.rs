// SPDX-License-Identifier: MPL-2.0
//! Admin screen: login form, the managed work list, the work editor and the
//! delete confirmation dialog.
//!
//! Modals are layered with [`Stack`] over the work list; only one modal is
//! open at a time because `Session` stores either an editor draft or a
//! pending delete, never both paths at once in practice.

use crate::admin::{AuthState, LoginForm, Session, WorkDraft};
use crate::api::Work;
use crate::app::LoadState;
use crate::gallery::UNTITLED;
use crate::media::{placeholder_handle, ImageCache};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::portfolio::primary_button_style;
use iced::widget::image::Image;
use iced::widget::{button, container, scrollable, text, text_input, Column, Container, Row, Stack};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

/// Interactions on the admin screen.
#[derive(Debug, Clone)]
pub enum Message {
    UsernameChanged(String),
    PasswordChanged(String),
    SubmitLogin,
    Logout,
    RetryLoad,
    StartCreate,
    StartEdit(String),
    RequestDelete(String),
    ConfirmDelete,
    CancelDelete,
    TitleChanged(String),
    DescriptionChanged(String),
    AreaChanged(String),
    /// Opens the native file picker; resolved asynchronously.
    PickImages,
    RemovePending(usize),
    /// Deletes a server-side image immediately (edit mode).
    RemoveExisting(String),
    SaveDraft,
    CloseEditor,
}

pub fn view<'a>(
    session: &'a Session,
    load: &'a LoadState,
    images: &'a ImageCache,
) -> Element<'a, Message> {
    match &session.auth {
        AuthState::Unknown => Container::new(
            text("Checking session\u{2026}").size(typography::BODY),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into(),
        AuthState::LoggedOut => login_view(&session.login),
        AuthState::LoggedIn { .. } => panel_view(session, load, images),
    }
}

fn login_view(form: &LoginForm) -> Element<'_, Message> {
    let submit_label = if form.submitting {
        "Signing in\u{2026}"
    } else {
        "Sign in"
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(text("Admin Login").size(typography::TITLE))
        .push(
            text_input("Username", &form.username)
                .on_input(Message::UsernameChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Password", &form.password)
                .secure(true)
                .on_input(Message::PasswordChanged)
                .on_submit(Message::SubmitLogin)
                .padding(spacing::XS),
        );

    if let Some(error) = &form.error {
        column = column.push(text(error.as_str()).size(typography::CAPTION).style(
            |_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            },
        ));
    }

    column = column.push(
        button(text(submit_label).size(typography::BODY))
            .on_press_maybe((!form.submitting).then_some(Message::SubmitLogin))
            .padding([spacing::XS, spacing::LG])
            .style(primary_button_style),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn panel_view<'a>(
    session: &'a Session,
    load: &'a LoadState,
    images: &'a ImageCache,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text("Manage Works").size(typography::TITLE))
        .push(iced::widget::space::horizontal())
        .push(
            button(text("Add Work").size(typography::BODY))
                .on_press(Message::StartCreate)
                .padding([spacing::XS, spacing::MD])
                .style(primary_button_style),
        )
        .push(
            button(text("Log out").size(typography::BODY))
                .on_press(Message::Logout)
                .padding([spacing::XS, spacing::MD])
                .style(plain_button_style),
        );

    let body: Element<'a, Message> = match load {
        LoadState::Loading => text("Loading works\u{2026}").size(typography::BODY).into(),
        LoadState::Failed(reason) => Column::new()
            .spacing(spacing::SM)
            .push(text(reason.as_str()).size(typography::BODY).style(
                |_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                },
            ))
            .push(
                button(text("Retry").size(typography::BODY))
                    .on_press(Message::RetryLoad)
                    .padding([spacing::XS, spacing::MD])
                    .style(primary_button_style),
            )
            .into(),
        LoadState::Loaded if session.works.is_empty() => {
            text("No works yet. Add the first one.").size(typography::BODY).into()
        }
        LoadState::Loaded => {
            let rows: Vec<Element<'a, Message>> = session
                .works
                .iter()
                .map(|work| work_row(work, images))
                .collect();
            scrollable(Column::with_children(rows).spacing(spacing::SM))
                .height(Length::Fill)
                .into()
        }
    };

    let base = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(body);

    let mut layers = Stack::new().push(base);
    if let Some(draft) = &session.editor {
        layers = layers.push(modal(editor_view(draft, images)));
    } else if session.pending_delete.is_some() {
        layers = layers.push(modal(delete_confirm_view()));
    }
    layers.into()
}

fn work_row<'a>(work: &'a Work, images: &'a ImageCache) -> Element<'a, Message> {
    let handle = work
        .images
        .first()
        .and_then(|filename| images.peek(filename))
        .unwrap_or_else(placeholder_handle);
    let preview = Image::new(handle)
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL))
        .content_fit(ContentFit::Cover);

    let title = work
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED);
    let meta = format!("{} image(s)", work.images.len());

    let info = Column::new()
        .spacing(spacing::XXS)
        .push(text(title).size(typography::SUBTITLE))
        .push(
            text(meta)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(preview)
        .push(Container::new(info).width(Length::Fill))
        .push(
            button(text("Edit").size(typography::BODY))
                .on_press(Message::StartEdit(work.id.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(plain_button_style),
        )
        .push(
            button(text("Delete").size(typography::BODY))
                .on_press(Message::RequestDelete(work.id.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(danger_button_style),
        );

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(row_style)
        .into()
}

fn editor_view<'a>(draft: &'a WorkDraft, images: &'a ImageCache) -> Element<'a, Message> {
    let heading = if draft.is_edit() {
        "Edit Work"
    } else {
        "New Work"
    };
    let save_label = if draft.saving {
        "Saving\u{2026}"
    } else {
        "Save"
    };

    let mut column = Column::new()
        .spacing(spacing::SM)
        .push(text(heading).size(typography::TITLE))
        .push(
            text_input("Title *", &draft.title)
                .on_input(Message::TitleChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Description", &draft.description)
                .on_input(Message::DescriptionChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Area", &draft.area)
                .on_input(Message::AreaChanged)
                .padding(spacing::XS),
        );

    if !draft.existing_images.is_empty() {
        let mut strip = Row::new().spacing(spacing::XS);
        for filename in &draft.existing_images {
            let handle = images.peek(filename).unwrap_or_else(placeholder_handle);
            let preview = Image::new(handle)
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .content_fit(ContentFit::Cover);
            strip = strip.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .align_x(alignment::Horizontal::Center)
                    .push(preview)
                    .push(
                        button(text("\u{00D7}").size(typography::CAPTION))
                            .on_press(Message::RemoveExisting(filename.clone()))
                            .padding(spacing::XXS)
                            .style(danger_button_style),
                    ),
            );
        }
        column = column
            .push(text("Uploaded images").size(typography::CAPTION))
            .push(scrollable(strip).width(Length::Fill));
    }

    if !draft.pending_images.is_empty() {
        let mut list = Column::new().spacing(spacing::XXS);
        for (index, pending) in draft.pending_images.iter().enumerate() {
            let size_kb = pending.size_bytes / 1024;
            list = list.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(alignment::Vertical::Center)
                    .push(
                        text(format!("{} ({size_kb} KB)", pending.name()))
                            .size(typography::CAPTION)
                            .width(Length::Fill),
                    )
                    .push(
                        button(text("Remove").size(typography::CAPTION))
                            .on_press(Message::RemovePending(index))
                            .padding(spacing::XXS)
                            .style(plain_button_style),
                    ),
            );
        }
        column = column
            .push(text("Queued for upload").size(typography::CAPTION))
            .push(list);
    }

    column = column.push(
        button(text("Add images").size(typography::BODY))
            .on_press(Message::PickImages)
            .padding([spacing::XXS, spacing::SM])
            .style(plain_button_style),
    );

    column = column.push(
        Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(save_label).size(typography::BODY))
                    .on_press_maybe((!draft.saving).then_some(Message::SaveDraft))
                    .padding([spacing::XS, spacing::LG])
                    .style(primary_button_style),
            )
            .push(
                button(text("Cancel").size(typography::BODY))
                    .on_press(Message::CloseEditor)
                    .padding([spacing::XS, spacing::LG])
                    .style(plain_button_style),
            ),
    );

    column.into()
}

fn delete_confirm_view<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(text("Delete this work?").size(typography::TITLE))
        .push(
            text("The work and all of its images will be removed permanently.")
                .size(typography::BODY),
        )
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(
                    button(text("Delete").size(typography::BODY))
                        .on_press(Message::ConfirmDelete)
                        .padding([spacing::XS, spacing::LG])
                        .style(danger_button_style),
                )
                .push(
                    button(text("Cancel").size(typography::BODY))
                        .on_press(Message::CancelDelete)
                        .padding([spacing::XS, spacing::LG])
                        .style(plain_button_style),
                ),
        )
        .into()
}

fn modal(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(
        Container::new(content)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .padding(spacing::LG)
            .style(modal_panel_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(modal_backdrop_style)
    .into()
}

fn modal_backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: crate::ui::design_tokens::opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn modal_panel_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn row_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn plain_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        _ => None,
    };
    button::Style {
        background,
        text_color: theme.palette().text,
        border: iced::Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.85,
            ..palette::ERROR_500
        },
        _ => palette::ERROR_500,
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
