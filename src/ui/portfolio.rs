// SPDX-License-Identifier: MPL-2.0
//! Public portfolio screen: the works grid and the contact form.

use crate::api::Work;
use crate::app::LoadState;
use crate::contact;
use crate::gallery::{NO_DESCRIPTION, UNTITLED};
use crate::media::{placeholder_handle, ImageCache};
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::widget::image::Image;
use iced::widget::{button, scrollable, text, text_input, Column, Container, Row};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

const GRID_COLUMNS: usize = 3;

/// Interactions on the portfolio screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A work card was clicked; opens the overlay at this index.
    OpenWork(usize),
    /// Retry after a failed load.
    RetryLoad,
    NameChanged(String),
    PhoneChanged(String),
    EmailChanged(String),
    InquiryChanged(String),
    SubmitContact,
}

pub fn view<'a>(
    load: &'a LoadState,
    works: &'a [Work],
    images: &'a ImageCache,
    contact: &'a contact::Form,
) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(text("Our Works").size(typography::HEADLINE))
        .push(works_section(load, works, images))
        .push(text("Get In Touch").size(typography::HEADLINE))
        .push(contact_form(contact));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn works_section<'a>(
    load: &'a LoadState,
    works: &'a [Work],
    images: &'a ImageCache,
) -> Element<'a, Message> {
    match load {
        LoadState::Loading => status_line("Loading works\u{2026}"),
        LoadState::Failed(reason) => Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
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
        LoadState::Loaded if works.is_empty() => status_line("No works to show yet."),
        LoadState::Loaded => works_grid(works, images),
    }
}

fn status_line(message: &str) -> Element<'_, Message> {
    text(message)
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        })
        .into()
}

fn works_grid<'a>(works: &'a [Work], images: &'a ImageCache) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = works
        .iter()
        .enumerate()
        .map(|(index, work)| work_card(index, work, images))
        .collect();

    let mut grid = Column::new().spacing(spacing::MD);
    let mut cards = cards.into_iter();
    loop {
        let row: Vec<Element<'a, Message>> = cards.by_ref().take(GRID_COLUMNS).collect();
        if row.is_empty() {
            break;
        }
        grid = grid.push(Row::with_children(row).spacing(spacing::MD));
    }
    grid.into()
}

fn work_card<'a>(index: usize, work: &'a Work, images: &'a ImageCache) -> Element<'a, Message> {
    let handle = work
        .images
        .first()
        .and_then(|filename| images.peek(filename))
        .unwrap_or_else(placeholder_handle);

    let preview = Image::new(handle)
        .width(Length::Fixed(sizing::CARD_IMAGE_HEIGHT * 1.5))
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .content_fit(ContentFit::Cover);

    let title = work
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED);
    let description = work
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or(NO_DESCRIPTION);

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(text(title).size(typography::SUBTITLE))
        .push(
            text(description)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );
    if let Some(area) = work.area.as_deref().filter(|a| !a.is_empty()) {
        body = body.push(
            text(area)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PRIMARY_700),
                }),
        );
    }
    if !work.images.is_empty() {
        let count = work.images.len();
        let label = if count == 1 {
            "1 photo".to_string()
        } else {
            format!("{count} photos")
        };
        body = body.push(text(label).size(typography::CAPTION).style(
            |_theme: &Theme| text::Style {
                color: Some(palette::GRAY_400),
            },
        ));
    }

    let card = Column::new()
        .spacing(spacing::XS)
        .push(preview)
        .push(Container::new(body).padding([0.0, spacing::XS]));

    button(card)
        .on_press(Message::OpenWork(index))
        .padding(spacing::XS)
        .style(card_style)
        .into()
}

fn contact_form(form: &contact::Form) -> Element<'_, Message> {
    let submit_label = if form.sending {
        "Sending\u{2026}"
    } else {
        "Send"
    };
    let submit = button(text(submit_label).size(typography::BODY))
        .on_press_maybe((!form.sending).then_some(Message::SubmitContact))
        .padding([spacing::XS, spacing::LG])
        .style(primary_button_style);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(
            text_input("Your name *", &form.name)
                .on_input(Message::NameChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("+7 (___) ___-__-__ *", &form.phone)
                .on_input(Message::PhoneChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Email (optional)", &form.email)
                .on_input(Message::EmailChanged)
                .padding(spacing::XS),
        )
        .push(
            text_input("Tell us about your project", &form.message)
                .on_input(Message::InquiryChanged)
                .padding(spacing::XS),
        )
        .push(submit)
        .into()
}

fn card_style(theme: &Theme, status: button::Status) -> button::Style {
    let background = theme.extended_palette().background.base.color;
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => palette::GRAY_700,
    };
    button::Style {
        background: Some(iced::Background::Color(background)),
        text_color: theme.palette().text,
        border: iced::Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

pub(super) fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        button::Status::Disabled => Color {
            a: 0.5,
            ..palette::PRIMARY_500
        },
        _ => palette::PRIMARY_500,
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
