// SPDX-License-Identifier: MPL-2.0
//! Full-screen overlay presenting one work's images.
//!
//! This widget is a dumb projection of [`OverlayViewModel`]: which controls
//! exist and what the counter reads were already decided by
//! `gallery::render`, so every synchronized element (main image, counter,
//! thumbnail highlight) comes from the same frame of state.

use crate::gallery::{ImageSlot, OverlayViewModel};
use crate::media::{placeholder_handle, ImageCache};
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use iced::widget::image::Image;
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, ContentFit, Element, Length, Theme};

/// Navigation intents raised by the overlay controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
    NextImage,
    PrevImage,
    JumpToImage(usize),
    NextWork,
    PrevWork,
}

/// Renders the overlay for the given view model.
pub fn view<'a>(vm: &'a OverlayViewModel, images: &'a ImageCache) -> Element<'a, Message> {
    let close = button(text("\u{00D7}").size(typography::TITLE))
        .on_press(Message::Close)
        .padding(spacing::XS)
        .style(nav_button_style);
    let header = Row::new()
        .width(Length::Fill)
        .push(iced::widget::space::horizontal())
        .push(close);

    let main_image = resolve_handle(&vm.image, images);
    let image_widget = Image::new(main_image)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::OVERLAY_IMAGE_HEIGHT))
        .content_fit(ContentFit::Contain);

    let mut image_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::SM);
    if vm.show_image_nav {
        image_row = image_row.push(arrow_button("\u{2039}", Message::PrevImage));
    }
    image_row = image_row.push(image_widget);
    if vm.show_image_nav {
        image_row = image_row.push(arrow_button("\u{203A}", Message::NextImage));
    }

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(header)
        .push(image_row);

    if let Some(counter) = &vm.counter {
        content = content.push(
            text(counter.as_str())
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_200),
                }),
        );
    }

    if vm.show_work_nav {
        content = content.push(
            Row::new()
                .spacing(spacing::LG)
                .push(nav_button("\u{2190} Previous work", Message::PrevWork))
                .push(nav_button("Next work \u{2192}", Message::NextWork)),
        );
    }

    content = content.push(info_block(vm));

    if !vm.thumbnails.is_empty() {
        let mut strip = Row::new().spacing(spacing::XS);
        for thumb in &vm.thumbnails {
            let handle = images
                .peek(&thumb.filename)
                .unwrap_or_else(placeholder_handle);
            let preview = Image::new(handle)
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .content_fit(ContentFit::Cover);
            let active = thumb.active;
            strip = strip.push(
                button(preview)
                    .on_press(Message::JumpToImage(thumb.index))
                    .padding(0)
                    .style(move |theme: &Theme, status| thumbnail_style(theme, status, active)),
            );
        }
        content = content.push(strip);
    }

    Container::new(
        Container::new(content)
            .max_width(900)
            .padding(spacing::LG)
            .style(panel_style),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(backdrop_style)
    .into()
}

fn resolve_handle(slot: &ImageSlot, images: &ImageCache) -> iced::widget::image::Handle {
    match slot {
        ImageSlot::Remote(filename) => {
            images.peek(filename).unwrap_or_else(placeholder_handle)
        }
        ImageSlot::Placeholder => placeholder_handle(),
    }
}

fn info_block(vm: &OverlayViewModel) -> Element<'_, Message> {
    let mut info = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(text(vm.title.as_str()).size(typography::TITLE))
        .push(
            text(vm.description.as_str())
                .size(typography::BODY)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_200),
                }),
        );
    if let Some(area) = &vm.area {
        info = info.push(
            Container::new(text(area.as_str()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(area_tag_style),
        );
    }
    info.into()
}

/// Square prev/next arrow flanking the main image.
fn arrow_button(label: &str, message: Message) -> Element<'_, Message> {
    button(
        text(label)
            .size(typography::TITLE)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .padding(0)
    .style(nav_button_style)
    .into()
}

fn nav_button(label: &str, message: Message) -> Element<'_, Message> {
    button(text(label).size(typography::SUBTITLE))
        .on_press(message)
        .padding(spacing::XS)
        .style(nav_button_style)
        .into()
}

fn backdrop_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::GRAY_900)),
        border: iced::Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

fn area_tag_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::PRIMARY_700)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

fn nav_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
        )),
        _ => None,
    };
    button::Style {
        background,
        text_color: palette::WHITE,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

fn thumbnail_style(_theme: &Theme, _status: button::Status, active: bool) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::WHITE,
        border: iced::Border {
            color: if active {
                palette::PRIMARY_500
            } else {
                Color::TRANSPARENT
            },
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
