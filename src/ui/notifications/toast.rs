// SPDX-License-Identifier: MPL-2.0
//! Toast widget rendering the visible notification stack.
//!
//! Toasts appear as small cards with a severity-colored border, stacked in
//! the bottom-right corner over whatever screen is active.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast card.
fn view_toast(notification: &Notification) -> Element<'_, Message> {
    let accent = notification.severity().color();

    let message = text(notification.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss = button(text("\u{00D7}").size(typography::SUBTITLE))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent))
        .into()
}

/// Renders all visible toasts, positioned bottom-right.
pub fn view_overlay(manager: &Manager) -> Element<'_, Message> {
    let toasts: Vec<Element<'_, Message>> = manager.visible().map(view_toast).collect();

    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let stack = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast_container_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(Color {
                a: 0.2,
                ..palette::GRAY_400
            }))
        }
        _ => None,
    };
    button::Style {
        background,
        text_color: base_text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
