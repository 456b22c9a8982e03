// SPDX-License-Identifier: MPL-2.0
//! Top-level layout: navigation bar, the active screen, and the stacked
//! overlay and toast layers.

use super::{App, Message, Screen};
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::{admin_panel, notifications, overlay, portfolio};
use iced::widget::{button, container, text, Column, Row, Stack};
use iced::{alignment, Element, Length, Theme};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let screen_body: Element<'_, Message> = match app.screen {
        Screen::Portfolio => portfolio::view(
            &app.portfolio_load,
            app.gallery.works(),
            &app.images,
            &app.contact,
        )
        .map(Message::Portfolio),
        Screen::Admin => {
            admin_panel::view(&app.admin, &app.admin_load, &app.images).map(Message::Admin)
        }
    };

    let base = Column::new().push(nav_bar(app.screen)).push(
        container(screen_body)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    // The closing snapshot keeps the overlay on screen during the fade; a
    // reopen replaces it with the live view model.
    if let Some(vm) = &app.overlay_vm {
        layers = layers.push(overlay::view(vm, &app.images).map(Message::Overlay));
    } else if let Some(vm) = &app.closing_overlay {
        layers = layers.push(overlay::view(vm, &app.images).map(Message::Overlay));
    }

    layers = layers.push(notifications::view_overlay(&app.notifications).map(Message::Notification));
    layers.into()
}

fn nav_bar(active: Screen) -> Element<'static, Message> {
    let tab = |label: &'static str, screen: Screen| {
        button(text(label).size(typography::BODY))
            .on_press(Message::SwitchScreen(screen))
            .padding([spacing::XS, spacing::MD])
            .style(move |theme: &Theme, status| tab_style(theme, status, screen == active))
    };

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(text("Postpress Studio").size(typography::TITLE))
            .push(iced::widget::space::horizontal())
            .push(tab("Portfolio", Screen::Portfolio))
            .push(tab("Admin", Screen::Admin)),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::LG])
    .style(bar_style)
    .into()
}

fn bar_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn tab_style(theme: &Theme, status: iced::widget::button::Status, active: bool) -> iced::widget::button::Style {
    use iced::widget::button::{Status, Style};
    let background = if active {
        Some(iced::Background::Color(palette::PRIMARY_500))
    } else {
        match status {
            Status::Hovered | Status::Pressed => Some(iced::Background::Color(
                theme.extended_palette().background.strong.color,
            )),
            _ => None,
        }
    };
    Style {
        background,
        text_color: if active {
            palette::WHITE
        } else {
            theme.palette().text
        },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
