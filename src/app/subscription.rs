// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw keyboard and mouse events are only consumed while the gallery overlay
//! is open; everything else the widgets handle themselves.

use super::Message;
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Forwards the raw events overlay navigation needs: arrow keys, Escape and
/// the press/move/release cycle the swipe tracker consumes.
pub fn overlay_events(overlay_open: bool) -> Subscription<Message> {
    if !overlay_open {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window| {
        if status == event::Status::Captured {
            return None;
        }
        let relevant = matches!(
            &event,
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. })
                | event::Event::Mouse(
                    mouse::Event::CursorMoved { .. }
                        | mouse::Event::ButtonPressed(mouse::Button::Left)
                        | mouse::Event::ButtonReleased(mouse::Button::Left),
                )
        );
        relevant.then_some(Message::RawEvent(event))
    })
}

/// Periodic tick while anything time-based is pending: toast auto-dismiss or
/// the overlay fade-out.
pub fn tick(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
