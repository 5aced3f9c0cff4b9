// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input is routed to the preview as raw events while it is open;
//! everything else reaches it through its widgets.

use super::Message;
use crate::ui::preview;
use iced::{event, keyboard, Subscription};

/// Routes uncaptured key presses to the preview.
pub fn create_event_subscription(preview_open: bool) -> Subscription<Message> {
    if !preview_open {
        return Subscription::none();
    }
    event::listen_with(|event, status, window_id| {
        if !matches!(
            event,
            event::Event::Keyboard(keyboard::Event::KeyPressed { .. })
        ) {
            return None;
        }
        match status {
            event::Status::Ignored => Some(Message::Preview(preview::Message::RawEvent {
                window: window_id,
                event,
            })),
            event::Status::Captured => None,
        }
    })
}

/// Frame ticks requested by the preview's animations.
pub fn create_preview_subscription(preview: &preview::State) -> Subscription<Message> {
    preview.subscription().map(Message::Preview)
}
