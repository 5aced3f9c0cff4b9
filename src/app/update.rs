// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The preview reports what happened through effects; this module turns
//! them into changes of the controlled open flag.

use super::{App, Message};
use crate::ui::preview::{self, Effect};
use iced::Task;
use std::time::Instant;

/// Main update entry point.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    let now = Instant::now();
    match message {
        Message::OpenPreview => set_open(app, true, now),
        Message::Preview(message) => handle_preview_message(app, message, now),
    }
}

fn handle_preview_message(app: &mut App, message: preview::Message, now: Instant) -> Task<Message> {
    let (effect, task) = app.preview.handle_message(message, now);
    let task = task.map(Message::Preview);
    let follow_up = handle_preview_effect(app, effect, now);
    Task::batch([task, follow_up])
}

fn handle_preview_effect(app: &mut App, effect: Effect, now: Instant) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::CloseRequested => set_open(app, false, now),
        Effect::IndexChanged(index) => {
            tracing::info!(
                index,
                count = app.preview.image_count(),
                "current image changed"
            );
            app.last_index = index;
            Task::none()
        }
        Effect::Hidden => {
            tracing::debug!("preview fully hidden");
            Task::none()
        }
    }
}

/// Writes the controlled flag and forwards it to the preview.
fn set_open(app: &mut App, is_open: bool, now: Instant) -> Task<Message> {
    if app.is_open == is_open {
        return Task::none();
    }
    app.is_open = is_open;
    app.preview.set_open(is_open, now).map(Message::Preview)
}
