// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the preview modal.
//!
//! The `App` owns the controlled open flag: the launcher button sets it, the
//! preview's close requests clear it, and every change is forwarded with
//! [`preview::State::set_open`].

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::preview;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    preview: preview::State,
    is_open: bool,
    /// Index reported by the last `IndexChanged` effect.
    last_index: usize,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_open", &self.is_open)
            .field("last_index", &self.last_index)
            .field("preview", &self.preview)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 240;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
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

impl App {
    /// Loads the configuration and builds the (closed) preview.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        if let Some(warning) = &config_warning {
            tracing::warn!(%warning, "using default configuration");
        }

        let start_index = flags.start_index.unwrap_or(0);
        let options = config.to_options(flags.images).start_index(start_index);
        tracing::info!(
            images = options.images.len(),
            start_index,
            "preview configured"
        );

        let app = Self {
            last_index: start_index,
            preview: preview::State::new(options, Arc::new(flags.loader)),
            is_open: false,
            config_warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.is_open && self.preview.image_count() > 0 {
            format!(
                "IcedPreview - {} / {}",
                self.preview.index() + 1,
                self.preview.image_count()
            )
        } else {
            "IcedPreview".to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.is_open),
            subscription::create_preview_subscription(&self.preview),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            preview: &self.preview,
            is_open: self.is_open,
            last_index: self.last_index,
            config_warning: self.config_warning.as_deref(),
        })
    }
}
