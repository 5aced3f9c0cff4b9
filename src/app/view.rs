// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A plain launcher with the preview stacked on top while it is visible.

use super::Message;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::preview::{self, ViewEnv};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{Color, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub preview: &'a preview::State,
    pub is_open: bool,
    pub last_index: usize,
    pub config_warning: Option<&'a str>,
}

/// Renders the launcher and, while visible, the preview above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let launcher = launcher(&ctx);
    if !ctx.preview.is_visible() {
        return launcher;
    }

    let preview = ctx.preview.view(ViewEnv::default()).map(Message::Preview);
    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(launcher)
        .push(preview)
        .into()
}

fn launcher<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let count = ctx.preview.image_count();
    let summary = match count {
        0 => "No images. Pass URLs or file paths on the command line.".to_string(),
        1 => "1 image".to_string(),
        n => format!("{n} images, last viewed #{}", ctx.last_index + 1),
    };

    let open = button(Text::new("Open preview").size(typography::BODY_LG))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    let open = if count > 0 && !ctx.is_open {
        open.on_press(Message::OpenPreview)
    } else {
        open
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("IcedPreview").size(typography::TITLE_MD))
        .push(
            Text::new(summary)
                .size(typography::BODY)
                .color(palette::GRAY_200),
        )
        .push(open);

    if let Some(warning) = ctx.config_warning {
        content = content.push(
            Text::new(format!("Configuration ignored: {warning}"))
                .size(typography::CAPTION)
                .color(Color::from_rgb(1.0, 0.6, 0.4)),
        );
    }

    Container::new(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
