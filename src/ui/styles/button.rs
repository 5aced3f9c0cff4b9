// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::domain::ui::style::DotStyle;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button of the demo launcher.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round overlay button (close, previous, next) on the dark backdrop.
///
/// `alpha` scales the resting look; hovering or pressing always shows the
/// button fully so hidden affordances stay discoverable.
pub fn overlay(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_MEDIUM * alpha,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: background,
                ..BLACK
            })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// One pagination dot.
pub fn dot(style: DotStyle, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let dot_opacity = match status {
            button::Status::Hovered => style.opacity.max(opacity::OVERLAY_STRONG),
            _ => style.opacity,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: dot_opacity * alpha,
                ..WHITE
            })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
