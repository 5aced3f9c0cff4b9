// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded project SVG at runtime to produce an RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::infrastructure::fallback::rasterize_svg;
use iced::window::{icon, Icon};

/// Edge length of the rasterized window icon.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
pub fn load_window_icon() -> Option<Icon> {
    // Embed the SVG so packaging does not need to locate assets on disk.
    const SVG_SOURCE: &str = include_str!("../assets/iced_preview.svg");

    let image = match rasterize_svg(SVG_SOURCE.as_bytes(), ICON_SIZE, ICON_SIZE) {
        Ok(image) => image,
        Err(err) => {
            tracing::warn!(%err, "window icon failed to render");
            return None;
        }
    };
    icon::from_rgba(image.rgba_bytes().to_vec(), image.width(), image.height()).ok()
}
