// SPDX-License-Identifier: MPL-2.0
//! Overlay icons.
//!
//! The SVG sources are embedded with `include_str!` and rasterized once with
//! resvg; handles are cached in a `OnceLock`. All icons are white, for use on
//! the preview's dark backdrop.

use crate::infrastructure::fallback::rasterize_svg;
use iced::widget::image::{Handle, Image};
use iced::Length;
use std::sync::OnceLock;

/// Raster edge length; icons are displayed at or below this size.
const ICON_RASTER_SIZE: u32 = 64;

fn rasterize(name: &str, source: &str) -> Handle {
    match rasterize_svg(source.as_bytes(), ICON_RASTER_SIZE, ICON_RASTER_SIZE) {
        Ok(image) => Handle::from_rgba(image.width(), image.height(), image.rgba_bytes().to_vec()),
        Err(err) => {
            tracing::warn!(icon = name, %err, "icon failed to render");
            Handle::from_rgba(1, 1, vec![0, 0, 0, 0])
        }
    }
}

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            const SOURCE: &str = include_str!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| rasterize(stringify!($name), SOURCE));
            Image::new(handle.clone())
        }
    };
}

define_icon!(
    chevron_left,
    "chevron_left.svg",
    "Chevron pointing left: previous image."
);
define_icon!(
    chevron_right,
    "chevron_right.svg",
    "Chevron pointing right: next image."
);
define_icon!(cross, "cross.svg", "Cross: close the preview.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_sources_render() {
        for source in [
            include_str!("../../assets/icons/chevron_left.svg"),
            include_str!("../../assets/icons/chevron_right.svg"),
            include_str!("../../assets/icons/cross.svg"),
        ] {
            let image = rasterize_svg(source.as_bytes(), 16, 16).expect("icon renders");
            assert!(image.rgba_bytes().chunks(4).any(|px| px[3] > 0));
        }
    }
}
