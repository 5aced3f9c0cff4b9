// SPDX-License-Identifier: MPL-2.0
//! Built-in "broken image" fallback.
//!
//! The SVG is embedded and rasterized once with resvg; the result is shared
//! by every slide that needs it.

use crate::domain::media::DecodedImage;
use crate::error::{Error, Result};
use resvg::usvg;
use std::sync::OnceLock;

/// Embedded so packaging does not need to locate assets on disk.
const BROKEN_IMAGE_SVG: &str = include_str!("../../assets/broken_image.svg");

/// Edge length of the rasterized fallback.
const FALLBACK_SIZE: u32 = 192;

/// Neutral grey used if the SVG ever fails to render.
const PLACEHOLDER_GREY: [u8; 4] = [96, 96, 96, 255];

/// Rasterizes an SVG document to a `width` x `height` RGBA image.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the document cannot be parsed or the target
/// size is empty.
pub fn rasterize_svg(source: &[u8], width: u32, height: u32) -> Result<DecodedImage> {
    let tree = usvg::Tree::from_data(source, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg(format!("invalid target size {width}x{height}")))?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha.
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    DecodedImage::from_rgba(width, height, rgba)
        .ok_or_else(|| Error::Svg("rasterized buffer has unexpected size".to_string()))
}

/// The built-in fallback image. Never fails.
pub fn built_in() -> DecodedImage {
    static FALLBACK: OnceLock<DecodedImage> = OnceLock::new();
    FALLBACK
        .get_or_init(|| {
            rasterize_svg(BROKEN_IMAGE_SVG.as_bytes(), FALLBACK_SIZE, FALLBACK_SIZE)
                .unwrap_or_else(|err| {
                    tracing::warn!(%err, "built-in fallback failed to render, using placeholder");
                    DecodedImage::solid(FALLBACK_SIZE, FALLBACK_SIZE, PLACEHOLDER_GREY)
                })
        })
        .clone()
}
