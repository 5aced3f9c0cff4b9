// SPDX-License-Identifier: MPL-2.0
//! Decoded image pixels, independent of the GUI toolkit.

use std::sync::Arc;

/// Decoded RGBA image.
///
/// The presentation layer turns this into a toolkit handle; keeping the
/// bytes behind an `Arc` makes clones cheap across message passing.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Wraps RGBA pixels, returning `None` when the length does not match
    /// `width * height * 4` or either dimension is zero.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 || rgba_bytes.len() != expected_len {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    /// Single-color image; zero dimensions are raised to 1.
    #[must_use]
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba.repeat((width as usize) * (height as usize))),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns the shared pixel buffer.
    #[must_use]
    pub fn rgba_bytes_arc(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.rgba_bytes)
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl PartialEq for DecodedImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}

impl Eq for DecodedImage {}
