// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! Image references as callers supply them, the resolved sources the loader
//! works with, and decoded pixels.

pub mod image;
pub mod source;

// Re-export commonly used types
pub use image::DecodedImage;
pub use source::{resolve_source, FallbackImage, ImageRef, RenderableSource};
