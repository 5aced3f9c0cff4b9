// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like
//! reqwest, the `image` decoders and resvg.
//!
//! # Available Adapters
//!
//! - [`loader`]: File, handle and HTTP image loading (implements [`ImageLoader`])
//! - [`fallback`]: The rasterized built-in "broken image" graphic
//!
//! [`ImageLoader`]: crate::application::port::ImageLoader

pub mod fallback;
pub mod loader;

// Re-export main types for convenience
pub use loader::{DefaultImageLoader, HandleRegistry};
