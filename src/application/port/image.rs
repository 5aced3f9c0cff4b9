// SPDX-License-Identifier: MPL-2.0
//! Image loading port definition.
//!
//! This module defines the [`ImageLoader`] trait, the image-render
//! collaborator of the preview: it turns a [`RenderableSource`] into decoded
//! pixels or reports a one-shot failure.

use crate::domain::media::{DecodedImage, RenderableSource};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// LoadError
// =============================================================================

/// Why an image could not be shown.
///
/// The preview never surfaces these to the caller: a failure only switches
/// the slide to its fallback image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// No file or registered handle behind the reference.
    #[error("image not found: {0}")]
    NotFound(String),

    /// The remote request failed or returned a non-success status.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// The bytes could not be decoded as an image.
    #[error("decode failed: {0}")]
    Decode(String),

    /// Reading from disk failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<crate::error::Error> for LoadError {
    fn from(error: crate::error::Error) -> Self {
        use crate::error::Error;
        match error {
            Error::Io(e) => LoadError::Io(e.to_string()),
            Error::Fetch(message) => LoadError::Fetch(message),
            Error::Decode(message) | Error::Svg(message) => LoadError::Decode(message),
            Error::Config(message) => LoadError::Io(message),
        }
    }
}

// =============================================================================
// ImageLoader Trait
// =============================================================================

/// Port for loading the image behind a renderable source.
///
/// Implementations must be `Send + Sync`; the returned future is driven by
/// the GUI runtime and must not borrow the loader.
///
/// # Example
///
/// ```ignore
/// use iced_preview::application::port::ImageLoader;
/// use iced_preview::domain::media::RenderableSource;
///
/// async fn dimensions(loader: &dyn ImageLoader, source: RenderableSource) -> Option<(u32, u32)> {
///     let image = loader.load(source).await.ok()?;
///     Some((image.width(), image.height()))
/// }
/// ```
pub trait ImageLoader: Send + Sync {
    /// Loads and decodes `source`.
    ///
    /// Loading [`RenderableSource::Fallback`] must not fail for the built-in
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the image cannot be read, fetched or decoded.
    fn load(&self, source: RenderableSource) -> BoxFuture<'static, Result<DecodedImage, LoadError>>;
}
