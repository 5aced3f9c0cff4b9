// SPDX-License-Identifier: MPL-2.0
//! Default [`ImageLoader`] adapter.
//!
//! - `http`/`https` sources are fetched with reqwest
//! - `file` URLs and registered handles are read from disk
//! - bytes are decoded with the `image` crate on the blocking pool
//! - fallbacks resolve to a registered handle or the built-in graphic

use super::fallback;
use crate::application::port::{ImageLoader, LoadError};
use crate::domain::media::{DecodedImage, FallbackImage, RenderableSource};
use crate::error::{Error, Result};
use futures_util::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use url::Url;

/// Maximum redirects followed for remote images.
const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = concat!("iced_preview/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// HandleRegistry
// =============================================================================

/// Maps opaque image handles to files on disk.
#[derive(Debug, Default)]
pub struct HandleRegistry {
    paths: RwLock<HashMap<u64, PathBuf>>,
    next: AtomicU64,
}

impl HandleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` and returns its new handle.
    pub fn register(&self, path: impl Into<PathBuf>) -> u64 {
        let handle = self.next.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut paths) = self.paths.write() {
            paths.insert(handle, path.into());
        }
        handle
    }

    /// Looks up the file behind `handle`.
    #[must_use]
    pub fn resolve(&self, handle: u64) -> Option<PathBuf> {
        self.paths.read().ok()?.get(&handle).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.read().map_or(0, |paths| paths.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Decoding helpers
// =============================================================================

/// Decodes encoded image bytes into RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the format is unknown or the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage> {
    let image = image_rs::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = image.dimensions();
    DecodedImage::from_rgba(width, height, image.into_raw())
        .ok_or_else(|| Error::Decode(format!("empty image ({width}x{height})")))
}

async fn read_file(path: PathBuf) -> std::result::Result<DecodedImage, LoadError> {
    tokio::task::spawn_blocking(move || read_and_decode(&path))
        .await
        .map_err(|e| LoadError::Io(e.to_string()))?
}

fn read_and_decode(path: &Path) -> std::result::Result<DecodedImage, LoadError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound(path.display().to_string())
        } else {
            LoadError::Io(e.to_string())
        }
    })?;
    decode(&bytes).map_err(LoadError::from)
}

async fn fetch(client: reqwest::Client, url: Url) -> std::result::Result<DecodedImage, LoadError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LoadError::Fetch(format!(
            "HTTP status: {} ({url})",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| LoadError::Fetch(e.to_string()))?;

    tokio::task::spawn_blocking(move || decode(&bytes).map_err(LoadError::from))
        .await
        .map_err(|e| LoadError::Io(e.to_string()))?
}

// =============================================================================
// DefaultImageLoader
// =============================================================================

/// Loader used by the preview unless a caller injects its own.
#[derive(Debug, Clone)]
pub struct DefaultImageLoader {
    client: reqwest::Client,
    registry: Arc<HandleRegistry>,
}

impl DefaultImageLoader {
    /// Creates a loader with an empty handle registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self> {
        Self::with_registry(Arc::new(HandleRegistry::new()))
    }

    /// Creates a loader sharing an existing registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] if the HTTP client cannot be initialized.
    pub fn with_registry(registry: Arc<HandleRegistry>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, registry })
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<HandleRegistry> {
        &self.registry
    }

    fn load_handle(
        &self,
        handle: u64,
    ) -> BoxFuture<'static, std::result::Result<DecodedImage, LoadError>> {
        match self.registry.resolve(handle) {
            Some(path) => read_file(path).boxed(),
            None => futures_util::future::ready(Err(LoadError::NotFound(format!(
                "handle #{handle}"
            ))))
            .boxed(),
        }
    }
}

impl ImageLoader for DefaultImageLoader {
    fn load(
        &self,
        source: RenderableSource,
    ) -> BoxFuture<'static, std::result::Result<DecodedImage, LoadError>> {
        match source {
            RenderableSource::Remote(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => read_file(path).boxed(),
                Err(()) => {
                    futures_util::future::ready(Err(LoadError::NotFound(url.to_string()))).boxed()
                }
            },
            RenderableSource::Remote(url) => fetch(self.client.clone(), url).boxed(),
            RenderableSource::Local(handle) => self.load_handle(handle),
            RenderableSource::Fallback(FallbackImage::BuiltIn) => {
                futures_util::future::ready(Ok(fallback::built_in())).boxed()
            }
            RenderableSource::Fallback(FallbackImage::Handle(handle)) => {
                let custom = self.load_handle(handle);
                async move {
                    match custom.await {
                        Ok(image) => Ok(image),
                        Err(err) => {
                            tracing::warn!(handle, %err, "custom fallback failed, using built-in");
                            Ok(fallback::built_in())
                        }
                    }
                }
                .boxed()
            }
        }
    }
}
