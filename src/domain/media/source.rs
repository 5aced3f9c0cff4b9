// SPDX-License-Identifier: MPL-2.0
//! Image references and their resolution to something renderable.

use std::fmt;
use url::Url;

/// Schemes accepted as remote or file references.
const ACCEPTED_SCHEMES: [&str; 3] = ["http", "https", "file"];

/// What a caller hands the preview for one image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageRef {
    /// Any string; only absolute http(s) or file URLs resolve to an image.
    Url(String),
    /// Opaque handle into the loader's registry.
    Handle(u64),
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        ImageRef::Url(value.to_string())
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        ImageRef::Url(value)
    }
}

impl From<u64> for ImageRef {
    fn from(value: u64) -> Self {
        ImageRef::Handle(value)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Url(url) => f.write_str(url),
            ImageRef::Handle(handle) => write!(f, "handle #{handle}"),
        }
    }
}

/// Image shown instead of one that cannot be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FallbackImage {
    /// The bundled broken-image graphic.
    #[default]
    BuiltIn,
    /// A caller-registered handle.
    Handle(u64),
}

/// Reference the loader can act on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderableSource {
    Remote(Url),
    Local(u64),
    Fallback(FallbackImage),
}

impl RenderableSource {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, RenderableSource::Fallback(_))
    }
}

/// Parses `value` as an absolute URL with an accepted scheme.
#[must_use]
pub fn parse_url(value: &str) -> Option<Url> {
    let url = Url::parse(value.trim()).ok()?;
    ACCEPTED_SCHEMES
        .contains(&url.scheme())
        .then_some(url)
}

/// Returns whether `value` is a usable image URL.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    parse_url(value).is_some()
}

/// Resolves what to render for `reference`.
///
/// A failed load always yields the fallback, whatever the reference.
#[must_use]
pub fn resolve_source(
    reference: &ImageRef,
    has_error: bool,
    fallback: FallbackImage,
) -> RenderableSource {
    if has_error {
        return RenderableSource::Fallback(fallback);
    }
    match reference {
        ImageRef::Url(value) => {
            parse_url(value).map_or(RenderableSource::Fallback(fallback), RenderableSource::Remote)
        }
        ImageRef::Handle(handle) => RenderableSource::Local(*handle),
    }
}
