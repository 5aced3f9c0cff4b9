// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces for the two collaborators the
//! preview relies on. These traits use only domain types, ensuring the
//! preview logic stays independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`image`]: Loading and decoding the image behind a source
//! - [`paging`]: The horizontally paged container holding the slides
//!
//! # Design Notes
//!
//! - No Iced handles cross these traits; the UI converts decoded pixels
//! - [`ImageLoader`] is `Send + Sync` and returns `'static` futures so
//!   callers can hand them to `Task::perform`

pub mod image;
pub mod paging;

// Re-export main types for convenience
pub use image::{ImageLoader, LoadError};
pub use paging::PagedList;
