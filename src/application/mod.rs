// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the preview and its collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the ports through Iced tasks
//!
//! # Example
//!
//! ```ignore
//! use iced_preview::application::port::ImageLoader;
//! use iced_preview::infrastructure::loader::DefaultImageLoader;
//!
//! // Infrastructure implements the port trait
//! let loader: std::sync::Arc<dyn ImageLoader> = std::sync::Arc::new(DefaultImageLoader::new()?);
//! ```

pub mod port;
