// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core preview logic, independent of the GUI toolkit.
//!
//! This module contains pure domain types, value objects, and business rules.
//! Nothing here performs I/O or reads the clock; time is always passed in.
//! The only external crate used is `url`, for parsing image references.
//!
//! # Modules
//!
//! - [`gesture`]: Pointer recognition and the pan/pinch/double-tap
//!   interpreters ([`GestureOutcome`](gesture::GestureOutcome),
//!   [`Intent`](gesture::Intent))
//! - [`media`]: Image references ([`ImageRef`](media::ImageRef),
//!   [`RenderableSource`](media::RenderableSource))
//! - [`navigation`]: Bounds-checked index ([`NavigationIndex`](navigation::NavigationIndex))
//! - [`ui`]: Transform state, animation, derived styles and transitions
//!   ([`TransformState`](ui::TransformState), [`Scale`](ui::Scale),
//!   [`ModalAnimation`](ui::ModalAnimation))

pub mod gesture;
pub mod media;
pub mod navigation;
pub mod ui;
