// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`preview`] - The image preview modal and its sub-components
//! - [`widgets`] - Custom Iced widgets (slide surface, spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Overlay icons rasterized from embedded SVGs

pub mod design_tokens;
pub mod icons;
pub mod preview;
pub mod styles;
pub mod widgets;
