// SPDX-License-Identifier: MPL-2.0
//! `iced_preview` is a full-screen image preview modal built with the Iced
//! GUI framework.
//!
//! It provides pinch zoom, pan, double-tap zoom, swipe navigation and
//! swipe-to-dismiss over an ordered list of remote or local images, with
//! pagination dots, loading and fallback handling, and configurable entry
//! and exit transitions.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod icon;
pub mod infrastructure;
pub mod ui;
