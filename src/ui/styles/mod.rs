// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the preview and the demo launcher.

pub mod button;
pub mod container;
