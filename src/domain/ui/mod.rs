// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains preview-related value objects that are independent
//! of any presentation framework: the transform state and its animated
//! owner, interpolation helpers, derived styles and entry/exit transitions.

pub mod animation;
pub mod interpolate;
pub mod newtypes;
pub mod style;
pub mod transform;
pub mod transition;

// Re-export commonly used types
pub use animation::{AnimatedValue, Easing, Repeating, Timing};
pub use interpolate::Rgba;
pub use newtypes::{GestureLimits, Scale};
pub use transform::{AnimatedTransform, Change, Field, TransformState, ValueChange, Vector};
pub use transition::{ModalAnimation, Phase, TransitionFrame, TransitionTiming};
