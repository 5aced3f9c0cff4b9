// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for preview values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DISMISS_DISTANCE, DEFAULT_DOUBLE_TAP_SCALE, DEFAULT_MAX_OFFSET, MAX_SCALE, MIN_SCALE,
};

/// Tolerance used when deciding whether a scale is exactly at rest.
pub const SCALE_EPSILON: f32 = 1e-4;

// =============================================================================
// Scale
// =============================================================================

/// Committed zoom scale, guaranteed to be within `[1, 4]`.
///
/// Live scale values may leave this range mid-gesture; anything that is
/// stored as a commit goes through this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(MIN_SCALE);
        }
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the scale is at rest (unzoomed).
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_SCALE + SCALE_EPSILON
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self(MIN_SCALE)
    }
}

/// Returns whether a live scale value counts as "exactly 1".
#[must_use]
pub fn is_rest_scale(scale: f32) -> bool {
    (scale - MIN_SCALE).abs() <= SCALE_EPSILON
}

/// Returns whether a live scale value counts as zoomed in.
#[must_use]
pub fn is_zoomed(scale: f32) -> bool {
    scale > MIN_SCALE + SCALE_EPSILON
}

// =============================================================================
// GestureLimits
// =============================================================================

/// Distances and scales that parameterize the gesture interpreters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureLimits {
    max_offset: f32,
    dismiss_distance: f32,
    double_tap_scale: Scale,
}

impl GestureLimits {
    /// Creates limits, replacing non-positive distances with the defaults.
    #[must_use]
    pub fn new(max_offset: f32, dismiss_distance: f32, double_tap_scale: f32) -> Self {
        let positive_or = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            max_offset: positive_or(max_offset, DEFAULT_MAX_OFFSET),
            dismiss_distance: positive_or(dismiss_distance, DEFAULT_DISMISS_DISTANCE),
            double_tap_scale: Scale::new(double_tap_scale),
        }
    }

    /// Swipe threshold and per-unit-scale pan overhang.
    #[must_use]
    pub fn max_offset(self) -> f32 {
        self.max_offset
    }

    /// Vertical distance that dismisses the preview.
    #[must_use]
    pub fn dismiss_distance(self) -> f32 {
        self.dismiss_distance
    }

    /// Scale a double-tap zooms to.
    #[must_use]
    pub fn double_tap_scale(self) -> Scale {
        self.double_tap_scale
    }
}

impl Default for GestureLimits {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_OFFSET,
            DEFAULT_DISMISS_DISTANCE,
            DEFAULT_DOUBLE_TAP_SCALE,
        )
    }
}
