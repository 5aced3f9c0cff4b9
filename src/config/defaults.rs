// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for the numbers that
//! shape the preview's feel. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Zoom bounds and snapping
//! - **Gestures**: Activation thresholds and navigation/dismiss distances
//! - **Timing**: Animation durations
//! - **Pagination**: Indicator geometry and re-entrancy window
//! - **Backdrop**: Control points for the dismiss-drag dimming curve

use std::time::Duration;

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Unzoomed scale.
pub const MIN_SCALE: f32 = 1.0;

/// Maximum scale reachable by pinching.
pub const MAX_SCALE: f32 = 4.0;

/// Pinch releases below this scale snap back to [`MIN_SCALE`].
pub const SNAP_SCALE_THRESHOLD: f32 = 1.1;

/// Scale reached by a double-tap from the unzoomed state.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 2.0;

/// Multiplicative zoom applied per mouse wheel line.
pub const WHEEL_ZOOM_STEP: f32 = 1.2;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Horizontal distance a swipe must exceed to navigate, and the per-unit-scale
/// overhang a zoomed image may be panned by.
pub const DEFAULT_MAX_OFFSET: f32 = 100.0;

/// Vertical distance a drag must exceed to dismiss the preview.
pub const DEFAULT_DISMISS_DISTANCE: f32 = 200.0;

/// Distance a single pointer must travel before a pan activates.
pub const PAN_MIN_DISTANCE: f32 = 10.0;

/// Relative span change two pointers must produce before a pinch activates.
pub const PINCH_ACTIVATION_RATIO: f32 = 0.03;

/// Maximum delay between the first lift and the second press of a double-tap.
pub const DOUBLE_TAP_MAX_DELAY: Duration = Duration::from_millis(250);

/// Maximum time a single tap may be held.
pub const TAP_MAX_DURATION: Duration = Duration::from_millis(250);

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Snap-back after a pan released at rest scale.
pub const PAN_SNAP_BACK: Duration = Duration::from_millis(100);

/// Default timing used by swipe resets and double-tap zoom.
pub const DEFAULT_TIMING: Duration = Duration::from_millis(300);

/// Snap or clamp after a pinch release.
pub const PINCH_SETTLE: Duration = Duration::from_millis(200);

/// Period of one half cycle of the loading blink.
pub const BLINK_HALF_PERIOD: Duration = Duration::from_millis(1000);

/// Lowest opacity reached by the loading blink.
pub const BLINK_MIN_OPACITY: f32 = 0.3;

/// Modal-level entry and exit transition length.
pub const MODAL_TRANSITION: Duration = Duration::from_millis(300);

/// Image-level entry transition length.
pub const IMAGE_TRANSITION_IN: Duration = Duration::from_millis(200);

/// Delay before an image-level entry transition starts.
pub const IMAGE_TRANSITION_DELAY: Duration = Duration::from_millis(100);

/// Image-level exit transition length.
pub const IMAGE_TRANSITION_OUT: Duration = Duration::from_millis(200);

/// Distance a `fade-*` transition travels while fading.
pub const FADE_TRAVEL: f32 = 25.0;

// ==========================================================================
// Pager / Pagination Defaults
// ==========================================================================

/// Idle time after organic scrolling before the pager reports its page.
pub const PAGER_SETTLE_DELAY: Duration = Duration::from_millis(150);

/// Window during which pager reports cannot override a programmatic navigation.
pub const NAVIGATION_GUARD: Duration = Duration::from_millis(300);

/// Size of the active pagination dot.
pub const ACTIVE_DOT_SIZE: f32 = 12.0;

/// Size of inactive pagination dots.
pub const INACTIVE_DOT_SIZE: f32 = 9.0;

/// Opacity of inactive pagination dots.
pub const INACTIVE_DOT_OPACITY: f32 = 0.3;

/// Opacity the active dot dims to while a horizontal drag nears the threshold.
pub const DRAGGED_DOT_OPACITY: f32 = 0.7;

// ==========================================================================
// Backdrop Defaults
// ==========================================================================

/// Inner control point of the backdrop curve (full opacity inside it).
pub const BACKDROP_INNER: f32 = 100.0;

/// Middle control point of the backdrop curve.
pub const BACKDROP_MIDDLE: f32 = 200.0;

/// Backdrop opacity at the middle control point.
pub const BACKDROP_MIDDLE_OPACITY: f32 = 0.75;

/// Backdrop color alpha at the middle control point.
pub const BACKDROP_MIDDLE_ALPHA: f32 = 0.6;
