// SPDX-License-Identifier: MPL-2.0
//! Gesture interpreters.
//!
//! Each interpreter is a pure function from a transform snapshot and a
//! gesture event to a [`GestureOutcome`]: field updates for the transform
//! plus navigation/dismiss [`Intent`]s. Interpreters never touch component
//! state; the dispatcher that owns the slide applies the outcome.
//!
//! The [`recognizer`] turns raw pointer input into the events consumed here.

pub mod pan;
pub mod pinch;
pub mod recognizer;
pub mod tap;

pub use pan::{pan_end, pan_update};
pub use pinch::{pinch_end, pinch_update};
pub use recognizer::{Gesture, PointerEvent, PointerId, PointerPhase, Recognizer};
pub use tap::double_tap;

use crate::domain::ui::{GestureLimits, ValueChange, Vector};

/// Pan (drag) input, relative to where the pan began.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanEvent {
    pub translation: Vector,
    /// Units per second.
    pub velocity: Vector,
}

/// Pinch input, relative to where the pinch began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchEvent {
    /// Span ratio since the pinch began.
    pub scale: f32,
    /// Focal point relative to the viewport center.
    pub focal: Vector,
}

impl Default for PinchEvent {
    fn default() -> Self {
        Self {
            scale: 1.0,
            focal: Vector::ZERO,
        }
    }
}

/// Navigation or lifecycle request raised by a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Rightward swipe: show the previous image.
    SwipeLeft,
    /// Leftward swipe: show the next image.
    SwipeRight,
    /// Vertical fling past the dismiss distance: close the preview.
    Dismiss,
}

/// Per-recognizer feature switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureToggles {
    pub pan: bool,
    pub pinch: bool,
    pub double_tap_to_zoom: bool,
    pub swipe_to_dismiss: bool,
    /// Bias zoom-in towards the pinch focal point.
    pub focal_zoom: bool,
}

impl Default for GestureToggles {
    fn default() -> Self {
        Self {
            pan: true,
            pinch: true,
            double_tap_to_zoom: true,
            swipe_to_dismiss: true,
            focal_zoom: true,
        }
    }
}

/// Read-only context the interpreters need besides the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureContext {
    pub image_index: usize,
    pub image_count: usize,
    pub limits: GestureLimits,
    pub toggles: GestureToggles,
}

impl GestureContext {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.image_index > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.image_index + 1 < self.image_count
    }
}

/// Result of interpreting one gesture event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureOutcome {
    pub changes: Vec<ValueChange>,
    pub intents: Vec<Intent>,
}

impl GestureOutcome {
    pub(crate) fn change(&mut self, change: ValueChange) {
        self.changes.push(change);
    }

    pub(crate) fn intent(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.intents.is_empty()
    }

    #[must_use]
    pub fn has_intent(&self, intent: Intent) -> bool {
        self.intents.contains(&intent)
    }
}

/// Clamps a committed pan offset to the magnified overhang `±max_offset * scale`.
#[must_use]
pub fn clamp_offset(value: f32, max_offset: f32, scale: f32) -> f32 {
    let bound = (max_offset * scale).abs();
    value.clamp(-bound, bound)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn context(image_index: usize, image_count: usize) -> GestureContext {
        GestureContext {
            image_index,
            image_count,
            limits: GestureLimits::default(),
            toggles: GestureToggles::default(),
        }
    }

    pub fn pan(x: f32, y: f32) -> PanEvent {
        PanEvent {
            translation: Vector::new(x, y),
            velocity: Vector::ZERO,
        }
    }
}
