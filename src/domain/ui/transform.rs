// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom transform state of one image slide.
//!
//! [`TransformState`] is a plain snapshot: live position and scale plus the
//! last committed ("saved") values. Gesture interpreters read a snapshot and
//! answer with a list of [`ValueChange`]s; only [`AnimatedTransform`] owns
//! the animated cells and applies those changes.

use super::animation::{AnimatedValue, Timing};
use crate::config::defaults::MIN_SCALE;
use std::ops::{Add, Mul, Sub};
use std::time::Instant;

/// Two-dimensional displacement in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;

    fn mul(self, factor: f32) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }
}

/// Snapshot of a slide's transform at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub pos_x: f32,
    pub pos_y: f32,
    pub scale: f32,
    pub saved_pos_x: f32,
    pub saved_pos_y: f32,
    pub saved_scale: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            pos_x: 0.0,
            pos_y: 0.0,
            scale: MIN_SCALE,
            saved_pos_x: 0.0,
            saved_pos_y: 0.0,
            saved_scale: MIN_SCALE,
        }
    }
}

impl TransformState {
    /// Returns whether every value is at rest: unzoomed and centered.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Applies changes instantly, using the final target of animated ones.
    ///
    /// This is the resting state the animated owner converges to.
    #[must_use]
    pub fn settled_with(mut self, changes: &[ValueChange]) -> Self {
        for change in changes {
            *self.field_mut(change.field) = change.target();
        }
        self
    }

    /// Reads one field.
    #[must_use]
    pub fn get(&self, field: Field) -> f32 {
        match field {
            Field::PosX => self.pos_x,
            Field::PosY => self.pos_y,
            Field::Scale => self.scale,
            Field::SavedPosX => self.saved_pos_x,
            Field::SavedPosY => self.saved_pos_y,
            Field::SavedScale => self.saved_scale,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut f32 {
        match field {
            Field::PosX => &mut self.pos_x,
            Field::PosY => &mut self.pos_y,
            Field::Scale => &mut self.scale,
            Field::SavedPosX => &mut self.saved_pos_x,
            Field::SavedPosY => &mut self.saved_pos_y,
            Field::SavedScale => &mut self.saved_scale,
        }
    }
}

/// Addressable fields of [`TransformState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PosX,
    PosY,
    Scale,
    SavedPosX,
    SavedPosY,
    SavedScale,
}

impl Field {
    /// Whether the field is a live (rendered, animatable) value.
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Field::PosX | Field::PosY | Field::Scale)
    }
}

/// How a field moves to its new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change {
    /// Jump immediately.
    Set(f32),
    /// Interpolate from the current live value.
    Animate { target: f32, timing: Timing },
}

/// One field update produced by a gesture interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChange {
    pub field: Field,
    pub change: Change,
}

impl ValueChange {
    #[must_use]
    pub const fn set(field: Field, value: f32) -> Self {
        Self {
            field,
            change: Change::Set(value),
        }
    }

    #[must_use]
    pub const fn animate(field: Field, target: f32, timing: Timing) -> Self {
        Self {
            field,
            change: Change::Animate { target, timing },
        }
    }

    /// Value the field ends up at.
    #[must_use]
    pub fn target(&self) -> f32 {
        match self.change {
            Change::Set(value) => value,
            Change::Animate { target, .. } => target,
        }
    }
}

/// Presentation values for the rendered image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale_factor: f32,
}

/// Projects a snapshot onto the rendered transform. No smoothing happens
/// here; the animated cells already carry it.
#[must_use]
pub fn visual_transform(state: &TransformState) -> VisualTransform {
    VisualTransform {
        translate_x: state.pos_x,
        translate_y: state.pos_y,
        scale_factor: state.scale,
    }
}

/// Owner of a slide's animated transform cells.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedTransform {
    pos_x: AnimatedValue,
    pos_y: AnimatedValue,
    scale: AnimatedValue,
    saved_pos_x: f32,
    saved_pos_y: f32,
    saved_scale: f32,
}

impl Default for AnimatedTransform {
    fn default() -> Self {
        Self {
            pos_x: AnimatedValue::new(0.0),
            pos_y: AnimatedValue::new(0.0),
            scale: AnimatedValue::new(MIN_SCALE),
            saved_pos_x: 0.0,
            saved_pos_y: 0.0,
            saved_scale: MIN_SCALE,
        }
    }
}

impl AnimatedTransform {
    /// Samples every cell at `now`.
    #[must_use]
    pub fn snapshot(&self, now: Instant) -> TransformState {
        TransformState {
            pos_x: self.pos_x.value_at(now),
            pos_y: self.pos_y.value_at(now),
            scale: self.scale.value_at(now),
            saved_pos_x: self.saved_pos_x,
            saved_pos_y: self.saved_pos_y,
            saved_scale: self.saved_scale,
        }
    }

    /// State once every running animation has finished.
    #[must_use]
    pub fn settled(&self) -> TransformState {
        TransformState {
            pos_x: self.pos_x.target(),
            pos_y: self.pos_y.target(),
            scale: self.scale.target(),
            saved_pos_x: self.saved_pos_x,
            saved_pos_y: self.saved_pos_y,
            saved_scale: self.saved_scale,
        }
    }

    /// Applies interpreter output in order; later changes to the same field win.
    pub fn apply(&mut self, changes: &[ValueChange], now: Instant) {
        for change in changes {
            match change.field {
                Field::PosX => Self::apply_live(&mut self.pos_x, change.change, now),
                Field::PosY => Self::apply_live(&mut self.pos_y, change.change, now),
                Field::Scale => Self::apply_live(&mut self.scale, change.change, now),
                Field::SavedPosX => self.saved_pos_x = change.target(),
                Field::SavedPosY => self.saved_pos_y = change.target(),
                Field::SavedScale => self.saved_scale = change.target(),
            }
        }
    }

    fn apply_live(cell: &mut AnimatedValue, change: Change, now: Instant) {
        match change {
            Change::Set(value) => cell.set(value),
            Change::Animate { target, timing } => cell.animate_to(target, timing, now),
        }
    }

    /// Returns whether any live cell is still interpolating.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.pos_x.is_animating(now) || self.pos_y.is_animating(now) || self.scale.is_animating(now)
    }

    /// Jumps back to the identity transform.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
