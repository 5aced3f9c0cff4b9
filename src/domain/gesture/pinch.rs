// SPDX-License-Identifier: MPL-2.0
//! Pinch interpretation: live zoom and release snapping.

use super::{clamp_offset, GestureContext, GestureOutcome, PinchEvent};
use crate::config::defaults::{MAX_SCALE, MIN_SCALE, PINCH_SETTLE, SNAP_SCALE_THRESHOLD};
use crate::domain::ui::{Easing, Field, Timing, TransformState, ValueChange};

fn settle_timing() -> Timing {
    Timing::new(PINCH_SETTLE, Easing::EaseOutSine)
}

/// Scale the pinch would reach, before clamping.
fn resulting_scale(state: &TransformState, event: &PinchEvent) -> f32 {
    let factor = if event.scale.is_finite() && event.scale > 0.0 {
        event.scale
    } else {
        1.0
    };
    state.saved_scale * factor
}

/// Live update while the pinch is active.
#[must_use]
pub fn pinch_update(
    state: &TransformState,
    event: &PinchEvent,
    ctx: &GestureContext,
) -> GestureOutcome {
    let mut outcome = GestureOutcome::default();
    let scale = resulting_scale(state, event).clamp(MIN_SCALE, MAX_SCALE);
    outcome.change(ValueChange::set(Field::Scale, scale));

    let ratio = scale / state.saved_scale.max(MIN_SCALE);
    if ctx.toggles.focal_zoom && ratio > 1.0 {
        // Keep the point under the fingers where it was.
        let max_offset = ctx.limits.max_offset();
        let focal = event.focal;
        let pos_x = focal.x + (state.saved_pos_x - focal.x) * ratio;
        let pos_y = focal.y + (state.saved_pos_y - focal.y) * ratio;
        outcome.change(ValueChange::set(
            Field::PosX,
            clamp_offset(pos_x, max_offset, scale),
        ));
        outcome.change(ValueChange::set(
            Field::PosY,
            clamp_offset(pos_y, max_offset, scale),
        ));
    }

    outcome
}

/// Pinch release.
///
/// Near-rest results snap back to the unzoomed identity; anything else is
/// clamped into range and committed as the new baseline.
#[must_use]
pub fn pinch_end(
    state: &TransformState,
    event: &PinchEvent,
    _ctx: &GestureContext,
) -> GestureOutcome {
    let mut outcome = GestureOutcome::default();
    let resulting = resulting_scale(state, event);
    let timing = settle_timing();

    if resulting < SNAP_SCALE_THRESHOLD {
        outcome.change(ValueChange::animate(Field::Scale, MIN_SCALE, timing));
        outcome.change(ValueChange::animate(Field::PosX, 0.0, timing));
        outcome.change(ValueChange::animate(Field::PosY, 0.0, timing));
        outcome.change(ValueChange::set(Field::SavedScale, MIN_SCALE));
        outcome.change(ValueChange::set(Field::SavedPosX, 0.0));
        outcome.change(ValueChange::set(Field::SavedPosY, 0.0));
        return outcome;
    }

    let clamped = resulting.clamp(MIN_SCALE, MAX_SCALE);
    if (clamped - state.scale).abs() > f32::EPSILON {
        outcome.change(ValueChange::animate(Field::Scale, clamped, timing));
    }
    outcome.change(ValueChange::set(Field::SavedScale, clamped));
    outcome.change(ValueChange::set(Field::SavedPosX, state.pos_x));
    outcome.change(ValueChange::set(Field::SavedPosY, state.pos_y));
    outcome
}
