// SPDX-License-Identifier: MPL-2.0
//! Pan interpretation: free drag at rest scale, overhang panning when zoomed.

use super::{clamp_offset, GestureContext, GestureOutcome, Intent, PanEvent};
use crate::config::defaults::{DEFAULT_TIMING, PAN_SNAP_BACK};
use crate::domain::ui::newtypes::{is_rest_scale, is_zoomed};
use crate::domain::ui::{Field, Timing, TransformState, ValueChange};

/// Live update while the pan is active.
///
/// At rest scale only a downward vertical offset is applied (the image can
/// be pushed towards dismissal but not pulled above its rest position).
/// Zoomed, both axes follow the drag from the committed baseline.
#[must_use]
pub fn pan_update(
    state: &TransformState,
    event: &PanEvent,
    ctx: &GestureContext,
) -> GestureOutcome {
    let mut outcome = GestureOutcome::default();
    let t = event.translation;

    if is_zoomed(state.scale) {
        outcome.change(ValueChange::set(Field::PosX, state.saved_pos_x + t.x));
        outcome.change(ValueChange::set(Field::PosY, state.saved_pos_y + t.y));
    } else if ctx.toggles.swipe_to_dismiss {
        let pos_y = (state.saved_pos_y + t.y).max(0.0);
        outcome.change(ValueChange::set(Field::PosY, pos_y));
    }

    outcome
}

/// Pan release: snap back or commit, then check navigation and dismissal.
#[must_use]
pub fn pan_end(state: &TransformState, event: &PanEvent, ctx: &GestureContext) -> GestureOutcome {
    let mut outcome = GestureOutcome::default();
    let t = event.translation;
    let max_offset = ctx.limits.max_offset();
    let zoomed = is_zoomed(state.scale);

    if zoomed {
        let saved_x = clamp_offset(state.saved_pos_x + t.x, max_offset, state.scale);
        let saved_y = clamp_offset(state.saved_pos_y + t.y, max_offset, state.scale);
        outcome.change(ValueChange::set(Field::SavedPosX, saved_x));
        outcome.change(ValueChange::set(Field::SavedPosY, saved_y));
        outcome.change(ValueChange::set(Field::PosX, saved_x));
        outcome.change(ValueChange::set(Field::PosY, saved_y));
    } else {
        let snap = Timing::eased(PAN_SNAP_BACK);
        outcome.change(ValueChange::animate(Field::PosX, 0.0, snap));
        outcome.change(ValueChange::animate(Field::PosY, 0.0, snap));
        outcome.change(ValueChange::set(Field::SavedPosX, 0.0));
        outcome.change(ValueChange::set(Field::SavedPosY, 0.0));
    }

    let dismiss =
        !zoomed && ctx.toggles.swipe_to_dismiss && t.y.abs() > ctx.limits.dismiss_distance();

    // A release past both thresholds closes the preview without navigating.
    if is_rest_scale(state.scale) && !dismiss {
        let swipe = if t.x > max_offset && ctx.has_previous() {
            Some(Intent::SwipeLeft)
        } else if t.x < -max_offset && ctx.has_next() {
            Some(Intent::SwipeRight)
        } else {
            None
        };
        if let Some(intent) = swipe {
            outcome.intent(intent);
            outcome.change(ValueChange::animate(
                Field::PosX,
                0.0,
                Timing::eased(DEFAULT_TIMING),
            ));
        }
    }

    if dismiss {
        outcome.intent(Intent::Dismiss);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{context, pan};
    use super::*;

    fn zoomed(scale: f32) -> TransformState {
        TransformState {
            scale,
            saved_scale: scale,
            ..TransformState::default()
        }
    }

    #[test]
    fn rest_scale_update_only_pushes_down() {
        let state = TransformState::default();
        let ctx = context(0, 3);

        let down = pan_update(&state, &pan(30.0, 80.0), &ctx);
        let down = TransformState::default().settled_with(&down.changes);
        assert_eq!(down.pos_y, 80.0);
        assert_eq!(down.pos_x, 0.0);

        let up = pan_update(&state, &pan(0.0, -80.0), &ctx);
        let up = TransformState::default().settled_with(&up.changes);
        assert_eq!(up.pos_y, 0.0);
    }

    #[test]
    fn zoomed_update_follows_both_axes_from_baseline() {
        let state = TransformState {
            saved_pos_x: 20.0,
            saved_pos_y: -10.0,
            ..zoomed(2.0)
        };
        let outcome = pan_update(&state, &pan(-50.0, 40.0), &context(0, 1));
        let result = state.settled_with(&outcome.changes);
        assert_eq!(result.pos_x, -30.0);
        assert_eq!(result.pos_y, 30.0);
    }

    #[test]
    fn rest_scale_end_resets_position() {
        let state = TransformState {
            pos_y: 150.0,
            ..TransformState::default()
        };
        let outcome = pan_end(&state, &pan(40.0, 150.0), &context(0, 3));
        let result = state.settled_with(&outcome.changes);

        assert_eq!((result.pos_x, result.pos_y), (0.0, 0.0));
        assert_eq!((result.saved_pos_x, result.saved_pos_y), (0.0, 0.0));
        assert!(outcome.intents.is_empty());
    }

    #[test]
    fn zoomed_end_commits_clamped_overhang() {
        let state = zoomed(2.0);
        let outcome = pan_end(&state, &pan(500.0, -30.0), &context(0, 3));
        let result = state.settled_with(&outcome.changes);

        assert_eq!(result.saved_pos_x, 200.0);
        assert_eq!(result.pos_x, 200.0);
        assert_eq!(result.saved_pos_y, -30.0);
        assert!(outcome.intents.is_empty());
    }

    #[test]
    fn swipe_intents_are_bounds_checked() {
        let state = TransformState::default();

        assert!(pan_end(&state, &pan(150.0, 0.0), &context(1, 3)).has_intent(Intent::SwipeLeft));
        assert!(pan_end(&state, &pan(-150.0, 0.0), &context(1, 3)).has_intent(Intent::SwipeRight));

        assert!(pan_end(&state, &pan(150.0, 0.0), &context(0, 3)).intents.is_empty());
        assert!(pan_end(&state, &pan(-150.0, 0.0), &context(2, 3)).intents.is_empty());
        assert!(pan_end(&state, &pan(100.0, 0.0), &context(1, 3)).intents.is_empty());
    }

    #[test]
    fn dismiss_fires_past_threshold_in_either_direction() {
        let state = TransformState::default();
        let ctx = context(0, 1);

        assert!(pan_end(&state, &pan(0.0, 201.0), &ctx).has_intent(Intent::Dismiss));
        assert!(pan_end(&state, &pan(0.0, -201.0), &ctx).has_intent(Intent::Dismiss));
        assert!(!pan_end(&state, &pan(0.0, 200.0), &ctx).has_intent(Intent::Dismiss));
        assert!(!pan_end(&zoomed(2.0), &pan(0.0, 400.0), &ctx).has_intent(Intent::Dismiss));
    }

    #[test]
    fn diagonal_release_dismisses_without_swiping() {
        let state = TransformState::default();
        let outcome = pan_end(&state, &pan(-150.0, 250.0), &context(1, 3));

        assert_eq!(outcome.intents, vec![Intent::Dismiss]);

        let mut ctx = context(1, 3);
        ctx.toggles.swipe_to_dismiss = false;
        let outcome = pan_end(&state, &pan(-150.0, 250.0), &ctx);
        assert_eq!(outcome.intents, vec![Intent::SwipeRight]);
    }

    #[test]
    fn dismiss_respects_toggle() {
        let mut ctx = context(0, 1);
        ctx.toggles.swipe_to_dismiss = false;
        let state = TransformState::default();

        assert!(pan_update(&state, &pan(0.0, 300.0), &ctx).changes.is_empty());
        assert!(pan_end(&state, &pan(0.0, 300.0), &ctx).intents.is_empty());
    }
}
