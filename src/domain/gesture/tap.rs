// SPDX-License-Identifier: MPL-2.0
//! Double-tap zoom toggle.

use super::{GestureContext, GestureOutcome};
use crate::config::defaults::{DEFAULT_TIMING, MIN_SCALE};
use crate::domain::ui::newtypes::is_zoomed;
use crate::domain::ui::{Field, Timing, TransformState, ValueChange};

/// Toggles between the identity transform and the double-tap scale.
#[must_use]
pub fn double_tap(state: &TransformState, ctx: &GestureContext) -> GestureOutcome {
    let mut outcome = GestureOutcome::default();
    let timing = Timing::eased(DEFAULT_TIMING);

    if is_zoomed(state.scale) {
        outcome.change(ValueChange::animate(Field::Scale, MIN_SCALE, timing));
        outcome.change(ValueChange::animate(Field::PosX, 0.0, timing));
        outcome.change(ValueChange::animate(Field::PosY, 0.0, timing));
        outcome.change(ValueChange::set(Field::SavedScale, MIN_SCALE));
        outcome.change(ValueChange::set(Field::SavedPosX, 0.0));
        outcome.change(ValueChange::set(Field::SavedPosY, 0.0));
    } else {
        let target = ctx.limits.double_tap_scale().value();
        outcome.change(ValueChange::animate(Field::Scale, target, timing));
        outcome.change(ValueChange::set(Field::SavedScale, target));
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::super::test_support::context;
    use super::*;

    #[test]
    fn two_double_taps_return_to_identity() {
        let ctx = context(0, 1);
        let start = TransformState::default();

        let zoomed = start.settled_with(&double_tap(&start, &ctx).changes);
        assert_eq!(zoomed.scale, 2.0);
        assert_eq!(zoomed.saved_scale, 2.0);

        let panned = TransformState {
            pos_x: 50.0,
            saved_pos_x: 50.0,
            ..zoomed
        };
        let back = panned.settled_with(&double_tap(&panned, &ctx).changes);
        assert!(back.is_identity());
    }
}
