// SPDX-License-Identifier: MPL-2.0
//! Derived styles: pure projections of the transform onto visual output.
//!
//! Recomputed on every frame; none of these functions hold state.

use super::interpolate::{interpolate, interpolate_color, Rgba};
use super::newtypes::is_zoomed;
use crate::config::defaults::{
    ACTIVE_DOT_SIZE, BACKDROP_INNER, BACKDROP_MIDDLE, BACKDROP_MIDDLE_ALPHA,
    BACKDROP_MIDDLE_OPACITY, DRAGGED_DOT_OPACITY, INACTIVE_DOT_OPACITY, INACTIVE_DOT_SIZE,
    MIN_SCALE,
};

/// Drag distance at which the previous/next affordances start to appear.
const AFFORDANCE_REVEAL_START: f32 = 50.0;

/// Vertical drag range over which the pagination strip fades out.
const PAGINATION_FADE_DRAG: [f32; 2] = [50.0, 100.0];

/// Scale range over which the pagination strip fades out.
const PAGINATION_FADE_SCALE: [f32; 2] = [MIN_SCALE, 1.5];

/// Control points shared by the backdrop opacity and color curves.
///
/// The outer points sit at half the viewport height. On viewports shorter
/// than twice the middle point they are pushed just outside it so the input
/// stays strictly increasing.
fn backdrop_points(viewport_height: f32) -> [f32; 7] {
    let half = (viewport_height / 2.0).max(BACKDROP_MIDDLE + 1.0);
    [
        -half,
        -BACKDROP_MIDDLE,
        -BACKDROP_INNER,
        0.0,
        BACKDROP_INNER,
        BACKDROP_MIDDLE,
        half,
    ]
}

/// Backdrop opacity for a vertical offset; always 1 while zoomed.
#[must_use]
pub fn backdrop_opacity(pos_y: f32, viewport_height: f32, scale: f32) -> f32 {
    if is_zoomed(scale) {
        return 1.0;
    }
    interpolate(
        pos_y,
        &backdrop_points(viewport_height),
        &[
            0.0,
            BACKDROP_MIDDLE_OPACITY,
            1.0,
            1.0,
            1.0,
            BACKDROP_MIDDLE_OPACITY,
            0.0,
        ],
    )
}

/// Backdrop color for a vertical offset; opaque black while zoomed.
#[must_use]
pub fn backdrop_color(pos_y: f32, viewport_height: f32, scale: f32) -> Rgba {
    if is_zoomed(scale) {
        return Rgba::BLACK;
    }
    let middle = Rgba::BLACK.with_alpha(BACKDROP_MIDDLE_ALPHA);
    interpolate_color(
        pos_y,
        &backdrop_points(viewport_height),
        &[
            Rgba::TRANSPARENT,
            middle,
            Rgba::BLACK,
            Rgba::BLACK,
            Rgba::BLACK,
            middle,
            Rgba::TRANSPARENT,
        ],
    )
}

/// Opacity of the pagination strip.
///
/// Fades with a downward drag at rest scale and with zoom otherwise.
#[must_use]
pub fn pagination_opacity(pos_y: f32, scale: f32) -> f32 {
    if is_zoomed(scale) {
        interpolate(scale, &PAGINATION_FADE_SCALE, &[1.0, 0.0])
    } else {
        interpolate(pos_y, &PAGINATION_FADE_DRAG, &[1.0, 0.0])
    }
}

/// Size and opacity of one pagination dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    pub size: f32,
    pub opacity: f32,
}

/// Style of a pagination dot given the live horizontal drag.
#[must_use]
pub fn dot_style(is_active: bool, drag_dx: f32, max_offset: f32) -> DotStyle {
    if !is_active {
        return DotStyle {
            size: INACTIVE_DOT_SIZE,
            opacity: INACTIVE_DOT_OPACITY,
        };
    }
    let points = [-max_offset, 0.0, max_offset];
    DotStyle {
        size: interpolate(
            drag_dx,
            &points,
            &[INACTIVE_DOT_SIZE, ACTIVE_DOT_SIZE, INACTIVE_DOT_SIZE],
        ),
        opacity: interpolate(
            drag_dx,
            &points,
            &[DRAGGED_DOT_OPACITY, 1.0, DRAGGED_DOT_OPACITY],
        ),
    }
}

/// Opacity of the "previous image" affordance for a rightward drag.
#[must_use]
pub fn previous_affordance_opacity(drag_dx: f32, max_offset: f32) -> f32 {
    interpolate(
        drag_dx,
        &[AFFORDANCE_REVEAL_START, max_offset.max(AFFORDANCE_REVEAL_START)],
        &[0.0, 1.0],
    )
}

/// Opacity of the "next image" affordance for a leftward drag.
#[must_use]
pub fn next_affordance_opacity(drag_dx: f32, max_offset: f32) -> f32 {
    previous_affordance_opacity(-drag_dx, max_offset)
}
