// SPDX-License-Identifier: MPL-2.0
//! Piecewise-linear interpolation over control points.
//!
//! Values outside the outermost control points hold the boundary output;
//! nothing here extrapolates.

/// Straight (non-premultiplied) RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let mix = |from: f32, to: f32| from + (to - from) * t;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// Locates `value` on the control points.
///
/// Returns the segment index and the normalized position inside it, or
/// `Err(index)` when the value should hold the output at `index`.
fn locate(value: f32, input: &[f32]) -> Result<(usize, f32), usize> {
    let last = input.len() - 1;
    if value.is_nan() || value <= input[0] {
        return Err(0);
    }
    if value >= input[last] {
        return Err(last);
    }
    let segment = input
        .windows(2)
        .position(|pair| value >= pair[0] && value < pair[1])
        .unwrap_or(last - 1);
    let span = input[segment + 1] - input[segment];
    if span <= 0.0 {
        return Err(segment + 1);
    }
    Ok((segment, (value - input[segment]) / span))
}

/// Maps `value` through the control points `input -> output`.
///
/// `input` must be non-decreasing and both slices must have the same,
/// non-zero length.
#[must_use]
pub fn interpolate(value: f32, input: &[f32], output: &[f32]) -> f32 {
    debug_assert_eq!(input.len(), output.len());
    if input.is_empty() {
        return 0.0;
    }
    match locate(value, input) {
        Ok((segment, t)) => output[segment] + (output[segment + 1] - output[segment]) * t,
        Err(index) => output[index],
    }
}

/// Color counterpart of [`interpolate`], mixing channels linearly.
#[must_use]
pub fn interpolate_color(value: f32, input: &[f32], output: &[Rgba]) -> Rgba {
    debug_assert_eq!(input.len(), output.len());
    if input.is_empty() {
        return Rgba::TRANSPARENT;
    }
    match locate(value, input) {
        Ok((segment, t)) => output[segment].lerp(output[segment + 1], t),
        Err(index) => output[index],
    }
}
