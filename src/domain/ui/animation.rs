// SPDX-License-Identifier: MPL-2.0
//! Time-driven animated values.
//!
//! Every value here is sampled against an explicit [`Instant`], so the
//! animation system is pure: the caller owns the clock. Assigning a new
//! target while an animation is in flight replaces it, starting from the
//! value sampled at the assignment time (last writer wins).

use std::time::{Duration, Instant};

/// Easing curves applied to normalized animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-in-out, the default timing curve.
    #[default]
    EaseInOutQuad,
    /// Sine ease-out, used for pinch release.
    EaseOutSine,
}

impl Easing {
    /// Maps progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseOutSine => (t * std::f32::consts::FRAC_PI_2).sin(),
        }
    }
}

/// Duration and easing of a timed assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration: Duration,
    pub easing: Easing,
}

impl Timing {
    #[must_use]
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Timing with the default ease-in-out curve.
    #[must_use]
    pub const fn eased(duration: Duration) -> Self {
        Self::new(duration, Easing::EaseInOutQuad)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    from: f32,
    started_at: Instant,
    timing: Timing,
}

/// A single scalar that is either at rest or interpolating towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    target: f32,
    segment: Option<Segment>,
}

impl AnimatedValue {
    /// Creates a value at rest.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self {
            target: value,
            segment: None,
        }
    }

    /// Samples the value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(segment) = self.segment else {
            return self.target;
        };
        let elapsed = now.saturating_duration_since(segment.started_at);
        if segment.timing.duration.is_zero() || elapsed >= segment.timing.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f32() / segment.timing.duration.as_secs_f32();
        let eased = segment.timing.easing.apply(t);
        segment.from + (self.target - segment.from) * eased
    }

    /// Final value the animation settles on.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns whether an interpolation is still running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.segment.is_some_and(|segment| {
            now.saturating_duration_since(segment.started_at) < segment.timing.duration
        })
    }

    /// Jumps to `value`, cancelling any in-flight interpolation.
    pub fn set(&mut self, value: f32) {
        self.target = value;
        self.segment = None;
    }

    /// Interpolates from the value sampled at `now` towards `target`.
    pub fn animate_to(&mut self, target: f32, timing: Timing, now: Instant) {
        let from = self.value_at(now);
        self.target = target;
        self.segment = if timing.duration.is_zero() || (from - target).abs() <= f32::EPSILON {
            None
        } else {
            Some(Segment {
                from,
                started_at: now,
                timing,
            })
        };
    }

    /// Drops the finished interpolation so the value reports itself at rest.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.segment = None;
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Infinite ping-pong animation between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repeating {
    from: f32,
    to: f32,
    half_period: Duration,
    started_at: Option<Instant>,
}

impl Repeating {
    #[must_use]
    pub const fn new(from: f32, to: f32, half_period: Duration) -> Self {
        Self {
            from,
            to,
            half_period,
            started_at: None,
        }
    }

    /// Restarts the cycle from `from` at `now`.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stops the cycle; the value rests at `from`.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Samples the value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.from;
        };
        let half = self.half_period.as_secs_f32();
        if half <= 0.0 {
            return self.from;
        }
        let elapsed = now.saturating_duration_since(started_at).as_secs_f32();
        let cycle = (elapsed / half) % 2.0;
        let t = if cycle <= 1.0 { cycle } else { 2.0 - cycle };
        self.from + (self.to - self.from) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseInOutQuad, Easing::EaseOutSine] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn animate_to_reaches_target_after_duration() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(10.0, Timing::new(ms(100), Easing::Linear), start);

        assert_eq!(value.value_at(start), 0.0);
        assert!((value.value_at(start + ms(50)) - 5.0).abs() < 1e-3);
        assert_eq!(value.value_at(start + ms(100)), 10.0);
        assert!(value.is_animating(start + ms(99)));
        assert!(!value.is_animating(start + ms(100)));
    }

    #[test]
    fn new_assignment_overrides_in_flight_animation() {
        let start = Instant::now();
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(10.0, Timing::new(ms(100), Easing::Linear), start);

        value.animate_to(0.0, Timing::new(ms(100), Easing::Linear), start + ms(50));
        assert!((value.value_at(start + ms(50)) - 5.0).abs() < 1e-3);
        assert_eq!(value.value_at(start + ms(150)), 0.0);

        value.set(3.0);
        assert_eq!(value.value_at(start + ms(160)), 3.0);
        assert!(!value.is_animating(start + ms(160)));
    }

    #[test]
    fn repeating_ping_pongs() {
        let start = Instant::now();
        let mut blink = Repeating::new(1.0, 0.3, ms(1000));
        assert_eq!(blink.value_at(start), 1.0);

        blink.start(start);
        assert!((blink.value_at(start + ms(1000)) - 0.3).abs() < 1e-3);
        assert!((blink.value_at(start + ms(2000)) - 1.0).abs() < 1e-3);
        assert!((blink.value_at(start + ms(500)) - 0.65).abs() < 1e-3);

        blink.stop();
        assert_eq!(blink.value_at(start + ms(1000)), 1.0);
    }
}
