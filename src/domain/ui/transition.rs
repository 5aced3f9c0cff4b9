// SPDX-License-Identifier: MPL-2.0
//! Entry and exit transitions for the modal and for individual images.

use super::transform::Vector;
use crate::config::defaults::{
    FADE_TRAVEL, IMAGE_TRANSITION_DELAY, IMAGE_TRANSITION_IN, IMAGE_TRANSITION_OUT,
    MODAL_TRANSITION,
};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Named entry/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModalAnimation {
    #[default]
    Fade,
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
}

/// Every accepted spelling, canonical names first.
const NAMES: &[(&str, ModalAnimation)] = &[
    ("fade", ModalAnimation::Fade),
    ("fade-up", ModalAnimation::FadeUp),
    ("fade-down", ModalAnimation::FadeDown),
    ("fade-left", ModalAnimation::FadeLeft),
    ("fade-right", ModalAnimation::FadeRight),
    ("slide-up", ModalAnimation::SlideUp),
    ("slide-down", ModalAnimation::SlideDown),
    ("slide-left", ModalAnimation::SlideLeft),
    ("slide-right", ModalAnimation::SlideRight),
    ("fadeIn", ModalAnimation::Fade),
    ("fadeOut", ModalAnimation::Fade),
    ("fadeIn-top", ModalAnimation::FadeUp),
    ("fadeOut-top", ModalAnimation::FadeUp),
    ("fadeIn-down", ModalAnimation::FadeDown),
    ("fadeOut-down", ModalAnimation::FadeDown),
    ("fadeIn-left", ModalAnimation::FadeLeft),
    ("fadeOut-left", ModalAnimation::FadeLeft),
    ("fadeIn-right", ModalAnimation::FadeRight),
    ("fadeOut-right", ModalAnimation::FadeRight),
    ("slideIn-top", ModalAnimation::SlideUp),
    ("slideOut-top", ModalAnimation::SlideUp),
    ("slideIn-down", ModalAnimation::SlideDown),
    ("slideOut-down", ModalAnimation::SlideDown),
    ("slideIn-left", ModalAnimation::SlideLeft),
    ("slideOut-left", ModalAnimation::SlideLeft),
    ("slideIn-right", ModalAnimation::SlideRight),
    ("slideOut-right", ModalAnimation::SlideRight),
];

impl ModalAnimation {
    pub const ALL: [ModalAnimation; 9] = [
        ModalAnimation::Fade,
        ModalAnimation::FadeUp,
        ModalAnimation::FadeDown,
        ModalAnimation::FadeLeft,
        ModalAnimation::FadeRight,
        ModalAnimation::SlideUp,
        ModalAnimation::SlideDown,
        ModalAnimation::SlideLeft,
        ModalAnimation::SlideRight,
    ];

    /// Canonical kebab-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, animation)| *animation == self)
            .map_or("fade", |(name, _)| name)
    }

    fn is_slide(self) -> bool {
        matches!(
            self,
            ModalAnimation::SlideUp
                | ModalAnimation::SlideDown
                | ModalAnimation::SlideLeft
                | ModalAnimation::SlideRight
        )
    }

    /// Off-stage offset the content starts from (entering) or ends at
    /// (exiting).
    fn off_stage(self, phase: Phase, viewport: Vector) -> Vector {
        let fade = FADE_TRAVEL;
        match (self, phase) {
            (ModalAnimation::Fade, _) => Vector::ZERO,
            // "up" moves upwards in both directions.
            (ModalAnimation::FadeUp, Phase::Enter) => Vector::new(0.0, fade),
            (ModalAnimation::FadeUp, Phase::Exit) => Vector::new(0.0, -fade),
            (ModalAnimation::FadeDown, Phase::Enter) => Vector::new(0.0, -fade),
            (ModalAnimation::FadeDown, Phase::Exit) => Vector::new(0.0, fade),
            (ModalAnimation::FadeLeft, _) => Vector::new(-fade, 0.0),
            (ModalAnimation::FadeRight, _) => Vector::new(fade, 0.0),
            (ModalAnimation::SlideUp, _) => Vector::new(0.0, -viewport.y),
            (ModalAnimation::SlideDown, _) => Vector::new(0.0, viewport.y),
            (ModalAnimation::SlideLeft, _) => Vector::new(-viewport.x, 0.0),
            (ModalAnimation::SlideRight, _) => Vector::new(viewport.x, 0.0),
        }
    }

    /// Samples the transition at `progress` in `[0, 1]`.
    ///
    /// `viewport` is the full width and height of the animated surface.
    #[must_use]
    pub fn frame(self, phase: Phase, progress: f32, viewport: Vector) -> TransitionFrame {
        let progress = if progress.is_nan() {
            1.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        // Distance left to travel to (or already travelled from) the stage.
        let away = match phase {
            Phase::Enter => 1.0 - progress,
            Phase::Exit => progress,
        };
        TransitionFrame {
            opacity: if self.is_slide() { 1.0 } else { 1.0 - away },
            offset: self.off_stage(phase, viewport) * away,
        }
    }
}

impl fmt::Display for ModalAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAnimation(pub String);

impl fmt::Display for UnknownAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown animation '{}'", self.0)
    }
}

impl std::error::Error for UnknownAnimation {}

impl FromStr for ModalAnimation {
    type Err = UnknownAnimation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, animation)| *animation)
            .ok_or_else(|| UnknownAnimation(s.to_string()))
    }
}

impl TryFrom<String> for ModalAnimation {
    type Error = UnknownAnimation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ModalAnimation> for String {
    fn from(animation: ModalAnimation) -> Self {
        animation.name().to_string()
    }
}

/// Direction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enter,
    Exit,
}

/// Opacity and translation of the animated content at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionFrame {
    pub opacity: f32,
    pub offset: Vector,
}

impl TransitionFrame {
    /// Fully on stage.
    pub const SHOWN: TransitionFrame = TransitionFrame {
        opacity: 1.0,
        offset: Vector::ZERO,
    };
}

/// When a transition starts and how long it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    pub delay: Duration,
    pub duration: Duration,
}

impl TransitionTiming {
    pub const MODAL_IN: TransitionTiming = TransitionTiming {
        delay: Duration::ZERO,
        duration: MODAL_TRANSITION,
    };
    pub const MODAL_OUT: TransitionTiming = TransitionTiming {
        delay: Duration::ZERO,
        duration: MODAL_TRANSITION,
    };
    pub const IMAGE_IN: TransitionTiming = TransitionTiming {
        delay: IMAGE_TRANSITION_DELAY,
        duration: IMAGE_TRANSITION_IN,
    };
    pub const IMAGE_OUT: TransitionTiming = TransitionTiming {
        delay: Duration::ZERO,
        duration: IMAGE_TRANSITION_OUT,
    };

    /// Progress in `[0, 1]` after `elapsed` since the transition was started.
    #[must_use]
    pub fn progress(self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Total time from start to the last frame.
    #[must_use]
    pub fn total(self) -> Duration {
        self.delay + self.duration
    }
}
