// SPDX-License-Identifier: MPL-2.0
//! Enter/exit presence sub-component.
//!
//! Tracks whether some content is on stage and samples its entry or exit
//! transition. The modal uses one for itself; slides use one per image.

use crate::domain::ui::{ModalAnimation, Phase, TransitionFrame, TransitionTiming, Vector};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Hidden,
    Entering {
        since: Instant,
    },
    Shown,
    Exiting {
        since: Instant,
    },
}

/// Presence of one piece of animated content.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    presence: Presence,
    animation_in: ModalAnimation,
    animation_out: ModalAnimation,
    timing_in: TransitionTiming,
    timing_out: TransitionTiming,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Controlled visibility from the owner.
    SetVisible { visible: bool, now: Instant },
    /// Advances a running transition.
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The entry transition finished.
    Shown,
    /// The exit transition finished; the content may be dropped.
    Hidden,
}

impl State {
    #[must_use]
    pub fn new(
        animation_in: ModalAnimation,
        animation_out: ModalAnimation,
        timing_in: TransitionTiming,
        timing_out: TransitionTiming,
    ) -> Self {
        Self {
            presence: Presence::Hidden,
            animation_in,
            animation_out,
            timing_in,
            timing_out,
        }
    }

    /// Modal-level presence with the given selectors.
    #[must_use]
    pub fn modal(animation_in: ModalAnimation, animation_out: ModalAnimation) -> Self {
        Self::new(
            animation_in,
            animation_out,
            TransitionTiming::MODAL_IN,
            TransitionTiming::MODAL_OUT,
        )
    }

    /// Image-level presence with the given selectors.
    #[must_use]
    pub fn image(animation_in: ModalAnimation, animation_out: ModalAnimation) -> Self {
        Self::new(
            animation_in,
            animation_out,
            TransitionTiming::IMAGE_IN,
            TransitionTiming::IMAGE_OUT,
        )
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SetVisible { visible, now } => {
                self.presence = match (self.presence, visible) {
                    (Presence::Hidden | Presence::Exiting { .. }, true) => {
                        Presence::Entering { since: now }
                    }
                    (Presence::Shown | Presence::Entering { .. }, false) => {
                        Presence::Exiting { since: now }
                    }
                    (unchanged, _) => unchanged,
                };
                self.settle(now)
            }
            Message::Tick(now) => self.settle(now),
        }
    }

    fn settle(&mut self, now: Instant) -> Effect {
        match self.presence {
            Presence::Entering { since }
                if now.saturating_duration_since(since) >= self.timing_in.total() =>
            {
                self.presence = Presence::Shown;
                Effect::Shown
            }
            Presence::Exiting { since }
                if now.saturating_duration_since(since) >= self.timing_out.total() =>
            {
                self.presence = Presence::Hidden;
                Effect::Hidden
            }
            _ => Effect::None,
        }
    }

    /// Jumps straight to shown, skipping the entry transition.
    pub fn show_immediately(&mut self) {
        self.presence = Presence::Shown;
    }

    #[must_use]
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Returns whether the content should be rendered at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.presence != Presence::Hidden
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(
            self.presence,
            Presence::Entering { .. } | Presence::Exiting { .. }
        )
    }

    /// Samples the transition; `None` when hidden.
    #[must_use]
    pub fn frame(&self, now: Instant, viewport: Vector) -> Option<TransitionFrame> {
        match self.presence {
            Presence::Hidden => None,
            Presence::Shown => Some(TransitionFrame::SHOWN),
            Presence::Entering { since } => {
                let progress = self.timing_in.progress(now.saturating_duration_since(since));
                Some(self.animation_in.frame(Phase::Enter, progress, viewport))
            }
            Presence::Exiting { since } => {
                let progress = self.timing_out.progress(now.saturating_duration_since(since));
                Some(self.animation_out.frame(Phase::Exit, progress, viewport))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const VIEWPORT: Vector = Vector::new(400.0, 800.0);

    fn open(state: &mut State, now: Instant) -> Effect {
        state.handle(Message::SetVisible { visible: true, now })
    }

    #[test]
    fn opening_runs_the_entry_transition() {
        let t0 = Instant::now();
        let mut state = State::modal(ModalAnimation::Fade, ModalAnimation::Fade);
        assert!(!state.is_visible());

        open(&mut state, t0);
        assert!(state.is_animating());
        let start = state.frame(t0, VIEWPORT).expect("visible");
        assert_eq!(start.opacity, 0.0);

        assert_eq!(
            state.handle(Message::Tick(t0 + Duration::from_millis(300))),
            Effect::Shown
        );
        assert_eq!(state.frame(t0, VIEWPORT), Some(TransitionFrame::SHOWN));
    }

    #[test]
    fn closing_keeps_rendering_until_exit_completes() {
        let t0 = Instant::now();
        let mut state = State::modal(ModalAnimation::Fade, ModalAnimation::SlideDown);
        state.show_immediately();

        state.handle(Message::SetVisible {
            visible: false,
            now: t0,
        });
        assert!(state.is_visible());
        let midway = state
            .frame(t0 + Duration::from_millis(150), VIEWPORT)
            .expect("still rendering");
        assert_eq!(midway.offset, Vector::new(0.0, 400.0));

        assert_eq!(
            state.handle(Message::Tick(t0 + Duration::from_millis(300))),
            Effect::Hidden
        );
        assert!(!state.is_visible());
    }

    #[test]
    fn reopening_mid_exit_enters_again() {
        let t0 = Instant::now();
        let mut state = State::modal(ModalAnimation::Fade, ModalAnimation::Fade);
        state.show_immediately();
        state.handle(Message::SetVisible {
            visible: false,
            now: t0,
        });
        open(&mut state, t0 + Duration::from_millis(100));
        assert!(matches!(state.presence(), Presence::Entering { .. }));
    }

    #[test]
    fn image_entry_waits_for_its_delay() {
        let t0 = Instant::now();
        let mut state = State::image(ModalAnimation::Fade, ModalAnimation::Fade);
        open(&mut state, t0);
        let delayed = state
            .frame(t0 + Duration::from_millis(50), VIEWPORT)
            .expect("visible");
        assert_eq!(delayed.opacity, 0.0);
        assert_eq!(
            state.handle(Message::Tick(t0 + Duration::from_millis(250))),
            Effect::None
        );
        assert_eq!(
            state.handle(Message::Tick(t0 + Duration::from_millis(300))),
            Effect::Shown
        );
    }
}
