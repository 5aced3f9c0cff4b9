// SPDX-License-Identifier: MPL-2.0
//! Pagination strip sub-component.
//!
//! Turns indicator taps and organic pager reports into navigation requests
//! and keeps the indicator strip scrolled to the active dot. Programmatic
//! navigations arm a short guard during which pager reports only move the
//! strip.

use crate::domain::navigation::NavigationGuard;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Identifier of the indicator strip scrollable.
pub const STRIP_ID: &str = "preview-pagination-strip";

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    guard: NavigationGuard,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Indicator `index` was tapped.
    Pressed {
        index: usize,
        zoomed: bool,
        now: Instant,
    },
    /// The pager settled on `index` after organic scrolling.
    PagerSettled { index: usize, now: Instant },
    /// A navigation the component started itself.
    Programmatic(Instant),
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Navigate to this index.
    Navigate(usize),
    /// A pager report arrived inside the guard: the index must not change,
    /// and the pager goes back to the current page.
    Restore,
}

impl State {
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Pressed { zoomed: true, .. } => Effect::None,
            Message::Pressed { index, now, .. } => {
                self.guard.arm(now);
                Effect::Navigate(index)
            }
            Message::PagerSettled { index, now } => {
                if self.guard.is_active(now) {
                    tracing::debug!(index, "pager report inside navigation guard");
                    Effect::Restore
                } else {
                    Effect::Navigate(index)
                }
            }
            Message::Programmatic(now) => {
                self.guard.arm(now);
                Effect::None
            }
            Message::Tick(now) => {
                self.guard.expire(now);
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_guarded(&self, now: Instant) -> bool {
        self.guard.is_active(now)
    }
}

/// Relative strip offset that centers indicator `index` of `count`.
#[must_use]
pub fn strip_offset(index: usize, count: usize) -> RelativeOffset {
    let x = if count > 1 {
        (index.min(count - 1) as f32) / ((count - 1) as f32)
    } else {
        0.0
    };
    RelativeOffset { x, y: 0.0 }
}

/// Scrolls the indicator strip so indicator `index` is visible.
pub fn reveal<Message: 'static>(index: usize, count: usize) -> Task<Message> {
    operation::snap_to(Id::new(STRIP_ID), strip_offset(index, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::NAVIGATION_GUARD;
    use std::time::Duration;

    #[test]
    fn tap_navigates_and_arms_guard() {
        let t0 = Instant::now();
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::Pressed {
                index: 3,
                zoomed: false,
                now: t0
            }),
            Effect::Navigate(3)
        );
        assert!(state.is_guarded(t0 + Duration::from_millis(10)));
    }

    #[test]
    fn tap_while_zoomed_is_ignored() {
        let mut state = State::default();
        assert_eq!(
            state.handle(Message::Pressed {
                index: 1,
                zoomed: true,
                now: Instant::now()
            }),
            Effect::None
        );
    }

    #[test]
    fn guarded_pager_report_restores_the_current_page() {
        let t0 = Instant::now();
        let mut state = State::default();
        state.handle(Message::Programmatic(t0));
        assert_eq!(
            state.handle(Message::PagerSettled {
                index: 2,
                now: t0 + Duration::from_millis(100)
            }),
            Effect::Restore
        );

        let later = t0 + NAVIGATION_GUARD + Duration::from_millis(1);
        state.handle(Message::Tick(later));
        assert_eq!(
            state.handle(Message::PagerSettled { index: 2, now: later }),
            Effect::Navigate(2)
        );
    }

    #[test]
    fn strip_offset_spans_the_strip() {
        assert_eq!(strip_offset(0, 5).x, 0.0);
        assert_eq!(strip_offset(4, 5).x, 1.0);
        assert_eq!(strip_offset(2, 5).x, 0.5);
        assert_eq!(strip_offset(0, 1).x, 0.0);
    }
}
