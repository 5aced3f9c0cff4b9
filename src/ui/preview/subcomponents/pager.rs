// SPDX-License-Identifier: MPL-2.0
//! Horizontal pager sub-component.
//!
//! Lays the slides edge to edge and owns the horizontal scroll offset. The
//! offset moves in three ways: programmatic `scroll_to_index`, a live drag
//! delta while the user swipes an unzoomed slide, and organic wheel
//! scrolling that reports the majority-visible page once it settles.

use crate::application::port::PagedList;
use crate::config::defaults::{DEFAULT_TIMING, PAGER_SETTLE_DELAY};
use crate::domain::ui::{AnimatedValue, Timing};
use std::time::Instant;

/// Fraction of the drag applied when there is no page in that direction.
const EDGE_RESISTANCE: f32 = 0.3;

const SCROLL_TIMING: Timing = Timing::eased(DEFAULT_TIMING);

#[derive(Debug, Clone)]
pub struct Pager {
    page_count: usize,
    page_width: f32,
    offset: AnimatedValue,
    drag: f32,
    scrolled_at: Option<Instant>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Live finger delta since the swipe began; positive moves content right.
    Drag {
        dx: f32,
        has_previous: bool,
        has_next: bool,
    },
    /// The finger lifted; the drag is folded into the offset.
    Release(Instant),
    /// Organic scrolling by `dx` content units.
    Scroll { dx: f32, now: Instant },
    /// The viewport width changed; re-snap to `index`.
    Resize { width: f32, index: usize },
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Organic scrolling settled on this page.
    Settled(usize),
}

impl Pager {
    #[must_use]
    pub fn new(page_count: usize, index: usize) -> Self {
        let mut pager = Self {
            page_count,
            page_width: 0.0,
            offset: AnimatedValue::new(0.0),
            drag: 0.0,
            scrolled_at: None,
        };
        pager.offset.set(pager.page_offset(index));
        pager
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Drag {
                dx,
                has_previous,
                has_next,
            } => {
                let blocked = (dx > 0.0 && !has_previous) || (dx < 0.0 && !has_next);
                self.drag = if blocked { dx * EDGE_RESISTANCE } else { dx };
                Effect::None
            }
            Message::Release(now) => {
                let current = self.offset(now);
                self.drag = 0.0;
                self.offset.set(current);
                Effect::None
            }
            Message::Scroll { dx, now } => {
                let current = self.offset.value_at(now);
                self.offset.set((current + dx).clamp(0.0, self.max_offset()));
                self.scrolled_at = Some(now);
                Effect::None
            }
            Message::Resize { width, index } => {
                self.page_width = width.max(0.0);
                self.drag = 0.0;
                self.offset.set(self.page_offset(index));
                Effect::None
            }
            Message::Tick(now) => {
                let Some(scrolled_at) = self.scrolled_at else {
                    return Effect::None;
                };
                if now.saturating_duration_since(scrolled_at) < PAGER_SETTLE_DELAY {
                    return Effect::None;
                }
                self.scrolled_at = None;
                let index = self.visible_index(now);
                self.scroll_to_index(index, true, now);
                Effect::Settled(index)
            }
        }
    }

    /// Updates the number of pages, keeping the offset in range.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count;
        let clamped = self.offset.target().clamp(0.0, self.max_offset());
        self.offset.set(clamped);
    }

    /// Live drag delta, used by the affordance and dot styles.
    #[must_use]
    pub fn drag(&self) -> f32 {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag != 0.0
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.offset.is_animating(now) || self.scrolled_at.is_some()
    }

    fn page_offset(&self, index: usize) -> f32 {
        index as f32 * self.page_width
    }

    fn max_offset(&self) -> f32 {
        self.page_offset(self.page_count.saturating_sub(1))
    }
}

impl PagedList for Pager {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_width(&self) -> f32 {
        self.page_width
    }

    fn scroll_to_index(&mut self, index: usize, animated: bool, now: Instant) {
        if index >= self.page_count {
            return;
        }
        let target = self.page_offset(index);
        if animated {
            self.offset.animate_to(target, SCROLL_TIMING, now);
        } else {
            self.offset.set(target);
        }
    }

    fn visible_index(&self, now: Instant) -> usize {
        if self.page_width <= 0.0 || self.page_count == 0 {
            return 0;
        }
        let page = (self.offset(now) / self.page_width).round().max(0.0) as usize;
        page.min(self.page_count - 1)
    }

    fn offset(&self, now: Instant) -> f32 {
        self.offset.value_at(now) - self.drag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn pager(count: usize, index: usize) -> Pager {
        let mut pager = Pager::new(count, index);
        pager.handle(Message::Resize { width: 400.0, index });
        pager
    }

    #[test]
    fn resize_snaps_to_the_current_page() {
        let pager = pager(5, 2);
        let now = Instant::now();
        assert_eq!(pager.offset(now), 800.0);
        assert_eq!(pager.visible_index(now), 2);
    }

    #[test]
    fn drag_follows_the_finger() {
        let now = Instant::now();
        let mut pager = pager(3, 1);
        pager.handle(Message::Drag {
            dx: 60.0,
            has_previous: true,
            has_next: true,
        });
        assert_eq!(pager.offset(now), 340.0);
        assert_eq!(pager.drag(), 60.0);
    }

    #[test]
    fn drag_resists_past_the_edges() {
        let now = Instant::now();
        let mut pager = pager(3, 0);
        pager.handle(Message::Drag {
            dx: 100.0,
            has_previous: false,
            has_next: true,
        });
        assert!((pager.offset(now) + 30.0).abs() < 1e-4);
    }

    #[test]
    fn release_then_scroll_animates_from_the_dragged_offset() {
        let t0 = Instant::now();
        let mut pager = pager(3, 1);
        pager.handle(Message::Drag {
            dx: -150.0,
            has_previous: true,
            has_next: true,
        });
        pager.handle(Message::Release(t0));
        assert_eq!(pager.offset(t0), 550.0);
        assert_eq!(pager.drag(), 0.0);

        pager.scroll_to_index(2, true, t0);
        assert!(pager.is_animating(t0 + Duration::from_millis(10)));
        assert_eq!(pager.offset(t0 + DEFAULT_TIMING), 800.0);
    }

    #[test]
    fn organic_scroll_settles_on_majority_page() {
        let t0 = Instant::now();
        let mut pager = pager(4, 0);
        pager.handle(Message::Scroll { dx: 260.0, now: t0 });
        assert_eq!(pager.handle(Message::Tick(t0 + Duration::from_millis(50))), Effect::None);
        assert_eq!(
            pager.handle(Message::Tick(t0 + PAGER_SETTLE_DELAY)),
            Effect::Settled(1)
        );
    }

    #[test]
    fn scroll_is_bounded() {
        let t0 = Instant::now();
        let mut pager = pager(2, 0);
        pager.handle(Message::Scroll { dx: 5000.0, now: t0 });
        assert_eq!(pager.offset(t0), 400.0);
        pager.handle(Message::Scroll { dx: -9000.0, now: t0 });
        assert_eq!(pager.offset(t0), 0.0);
    }

    #[test]
    fn out_of_range_scroll_is_ignored() {
        let now = Instant::now();
        let mut pager = pager(2, 1);
        pager.scroll_to_index(7, false, now);
        assert_eq!(pager.visible_index(now), 1);
    }
}
