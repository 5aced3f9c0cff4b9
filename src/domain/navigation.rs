// SPDX-License-Identifier: MPL-2.0
//! Navigation index over the preview's image list.
//!
//! Index changes are bounds-checked before they happen: a step past either
//! end returns `None` instead of clamping.

use crate::config::defaults::NAVIGATION_GUARD;
use std::time::Instant;

/// Step direction through the image list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Current image index within `[0, count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationIndex {
    index: usize,
    count: usize,
}

impl NavigationIndex {
    /// Creates an index, falling back to 0 when `start` is out of range.
    #[must_use]
    pub fn new(start: usize, count: usize) -> Self {
        let index = if start < count { start } else { 0 };
        Self { index, count }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn has_previous(self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn has_next(self) -> bool {
        self.index + 1 < self.count
    }

    /// Index one step away, if it exists.
    #[must_use]
    pub fn peek(self, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Previous => self.index.checked_sub(1),
            Direction::Next => Some(self.index + 1).filter(|next| *next < self.count),
        }
    }

    /// Moves one step; returns the new index or `None` at the boundary.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        let target = self.peek(direction)?;
        self.index = target;
        Some(target)
    }

    /// Jumps to `index`; returns `None` when out of range or unchanged.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.count || index == self.index {
            return None;
        }
        self.index = index;
        Some(index)
    }

    /// Adopts a new image count, keeping the index when it is still valid.
    pub fn resize(&mut self, count: usize) {
        self.count = count;
        if self.index >= count {
            self.index = count.saturating_sub(1);
        }
    }
}

/// Window after a programmatic navigation during which organic pager
/// reports must not change the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationGuard {
    armed_until: Option<Instant>,
}

impl NavigationGuard {
    pub fn arm(&mut self, now: Instant) {
        self.armed_until = Some(now + NAVIGATION_GUARD);
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.armed_until.is_some_and(|until| now < until)
    }

    /// Clears the guard once it has expired.
    pub fn expire(&mut self, now: Instant) {
        if !self.is_active(now) {
            self.armed_until = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn steps_stop_at_boundaries() {
        let mut nav = NavigationIndex::new(0, 3);
        assert_eq!(nav.step(Direction::Previous), None);
        assert_eq!(nav.step(Direction::Next), Some(1));
        assert_eq!(nav.step(Direction::Next), Some(2));
        assert_eq!(nav.step(Direction::Next), None);
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn out_of_range_start_falls_back_to_zero() {
        assert_eq!(NavigationIndex::new(5, 3).index(), 0);
        assert_eq!(NavigationIndex::new(2, 3).index(), 2);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut nav = NavigationIndex::new(0, 3);
        assert_eq!(nav.select(3), None);
        assert_eq!(nav.select(2), Some(2));
        assert_eq!(nav.select(2), None);
    }

    #[test]
    fn guard_expires_after_window() {
        let now = Instant::now();
        let mut guard = NavigationGuard::default();
        assert!(!guard.is_active(now));
        guard.arm(now);
        assert!(guard.is_active(now + Duration::from_millis(299)));
        assert!(!guard.is_active(now + Duration::from_millis(300)));
    }
}
