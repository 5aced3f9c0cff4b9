// SPDX-License-Identifier: MPL-2.0
//! Paged list port definition.
//!
//! [`PagedList`] is the horizontally paginated container the preview lays
//! its slides in: pages sit edge to edge, one viewport wide each.

use std::time::Instant;

/// Port for a horizontally paged container.
pub trait PagedList {
    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Width of one page (the viewport width).
    fn page_width(&self) -> f32;

    /// Scrolls so that page `index` fills the viewport.
    ///
    /// Out-of-range indices are ignored.
    fn scroll_to_index(&mut self, index: usize, animated: bool, now: Instant);

    /// Index of the page covering most of the viewport at `now`.
    fn visible_index(&self, now: Instant) -> usize;

    /// Horizontal scroll offset at `now`, including any live drag.
    fn offset(&self, now: Instant) -> f32;
}
