// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the preview.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The preview's component.rs orchestrates them.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── slide      - Per-image load state, transform and image presence
//!     ├── pager      - Horizontal paging offset and drag
//!     ├── pagination - Indicator taps and the navigation guard
//!     ├── loading    - Spinner and blinking caption
//!     └── presence   - Enter/exit transitions
//! ```

pub mod loading;
pub mod pager;
pub mod pagination;
pub mod presence;
pub mod slide;
