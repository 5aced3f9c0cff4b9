// SPDX-License-Identifier: MPL-2.0
//! Full-screen image preview modal.
//!
//! Shows an ordered list of images one at a time with pinch zoom, pan,
//! double-tap zoom, swipe navigation and swipe-to-dismiss, plus pagination
//! dots and previous/next affordances.
//!
//! The host owns the open flag and forwards it with [`State::set_open`]; the
//! preview answers with [`Effect`]s (close requested, index changed, hidden).
//!
//! ```ignore
//! let preview = preview::State::new(PreviewOptions::new(urls), loader);
//! let task = preview.set_open(true, Instant::now());
//! ```

pub mod component;
pub mod options;
pub mod subcomponents;
pub mod view;

pub use component::{Effect, Message, NavigationSource, State};
pub use options::PreviewOptions;
pub use view::ViewEnv;
