// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod slide_surface;

pub use animated_spinner::AnimatedSpinner;
pub use slide_surface::{Page, SlideSurface, SurfaceEvent, SurfaceImage};
