// SPDX-License-Identifier: MPL-2.0
//! Construction parameters of the preview.

use crate::domain::gesture::GestureToggles;
use crate::domain::media::{FallbackImage, ImageRef};
use crate::domain::ui::{GestureLimits, ModalAnimation};

/// Everything a caller decides about a preview up front.
///
/// The open flag is not part of the options: the preview is controlled and
/// the caller passes it on every change with
/// [`State::set_open`](super::State::set_open).
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    pub images: Vec<ImageRef>,
    /// Index shown first; out-of-range values fall back to 0.
    pub start_index: usize,
    pub toggles: GestureToggles,
    pub show_pagination: bool,
    pub fallback: FallbackImage,
    pub modal_animation_in: ModalAnimation,
    pub modal_animation_out: ModalAnimation,
    pub image_animation_in: ModalAnimation,
    pub image_animation_out: ModalAnimation,
    pub limits: GestureLimits,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            start_index: 0,
            toggles: GestureToggles::default(),
            show_pagination: true,
            fallback: FallbackImage::default(),
            modal_animation_in: ModalAnimation::default(),
            modal_animation_out: ModalAnimation::default(),
            image_animation_in: ModalAnimation::default(),
            image_animation_out: ModalAnimation::default(),
            limits: GestureLimits::default(),
        }
    }
}

impl PreviewOptions {
    /// Default options over `images`.
    #[must_use]
    pub fn new<I, R>(images: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ImageRef>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn start_index(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    #[must_use]
    pub fn toggles(mut self, toggles: GestureToggles) -> Self {
        self.toggles = toggles;
        self
    }

    #[must_use]
    pub fn show_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    #[must_use]
    pub fn fallback(mut self, fallback: FallbackImage) -> Self {
        self.fallback = fallback;
        self
    }

    /// Modal-level entry and exit transitions.
    #[must_use]
    pub fn modal_animations(
        mut self,
        animation_in: ModalAnimation,
        animation_out: ModalAnimation,
    ) -> Self {
        self.modal_animation_in = animation_in;
        self.modal_animation_out = animation_out;
        self
    }

    /// Image-level entry and exit transitions.
    #[must_use]
    pub fn image_animations(
        mut self,
        animation_in: ModalAnimation,
        animation_out: ModalAnimation,
    ) -> Self {
        self.image_animation_in = animation_in;
        self.image_animation_out = animation_out;
        self
    }

    #[must_use]
    pub fn limits(mut self, limits: GestureLimits) -> Self {
        self.limits = limits;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toggle_defaults_on() {
        let options = PreviewOptions::default();
        assert!(options.show_pagination);
        assert_eq!(options.toggles, GestureToggles::default());
        assert!(options.toggles.pan && options.toggles.pinch);
        assert_eq!(options.fallback, FallbackImage::BuiltIn);
    }

    #[test]
    fn mixed_references_are_accepted() {
        let options =
            PreviewOptions::new(["https://example.com/a.jpg", "not a url"]).start_index(1);
        assert_eq!(options.images.len(), 2);
        assert_eq!(options.start_index, 1);
    }
}
