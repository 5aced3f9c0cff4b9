// SPDX-License-Identifier: MPL-2.0
//! Image slide sub-component.
//!
//! One slide per image reference. A slide owns its load state, its
//! transform and the presence of the image it currently shows. Loads are
//! requested through [`LoadRequest`]s tagged with a generation number;
//! completions from an older generation are discarded.
//!
//! Pixels decoded from the reference are kept across resets, so revisiting
//! a slide replays the entry transition without fetching the image again.

use super::presence;
use crate::application::port::LoadError;
use crate::domain::media::{
    resolve_source, DecodedImage, FallbackImage, ImageRef, RenderableSource,
};
use crate::domain::ui::{AnimatedTransform, ModalAnimation, TransitionFrame, Vector};
use crate::infrastructure::fallback;
use iced::widget::image::Handle;
use std::time::Instant;

/// Whether the slide's image has loaded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadState {
    pub is_loaded: bool,
    pub has_error: bool,
}

/// A decoded image ready for the renderer.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    handle: Handle,
    width: u32,
    height: u32,
}

impl LoadedImage {
    #[must_use]
    pub fn from_decoded(image: &DecodedImage) -> Self {
        Self {
            handle: Handle::from_rgba(image.width(), image.height(), image.rgba_bytes().to_vec()),
            width: image.width(),
            height: image.height(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// A load the owner must start on the slide's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub source: RenderableSource,
    /// Pixels from an earlier load of the same reference; when present the
    /// owner completes the request with them instead of calling the loader.
    pub cached: Option<DecodedImage>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Clears the load state so the image loads and enters again.
    Reset(Instant),
    /// A load finished.
    Loaded {
        generation: u64,
        result: Result<DecodedImage, LoadError>,
        now: Instant,
    },
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The image (or its fallback) is now displayed.
    Loaded,
    /// The reference failed; the next request resolves to the fallback.
    Failed(LoadError),
    /// The completion belonged to an earlier generation.
    Stale,
}

#[derive(Debug, Clone)]
pub struct State {
    reference: ImageRef,
    fallback: FallbackImage,
    image_in: ModalAnimation,
    image_out: ModalAnimation,
    load: LoadState,
    generation: u64,
    in_flight: bool,
    image: Option<LoadedImage>,
    cached: Option<DecodedImage>,
    entrance: presence::State,
    retired: Option<(LoadedImage, presence::State)>,
    transform: AnimatedTransform,
}

impl State {
    #[must_use]
    pub fn new(
        reference: ImageRef,
        fallback: FallbackImage,
        image_in: ModalAnimation,
        image_out: ModalAnimation,
    ) -> Self {
        Self {
            reference,
            fallback,
            image_in,
            image_out,
            load: LoadState::default(),
            generation: 0,
            in_flight: false,
            image: None,
            cached: None,
            entrance: presence::State::image(image_in, image_out),
            retired: None,
            transform: AnimatedTransform::default(),
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Reset(now) => {
                self.reset_load(now);
                Effect::None
            }
            Message::Loaded {
                generation,
                result,
                now,
            } => {
                if generation != self.generation {
                    return Effect::Stale;
                }
                self.in_flight = false;
                match result {
                    Ok(decoded) => {
                        self.show(LoadedImage::from_decoded(&decoded), now);
                        if !self.load.has_error {
                            self.cached = Some(decoded);
                        }
                        Effect::Loaded
                    }
                    Err(err) if !self.load.has_error => {
                        self.load.has_error = true;
                        self.generation += 1;
                        Effect::Failed(err)
                    }
                    Err(err) => {
                        // The fallback itself failed; nothing left to fetch.
                        tracing::warn!(%err, "fallback load failed, using built-in image");
                        self.show(LoadedImage::from_decoded(&fallback::built_in()), now);
                        Effect::Loaded
                    }
                }
            }
            Message::Tick(now) => {
                self.entrance.handle(presence::Message::Tick(now));
                if let Some((_, exit)) = &mut self.retired {
                    if exit.handle(presence::Message::Tick(now)) == presence::Effect::Hidden {
                        self.retired = None;
                    }
                }
                Effect::None
            }
        }
    }

    fn show(&mut self, image: LoadedImage, now: Instant) {
        self.image = Some(image);
        self.load.is_loaded = true;
        self.entrance.handle(presence::Message::SetVisible { visible: true, now });
    }

    fn reset_load(&mut self, now: Instant) {
        if let Some(image) = self.image.take() {
            let mut exit = presence::State::image(self.image_in, self.image_out);
            exit.show_immediately();
            exit.handle(presence::Message::SetVisible {
                visible: false,
                now,
            });
            self.retired = Some((image, exit));
        }
        self.load = LoadState::default();
        self.generation += 1;
        self.in_flight = false;
        self.entrance = presence::State::image(self.image_in, self.image_out);
    }

    /// Replaces the reference, resetting the load state if it changed.
    pub fn set_reference(&mut self, reference: ImageRef, now: Instant) {
        if reference != self.reference {
            self.reference = reference;
            self.cached = None;
            self.reset_load(now);
        }
    }

    /// Returns the load to start, if the slide needs one and none is running.
    ///
    /// After a failure the request resolves to the fallback, never the
    /// original reference again.
    pub fn request(&mut self) -> Option<LoadRequest> {
        if self.in_flight || self.load.is_loaded {
            return None;
        }
        self.in_flight = true;
        let cached = if self.load.has_error {
            None
        } else {
            self.cached.clone()
        };
        Some(LoadRequest {
            generation: self.generation,
            source: resolve_source(&self.reference, self.load.has_error, self.fallback),
            cached,
        })
    }

    #[must_use]
    pub fn reference(&self) -> &ImageRef {
        &self.reference
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }

    /// Entry transition of the current image.
    #[must_use]
    pub fn image_frame(&self, now: Instant, viewport: Vector) -> TransitionFrame {
        self.entrance.frame(now, viewport).unwrap_or(TransitionFrame::SHOWN)
    }

    /// Image being faded out after a reset, with its exit frame.
    #[must_use]
    pub fn retired(
        &self,
        now: Instant,
        viewport: Vector,
    ) -> Option<(&LoadedImage, TransitionFrame)> {
        let (image, exit) = self.retired.as_ref()?;
        exit.frame(now, viewport).map(|frame| (image, frame))
    }

    #[must_use]
    pub fn transform(&self) -> &AnimatedTransform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut AnimatedTransform {
        &mut self.transform
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transform.is_animating(now) || self.entrance.is_animating() || self.retired.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn slide(reference: impl Into<ImageRef>) -> State {
        State::new(
            reference.into(),
            FallbackImage::BuiltIn,
            ModalAnimation::Fade,
            ModalAnimation::Fade,
        )
    }

    fn pixel() -> DecodedImage {
        DecodedImage::solid(1, 1, [255, 0, 0, 255])
    }

    #[test]
    fn first_request_targets_the_reference() {
        let mut slide = slide(42_u64);
        let request = slide.request().expect("needs a load");
        assert_eq!(request.source, RenderableSource::Local(42));
        assert_eq!(slide.request(), None, "only one load in flight");
    }

    #[test]
    fn success_marks_loaded() {
        let t0 = Instant::now();
        let mut slide = slide(7_u64);
        let request = slide.request().expect("request");
        let effect = slide.handle(Message::Loaded {
            generation: request.generation,
            result: Ok(pixel()),
            now: t0,
        });
        assert_eq!(effect, Effect::Loaded);
        assert_eq!(
            slide.load_state(),
            LoadState {
                is_loaded: true,
                has_error: false
            }
        );
        assert!(slide.request().is_none());
    }

    #[test]
    fn failure_switches_to_fallback_once() {
        let t0 = Instant::now();
        let mut slide = slide("https://example.com/missing.png");
        let first = slide.request().expect("request");
        let effect = slide.handle(Message::Loaded {
            generation: first.generation,
            result: Err(LoadError::NotFound("missing".into())),
            now: t0,
        });
        assert!(matches!(effect, Effect::Failed(_)));
        assert!(slide.load_state().has_error);

        let retry = slide.request().expect("fallback request");
        assert_eq!(
            retry.source,
            RenderableSource::Fallback(FallbackImage::BuiltIn)
        );
        slide.handle(Message::Loaded {
            generation: retry.generation,
            result: Ok(pixel()),
            now: t0,
        });
        assert_eq!(
            slide.load_state(),
            LoadState {
                is_loaded: true,
                has_error: true
            }
        );
    }

    #[test]
    fn stale_completion_is_discarded() {
        let t0 = Instant::now();
        let mut slide = slide(1_u64);
        let old = slide.request().expect("request");
        slide.handle(Message::Reset(t0));

        let effect = slide.handle(Message::Loaded {
            generation: old.generation,
            result: Ok(pixel()),
            now: t0,
        });
        assert_eq!(effect, Effect::Stale);
        assert!(!slide.load_state().is_loaded);
    }

    #[test]
    fn reset_retires_the_shown_image() {
        let t0 = Instant::now();
        let mut slide = slide(1_u64);
        let request = slide.request().expect("request");
        slide.handle(Message::Loaded {
            generation: request.generation,
            result: Ok(pixel()),
            now: t0,
        });

        slide.handle(Message::Reset(t0));
        assert_eq!(slide.load_state(), LoadState::default());
        assert!(slide.image().is_none());
        assert!(slide.retired(t0, Vector::new(100.0, 100.0)).is_some());

        slide.handle(Message::Tick(t0 + Duration::from_millis(200)));
        assert!(slide.retired(t0, Vector::new(100.0, 100.0)).is_none());
    }

    #[test]
    fn reset_reuses_decoded_pixels() {
        let t0 = Instant::now();
        let mut slide = slide("https://example.com/a.png");
        let first = slide.request().expect("request");
        assert_eq!(first.cached, None);
        slide.handle(Message::Loaded {
            generation: first.generation,
            result: Ok(pixel()),
            now: t0,
        });

        slide.handle(Message::Reset(t0));
        let again = slide.request().expect("reset needs a load");
        assert_eq!(again.cached, Some(pixel()));
        assert!(again.generation > first.generation);

        let effect = slide.handle(Message::Loaded {
            generation: again.generation,
            result: Ok(again.cached.clone().expect("cached pixels")),
            now: t0,
        });
        assert_eq!(effect, Effect::Loaded);
        assert!(slide.load_state().is_loaded);

        slide.set_reference(ImageRef::from("https://example.com/b.png"), t0);
        assert_eq!(slide.request().expect("new reference").cached, None);
    }

    #[test]
    fn fallback_pixels_are_not_reused() {
        let t0 = Instant::now();
        let mut slide = slide("https://example.com/missing.png");
        let first = slide.request().expect("request");
        slide.handle(Message::Loaded {
            generation: first.generation,
            result: Err(LoadError::NotFound("missing".into())),
            now: t0,
        });
        let retry = slide.request().expect("fallback request");
        slide.handle(Message::Loaded {
            generation: retry.generation,
            result: Ok(pixel()),
            now: t0,
        });

        slide.handle(Message::Reset(t0));
        let again = slide.request().expect("reset needs a load");
        assert_eq!(again.cached, None);
        assert!(matches!(again.source, RenderableSource::Remote(_)));
    }

    #[test]
    fn changing_reference_resets() {
        let t0 = Instant::now();
        let mut slide = slide(1_u64);
        let generation = slide.generation();
        slide.set_reference(ImageRef::Handle(1), t0);
        assert_eq!(slide.generation(), generation);
        slide.set_reference(ImageRef::Handle(2), t0);
        assert_eq!(slide.generation(), generation + 1);
    }
}
