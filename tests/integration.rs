// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the preview modal.
//!
//! Loads are completed by hand: the tests read the generation the slide is
//! waiting for and feed `ImageLoaded` messages, so no runtime is needed.

use futures_util::future::{self, BoxFuture, FutureExt};
use iced_preview::application::port::{ImageLoader, LoadError, PagedList};
use iced_preview::domain::gesture::{GestureToggles, PointerEvent, PointerPhase};
use iced_preview::domain::media::{DecodedImage, RenderableSource};
use iced_preview::domain::navigation::Direction;
use iced_preview::domain::ui::{ModalAnimation, Vector};
use iced_preview::ui::preview::{Effect, Message, PreviewOptions, State};
use iced_preview::ui::widgets::SurfaceEvent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

struct SolidLoader;

impl ImageLoader for SolidLoader {
    fn load(
        &self,
        _source: RenderableSource,
    ) -> BoxFuture<'static, Result<DecodedImage, LoadError>> {
        future::ready(Ok(DecodedImage::solid(4, 4, [200, 100, 50, 255]))).boxed()
    }
}

/// Counts how often the network would have been hit.
#[derive(Default)]
struct CountingLoader {
    calls: AtomicUsize,
}

impl ImageLoader for CountingLoader {
    fn load(
        &self,
        _source: RenderableSource,
    ) -> BoxFuture<'static, Result<DecodedImage, LoadError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        future::ready(Ok(DecodedImage::solid(4, 4, [200, 100, 50, 255]))).boxed()
    }
}

const IMAGES: [&str; 3] = [
    "https://example.com/a.jpg",
    "https://example.com/b.jpg",
    "https://example.com/c.jpg",
];

fn ms(t0: Instant, millis: u64) -> Instant {
    t0 + Duration::from_millis(millis)
}

/// An open preview over three images, laid out at 400x800.
fn open_preview(options: PreviewOptions, t0: Instant) -> State {
    let mut state = State::new(options, Arc::new(SolidLoader));
    let _ = state.set_open(true, t0);
    let (effect, _) = state.handle_message(
        Message::Surface(SurfaceEvent::Resized(Vector::new(400.0, 800.0))),
        t0,
    );
    assert_eq!(effect, Effect::None);
    state
}

fn complete_load(state: &mut State, index: usize, now: Instant) {
    let generation = state.slide(index).expect("slide exists").generation();
    let _ = state.handle_message(
        Message::ImageLoaded {
            index,
            generation,
            result: Ok(DecodedImage::solid(4, 4, [0, 0, 0, 255])),
        },
        now,
    );
}

fn pointer(state: &mut State, phase: PointerPhase, x: f32, y: f32, time: Instant) -> Effect {
    let event = PointerEvent {
        id: 1,
        phase,
        position: Vector::new(x, y),
        time,
    };
    state
        .handle_message(Message::Surface(SurfaceEvent::Pointer(event)), time)
        .0
}

/// One-finger drag by `(dx, dy)` in five steps; returns the last non-empty effect.
fn drag(state: &mut State, dx: f32, dy: f32, t0: Instant) -> Effect {
    let mut effect = pointer(state, PointerPhase::Pressed, 200.0, 400.0, t0);
    for step in 1..=5u64 {
        let f = step as f32 / 5.0;
        let next = pointer(
            state,
            PointerPhase::Moved,
            200.0 + dx * f,
            400.0 + dy * f,
            ms(t0, step * 16),
        );
        if next != Effect::None {
            effect = next;
        }
    }
    let lifted = pointer(state, PointerPhase::Lifted, 200.0 + dx, 400.0 + dy, ms(t0, 100));
    if lifted != Effect::None {
        effect = lifted;
    }
    effect
}

/// Ticks every frame from `from` to `to` milliseconds; returns the non-empty effects.
fn run_frames(state: &mut State, t0: Instant, from: u64, to: u64) -> Vec<Effect> {
    (from..=to)
        .step_by(16)
        .filter_map(|millis| {
            let now = ms(t0, millis);
            let (effect, _) = state.handle_message(Message::Tick(now), now);
            (effect != Effect::None).then_some(effect)
        })
        .collect()
}

fn wheel(state: &mut State, lines_x: f32, now: Instant) {
    let event = SurfaceEvent::Wheel {
        lines: Vector::new(lines_x, 0.0),
        cursor: Vector::new(200.0, 400.0),
    };
    let _ = state.handle_message(Message::Surface(event), now);
}

fn double_tap(state: &mut State, t0: Instant) {
    for offset in [0, 150] {
        pointer(state, PointerPhase::Pressed, 200.0, 400.0, ms(t0, offset));
        pointer(state, PointerPhase::Lifted, 200.0, 400.0, ms(t0, offset + 50));
    }
}

#[test]
fn opening_starts_loading_until_the_image_arrives() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);

    assert!(state.is_open());
    assert!(state.loading().is_loading());

    complete_load(&mut state, 0, ms(t0, 20));
    assert!(state.slide(0).unwrap().load_state().is_loaded);
    assert!(!state.loading().is_loading());
}

#[test]
fn swipe_left_moves_to_the_next_image_and_resets_its_load_state() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);
    complete_load(&mut state, 0, t0);
    complete_load(&mut state, 1, t0);
    assert!(state.slide(1).unwrap().load_state().is_loaded);

    let effect = drag(&mut state, -150.0, 0.0, ms(t0, 500));

    assert_eq!(effect, Effect::IndexChanged(1));
    assert_eq!(state.index(), 1);
    let target = state.slide(1).unwrap().load_state();
    assert!(!target.is_loaded && !target.has_error);
    assert!(state.loading().is_loading());
}

#[test]
fn swipe_past_the_first_image_is_rejected() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);

    let effect = drag(&mut state, 150.0, 0.0, t0);

    assert_eq!(effect, Effect::None);
    assert_eq!(state.index(), 0);
}

#[test]
fn short_swipe_snaps_back_without_navigating() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);

    let effect = drag(&mut state, -60.0, 0.0, t0);

    assert_eq!(effect, Effect::None);
    assert_eq!(state.index(), 0);
    assert!(state.current_transform(ms(t0, 1000)).is_identity());
}

#[test]
fn vertical_fling_requests_close_then_hides_after_the_exit_transition() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);

    let effect = drag(&mut state, 0.0, 250.0, t0);
    assert_eq!(effect, Effect::CloseRequested);
    assert!(state.is_open(), "the host owns the open flag");

    let _ = state.set_open(false, ms(t0, 200));
    assert!(!state.is_open());
    assert!(state.is_visible(), "exit transition still renders");

    let (effect, _) = state.handle_message(Message::Tick(ms(t0, 600)), ms(t0, 600));
    assert_eq!(effect, Effect::Hidden);
    assert!(!state.is_visible());
}

#[test]
fn diagonal_fling_closes_without_changing_the_image() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES).start_index(1), t0);

    let effect = drag(&mut state, -150.0, 250.0, t0);

    assert_eq!(effect, Effect::CloseRequested);
    assert_eq!(state.index(), 1);
    assert_eq!(state.pager().visible_index(ms(t0, 1000)), 1);
}

#[test]
fn dismiss_is_disabled_by_its_toggle() {
    let t0 = Instant::now();
    let toggles = GestureToggles {
        swipe_to_dismiss: false,
        ..GestureToggles::default()
    };
    let mut state = open_preview(PreviewOptions::new(IMAGES).toggles(toggles), t0);

    assert_eq!(drag(&mut state, 0.0, 250.0, t0), Effect::None);
}

#[test]
fn double_tap_zooms_in_and_out() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);

    double_tap(&mut state, t0);
    assert!((state.current_transform(ms(t0, 1000)).scale - 2.0).abs() < 1e-4);

    double_tap(&mut state, ms(t0, 1000));
    let transform = state.current_transform(ms(t0, 2000));
    assert!(transform.is_identity());
}

#[test]
fn pagination_tap_navigates_and_resets_the_target() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);
    complete_load(&mut state, 0, t0);

    let (effect, _) = state.handle_message(Message::PaginationPressed(2), ms(t0, 10));

    assert_eq!(effect, Effect::IndexChanged(2));
    assert_eq!(state.index(), 2);
    assert_eq!(state.pager().visible_index(ms(t0, 1000)), 2);
    let target = state.slide(2).unwrap().load_state();
    assert!(!target.is_loaded && !target.has_error);
}

#[test]
fn wheel_scroll_settles_on_the_majority_page() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);

    wheel(&mut state, -10.0, ms(t0, 500));
    let effects = run_frames(&mut state, t0, 516, 1500);

    assert_eq!(effects, vec![Effect::IndexChanged(1)]);
    assert_eq!(state.index(), 1);
    assert_eq!(state.pager().visible_index(ms(t0, 1500)), 1);
}

#[test]
fn wheel_scroll_during_a_tap_navigation_returns_to_the_tapped_page() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);

    let (effect, _) = state.handle_message(Message::PaginationPressed(1), ms(t0, 10));
    assert_eq!(effect, Effect::IndexChanged(1));

    wheel(&mut state, -20.0, ms(t0, 100));
    let effects = run_frames(&mut state, t0, 116, 2000);

    assert!(effects.is_empty(), "unexpected effects: {effects:?}");
    assert_eq!(state.index(), 1);
    assert_eq!(state.pager().visible_index(ms(t0, 2000)), 1);
}

#[test]
fn pagination_taps_are_ignored_while_zoomed() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);

    double_tap(&mut state, t0);
    let (effect, _) = state.handle_message(Message::PaginationPressed(2), ms(t0, 1000));

    assert_eq!(effect, Effect::None);
    assert_eq!(state.index(), 0);
}

#[test]
fn affordances_share_the_bounds_checked_dispatcher() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES).start_index(2), t0);

    let (effect, _) = state.handle_message(Message::Navigate(Direction::Next), t0);
    assert_eq!(effect, Effect::None);

    let (effect, _) = state.handle_message(Message::Navigate(Direction::Previous), t0);
    assert_eq!(effect, Effect::IndexChanged(1));
}

#[test]
fn input_is_ignored_while_closed() {
    let t0 = Instant::now();
    let mut state = State::new(PreviewOptions::new(IMAGES), Arc::new(SolidLoader));

    let (effect, _) = state.handle_message(Message::Navigate(Direction::Next), t0);

    assert_eq!(effect, Effect::None);
    assert_eq!(state.index(), 0);
}

#[test]
fn stale_load_results_are_discarded() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);
    let stale = state.slide(1).unwrap().generation();

    let _ = state.handle_message(Message::PaginationPressed(1), ms(t0, 10));
    let _ = state.handle_message(
        Message::ImageLoaded {
            index: 1,
            generation: stale,
            result: Ok(DecodedImage::solid(2, 2, [1, 2, 3, 255])),
        },
        ms(t0, 20),
    );

    assert!(!state.slide(1).unwrap().load_state().is_loaded);
}

#[test]
fn revisiting_a_loaded_image_does_not_fetch_it_again() {
    let t0 = Instant::now();
    let loader = Arc::new(CountingLoader::default());
    let mut state = State::new(PreviewOptions::new(IMAGES), loader.clone());
    let _ = state.set_open(true, t0);
    complete_load(&mut state, 0, t0);
    complete_load(&mut state, 1, t0);
    assert_eq!(loader.calls.load(Ordering::SeqCst), 2);

    let (effect, _) = state.handle_message(Message::Navigate(Direction::Next), ms(t0, 10));

    assert_eq!(effect, Effect::IndexChanged(1));
    assert!(!state.slide(1).unwrap().load_state().is_loaded);
    assert_eq!(
        loader.calls.load(Ordering::SeqCst),
        3,
        "only the newly preloaded neighbour hits the loader"
    );
}

#[test]
fn failed_load_switches_to_the_fallback() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(["not a url"]), t0);
    let generation = state.slide(0).unwrap().generation();

    let _ = state.handle_message(
        Message::ImageLoaded {
            index: 0,
            generation,
            result: Err(LoadError::NotFound("not a url".into())),
        },
        t0,
    );
    assert!(state.slide(0).unwrap().load_state().has_error);
    assert!(state.loading().is_loading());

    complete_load(&mut state, 0, ms(t0, 10));
    let load = state.slide(0).unwrap().load_state();
    assert!(load.is_loaded && load.has_error);
    assert!(!state.loading().is_loading());
}

#[test]
fn close_button_resets_the_transform() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES), t0);
    double_tap(&mut state, t0);

    let (effect, _) = state.handle_message(Message::CloseRequested, ms(t0, 1000));

    assert_eq!(effect, Effect::CloseRequested);
    assert!(state.current_transform(ms(t0, 1000)).is_identity());
}

#[test]
fn slide_transitions_render_through_the_exit() {
    let t0 = Instant::now();
    let options = PreviewOptions::new(IMAGES)
        .modal_animations(ModalAnimation::SlideUp, ModalAnimation::SlideDown);
    let mut state = open_preview(options, t0);

    let entering = state.modal_frame().expect("visible while entering");
    assert_eq!(entering.offset, Vector::new(0.0, -800.0));
    assert_eq!(entering.opacity, 1.0);

    let _ = state.handle_message(Message::Tick(ms(t0, 400)), ms(t0, 400));
    let shown = state.modal_frame().expect("visible");
    assert_eq!(shown.offset, Vector::ZERO);
}

#[test]
fn replacing_images_clamps_the_index() {
    let t0 = Instant::now();
    let mut state = open_preview(PreviewOptions::new(IMAGES).start_index(2), t0);

    let _ = state.set_images(vec!["https://example.com/only.jpg".into()], ms(t0, 10));

    assert_eq!(state.image_count(), 1);
    assert_eq!(state.index(), 0);
    assert!(!state.has_next() && !state.has_previous());
}
