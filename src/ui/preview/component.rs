// SPDX-License-Identifier: MPL-2.0
//! Preview modal component encapsulating state and update logic.
//!
//! The component is controlled: the caller owns the open flag and forwards it
//! with [`State::set_open`]; closing is reported as [`Effect::CloseRequested`].
//!
//! Gestures never touch component state directly. The recognizer turns raw
//! pointer input into gesture events, the pure interpreters turn those into
//! field changes plus intents, and [`State::handle_message`] is the single
//! place where intents become index, load-state and position changes. All of
//! that happens inside one update, so no frame renders a half-applied
//! navigation.

use super::options::PreviewOptions;
use super::subcomponents::pager::{self, Pager};
use super::subcomponents::{loading, pagination, presence, slide};
use super::view::{self, ViewEnv};
use crate::application::port::{ImageLoader, LoadError, PagedList};
use crate::domain::gesture::{
    double_tap, pan_end, pan_update, pinch_end, pinch_update, Gesture, GestureContext,
    GestureOutcome, Intent, Recognizer,
};
use crate::domain::media::{DecodedImage, ImageRef};
use crate::domain::navigation::{Direction, NavigationIndex};
use crate::domain::ui::newtypes::{is_rest_scale, is_zoomed};
use crate::domain::ui::{TransformState, TransitionFrame, Vector};
use crate::ui::widgets::SurfaceEvent;
use iced::keyboard::{self, key::Named, Key};
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Content units scrolled per horizontal wheel line.
const WHEEL_SCROLL_STEP: f32 = 40.0;

/// Slides kept loaded on each side of the current one.
const PRELOAD_RADIUS: usize = 1;

/// Messages handled by the preview.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw input from the gesture surface.
    Surface(SurfaceEvent),
    /// Animation frame.
    Tick(Instant),
    /// A slide's image finished loading.
    ImageLoaded {
        index: usize,
        generation: u64,
        result: Result<DecodedImage, LoadError>,
    },
    /// A pagination indicator was tapped.
    PaginationPressed(usize),
    /// Previous/next affordance clicked.
    Navigate(Direction),
    /// Close button clicked.
    CloseRequested,
    /// Window events routed by the host (keyboard shortcuts).
    RawEvent {
        window: window::Id,
        event: iced::Event,
    },
}

/// Effects the host must react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user asked to close the preview; the host should clear its open flag.
    CloseRequested,
    /// The current image changed.
    IndexChanged(usize),
    /// The exit transition finished.
    Hidden,
}

impl Effect {
    /// Folds effects raised by one event; a close request is never overwritten.
    fn merge(self, next: Effect) -> Effect {
        match (self, next) {
            (Effect::CloseRequested, _) | (_, Effect::None) => self,
            _ => next,
        }
    }
}

/// What caused a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationSource {
    Swipe,
    Pagination,
    Affordance,
    Keyboard,
    /// The pager settled on a page after organic scrolling.
    Pager,
}

/// Complete preview state.
pub struct State {
    options: PreviewOptions,
    loader: Arc<dyn ImageLoader>,
    navigation: NavigationIndex,
    slides: Vec<slide::State>,
    recognizer: Recognizer,
    pager: Pager,
    pagination: pagination::State,
    loading: loading::State,
    presence: presence::State,
    viewport: Vector,
    now: Instant,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("index", &self.navigation.index())
            .field("count", &self.navigation.count())
            .field("presence", &self.presence.presence())
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates a closed preview.
    #[must_use]
    pub fn new(options: PreviewOptions, loader: Arc<dyn ImageLoader>) -> Self {
        let count = options.images.len();
        let navigation = NavigationIndex::new(options.start_index, count);
        if count > 0 && options.start_index >= count {
            tracing::warn!(
                start_index = options.start_index,
                count,
                "start index out of range, showing the first image"
            );
        }

        let slides = options
            .images
            .iter()
            .cloned()
            .map(|reference| Self::new_slide(&options, reference))
            .collect();

        Self {
            recognizer: Recognizer::new(options.toggles),
            pager: Pager::new(count, navigation.index()),
            pagination: pagination::State::default(),
            loading: loading::State::default(),
            presence: presence::State::modal(
                options.modal_animation_in,
                options.modal_animation_out,
            ),
            navigation,
            slides,
            loader,
            options,
            viewport: Vector::ZERO,
            now: Instant::now(),
        }
    }

    fn new_slide(options: &PreviewOptions, reference: ImageRef) -> slide::State {
        slide::State::new(
            reference,
            options.fallback,
            options.image_animation_in,
            options.image_animation_out,
        )
    }

    // =========================================================================
    // Controlled inputs
    // =========================================================================

    /// Applies the caller's open flag. Edges start the entry/exit transitions.
    pub fn set_open(&mut self, is_open: bool, now: Instant) -> Task<Message> {
        self.now = now;
        if is_open == self.is_open() {
            return Task::none();
        }
        self.presence
            .handle(presence::Message::SetVisible { visible: is_open, now });
        self.recognizer.reset();

        if is_open {
            tracing::info!(
                index = self.navigation.index(),
                count = self.navigation.count(),
                "preview opened"
            );
            self.sync_loading(now);
            self.request_loads()
        } else {
            tracing::info!("preview closing");
            self.loading.handle(loading::Message::StopLoading);
            Task::none()
        }
    }

    /// Replaces the image list. Slides whose reference changed reload.
    pub fn set_images(&mut self, images: Vec<ImageRef>, now: Instant) -> Task<Message> {
        self.now = now;
        self.slides.truncate(images.len());
        for (index, reference) in images.iter().enumerate() {
            match self.slides.get_mut(index) {
                Some(slide) => slide.set_reference(reference.clone(), now),
                None => self.slides.push(Self::new_slide(&self.options, reference.clone())),
            }
        }
        self.options.images = images;

        let count = self.slides.len();
        self.navigation.resize(count);
        self.pager.set_page_count(count);
        self.pager.handle(pager::Message::Resize {
            width: self.viewport.x,
            index: self.navigation.index(),
        });
        self.sync_loading(now);
        self.request_loads()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether the caller's open flag is set (entering or shown).
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(
            self.presence.presence(),
            presence::Presence::Entering { .. } | presence::Presence::Shown
        )
    }

    /// Whether anything is rendered, including a running exit transition.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.presence.is_visible()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.navigation.index()
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.navigation.count()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.navigation.has_previous()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.navigation.has_next()
    }

    #[must_use]
    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&slide::State> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn slides(&self) -> &[slide::State] {
        &self.slides
    }

    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    #[must_use]
    pub fn loading(&self) -> &loading::State {
        &self.loading
    }

    /// Time of the last processed message; the view samples animations here.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    #[must_use]
    pub fn viewport(&self) -> Vector {
        self.viewport
    }

    /// Transform of the current slide at `now`.
    #[must_use]
    pub fn current_transform(&self, now: Instant) -> TransformState {
        self.slides
            .get(self.navigation.index())
            .map(|slide| slide.transform().snapshot(now))
            .unwrap_or_default()
    }

    /// Modal-level transition frame; `None` when hidden.
    #[must_use]
    pub fn modal_frame(&self) -> Option<TransitionFrame> {
        self.presence.frame(self.now, self.viewport)
    }

    fn gesture_context(&self) -> GestureContext {
        GestureContext {
            image_index: self.navigation.index(),
            image_count: self.navigation.count(),
            limits: self.options.limits,
            toggles: self.options.toggles,
        }
    }

    fn needs_frames(&self) -> bool {
        let now = self.now;
        self.presence.is_animating()
            || self.loading.is_loading()
            || self.pager.is_animating(now)
            || self.slides.iter().any(|slide| slide.is_animating(now))
    }

    // =========================================================================
    // Subscription & View
    // =========================================================================

    /// Frame ticks while anything animates, loads or transitions.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_visible() && self.needs_frames() {
            window::frames().map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        view::view(self, env)
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Handles one message. `now` is the host's clock at dispatch time.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> (Effect, Task<Message>) {
        self.now = now;
        match message {
            Message::Tick(frame) => self.handle_tick(frame.max(now)),
            Message::ImageLoaded {
                index,
                generation,
                result,
            } => self.handle_loaded(index, generation, result, now),
            _ if !self.is_open() => (Effect::None, Task::none()),
            Message::Surface(event) => self.handle_surface(event, now),
            Message::PaginationPressed(index) => {
                let zoomed = is_zoomed(self.current_transform(now).scale);
                match self.pagination.handle(pagination::Message::Pressed { index, zoomed, now }) {
                    pagination::Effect::Navigate(target) => {
                        self.navigate_to(target, NavigationSource::Pagination, now)
                    }
                    _ => (Effect::None, Task::none()),
                }
            }
            Message::Navigate(direction) => self.step(direction, NavigationSource::Affordance, now),
            Message::CloseRequested => self.request_close(now),
            Message::RawEvent { event, .. } => self.handle_raw_event(&event, now),
        }
    }

    fn handle_tick(&mut self, now: Instant) -> (Effect, Task<Message>) {
        self.now = now;
        let mut effect = Effect::None;
        let mut tasks = Vec::new();

        for slide in &mut self.slides {
            slide.handle(slide::Message::Tick(now));
        }
        if let loading::Effect::LoadingSlow(elapsed) =
            self.loading.handle(loading::Message::Tick(now))
        {
            tracing::warn!(
                index = self.navigation.index(),
                ?elapsed,
                "image is taking long to load"
            );
        }
        self.pagination.handle(pagination::Message::Tick(now));

        if let pager::Effect::Settled(index) = self.pager.handle(pager::Message::Tick(now)) {
            match self
                .pagination
                .handle(pagination::Message::PagerSettled { index, now })
            {
                pagination::Effect::Navigate(target) => {
                    let (navigation, task) = self.navigate_to(target, NavigationSource::Pager, now);
                    effect = navigation;
                    tasks.push(task);
                }
                pagination::Effect::Restore => {
                    let current = self.navigation.index();
                    tracing::debug!(
                        settled = index,
                        current,
                        "restoring pager to the current page"
                    );
                    self.pager.scroll_to_index(current, true, now);
                    tasks.push(pagination::reveal(current, self.navigation.count()));
                }
                pagination::Effect::None => {}
            }
        }

        if self.presence.handle(presence::Message::Tick(now)) == presence::Effect::Hidden {
            tracing::info!("preview hidden");
            self.recognizer.reset();
            self.loading.handle(loading::Message::StopLoading);
            if effect == Effect::None {
                effect = Effect::Hidden;
            }
        }

        (effect, Task::batch(tasks))
    }

    fn handle_loaded(
        &mut self,
        index: usize,
        generation: u64,
        result: Result<DecodedImage, LoadError>,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        let Some(slide) = self.slides.get_mut(index) else {
            tracing::debug!(index, "load finished for a removed slide");
            return (Effect::None, Task::none());
        };

        match slide.handle(slide::Message::Loaded {
            generation,
            result,
            now,
        }) {
            slide::Effect::Stale => {
                tracing::debug!(index, generation, "discarding stale image load");
            }
            slide::Effect::Failed(err) => {
                tracing::warn!(
                    index,
                    image = %slide.reference(),
                    %err,
                    "image failed to load, showing fallback"
                );
            }
            slide::Effect::Loaded => tracing::debug!(index, "image loaded"),
            slide::Effect::None => {}
        }

        self.sync_loading(now);
        (Effect::None, self.request_loads())
    }

    fn handle_surface(&mut self, event: SurfaceEvent, now: Instant) -> (Effect, Task<Message>) {
        match event {
            SurfaceEvent::Resized(size) => {
                tracing::debug!(width = size.x, height = size.y, "preview resized");
                self.viewport = size;
                self.recognizer.set_center(size * 0.5);
                self.pager.handle(pager::Message::Resize {
                    width: size.x,
                    index: self.navigation.index(),
                });
                (Effect::None, Task::none())
            }
            SurfaceEvent::Pointer(pointer) => {
                let gestures = self.recognizer.handle(pointer);
                self.apply_gestures(gestures, now)
            }
            SurfaceEvent::Wheel { lines, cursor } => {
                if lines.x.abs() > lines.y.abs() {
                    let zoomed = is_zoomed(self.current_transform(now).scale);
                    if !zoomed && !self.recognizer.is_active() {
                        self.pager.handle(pager::Message::Scroll {
                            dx: -lines.x * WHEEL_SCROLL_STEP,
                            now,
                        });
                    }
                    return (Effect::None, Task::none());
                }
                let gestures = self.recognizer.wheel(lines.y, cursor);
                self.apply_gestures(gestures, now)
            }
        }
    }

    fn handle_raw_event(&mut self, event: &iced::Event, now: Instant) -> (Effect, Task<Message>) {
        let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return (Effect::None, Task::none());
        };
        match key {
            Key::Named(Named::Escape) => self.request_close(now),
            Key::Named(Named::ArrowLeft) => {
                self.step(Direction::Previous, NavigationSource::Keyboard, now)
            }
            Key::Named(Named::ArrowRight) => {
                self.step(Direction::Next, NavigationSource::Keyboard, now)
            }
            _ => (Effect::None, Task::none()),
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    fn apply_gestures(&mut self, gestures: Vec<Gesture>, now: Instant) -> (Effect, Task<Message>) {
        let mut effect = Effect::None;
        let mut tasks = Vec::new();
        for gesture in gestures {
            let (next, task) = self.apply_gesture(gesture, now);
            effect = effect.merge(next);
            tasks.push(task);
        }
        (effect, Task::batch(tasks))
    }

    fn apply_gesture(&mut self, gesture: Gesture, now: Instant) -> (Effect, Task<Message>) {
        let ctx = self.gesture_context();
        let state = self.current_transform(now);

        let outcome = match gesture {
            Gesture::PanBegin => {
                tracing::debug!(index = ctx.image_index, scale = state.scale, "pan began");
                return (Effect::None, Task::none());
            }
            Gesture::PanUpdate(event) => {
                if is_rest_scale(state.scale) {
                    self.pager.handle(pager::Message::Drag {
                        dx: event.translation.x,
                        has_previous: ctx.has_previous(),
                        has_next: ctx.has_next(),
                    });
                }
                pan_update(&state, &event, &ctx)
            }
            Gesture::PanEnd(event) => {
                let outcome = pan_end(&state, &event, &ctx);
                if self.pager.is_dragging() {
                    self.pager.handle(pager::Message::Release(now));
                    let navigates = outcome.has_intent(Intent::SwipeLeft)
                        || outcome.has_intent(Intent::SwipeRight);
                    if !navigates {
                        self.pager.scroll_to_index(ctx.image_index, true, now);
                    }
                }
                outcome
            }
            Gesture::PinchBegin => {
                tracing::debug!(index = ctx.image_index, scale = state.scale, "pinch began");
                return (Effect::None, Task::none());
            }
            Gesture::PinchUpdate(event) => pinch_update(&state, &event, &ctx),
            Gesture::PinchEnd(event) => pinch_end(&state, &event, &ctx),
            Gesture::DoubleTap { position } => {
                tracing::debug!(index = ctx.image_index, ?position, "double tap");
                double_tap(&state, &ctx)
            }
        };

        self.apply_outcome(outcome, now)
    }

    /// Applies field changes to the current slide, then dispatches intents.
    fn apply_outcome(&mut self, outcome: GestureOutcome, now: Instant) -> (Effect, Task<Message>) {
        if let Some(slide) = self.slides.get_mut(self.navigation.index()) {
            slide.transform_mut().apply(&outcome.changes, now);
        }

        let mut effect = Effect::None;
        let mut tasks = Vec::new();
        for intent in outcome.intents {
            let (next, task) = self.dispatch(intent, now);
            effect = effect.merge(next);
            tasks.push(task);
        }
        (effect, Task::batch(tasks))
    }

    fn dispatch(&mut self, intent: Intent, now: Instant) -> (Effect, Task<Message>) {
        tracing::debug!(?intent, index = self.navigation.index(), "dispatching intent");
        match intent {
            Intent::SwipeLeft => self.step(Direction::Previous, NavigationSource::Swipe, now),
            Intent::SwipeRight => self.step(Direction::Next, NavigationSource::Swipe, now),
            Intent::Dismiss => {
                tracing::info!(index = self.navigation.index(), "preview dismissed by swipe");
                self.recognizer.reset();
                (Effect::CloseRequested, Task::none())
            }
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn step(
        &mut self,
        direction: Direction,
        source: NavigationSource,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        match self.navigation.peek(direction) {
            Some(target) => self.navigate_to(target, source, now),
            None if source == NavigationSource::Swipe => {
                tracing::warn!(
                    ?direction,
                    index = self.navigation.index(),
                    count = self.navigation.count(),
                    "rejected out-of-range navigation"
                );
                (Effect::None, Task::none())
            }
            None => (Effect::None, Task::none()),
        }
    }

    /// Moves to `target`: resets its load state, commits the index, resets
    /// positions and scrolls both the pager and the indicator strip.
    fn navigate_to(
        &mut self,
        target: usize,
        source: NavigationSource,
        now: Instant,
    ) -> (Effect, Task<Message>) {
        let count = self.navigation.count();
        let previous = self.navigation.index();
        if target >= count {
            tracing::warn!(target, count, ?source, "rejected out-of-range navigation");
            return (Effect::None, Task::none());
        }
        if target == previous {
            return (Effect::None, pagination::reveal(target, count));
        }

        self.slides[target].handle(slide::Message::Reset(now));
        self.navigation.select(target);
        self.slides[previous].transform_mut().reset();
        self.slides[target].transform_mut().reset();

        if source != NavigationSource::Pager {
            self.pager.scroll_to_index(target, true, now);
            self.pagination.handle(pagination::Message::Programmatic(now));
        }

        self.loading.handle(loading::Message::StopLoading);
        self.sync_loading(now);

        tracing::info!(from = previous, to = target, ?source, "navigated");
        let tasks = Task::batch([pagination::reveal(target, count), self.request_loads()]);
        (Effect::IndexChanged(target), tasks)
    }

    fn request_close(&mut self, now: Instant) -> (Effect, Task<Message>) {
        let index = self.navigation.index();
        if let Some(slide) = self.slides.get_mut(index) {
            slide.transform_mut().reset();
        }
        self.recognizer.reset();
        self.now = now;
        tracing::info!(index, "close requested");
        (Effect::CloseRequested, Task::none())
    }

    // =========================================================================
    // Loading
    // =========================================================================

    fn sync_loading(&mut self, now: Instant) {
        let waiting = self.is_open()
            && self
                .slides
                .get(self.navigation.index())
                .is_some_and(|slide| !slide.load_state().is_loaded);
        match (waiting, self.loading.is_loading()) {
            (true, false) => {
                self.loading.handle(loading::Message::StartLoading(now));
            }
            (false, true) => {
                self.loading.handle(loading::Message::StopLoading);
            }
            _ => {}
        }
    }

    /// Starts loads for the current slide and its neighbours.
    fn request_loads(&mut self) -> Task<Message> {
        if !self.is_open() || self.slides.is_empty() {
            return Task::none();
        }
        let index = self.navigation.index();
        let start = index.saturating_sub(PRELOAD_RADIUS);
        let end = (index + PRELOAD_RADIUS + 1).min(self.slides.len());

        let requests: Vec<_> = (start..end)
            .filter_map(|slide_index| {
                self.slides[slide_index]
                    .request()
                    .map(|request| (slide_index, request))
            })
            .collect();

        Task::batch(
            requests
                .into_iter()
                .map(|(slide_index, request)| self.load_task(slide_index, request)),
        )
    }

    fn load_task(&self, index: usize, request: slide::LoadRequest) -> Task<Message> {
        tracing::debug!(
            index,
            generation = request.generation,
            source = ?request.source,
            cached = request.cached.is_some(),
            "loading image"
        );
        let generation = request.generation;
        if let Some(image) = request.cached {
            return Task::done(Message::ImageLoaded {
                index,
                generation,
                result: Ok(image),
            });
        }
        Task::perform(self.loader.load(request.source), move |result| {
            Message::ImageLoaded {
                index,
                generation,
                result,
            }
        })
    }
}
