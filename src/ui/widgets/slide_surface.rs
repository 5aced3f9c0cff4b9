// SPDX-License-Identifier: MPL-2.0
//! Gesture surface that paints the preview's pages.
//!
//! The surface fills its bounds, draws every page that intersects the
//! viewport at the pager offset, and forwards raw pointer, wheel and resize
//! input as [`SurfaceEvent`]s. It does no gesture recognition itself.
//!
//! Anything stacked above the surface (buttons, the pagination strip) sees
//! input first; captured events never reach the recognizer.

use crate::domain::gesture::{PointerEvent, PointerId, PointerPhase};
use crate::domain::ui::Vector;
use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::mouse::{self, ScrollDelta};
use iced::widget::image::Handle;
use iced::{touch, window, Element, Event, Length, Point, Rectangle, Size, Theme};
use std::time::Instant;

/// Pointer id used for the left mouse button; fingers are offset past it.
const MOUSE_POINTER: PointerId = 0;

/// Pixels per wheel line for devices reporting pixel deltas.
const PIXELS_PER_LINE: f32 = 40.0;

/// Raw input published by the surface.
#[derive(Debug, Clone, Copy)]
pub enum SurfaceEvent {
    /// Pointer input, positioned relative to the surface.
    Pointer(PointerEvent),
    /// Wheel input in lines; `cursor` is relative to the surface.
    Wheel { lines: Vector, cursor: Vector },
    /// The surface was laid out at a new size.
    Resized(Vector),
}

/// One image drawn on a page.
#[derive(Debug, Clone)]
pub struct SurfaceImage {
    pub handle: Handle,
    pub size: (u32, u32),
    pub opacity: f32,
    /// Translation from the page center.
    pub offset: Vector,
    pub scale: f32,
}

/// Images drawn on page `index`, back to front.
#[derive(Debug, Clone)]
pub struct Page {
    pub index: usize,
    pub images: Vec<SurfaceImage>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    mouse_down: bool,
}

pub struct SlideSurface<Message> {
    pages: Vec<Page>,
    offset: f32,
    known_size: Vector,
    on_event: Box<dyn Fn(SurfaceEvent) -> Message>,
}

impl<Message> SlideSurface<Message> {
    /// Creates a surface scrolled to the pager `offset`.
    ///
    /// `known_size` is the size the owner last saw; the surface reports a
    /// [`SurfaceEvent::Resized`] whenever its bounds differ from it.
    pub fn new(
        pages: Vec<Page>,
        offset: f32,
        known_size: Vector,
        on_event: impl Fn(SurfaceEvent) -> Message + 'static,
    ) -> Self {
        Self {
            pages,
            offset,
            known_size,
            on_event: Box::new(on_event),
        }
    }

    fn publish(&self, shell: &mut Shell<'_, Message>, event: SurfaceEvent) {
        shell.publish((self.on_event)(event));
    }

    fn pointer(
        &self,
        shell: &mut Shell<'_, Message>,
        id: PointerId,
        phase: PointerPhase,
        position: Point,
        bounds: Rectangle,
    ) {
        self.publish(
            shell,
            SurfaceEvent::Pointer(PointerEvent {
                id,
                phase,
                position: Vector::new(position.x - bounds.x, position.y - bounds.y),
                time: Instant::now(),
            }),
        );
    }
}

/// Rectangle of an image fitted inside `page` ("contain"), then transformed.
fn image_bounds(page: Rectangle, image: &SurfaceImage) -> Rectangle {
    let (width, height) = (image.size.0.max(1) as f32, image.size.1.max(1) as f32);
    let fit = (page.width / width).min(page.height / height);
    let drawn = Size::new(width * fit * image.scale, height * fit * image.scale);
    let center = page.center();
    Rectangle {
        x: center.x + image.offset.x - drawn.width / 2.0,
        y: center.y + image.offset.y - drawn.height / 2.0,
        width: drawn.width,
        height: drawn.height,
    }
}

fn finger_id(finger: touch::Finger) -> PointerId {
    finger.0.wrapping_add(1)
}

impl<Message: Clone> Widget<Message, Theme, iced::Renderer> for SlideSurface<Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<SurfaceState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(SurfaceState::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();

        renderer.with_layer(bounds, |renderer| {
            for page in &self.pages {
                let page_bounds = Rectangle {
                    x: bounds.x + page.index as f32 * bounds.width - self.offset,
                    ..bounds
                };
                if page_bounds.intersection(&bounds).is_none() {
                    continue;
                }
                for image in &page.images {
                    if image.opacity <= 0.0 {
                        continue;
                    }
                    let drawn = advanced_image::Image::<Handle> {
                        handle: image.handle.clone(),
                        filter_method: advanced_image::FilterMethod::Linear,
                        rotation: iced::Radians(0.0),
                        opacity: image.opacity.clamp(0.0, 1.0),
                        snap: true,
                        border_radius: iced::border::Radius::default(),
                    };
                    renderer.draw_image(drawn, image_bounds(page_bounds, image), bounds);
                }
            }
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<SurfaceState>();

        match event {
            Event::Window(window::Event::RedrawRequested(_)) => {
                let size = Vector::new(bounds.width, bounds.height);
                if size != self.known_size {
                    self.publish(shell, SurfaceEvent::Resized(size));
                }
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.mouse_down = true;
                    self.pointer(shell, MOUSE_POINTER, PointerPhase::Pressed, position, bounds);
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if state.mouse_down => {
                self.pointer(shell, MOUSE_POINTER, PointerPhase::Moved, *position, bounds);
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if state.mouse_down => {
                state.mouse_down = false;
                let position = cursor.position().unwrap_or(bounds.center());
                self.pointer(shell, MOUSE_POINTER, PointerPhase::Lifted, position, bounds);
            }
            Event::Mouse(mouse::Event::CursorLeft) if state.mouse_down => {
                state.mouse_down = false;
                self.pointer(shell, MOUSE_POINTER, PointerPhase::Lost, bounds.center(), bounds);
            }
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if let Some(position) = cursor.position_in(bounds) {
                    let lines = match delta {
                        ScrollDelta::Lines { x, y } => Vector::new(*x, *y),
                        ScrollDelta::Pixels { x, y } => {
                            Vector::new(*x / PIXELS_PER_LINE, *y / PIXELS_PER_LINE)
                        }
                    };
                    self.publish(
                        shell,
                        SurfaceEvent::Wheel {
                            lines,
                            cursor: Vector::new(position.x, position.y),
                        },
                    );
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if bounds.contains(*position) {
                    self.pointer(shell, finger_id(*id), PointerPhase::Pressed, *position, bounds);
                    shell.capture_event();
                }
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                self.pointer(shell, finger_id(*id), PointerPhase::Moved, *position, bounds);
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => {
                self.pointer(shell, finger_id(*id), PointerPhase::Lifted, *position, bounds);
            }
            Event::Touch(touch::Event::FingerLost { id, position }) => {
                self.pointer(shell, finger_id(*id), PointerPhase::Lost, *position, bounds);
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if tree.state.downcast_ref::<SurfaceState>().mouse_down {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: Clone + 'static> From<SlideSurface<Message>> for Element<'a, Message> {
    fn from(surface: SlideSurface<Message>) -> Self {
        Element::new(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32) -> SurfaceImage {
        SurfaceImage {
            handle: Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            size: (width, height),
            opacity: 1.0,
            offset: Vector::ZERO,
            scale: 1.0,
        }
    }

    const PAGE: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 800.0,
    };

    #[test]
    fn wide_image_fits_width() {
        let bounds = image_bounds(PAGE, &image(800, 400));
        assert_eq!(bounds.width, 400.0);
        assert_eq!(bounds.height, 200.0);
        assert_eq!(bounds.y, 300.0);
    }

    #[test]
    fn transform_scales_around_center() {
        let mut zoomed = image(400, 800);
        zoomed.scale = 2.0;
        zoomed.offset = Vector::new(10.0, 0.0);
        let bounds = image_bounds(PAGE, &zoomed);
        assert_eq!(bounds.width, 800.0);
        assert_eq!(bounds.x, -190.0);
    }

    #[test]
    fn fingers_never_collide_with_the_mouse() {
        assert_ne!(finger_id(touch::Finger(0)), MOUSE_POINTER);
    }
}
