// SPDX-License-Identifier: MPL-2.0
//! Preview rendering.
//!
//! Layers, bottom to top: backdrop, slide surface, loading indicator,
//! previous/next affordances, close button, pagination strip. Every layer
//! samples its animations at [`State::now`], so a frame reflects one
//! consistent instant.

use super::component::{Message, State};
use super::subcomponents::pagination::STRIP_ID;
use crate::application::port::PagedList;
use crate::domain::navigation::Direction;
use crate::domain::ui::newtypes::is_rest_scale;
use crate::domain::ui::style::{self as derived, DotStyle};
use crate::domain::ui::{TransitionFrame, Vector};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::widgets::{AnimatedSpinner, Page, SlideSurface, SurfaceImage};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction as ScrollDirection, Scrollbar};
use iced::widget::{button, Column, Container, Id, Row, Scrollable, Space, Stack, Text};
use iced::{Color, Element, Length};

/// Caller-supplied replacements for the default indicator and affordances.
///
/// `None` keeps the built-in element. Custom elements have no behavioral
/// contract: the loading slot is rendered while the current image loads and
/// the affordance slots are wrapped in the same navigating buttons.
#[derive(Default)]
pub struct ViewEnv<'a> {
    pub loading: Option<Element<'a, Message>>,
    pub previous: Option<Element<'a, Message>>,
    pub next: Option<Element<'a, Message>>,
}

/// Renders the preview; an empty element while hidden.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let Some(modal) = state.modal_frame() else {
        return Space::new().into();
    };
    let ViewEnv {
        loading,
        previous,
        next,
    } = env;

    let now = state.now();
    let viewport = state.viewport();
    let transform = state.current_transform(now);
    let drag = state.pager().drag();
    let max_offset = state.options().limits.max_offset();

    let backdrop = derived::backdrop_color(transform.pos_y, viewport.y, transform.scale);
    let backdrop = backdrop.with_alpha(backdrop.a * modal.opacity);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop(backdrop)),
        )
        .push(surface(state, modal));

    if state.loading().is_loading() {
        stack = stack.push(centered(loading.unwrap_or_else(|| default_loading(state))));
    }

    if is_rest_scale(transform.scale) {
        if state.has_previous() {
            let alpha = derived::previous_affordance_opacity(drag, max_offset) * modal.opacity;
            let content = previous.unwrap_or_else(|| chevron(icons::chevron_left(), alpha));
            stack = stack.push(affordance(content, alpha, Direction::Previous));
        }
        if state.has_next() {
            let alpha = derived::next_affordance_opacity(drag, max_offset) * modal.opacity;
            let content = next.unwrap_or_else(|| chevron(icons::chevron_right(), alpha));
            stack = stack.push(affordance(content, alpha, Direction::Next));
        }
    }

    stack = stack.push(close_button(modal.opacity));

    let strip_alpha = derived::pagination_opacity(transform.pos_y, transform.scale) * modal.opacity;
    if state.options().show_pagination && state.image_count() > 1 && strip_alpha > 0.0 {
        stack = stack.push(pagination_strip(state, drag, max_offset, strip_alpha));
    }

    stack.into()
}

/// Slide pages around the current index, with transforms and transitions.
fn surface(state: &State, modal: TransitionFrame) -> Element<'_, Message> {
    let now = state.now();
    let viewport = state.viewport();
    let current = state.index();
    let first = current.saturating_sub(1);
    let last = (current + 1).min(state.image_count().saturating_sub(1));

    let pages = (first..=last)
        .filter_map(|index| state.slide(index).map(|slide| (index, slide)))
        .map(|(index, slide)| {
            let transform = slide.transform().snapshot(now);
            let position = Vector::new(transform.pos_x, transform.pos_y);
            let mut images = Vec::with_capacity(2);

            if let Some((retired, frame)) = slide.retired(now, viewport) {
                images.push(SurfaceImage {
                    handle: retired.handle().clone(),
                    size: retired.size(),
                    opacity: frame.opacity * modal.opacity,
                    offset: frame.offset + modal.offset,
                    scale: 1.0,
                });
            }
            if let Some(image) = slide.image() {
                let frame = slide.image_frame(now, viewport);
                images.push(SurfaceImage {
                    handle: image.handle().clone(),
                    size: image.size(),
                    opacity: frame.opacity * modal.opacity,
                    offset: position + frame.offset + modal.offset,
                    scale: transform.scale,
                });
            }
            Page { index, images }
        })
        .collect();

    SlideSurface::new(pages, state.pager().offset(now), viewport, Message::Surface).into()
}

fn centered<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn default_loading(state: &State) -> Element<'_, Message> {
    let loading = state.loading();
    let caption = Text::new("Loading…")
        .size(typography::BODY)
        .color(Color {
            a: loading.blink_opacity(state.now()),
            ..palette::WHITE
        });

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(AnimatedSpinner::new(palette::WHITE, loading.spinner_rotation()).into_element())
        .push(caption);

    Container::new(content)
        .padding(spacing::MD)
        .style(styles::container::loading_plate)
        .into()
}

fn chevron<'a>(icon: iced::widget::Image, alpha: f32) -> Element<'a, Message> {
    icons::sized(icon, sizing::ICON_MD).opacity(alpha).into()
}

fn affordance<'a>(
    content: Element<'a, Message>,
    alpha: f32,
    direction: Direction,
) -> Element<'a, Message> {
    let control = button(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::CONTROL_SIZE))
    .height(Length::Fixed(sizing::CONTROL_SIZE))
    .padding(0)
    .style(styles::button::overlay(alpha))
    .on_press(Message::Navigate(direction));

    let align = match direction {
        Direction::Previous => Horizontal::Left,
        Direction::Next => Horizontal::Right,
    };
    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align)
        .align_y(Vertical::Center)
        .into()
}

fn close_button<'a>(alpha: f32) -> Element<'a, Message> {
    let control = button(
        Container::new(icons::sized(icons::cross(), sizing::ICON_MD).opacity(alpha))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::CONTROL_SIZE))
    .height(Length::Fixed(sizing::CONTROL_SIZE))
    .padding(0)
    .style(styles::button::overlay(alpha))
    .on_press(Message::CloseRequested);

    Container::new(control)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .into()
}

fn pagination_strip(state: &State, drag: f32, max_offset: f32, alpha: f32) -> Element<'_, Message> {
    let current = state.index();
    let dots = (0..state.image_count()).fold(
        Row::new().spacing(spacing::XS).align_y(Vertical::Center),
        |row, index| {
            let style = derived::dot_style(index == current, drag, max_offset);
            row.push(dot(index, style, alpha))
        },
    );

    let strip = Scrollable::new(Container::new(dots).padding([spacing::XXS, spacing::SM]))
        .id(Id::new(STRIP_ID))
        .direction(ScrollDirection::Horizontal(Scrollbar::hidden()))
        .height(Length::Fixed(sizing::PAGINATION_HEIGHT));

    let track = Container::new(strip)
        .max_width(sizing::PAGINATION_MAX_WIDTH)
        .align_y(Vertical::Center)
        .style(styles::container::pagination_track(alpha));

    Container::new(track)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .into()
}

fn dot<'a>(index: usize, style: DotStyle, alpha: f32) -> Element<'a, Message> {
    // Hit area stays constant while the visible dot resizes.
    let visible = button(Space::new())
        .width(Length::Fixed(style.size))
        .height(Length::Fixed(style.size))
        .padding(0)
        .style(styles::button::dot(style, alpha))
        .on_press(Message::PaginationPressed(index));

    Container::new(visible)
        .width(Length::Fixed(sizing::PAGINATION_HEIGHT - spacing::XS))
        .height(Length::Fixed(sizing::PAGINATION_HEIGHT - spacing::XS))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
