// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-gesture recognition.
//!
//! Pan and pinch race: the first to cross its activation threshold owns the
//! pointers until every one of them is lifted. Double-tap only counts taps
//! during which neither activated. Time is supplied with every event, so the
//! recognizer is deterministic.

use super::{GestureToggles, PanEvent, PinchEvent};
use crate::config::defaults::{
    DOUBLE_TAP_MAX_DELAY, PAN_MIN_DISTANCE, PINCH_ACTIVATION_RATIO, TAP_MAX_DURATION,
    WHEEL_ZOOM_STEP,
};
use crate::domain::ui::Vector;
use std::time::Instant;

/// Identifies one pointer (finger or mouse button) for its press lifetime.
pub type PointerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Moved,
    Lifted,
    /// The platform cancelled the pointer; treated as a lift that never taps.
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Vector,
    pub time: Instant,
}

/// A recognized gesture step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    PanBegin,
    PanUpdate(PanEvent),
    PanEnd(PanEvent),
    PinchBegin,
    PinchUpdate(PinchEvent),
    PinchEnd(PinchEvent),
    DoubleTap { position: Vector },
}

#[derive(Debug, Clone, Copy)]
struct Pointer {
    id: PointerId,
    start: Vector,
    position: Vector,
    pressed_at: Instant,
    moved_at: Instant,
    previous: Option<(Vector, Instant)>,
    travelled: bool,
}

impl Pointer {
    fn velocity(&self) -> Vector {
        let Some((previous, at)) = self.previous else {
            return Vector::ZERO;
        };
        let dt = self.moved_at.saturating_duration_since(at).as_secs_f32();
        if dt <= 0.0 {
            return Vector::ZERO;
        }
        (self.position - previous) * (1.0 / dt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Active {
    None,
    Pan { id: PointerId, last: PanEvent },
    Pinch { initial_span: f32, last: PinchEvent },
    /// A gesture ended while pointers remain down; nothing may start.
    Blocked,
}

#[derive(Debug, Clone, Copy, Default)]
struct TapSequence {
    count: u8,
    last_lift: Option<Instant>,
    /// Set when the current press can no longer count as a tap.
    spoiled: bool,
}

/// Stateful recognizer fed with raw pointer events.
#[derive(Debug, Clone)]
pub struct Recognizer {
    toggles: GestureToggles,
    center: Vector,
    pointers: Vec<Pointer>,
    active: Active,
    taps: TapSequence,
    pinch_span: Option<f32>,
}

impl Recognizer {
    #[must_use]
    pub fn new(toggles: GestureToggles) -> Self {
        Self {
            toggles,
            center: Vector::ZERO,
            pointers: Vec::new(),
            active: Active::None,
            taps: TapSequence::default(),
            pinch_span: None,
        }
    }

    pub fn set_toggles(&mut self, toggles: GestureToggles) {
        self.toggles = toggles;
    }

    /// Sets the point pinch focal points are reported relative to.
    pub fn set_center(&mut self, center: Vector) {
        self.center = center;
    }

    /// Returns whether a pan or pinch currently owns the pointers.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.active, Active::Pan { .. } | Active::Pinch { .. })
    }

    /// Returns whether any pointer is down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Drops every pointer without emitting anything.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.active = Active::None;
        self.taps = TapSequence::default();
        self.pinch_span = None;
    }

    /// Feeds one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<Gesture> {
        match event.phase {
            PointerPhase::Pressed => self.pressed(event),
            PointerPhase::Moved => self.moved(event),
            PointerPhase::Lifted | PointerPhase::Lost => self.lifted(event),
        }
    }

    /// Translates wheel lines into a complete pinch anchored at `cursor`.
    pub fn wheel(&mut self, lines: f32, cursor: Vector) -> Vec<Gesture> {
        if !self.toggles.pinch || self.active != Active::None || lines == 0.0 || !lines.is_finite()
        {
            return Vec::new();
        }
        let event = PinchEvent {
            scale: WHEEL_ZOOM_STEP.powf(lines),
            focal: cursor - self.center,
        };
        vec![
            Gesture::PinchBegin,
            Gesture::PinchUpdate(event),
            Gesture::PinchEnd(event),
        ]
    }

    fn pressed(&mut self, event: PointerEvent) -> Vec<Gesture> {
        self.pointers.retain(|pointer| pointer.id != event.id);
        self.pointers.push(Pointer {
            id: event.id,
            start: event.position,
            position: event.position,
            pressed_at: event.time,
            moved_at: event.time,
            previous: None,
            travelled: false,
        });

        if self.pointers.len() == 1 {
            let expired = self.taps.last_lift.is_none_or(|lifted| {
                event.time.saturating_duration_since(lifted) > DOUBLE_TAP_MAX_DELAY
            });
            if expired {
                self.taps.count = 0;
            }
            self.taps.spoiled = false;
        } else {
            self.taps = TapSequence {
                spoiled: true,
                ..TapSequence::default()
            };
        }

        if self.pointers.len() == 2 && self.active == Active::None {
            self.pinch_span = Some(self.span());
        }
        Vec::new()
    }

    fn moved(&mut self, event: PointerEvent) -> Vec<Gesture> {
        let Some(pointer) = self.pointers.iter_mut().find(|p| p.id == event.id) else {
            return Vec::new();
        };
        pointer.previous = Some((pointer.position, pointer.moved_at));
        pointer.position = event.position;
        pointer.moved_at = event.time;
        if (pointer.position - pointer.start).length() > PAN_MIN_DISTANCE {
            pointer.travelled = true;
            self.taps.spoiled = true;
        }
        let pointer = *pointer;

        match self.active {
            Active::None => self.try_activate(pointer),
            Active::Pan { id, .. } if id == pointer.id => {
                let update = Self::pan_event(&pointer);
                self.active = Active::Pan { id, last: update };
                vec![Gesture::PanUpdate(update)]
            }
            Active::Pinch { initial_span, .. } if self.pointers.len() >= 2 => {
                let update = self.pinch_event(initial_span);
                self.active = Active::Pinch {
                    initial_span,
                    last: update,
                };
                vec![Gesture::PinchUpdate(update)]
            }
            _ => Vec::new(),
        }
    }

    fn try_activate(&mut self, pointer: Pointer) -> Vec<Gesture> {
        if self.pointers.len() == 1 && self.toggles.pan && pointer.travelled {
            let update = Self::pan_event(&pointer);
            self.active = Active::Pan {
                id: pointer.id,
                last: update,
            };
            return vec![Gesture::PanBegin, Gesture::PanUpdate(update)];
        }

        if self.pointers.len() >= 2 && self.toggles.pinch {
            let Some(initial_span) = self.pinch_span.filter(|span| *span > 0.0) else {
                return Vec::new();
            };
            let ratio = self.span() / initial_span;
            if (ratio - 1.0).abs() > PINCH_ACTIVATION_RATIO {
                let update = self.pinch_event(initial_span);
                self.active = Active::Pinch {
                    initial_span,
                    last: update,
                };
                return vec![Gesture::PinchBegin, Gesture::PinchUpdate(update)];
            }
        }
        Vec::new()
    }

    fn lifted(&mut self, event: PointerEvent) -> Vec<Gesture> {
        let Some(index) = self.pointers.iter().position(|p| p.id == event.id) else {
            return Vec::new();
        };
        let pointer = self.pointers.remove(index);
        let mut gestures = Vec::new();

        match self.active {
            Active::Pan { id, last } if id == pointer.id => {
                gestures.push(Gesture::PanEnd(PanEvent {
                    translation: event.position - pointer.start,
                    velocity: last.velocity,
                }));
                self.active = Active::Blocked;
            }
            Active::Pinch { last, .. } if self.pointers.len() < 2 => {
                gestures.push(Gesture::PinchEnd(last));
                self.active = Active::Blocked;
            }
            Active::None => {
                if event.phase == PointerPhase::Lifted && self.pointers.is_empty() {
                    gestures.extend(self.count_tap(&pointer, event.time));
                }
            }
            _ => {}
        }

        if self.active != Active::None {
            self.taps = TapSequence::default();
        }
        if event.phase == PointerPhase::Lost {
            self.taps = TapSequence::default();
        }
        if self.pointers.is_empty() {
            self.active = Active::None;
            self.pinch_span = None;
        }
        gestures
    }

    fn count_tap(&mut self, pointer: &Pointer, lifted_at: Instant) -> Option<Gesture> {
        let held = lifted_at.saturating_duration_since(pointer.pressed_at);
        if self.taps.spoiled || held > TAP_MAX_DURATION {
            self.taps = TapSequence::default();
            return None;
        }
        self.taps.count += 1;
        self.taps.last_lift = Some(lifted_at);
        if self.taps.count < 2 {
            return None;
        }
        self.taps = TapSequence::default();
        self.toggles
            .double_tap_to_zoom
            .then_some(Gesture::DoubleTap {
                position: pointer.position,
            })
    }

    fn pan_event(pointer: &Pointer) -> PanEvent {
        PanEvent {
            translation: pointer.position - pointer.start,
            velocity: pointer.velocity(),
        }
    }

    fn span(&self) -> f32 {
        match self.pointers.as_slice() {
            [a, b, ..] => (a.position - b.position).length(),
            _ => 0.0,
        }
    }

    fn pinch_event(&self, initial_span: f32) -> PinchEvent {
        let (scale, midpoint) = match self.pointers.as_slice() {
            [a, b, ..] => (
                self.span() / initial_span,
                (a.position + b.position) * 0.5,
            ),
            _ => (1.0, self.center),
        };
        PinchEvent {
            scale,
            focal: midpoint - self.center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Driver {
        recognizer: Recognizer,
        start: Instant,
    }

    impl Driver {
        fn new(toggles: GestureToggles) -> Self {
            Self {
                recognizer: Recognizer::new(toggles),
                start: Instant::now(),
            }
        }

        fn send(
            &mut self,
            id: PointerId,
            phase: PointerPhase,
            x: f32,
            y: f32,
            ms: u64,
        ) -> Vec<Gesture> {
            self.recognizer.handle(PointerEvent {
                id,
                phase,
                position: Vector::new(x, y),
                time: self.start + Duration::from_millis(ms),
            })
        }
    }

    #[test]
    fn pan_activates_past_threshold() {
        let mut d = Driver::new(GestureToggles::default());
        d.send(1, PointerPhase::Pressed, 0.0, 0.0, 0);
        assert!(d.send(1, PointerPhase::Moved, 5.0, 0.0, 10).is_empty());

        let began = d.send(1, PointerPhase::Moved, 20.0, 0.0, 20);
        assert_eq!(began.first(), Some(&Gesture::PanBegin));
        assert!(d.recognizer.is_active());

        let ended = d.send(1, PointerPhase::Lifted, 150.0, 0.0, 40);
        match ended.as_slice() {
            [Gesture::PanEnd(event)] => assert_eq!(event.translation, Vector::new(150.0, 0.0)),
            other => panic!("unexpected {other:?}"),
        }
        assert!(!d.recognizer.is_active());
    }

    #[test]
    fn pan_velocity_uses_last_two_samples() {
        let mut d = Driver::new(GestureToggles::default());
        d.send(1, PointerPhase::Pressed, 0.0, 0.0, 0);
        d.send(1, PointerPhase::Moved, 20.0, 0.0, 100);
        let update = d.send(1, PointerPhase::Moved, 40.0, 0.0, 200);
        match update.as_slice() {
            [Gesture::PanUpdate(event)] => assert!((event.velocity.x - 200.0).abs() < 1e-2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn pinch_wins_when_spread_first() {
        let mut d = Driver::new(GestureToggles::default());
        d.send(1, PointerPhase::Pressed, 100.0, 100.0, 0);
        d.send(2, PointerPhase::Pressed, 200.0, 100.0, 5);

        let began = d.send(2, PointerPhase::Moved, 250.0, 100.0, 20);
        assert_eq!(began.first(), Some(&Gesture::PinchBegin));
        match began.get(1) {
            Some(Gesture::PinchUpdate(event)) => assert!((event.scale - 1.5).abs() < 1e-5),
            other => panic!("unexpected {other:?}"),
        }

        let ended = d.send(1, PointerPhase::Lifted, 100.0, 100.0, 40);
        assert!(matches!(ended.as_slice(), [Gesture::PinchEnd(_)]));

        // The remaining finger cannot start a pan.
        assert!(d.send(2, PointerPhase::Moved, 400.0, 100.0, 50).is_empty());
        d.send(2, PointerPhase::Lifted, 400.0, 100.0, 60);
        assert!(!d.recognizer.is_active());
    }

    #[test]
    fn disabled_pan_does_not_block_pinch() {
        let toggles = GestureToggles {
            pan: false,
            ..GestureToggles::default()
        };
        let mut d = Driver::new(toggles);
        d.send(1, PointerPhase::Pressed, 100.0, 100.0, 0);
        assert!(d.send(1, PointerPhase::Moved, 140.0, 100.0, 10).is_empty());
        d.send(2, PointerPhase::Pressed, 300.0, 100.0, 20);
        let began = d.send(2, PointerPhase::Moved, 400.0, 100.0, 30);
        assert_eq!(began.first(), Some(&Gesture::PinchBegin));
    }

    #[test]
    fn double_tap_needs_two_quick_taps() {
        let mut d = Driver::new(GestureToggles::default());
        d.send(1, PointerPhase::Pressed, 10.0, 10.0, 0);
        assert!(d.send(1, PointerPhase::Lifted, 10.0, 10.0, 50).is_empty());
        d.send(1, PointerPhase::Pressed, 12.0, 10.0, 200);
        let tapped = d.send(1, PointerPhase::Lifted, 12.0, 10.0, 250);
        assert!(matches!(tapped.as_slice(), [Gesture::DoubleTap { .. }]));

        // A third tap starts a new sequence.
        d.send(1, PointerPhase::Pressed, 12.0, 10.0, 300);
        assert!(d.send(1, PointerPhase::Lifted, 12.0, 10.0, 320).is_empty());
    }

    #[test]
    fn slow_second_tap_does_not_count() {
        let mut d = Driver::new(GestureToggles::default());
        d.send(1, PointerPhase::Pressed, 10.0, 10.0, 0);
        d.send(1, PointerPhase::Lifted, 10.0, 10.0, 50);
        d.send(1, PointerPhase::Pressed, 10.0, 10.0, 400);
        assert!(d.send(1, PointerPhase::Lifted, 10.0, 10.0, 450).is_empty());
    }

    #[test]
    fn lost_pointer_ends_pan() {
        let mut d = Driver::new(GestureToggles::default());
        d.send(1, PointerPhase::Pressed, 0.0, 0.0, 0);
        d.send(1, PointerPhase::Moved, 0.0, 50.0, 10);
        let ended = d.send(1, PointerPhase::Lost, 0.0, 60.0, 20);
        assert!(matches!(ended.as_slice(), [Gesture::PanEnd(_)]));
    }

    #[test]
    fn wheel_emits_full_pinch() {
        let mut recognizer = Recognizer::new(GestureToggles::default());
        recognizer.set_center(Vector::new(100.0, 100.0));
        let gestures = recognizer.wheel(1.0, Vector::new(150.0, 100.0));
        assert_eq!(gestures.len(), 3);
        match gestures[2] {
            Gesture::PinchEnd(event) => {
                assert!((event.scale - WHEEL_ZOOM_STEP).abs() < 1e-6);
                assert_eq!(event.focal, Vector::new(50.0, 0.0));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
