// SPDX-License-Identifier: MPL-2.0
//! Loading indicator sub-component: spinner plus blinking caption.

use crate::config::defaults::{BLINK_HALF_PERIOD, BLINK_MIN_OPACITY};
use crate::domain::ui::Repeating;
use std::time::{Duration, Instant};

/// Time after which a load is reported as slow (once).
const SLOW_LOAD_THRESHOLD: Duration = Duration::from_secs(10);

/// Spinner rotation speed in radians per second.
const SPINNER_SPEED: f32 = 6.0;

/// Loading indicator state for the current slide.
#[derive(Debug, Clone)]
pub struct State {
    started_at: Option<Instant>,
    spinner_rotation: f32,
    blink: Repeating,
    reported_slow: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            started_at: None,
            spinner_rotation: 0.0,
            blink: Repeating::new(1.0, BLINK_MIN_OPACITY, BLINK_HALF_PERIOD),
            reported_slow: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The current slide is waiting for its image. Restarts the blink cycle.
    StartLoading(Instant),
    /// The current slide finished loading (or failed over to the fallback).
    StopLoading,
    /// Frame tick.
    Tick(Instant),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Loading has been running for longer than expected.
    LoadingSlow(Duration),
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::StartLoading(now) => {
                self.started_at = Some(now);
                self.spinner_rotation = 0.0;
                self.reported_slow = false;
                self.blink.start(now);
                Effect::None
            }
            Message::StopLoading => {
                self.started_at = None;
                self.spinner_rotation = 0.0;
                self.blink.stop();
                Effect::None
            }
            Message::Tick(now) => {
                let Some(started) = self.started_at else {
                    return Effect::None;
                };
                let elapsed = now.saturating_duration_since(started);
                self.spinner_rotation =
                    (elapsed.as_secs_f32() * SPINNER_SPEED) % std::f32::consts::TAU;
                if elapsed > SLOW_LOAD_THRESHOLD && !self.reported_slow {
                    self.reported_slow = true;
                    return Effect::LoadingSlow(elapsed);
                }
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.started_at.is_some()
    }

    /// Spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Caption opacity; 1 when idle.
    #[must_use]
    pub fn blink_opacity(&self, now: Instant) -> f32 {
        self.blink.value_at(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_loading_runs_blink() {
        let t0 = Instant::now();
        let mut state = State::default();
        assert!(!state.is_loading());

        state.handle(Message::StartLoading(t0));
        assert!(state.is_loading());
        assert_eq!(state.blink_opacity(t0), 1.0);
        let trough = state.blink_opacity(t0 + BLINK_HALF_PERIOD);
        assert!((trough - BLINK_MIN_OPACITY).abs() < 1e-5);
        let back = state.blink_opacity(t0 + BLINK_HALF_PERIOD * 2);
        assert!((back - 1.0).abs() < 1e-5);
    }

    #[test]
    fn stop_loading_clears_state() {
        let t0 = Instant::now();
        let mut state = State::default();
        state.handle(Message::StartLoading(t0));
        state.handle(Message::Tick(t0 + Duration::from_millis(100)));
        state.handle(Message::StopLoading);

        assert!(!state.is_loading());
        assert_eq!(state.spinner_rotation(), 0.0);
        assert_eq!(state.blink_opacity(t0 + Duration::from_millis(700)), 1.0);
    }

    #[test]
    fn tick_advances_rotation() {
        let t0 = Instant::now();
        let mut state = State::default();
        state.handle(Message::StartLoading(t0));
        state.handle(Message::Tick(t0 + Duration::from_millis(100)));
        assert!(state.spinner_rotation() > 0.0);
    }

    #[test]
    fn slow_load_is_reported_once() {
        let t0 = Instant::now();
        let mut state = State::default();
        state.handle(Message::StartLoading(t0));
        let late = t0 + SLOW_LOAD_THRESHOLD + Duration::from_millis(1);
        assert!(matches!(
            state.handle(Message::Tick(late)),
            Effect::LoadingSlow(_)
        ));
        assert_eq!(state.handle(Message::Tick(late)), Effect::None);
    }
}
