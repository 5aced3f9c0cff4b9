// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gesture pipeline.
//!
//! Measures the performance of:
//! - Recognition (raw pointer events to gestures)
//! - Interpretation (gestures to transform changes)
//! - Sampling the animated transform each frame

use criterion::{criterion_group, criterion_main, Criterion};
use iced_preview::domain::gesture::{
    pan_end, pan_update, Gesture, GestureContext, GestureToggles, PointerEvent, PointerPhase,
    Recognizer,
};
use iced_preview::domain::ui::{AnimatedTransform, GestureLimits, Vector};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// A one-finger drag of `steps` moves, pressed and lifted.
fn drag_sequence(start: Instant, steps: u32) -> Vec<PointerEvent> {
    let event = |phase, x: f32, ms: u64| PointerEvent {
        id: 1,
        phase,
        position: Vector::new(x, 300.0),
        time: start + Duration::from_millis(ms),
    };
    let mut events = vec![event(PointerPhase::Pressed, 200.0, 0)];
    events.extend(
        (1..=steps).map(|i| event(PointerPhase::Moved, 200.0 - i as f32 * 4.0, u64::from(i) * 8)),
    );
    events.push(event(PointerPhase::Lifted, 200.0 - steps as f32 * 4.0, u64::from(steps) * 8 + 8));
    events
}

fn context() -> GestureContext {
    GestureContext {
        image_index: 1,
        image_count: 3,
        limits: GestureLimits::default(),
        toggles: GestureToggles::default(),
    }
}

/// Benchmark recognition of a complete drag.
fn bench_recognize(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_pipeline");
    let events = drag_sequence(Instant::now(), 60);

    group.bench_function("recognize_drag", |b| {
        b.iter(|| {
            let mut recognizer = Recognizer::new(GestureToggles::default());
            for event in &events {
                black_box(recognizer.handle(*event));
            }
        });
    });

    group.finish();
}

/// Benchmark the full path: recognize, interpret, apply and sample.
fn bench_interpret(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_pipeline");
    let start = Instant::now();
    let events = drag_sequence(start, 60);
    let ctx = context();

    group.bench_function("drag_to_transform", |b| {
        b.iter(|| {
            let mut recognizer = Recognizer::new(GestureToggles::default());
            let mut transform = AnimatedTransform::default();
            for event in &events {
                for gesture in recognizer.handle(*event) {
                    let state = transform.snapshot(event.time);
                    let outcome = match gesture {
                        Gesture::PanUpdate(pan) => pan_update(&state, &pan, &ctx),
                        Gesture::PanEnd(pan) => pan_end(&state, &pan, &ctx),
                        _ => continue,
                    };
                    transform.apply(&outcome.changes, event.time);
                }
            }
            black_box(transform.snapshot(start + Duration::from_millis(600)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_recognize, bench_interpret);
criterion_main!(benches);
