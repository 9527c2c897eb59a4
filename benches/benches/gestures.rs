// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use pinchview::{
    Engine, FrameHandle, Host, KineticRun, PointerInput, Step, TouchPoint, Transform, Transition,
    ViewConfig,
};
use pinchview_view::Viewport;

/// Host that counts frames and drops everything else.
#[derive(Default)]
struct NullHost {
    frames: u64,
    live: Option<FrameHandle>,
}

impl Host for NullHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.frames += 1;
        let handle = FrameHandle(self.frames);
        self.live = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, _: FrameHandle) {
        self.live = None;
    }

    fn publish(&mut self, transform: Transform, _: Transition) {
        black_box(transform);
    }
}

fn engine() -> Engine<NullHost> {
    Engine::new(
        ViewConfig::default(),
        Rect::new(0.0, 0.0, 800.0, 600.0),
        Size::new(4000.0, 3000.0),
        NullHost::default(),
    )
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures");

    group.bench_function("drag_100_moves", |b| {
        b.iter_batched(
            engine,
            |mut engine| {
                engine.on_pointer_down(PointerInput::primary((400.0, 300.0), 0.0));
                for i in 1..=100 {
                    let x = 400.0 + f64::from(i) * 7.0;
                    engine.on_pointer_move(PointerInput::primary((x, 300.0), f64::from(i) * 16.0));
                }
                engine.on_pointer_up(PointerInput::primary((1100.0, 300.0), 1_620.0));
                black_box(engine.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pinch_100_moves", |b| {
        b.iter_batched(
            engine,
            |mut engine| {
                engine.on_touch_start(
                    &[
                        TouchPoint::new(1, (350.0, 300.0)),
                        TouchPoint::new(2, (450.0, 300.0)),
                    ],
                    0.0,
                );
                for i in 1..=100 {
                    let spread = 50.0 + f64::from(i);
                    let lift = f64::from(i) * 0.5;
                    engine.on_touch_move(
                        &[
                            TouchPoint::new(2, (400.0 + spread, 300.0 + lift)),
                            TouchPoint::new(1, (400.0 - spread, 300.0 - lift)),
                        ],
                        f64::from(i) * 16.0,
                    );
                }
                engine.on_touch_end(&[], 1_620.0);
                black_box(engine.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("kinetic_run_to_rest", |b| {
        b.iter_batched(
            || {
                Viewport::new(
                    ViewConfig::default(),
                    Size::new(800.0, 600.0),
                    Size::new(4000.0, 3000.0),
                )
            },
            |mut vp| {
                let mut run = KineticRun::new(Vec2::new(120.0, -80.0), 0.02);
                while run.step(&mut vp) == Step::Continue {}
                black_box(vp.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("engine_frames_after_fling", |b| {
        b.iter_batched(
            || {
                let mut engine = engine();
                engine.on_pointer_down(PointerInput::primary((400.0, 300.0), 0.0));
                engine.on_pointer_move(PointerInput::primary((500.0, 300.0), 16.0));
                engine.on_pointer_move(PointerInput::primary((700.0, 300.0), 32.0));
                engine.on_pointer_up(PointerInput::primary((700.0, 300.0), 40.0));
                engine
            },
            |mut engine| {
                let mut now = 48.0;
                while let Some(handle) = engine.host_mut().live.take() {
                    engine.on_frame(handle, now);
                    now += 16.0;
                }
                black_box(engine.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
