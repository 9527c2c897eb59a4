// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use pinchview_view::{ClampMode, Transform, ViewConfig, Viewport};

fn viewport(rotation: f64) -> Viewport {
    let mut vp = Viewport::new(
        ViewConfig::default(),
        Size::new(800.0, 600.0),
        Size::new(4000.0, 3000.0),
    );
    vp.set_transform(Transform::new(1.5, 0.0, 0.0, rotation));
    vp
}

/// Translations sweeping across and past the bounds.
fn sweep(n: usize) -> Vec<Vec2> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Vec2::new((t - 0.5) * 6000.0, (0.5 - t) * 4000.0)
        })
        .collect()
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_clamp");
    let targets = sweep(1_000);

    for rotation in [0.0, 30.0] {
        group.bench_with_input(
            BenchmarkId::new("hard", rotation),
            &rotation,
            |b, &rotation| {
                let mut vp = viewport(rotation);
                b.iter(|| {
                    for &target in &targets {
                        black_box(vp.clamp_position(black_box(target), ClampMode::Hard));
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("elastic", rotation),
            &rotation,
            |b, &rotation| {
                let mut vp = viewport(rotation);
                b.iter(|| {
                    for &target in &targets {
                        black_box(vp.clamp_position(black_box(target), ClampMode::Elastic));
                    }
                    vp.reset_elastic();
                });
            },
        );
    }

    group.finish();
}

fn bench_pivot(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport_pivot");

    group.bench_function("wheel_zoom_in_out", |b| {
        let mut vp = viewport(0.0);
        let pivot = Point::new(120.0, 480.0);
        b.iter(|| {
            for step in 0..100 {
                let factor = if step % 2 == 0 { 1.1 } else { 1.0 / 1.1 };
                let t = vp.transform();
                vp.apply_around_pivot(black_box(pivot), t.scale * factor, t.rotation);
                vp.clamp_translation(ClampMode::Hard);
            }
        });
    });

    group.bench_function("pinch_rotate", |b| {
        let mut vp = viewport(0.0);
        let pivot = Point::new(400.0, 300.0);
        b.iter(|| {
            for step in 0..100 {
                let angle = f64::from(step) * 3.6;
                vp.apply_around_pivot(black_box(pivot), 1.5, angle);
                vp.clamp_translation(ClampMode::Elastic);
            }
        });
    });

    group.bench_function("container_to_image_round_trip", |b| {
        let vp = viewport(17.0);
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..100 {
                let p = Point::new(f64::from(i) * 8.0, f64::from(i) * 6.0);
                let back = vp.image_to_container(vp.container_to_image(black_box(p)));
                acc += back.x + back.y;
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_clamp, bench_pivot);
criterion_main!(benches);
