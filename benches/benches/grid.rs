// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Rect;
use minkowski_geom::{AffineMap, Vec2};
use minkowski_grid::{format_tick, plan_grid};

const SCREEN: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

/// Inverse of a centered, y-flipped viewport at the given zoom.
fn screen_to_world(zoom: f64) -> AffineMap {
    let scale = 7.0 * zoom;
    AffineMap::scale_non_uniform(scale, -scale)
        .then_translate(Vec2::new(400.0, 300.0))
        .invert()
        .unwrap()
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/plan");

    // The step search is closed form, so planning should be flat across zoom
    // levels rather than scaling with the number of rulings.
    for zoom in [0.05, 1.0, 40.0] {
        let inverse = screen_to_world(zoom);
        group.bench_with_input(
            BenchmarkId::from_parameter(zoom),
            &inverse,
            |b, &inverse| {
                b.iter(|| plan_grid(black_box(inverse), black_box(SCREEN), 75.0));
            },
        );
    }

    group.finish();
}

fn bench_labels(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/labels");

    let plan = plan_grid(screen_to_world(1.0), SCREEN, 75.0);
    let values: Vec<f64> = plan.space.ticks().map(|tick| tick.value).collect();

    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("format", |b| {
        b.iter(|| {
            for &value in &values {
                black_box(format_tick(black_box(value)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_plan, bench_labels);
criterion_main!(benches);
