// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use minkowski_geom::{AffineMap, Vec2, boost};

/// Composes `len` elementary maps into one.
///
/// The scales cancel over a cycle and the boosts alternate direction, so the
/// result stays well conditioned at any chain length.
fn chain(len: usize) -> AffineMap {
    let mut map = AffineMap::IDENTITY;
    for i in 0..len {
        map = match i % 3 {
            0 => map.then_translate(Vec2::new(3.0, -2.0)),
            1 => map.then_scale(1.25, 0.8),
            _ => {
                let factor = if i % 2 == 0 { 1.5 } else { 1.0 / 1.5 };
                map.then(boost(factor).unwrap())
            }
        };
    }
    map
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/compose");

    for len in [64usize, 512, 4_096] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| black_box(chain(black_box(len))));
        });
    }

    group.finish();
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/invert");

    // Hypothesis: the shear decomposition costs about the same as Kurbo's
    // adjugate inverse while staying exact on axis-aligned maps.
    let projection = chain(64);
    group.bench_function("shear_decomposition", |b| {
        b.iter(|| black_box(projection).invert().unwrap());
    });

    let affine = kurbo::Affine::from(projection);
    group.bench_function("kurbo_adjugate", |b| {
        b.iter(|| black_box(affine).inverse());
    });

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform/apply");

    let projection = chain(64);
    let points: Vec<Vec2> = (0..10_000)
        .map(|i| Vec2::new(f64::from(i % 100), f64::from(i / 100)))
        .collect();

    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("batch", |b| {
        b.iter(|| {
            let mut sum = Vec2::ZERO;
            for point in &points {
                sum += projection.apply(*point);
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compose, bench_invert, bench_apply);
criterion_main!(benches);
