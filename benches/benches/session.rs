// Copyright 2025 the Minkowski Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Size;
use minkowski_geom::Vec2;
use minkowski_session::{Event, Modifiers, PointerButton, PointerButtons, Session};

/// A session whose scene holds `events` worldline events on a coarse lattice.
fn populated(events: usize) -> Session {
    let mut session = Session::new(Size::new(800.0, 600.0));
    for i in 0..events {
        session.scene_mut().add_event(Event {
            world: Vec2::new((i % 64) as f64, (i / 64) as f64),
            projected: Vec2::ZERO,
        });
    }
    session
}

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/render_pass");

    for events in [256usize, 4_096] {
        let mut session = populated(events);
        group.throughput(Throughput::Elements(events as u64));
        group.bench_function(BenchmarkId::from_parameter(events), |b| {
            b.iter(|| black_box(session.render_pass()));
        });
    }

    group.finish();
}

fn bench_closest_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/closest_event");

    for events in [256usize, 4_096] {
        let mut session = populated(events);
        session.render_pass();
        group.throughput(Throughput::Elements(events as u64));
        group.bench_function(BenchmarkId::from_parameter(events), |b| {
            b.iter(|| {
                session
                    .scene()
                    .closest_event(black_box(Vec2::new(423.0, 287.0)), None)
            });
        });
    }

    group.finish();
}

fn bench_sketch(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/sketch");

    // A full gesture: press on empty space, drag past the threshold, release
    // over an existing event so the tip merges into it.
    group.bench_function("drag_and_merge", |b| {
        b.iter_batched(
            || {
                let mut session = Session::new(Size::new(800.0, 600.0));
                session.scene_mut().add_event(Event {
                    world: Vec2::new(10.0, 0.0),
                    projected: Vec2::ZERO,
                });
                session.render_pass();
                session
            },
            |mut session| {
                session.pointer_down(
                    Vec2::new(400.0, 300.0),
                    PointerButton::Primary,
                    Modifiers::empty(),
                );
                session.pointer_moved(Vec2::new(468.0, 301.0), PointerButtons::PRIMARY);
                session.pointer_up(PointerButton::Primary);
                session
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_render_pass, bench_closest_event, bench_sketch);
criterion_main!(benches);
