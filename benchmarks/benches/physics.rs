//! Physics engine benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- scan

use clash2d::physics::narrowphase::detect_collision;
use clash2d::physics::scan::find_contacts;
use clash2d::physics::solver::solve_contacts;
use clash2d::{ControlInput, Shape};
use clash2d_bench::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;

// ---------------------------------------------------------------------------
// Narrowphase
// ---------------------------------------------------------------------------

fn bench_narrowphase(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("narrowphase/circle_circle");
        let a = Shape::circle(Vec2::ZERO, 10.0);

        let hit = Shape::circle(Vec2::new(15.0, 0.0), 10.0);
        group.bench_function("intersecting", |b| {
            b.iter(|| detect_collision(&a, &hit));
        });

        let miss = Shape::circle(Vec2::new(50.0, 0.0), 10.0);
        group.bench_function("separated", |b| {
            b.iter(|| detect_collision(&a, &miss));
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("narrowphase/rect_rect");
        let a = Shape::rectangle(Vec2::ZERO, Vec2::new(20.0, 0.0), 20.0);

        let hit = Shape::rectangle(Vec2::new(15.0, 0.0), Vec2::new(35.0, 0.0), 20.0);
        group.bench_function("intersecting", |b| {
            b.iter(|| detect_collision(&a, &hit));
        });

        let miss = Shape::rectangle(Vec2::new(50.0, 0.0), Vec2::new(70.0, 0.0), 20.0);
        group.bench_function("separated", |b| {
            b.iter(|| detect_collision(&a, &miss));
        });

        let mut rotated = hit;
        rotated.set_angle(0.785);
        rotated.refresh_vertices();
        group.bench_function("rotated", |b| {
            b.iter(|| detect_collision(&a, &rotated));
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("narrowphase/mixed");
        let circle = Shape::circle(Vec2::new(10.0, 12.0), 8.0);
        let rect = Shape::rectangle(Vec2::ZERO, Vec2::new(20.0, 0.0), 20.0);
        let tri = Shape::triangle(
            Vec2::new(5.0, 25.0),
            Vec2::new(-5.0, 8.0),
            Vec2::new(15.0, 8.0),
        );
        let line = Shape::segment(Vec2::new(-50.0, 15.0), Vec2::new(50.0, 15.0));

        group.bench_function("circle_rect", |b| {
            b.iter(|| detect_collision(&circle, &rect));
        });
        group.bench_function("triangle_rect", |b| {
            b.iter(|| detect_collision(&tri, &rect));
        });
        group.bench_function("line_circle", |b| {
            b.iter(|| detect_collision(&line, &circle));
        });
        group.finish();
    }
}

// ---------------------------------------------------------------------------
// Scan
// ---------------------------------------------------------------------------

fn bench_scan(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("scan/packed_balls");
        for &n in &[25, 100, 400] {
            let bodies = setup_ball_bodies(n);
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
                b.iter(|| find_contacts(&bodies));
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("scan/mixed_shapes");
        for &n in &[25, 100, 400] {
            let bodies = setup_mixed_bodies(n);
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
                b.iter(|| find_contacts(&bodies));
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("scan/sparse");
        for &n in &[25, 100, 400] {
            let bodies = setup_sparse_bodies(n);
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
                b.iter(|| find_contacts(&bodies));
            });
        }
        group.finish();
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver/contact_count");
    for &n in &[25, 100, 400] {
        let (bodies, contacts) = setup_contacts(n);
        group.bench_with_input(BenchmarkId::from_parameter(contacts.len()), &n, |b, _| {
            b.iter_batched(
                || bodies.clone(),
                |mut bodies| solve_contacts(&contacts, &mut bodies),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

fn bench_pipeline(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("pipeline/step");
        group.sample_size(30);
        for &n in &[25, 100, 400] {
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                b.iter_batched(
                    || setup_world(n),
                    |mut world| world.step(ControlInput::NONE),
                    criterion::BatchSize::LargeInput,
                );
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("pipeline/sustained_60steps");
        group.sample_size(10);
        for &n in &[25, 100] {
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                b.iter_batched(
                    || setup_world(n),
                    |mut world| {
                        for _ in 0..60 {
                            world.step(ControlInput::NONE);
                        }
                    },
                    criterion::BatchSize::LargeInput,
                );
            });
        }
        group.finish();
    }
}

criterion_group!(
    benches,
    bench_narrowphase,
    bench_scan,
    bench_solver,
    bench_pipeline
);
criterion_main!(benches);
