//! Benchmarks for tether simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use tether::*;

fn bench_rope_simulation(c: &mut Criterion) {
    c.bench_function("rope_50_segments_60_steps", |b| {
        b.iter(|| {
            let mut verlet: Verlet<f32> = Verlet::new(64);
            let rope = Rope::build(
                &mut verlet, Vec3::new(0.0, 10.0, 0.0), Vec3::new(10.0, 10.0, 0.0), 50,
            ).unwrap();
            rope.pin_start(&mut verlet).unwrap();
            for _ in 0..60 {
                verlet.apply_force(Vec3::new(0.0, -9.81, 0.0));
                verlet.step(1.0 / 60.0, None, &mut NoOpStepObserver).unwrap();
            }
            verlet.positions().len()
        });
    });
}

fn bench_cloth_simulation(c: &mut Criterion) {
    c.bench_function("cloth_32x32_60_steps", |b| {
        b.iter(|| {
            let mut verlet: Verlet<f32> = Verlet::new(32 * 32);
            let config = ClothConfig::new(32, 32, 0.25).with_bend(true);
            let cloth = Cloth::build(
                &mut verlet,
                Vec3::zero(),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                &config,
            ).unwrap();
            cloth.pin_top_row(&mut verlet).unwrap();
            let bounds = BoxBounds::new(Vec3::new(-20.0, -5.0, -20.0), Vec3::splat(20.0));
            for _ in 0..60 {
                verlet.apply_force(Vec3::new(0.0, -9.81, 0.0));
                verlet.step(1.0 / 60.0, Some(&bounds), &mut NoOpStepObserver).unwrap();
            }
            verlet.positions().len()
        });
    });
}

fn bench_tearing(c: &mut Criterion) {
    c.bench_function("cloth_32x32_tear_every_point", |b| {
        b.iter(|| {
            let mut verlet: Verlet<f32> = Verlet::new(32 * 32);
            let cloth = Cloth::build(
                &mut verlet,
                Vec3::zero(),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                &ClothConfig::new(32, 32, 0.25),
            ).unwrap();
            let mut removed = 0;
            for row in 0..cloth.rows() {
                for col in 0..cloth.cols() {
                    removed += cloth.tear_at(&mut verlet, col, row);
                }
            }
            removed
        });
    });
}

fn bench_collide(c: &mut Criterion) {
    let mut verlet: Verlet<f32> = Verlet::new(10_000);
    Cloth::build(
        &mut verlet,
        Vec3::new(-5.0, 0.0, -5.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        &ClothConfig::new(100, 100, 0.1),
    ).unwrap();
    let player = Collider::ellipsoid(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.4, 1.0, 0.4));
    c.bench_function("collide_ellipsoid_10k_points", |b| {
        b.iter(|| verlet.collide(&player));
    });
}

criterion_group!(
    benches,
    bench_rope_simulation,
    bench_cloth_simulation,
    bench_tearing,
    bench_collide
);
criterion_main!(benches);
