/*
 * Flock Simulation Benchmark
 *
 * Measures the cost of the O(n^2) flocking step at several population sizes
 * for both update orders, plus the individual steering rules.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use flock::{FlockSimulator, SimulationParams, UpdateOrder, WorldBounds};

fn simulator(num_boids: usize, order: UpdateOrder) -> FlockSimulator {
    let params = SimulationParams {
        num_boids,
        update_order: order,
        ..SimulationParams::default()
    };
    // Small world so neighborhoods are populated
    let bounds = WorldBounds::new(400.0, 400.0).unwrap();
    FlockSimulator::from_params(&params, bounds, &mut StdRng::seed_from_u64(2024))
}

// Benchmark the steering rules for a single boid against the whole flock
fn bench_force_calculations(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_calculations");

    for num_boids in [100, 250, 500].iter() {
        let sim = simulator(*num_boids, UpdateOrder::Sequential);
        let boids = sim.boids();
        let rules = *sim.rules();

        group.bench_with_input(BenchmarkId::new("alignment", num_boids), num_boids, |b, _| {
            b.iter(|| black_box(boids[0].alignment(black_box(boids), &rules)));
        });
        group.bench_with_input(BenchmarkId::new("cohesion", num_boids), num_boids, |b, _| {
            b.iter(|| black_box(boids[0].cohesion(black_box(boids), &rules)));
        });
        group.bench_with_input(BenchmarkId::new("separation", num_boids), num_boids, |b, _| {
            b.iter(|| black_box(boids[0].separation(black_box(boids), &rules)));
        });
    }

    group.finish();
}

// Benchmark the full step
fn bench_update_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_loop");

    for order in [UpdateOrder::Sequential, UpdateOrder::Snapshot] {
        for num_boids in [100, 250, 500].iter() {
            let id = BenchmarkId::new(format!("{order:?}"), num_boids);
            group.bench_with_input(id, num_boids, |b, &n| {
                let mut sim = simulator(n, order);
                b.iter(|| {
                    sim.step();
                    black_box(sim.boids().len())
                });
            });
        }
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_force_calculations, bench_update_loop
}

criterion_main!(benches);
