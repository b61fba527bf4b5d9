//! Benchmark journey planning performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use yatra_sim::{Coord, JourneyConfig, JourneyPlanner, Rover, Surface};

/// Build a surface with a pseudo-random obstacle field.
fn scattered_surface(obstacles: usize, seed: u64) -> Surface {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut surface = Surface::new(Coord::new(0, 0));
    let mut placed = 0;
    while placed < obstacles {
        let coord = Coord::new(rng.gen_range(-60..=60), rng.gen_range(-60..=60));
        if coord == Coord::new(0, 0) {
            continue;
        }
        if surface.add_obstacle(coord).unwrap() {
            placed += 1;
        }
    }
    surface
}

fn bench_plan_empty(c: &mut Criterion) {
    let surface = Surface::new(Coord::new(0, 0));
    let rover = Rover::new();

    let mut group = c.benchmark_group("plan_empty");
    for horizon in [16usize, 64, 128] {
        let planner = JourneyPlanner::new(&surface, JourneyConfig::default().with_horizon(horizon));
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &horizon, |b, _| {
            b.iter(|| black_box(planner.plan(black_box(&rover))));
        });
    }
    group.finish();
}

fn bench_plan_scattered(c: &mut Criterion) {
    let surface = scattered_surface(500, 7);
    let rover = Rover::new();
    let planner = JourneyPlanner::new(&surface, JourneyConfig::default().with_horizon(64));

    c.bench_function("plan_scattered_500", |b| {
        b.iter(|| black_box(planner.plan(black_box(&rover))));
    });
}

criterion_group!(benches, bench_plan_empty, bench_plan_scattered);
criterion_main!(benches);
