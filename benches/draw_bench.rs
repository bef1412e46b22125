//! Benchmarks for draw generation and feasibility analysis.
//!
//! Simulates realistic draw sizes:
//! - family:  8 participants, a couple of exclusions
//! - office:  24 participants, one exclusion per couple of desks
//! - club:    64 participants, denser exclusions
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sorteo::{
    check_feasible, generate_assignments_with, ExclusionSet, ParticipantId, DEFAULT_RETRY_LIMIT,
};

/// Draw size configurations matching real-world rosters.
struct DrawSize {
    name: &'static str,
    participants: usize,
    exclusions: usize,
}

const DRAW_SIZES: &[DrawSize] = &[
    DrawSize {
        name: "family",
        participants: 8,
        exclusions: 2,
    },
    DrawSize {
        name: "office",
        participants: 24,
        exclusions: 8,
    },
    DrawSize {
        name: "club",
        participants: 64,
        exclusions: 24,
    },
];

fn build_roster(size: &DrawSize) -> (Vec<ParticipantId>, ExclusionSet) {
    let roster: Vec<ParticipantId> = (0..size.participants)
        .map(|i| ParticipantId::new(format!("participant-{i:03}")))
        .collect();

    // Exclude adjacent pairs: disjoint "couples" that keep the draw feasible.
    let mut exclusions = ExclusionSet::new();
    for c in 0..size.exclusions {
        let a = (2 * c) % size.participants;
        let b = (2 * c + 1) % size.participants;
        exclusions
            .add(roster[a].clone(), roster[b].clone())
            .expect("adjacent indices are distinct");
    }

    (roster, exclusions)
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in DRAW_SIZES {
        let (roster, exclusions) = build_roster(size);
        let mut rng = StdRng::seed_from_u64(0xD0_0D);

        group.bench_function(BenchmarkId::from_parameter(size.name), |b| {
            b.iter(|| {
                generate_assignments_with(
                    &mut rng,
                    black_box(&roster),
                    black_box(&exclusions),
                    DEFAULT_RETRY_LIMIT,
                )
                .expect("benchmark rosters are feasible")
            });
        });
    }

    group.finish();
}

fn bench_feasibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_feasible");

    for size in DRAW_SIZES {
        let (roster, exclusions) = build_roster(size);

        group.bench_function(BenchmarkId::from_parameter(size.name), |b| {
            b.iter(|| check_feasible(black_box(&roster), black_box(&exclusions)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation, bench_feasibility);
criterion_main!(benches);
