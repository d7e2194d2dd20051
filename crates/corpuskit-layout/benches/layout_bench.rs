//! Benchmarks for corpus recomputation
//!
//! Run with: cargo bench -p corpuskit-layout

use corpuskit_layout::{
    solve_vertical_layout, LayoutSettings, PanelCandidate, PanelRegistry, Redistribution,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Two sides, top, bottom and `shelves` shelves.
fn make_corpus(shelves: usize) -> PanelRegistry {
    let mut registry = PanelRegistry::new();
    for candidate in [
        PanelCandidate::new("left-side", 18, 2000, 560, 18),
        PanelCandidate::new("right-side", 18, 2000, 560, 18),
        PanelCandidate::new("top", 564, 18, 540, 18),
        PanelCandidate::new("bottom", 564, 18, 540, 18),
    ] {
        if let Ok((next, _)) = registry.add_panel(&candidate) {
            registry = next;
        }
    }
    for _ in 0..shelves {
        if let Ok((next, _)) = registry.add_panel(&PanelCandidate::new("shelf", 564, 18, 540, 18)) {
            registry = next;
        }
    }
    registry
}

fn bench_vertical_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/vertical_solver");
    let settings = LayoutSettings::default();

    for n in [1, 5, 10, 30] {
        let registry = make_corpus(n);
        group.bench_with_input(BenchmarkId::new("force", n), registry.panels(), |b, panels| {
            b.iter(|| black_box(solve_vertical_layout(panels, Redistribution::Force, &settings)))
        });
    }

    group.finish();
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/scene");

    for n in [1, 5, 10, 30] {
        let registry = make_corpus(n);
        group.bench_with_input(BenchmarkId::new("build", n), &registry, |b, registry| {
            b.iter(|| black_box(registry.scene()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_vertical_solver, bench_scene);
criterion_main!(benches);
