//! Performance benchmarks for graph construction, queries and analytics

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use notegraph::prelude::*;
use std::hint::black_box;

/// Interconnected ring of notes: each links to the next two, with a
/// shared tag set so tag co-occurrence has work to do
fn ring_notes(num_notes: usize) -> Vec<Note> {
    (0..num_notes)
        .map(|i| {
            Note::new(format!("note{}", i))
                .with_links([
                    format!("note{}", (i + 1) % num_notes),
                    format!("note{}", (i + 2) % num_notes),
                ])
                .with_tags([format!("tag{}", i % 7), format!("tag{}", i % 11)])
                .with_content_stats(100 + i % 500, (100 + i % 500) as f64 / 200.0)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [100, 1_000, 10_000].iter() {
        let notes = ring_notes(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &notes, |b, notes| {
            b.iter(|| build_note_graph(black_box(notes), &GraphOptions::default()))
        });
    }

    group.finish();
}

fn bench_build_bidirectional(c: &mut Criterion) {
    let notes = ring_notes(1_000);
    let options = GraphOptions::new().bidirectional(true);

    c.bench_function("build_bidirectional_1000", |b| {
        b.iter(|| build_note_graph(black_box(&notes), &options))
    });
}

fn bench_queries(c: &mut Criterion) {
    let notes = ring_notes(1_000);
    let graph = build_note_graph(&notes, &GraphOptions::default());
    let query = GraphQuery::new(&graph);

    c.bench_function("shortest_path_1000", |b| {
        b.iter(|| query.shortest_path(black_box("note0"), black_box("note999")))
    });

    c.bench_function("connected_components_1000", |b| {
        b.iter(|| query.connected_components())
    });

    c.bench_function("neighborhood_depth3_1000", |b| {
        b.iter(|| query.neighborhood(black_box("note500"), 3))
    });
}

fn bench_analytics(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");

    for size in [100, 1_000, 10_000].iter() {
        let notes = ring_notes(*size);
        let graph = build_note_graph(&notes, &GraphOptions::default());
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| calculate_analytics(black_box(&notes), black_box(&graph)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_build_bidirectional,
    bench_queries,
    bench_analytics
);
criterion_main!(benches);
