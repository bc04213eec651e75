use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use tracesort::prelude::*;

fn bench_traced_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Traced Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 2_000;

    let random_names: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(4..12);
            (0..len)
                .map(|_| char::from(b'a' + rng.random_range(0..26)))
                .collect()
        })
        .collect();

    // Engine with pacing disabled; measures the tracing overhead itself.
    group.bench_function("engine (NullSink, no pacing)", |b| {
        b.iter_batched(
            || random_names.clone(),
            |data| Engine::new().run_sort(black_box(data), &mut NullSink),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("engine (TraceLog)", |b| {
        b.iter_batched(
            || random_names.clone(),
            |data| {
                let mut log = TraceLog::new();
                Engine::new().run_sort(black_box(data), &mut log)
            },
            BatchSize::SmallInput,
        )
    });

    // Std Sort baseline
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_names.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_traced_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Traced Search");

    let mut rng = rand::rng();
    let count = 10_000;

    let mut sorted: Vec<String> = (0..count)
        .map(|_| {
            let len = rng.random_range(4..12);
            (0..len)
                .map(|_| char::from(b'a' + rng.random_range(0..26)))
                .collect()
        })
        .collect();
    sorted.sort();
    let target = sorted[count / 3].clone();

    group.bench_function("engine (NullSink, no pacing)", |b| {
        b.iter(|| Engine::new().run_search(black_box(&sorted), black_box(&target), &mut NullSink))
    });

    group.bench_function("slice::binary_search", |b| {
        b.iter(|| black_box(&sorted).binary_search(black_box(&target)))
    });

    group.finish();
}

criterion_group!(benches, bench_traced_sort, bench_traced_search);
criterion_main!(benches);
