// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use ductile_seq::{DynArray, find_mode};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench find_mode
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

/// Sorted input where value `v` repeats `v % run + 1` times.
fn grouped(size: usize, run: usize) -> DynArray<u32> {
    let values = (0..)
        .flat_map(|v: u32| core::iter::repeat_n(v, v as usize % run + 1))
        .take(size);

    DynArray::from_values(values).expect("Failed to from_values(..)")
}

fn bench_find_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_mode");
    configure_group(&mut group);

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        for (name, run) in [("distinct", 1), ("short_runs", 4), ("long_runs", 64)] {
            let array = grouped(size, run);

            group.bench_with_input(BenchmarkId::new(name, size), &array, |b, array| {
                b.iter(|| black_box(find_mode(array).expect("Failed to find_mode(..)")));
            });
        }
    }

    group.finish();
}

criterion_group!(mode_benches, bench_find_mode);
criterion_main!(mode_benches);
