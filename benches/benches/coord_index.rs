// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_coord_index::CoordIndex;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("coord_index_insert");
    let n = 10_000_i64;
    group.throughput(Throughput::Elements(n as u64));
    // Sorted keys are the worst case for an unbalanced tree.
    group.bench_function("ascending", |b| {
        b.iter(|| {
            let mut idx: CoordIndex<i64, ()> = CoordIndex::new();
            for k in 0..n {
                let _ = idx.insert_or_get(black_box(k));
            }
            black_box(idx.height())
        });
    });
    group.bench_function("interleaved", |b| {
        b.iter(|| {
            let mut idx: CoordIndex<i64, ()> = CoordIndex::new();
            for k in 0..n {
                let key = if k % 2 == 0 { k } else { n * 2 - k };
                let _ = idx.insert_or_get(black_box(key));
            }
            black_box(idx.height())
        });
    });
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("coord_index_lookup");
    let mut idx: CoordIndex<f64, u32> = CoordIndex::new();
    for k in 0..10_000 {
        let _ = idx.insert_or_get(f64::from(k) * 2.0);
    }
    group.bench_function("find_nearest", |b| {
        b.iter(|| {
            let mut acc = 0_usize;
            for q in 0..1_000 {
                acc += usize::from(idx.find_nearest(black_box(f64::from(q) * 19.5)).is_some());
            }
            black_box(acc)
        });
    });
    let lo = idx.find(1_000.0).unwrap();
    let hi = idx.find(3_000.0).unwrap();
    group.bench_function("range_inclusive_1000", |b| {
        b.iter(|| black_box(idx.range_inclusive(black_box(lo), black_box(hi)).count()));
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup);
criterion_main!(benches);
