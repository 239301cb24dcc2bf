// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_rect_set::RectSet;

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::from_origin_size((x0, y0), (cell, cell)));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, world: f64, max_side: f64, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * world;
            let y = rng.next_f64() * world;
            let w = rng.next_f64() * max_side;
            let h = rng.next_f64() * max_side;
            Rect::from_origin_size((x, y), (w, h))
        })
        .collect()
}

fn gen_points(count: usize, world: f64, seed: u64) -> Vec<Point> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * world, rng.next_f64() * world))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_set_build");
    for n in [16_usize, 32, 64] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements(rects.len() as u64));
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter_batched(
                || rects.clone(),
                |rects| black_box(rects.into_iter().collect::<RectSet>()),
                BatchSize::SmallInput,
            );
        });
    }
    let rects = gen_random_rects(2_000, 1_000.0, 40.0, 0x5eed);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("random_2000", |b| {
        b.iter_batched(
            || rects.clone(),
            |rects| black_box(rects.into_iter().collect::<RectSet>()),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_set_contains");
    let points = gen_points(1_000, 1_000.0, 0xfeed);
    group.throughput(Throughput::Elements(points.len() as u64));

    let cases = [
        ("grid_64x64", gen_grid_rects(64, 1_000.0 / 64.0)),
        ("random_2000", gen_random_rects(2_000, 1_000.0, 40.0, 0x5eed)),
    ];
    for (name, rects) in cases {
        let set: RectSet = rects.iter().copied().collect();
        group.bench_function(format!("rect_set/{name}"), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &pt in &points {
                    hits += usize::from(set.contains(black_box(pt)).is_some());
                }
                black_box(hits)
            });
        });
        group.bench_function(format!("linear_scan/{name}"), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &pt in &points {
                    hits += usize::from(rects.iter().any(|r| r.contains(black_box(pt))));
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_contains);
criterion_main!(benches);
