// Copyright 2026 the Longlist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use longlist_window::{HeightException, HeightModel, PrefixIndex};

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

/// A model with `len` items and up to `k` overrides scattered across the strip.
fn gen_model(len: usize, k: usize) -> HeightModel<f64> {
    let mut rng = Rng::new(0x1096_1157_0000_BEEF);
    let overrides = (0..k).map(|_| HeightException {
        index: (rng.next_f64() * len as f64) as usize % len,
        height: 10.0 + rng.next_f64() * 500.0,
    });
    HeightModel::with_overrides(24.0, len, overrides).unwrap()
}

/// O(N) reference: sum per-item heights up to `target`.
fn brute_height_before(model: &HeightModel<f64>, target: usize) -> f64 {
    (0..target).map(|i| model.height_of(i)).sum()
}

fn bench_height_before(c: &mut Criterion) {
    let mut group = c.benchmark_group("height_before");
    for &(len, k) in &[(10_000, 8), (100_000, 64), (1_000_000, 256)] {
        let model = gen_model(len, k);
        let prefix = PrefixIndex::build(&model);
        let target = len / 2 + 1;

        group.bench_with_input(
            BenchmarkId::new("indexed", format!("{len}x{k}")),
            &(),
            |b, ()| {
                b.iter(|| black_box(prefix.height_before(black_box(target))));
            },
        );
        if len <= 100_000 {
            group.bench_with_input(
                BenchmarkId::new("brute", format!("{len}x{k}")),
                &(),
                |b, ()| {
                    b.iter(|| black_box(brute_height_before(&model, black_box(target))));
                },
            );
        }
    }
    group.finish();
}

fn bench_index_at_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_at_offset");
    for &(len, k) in &[(10_000, 8), (100_000, 64), (1_000_000, 256)] {
        let model = gen_model(len, k);
        let prefix = PrefixIndex::build(&model);
        let offset = model.total_extent() * 0.61;

        group.bench_with_input(
            BenchmarkId::new("indexed", format!("{len}x{k}")),
            &(),
            |b, ()| {
                b.iter(|| black_box(prefix.index_at_offset(black_box(offset))));
            },
        );
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_rebuild");
    for &k in &[8_usize, 64, 1024] {
        let model = gen_model(1_000_000, k);
        group.bench_with_input(BenchmarkId::from_parameter(k), &(), |b, ()| {
            b.iter(|| black_box(PrefixIndex::build(&model)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_height_before,
    bench_index_at_offset,
    bench_rebuild
);
criterion_main!(benches);
