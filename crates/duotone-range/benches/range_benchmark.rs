// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use duotone_range::range::RedGreenI64Range;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Deterministic bound pairs so benchmark runs are comparable.
fn generate_bounds(count: usize, seed: u64) -> Vec<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let start = rng.gen_range(-1_000_000i64..1_000_000);
            let extent = rng.gen_range(0i64..1_000_000);
            (start, start + extent)
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("colored_range_construction");

    for &count in &[1_000usize, 10_000] {
        let bounds = generate_bounds(count, 0xd007);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("construct", count),
            &bounds,
            |b, bounds| {
                b.iter(|| {
                    for &(start, end) in bounds {
                        let range =
                            RedGreenI64Range::new(black_box(start), black_box(end)).unwrap();
                        black_box(range);
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_accessors(c: &mut Criterion) {
    let mut group = c.benchmark_group("colored_range_accessors");

    let ranges: Vec<RedGreenI64Range> = generate_bounds(10_000, 42)
        .into_iter()
        .map(|(start, end)| RedGreenI64Range::new(start, end).unwrap())
        .collect();

    group.throughput(Throughput::Elements(ranges.len() as u64));
    group.bench_function("read_all", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for range in &ranges {
                acc = acc
                    .wrapping_add(range.span().start())
                    .wrapping_add(range.span().end())
                    .wrapping_add(range.step())
                    .wrapping_add(range.length());
            }
            black_box(acc)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_accessors);
criterion_main!(benches);
