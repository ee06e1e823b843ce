// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for the safety search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use safety_checker::{find_safe_sequence, SafetySnapshot};

/// `n` processes over eight resources, each holding one unit and needing
/// one more, with just enough spare for the search to succeed.
fn snapshot(n: u32) -> SafetySnapshot {
    let mut s = SafetySnapshot::new(vec![u64::from(n) + 1; 8]);
    for i in 0..n {
        let r = i as usize % 8;
        let mut max = vec![0; 8];
        let mut alloc = vec![0; 8];
        max[r] = 2;
        alloc[r] = 1;
        s.add_process(i, max, alloc).expect("allocation fits");
    }
    s
}

fn bench_find_safe_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_safe_sequence");
    for n in [8u32, 64, 256] {
        let s = snapshot(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &s, |b, s| {
            b.iter(|| find_safe_sequence(black_box(s)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_safe_sequence);
criterion_main!(benches);
