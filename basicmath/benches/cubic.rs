// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of the cubic equation solver, one per discriminant branch.

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use basicmath::{solve_cubic, solve_cubic_into, Cubic};

fn bench_cubic(cc: &mut Criterion) {
    let three = Cubic::from_roots(1.0, 2.0, 3.0);
    let one = Cubic::new(1.0, -4.5, 17.0, -30.0);
    let repeated = Cubic::new(1.0, -3.0, 3.0, -1.0);

    let mut group = cc.benchmark_group("cubic roots");
    for (name, cubic) in [("three real", three), ("one real", one), ("repeated", repeated)] {
        group.bench_function(name, |bb| {
            bb.iter(|| {
                let Cubic { a, b, c, d } = black_box(cubic);
                solve_cubic(a, b, c, d)
            });
        });
    }
    group.bench_function("into buffer", |bb| {
        let mut out = [0.0; 3];
        bb.iter(|| {
            let Cubic { a, b, c, d } = black_box(three);
            solve_cubic_into(a, b, c, d, &mut out)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_cubic);
criterion_main!(benches);
