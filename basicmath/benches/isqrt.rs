// Copyright 2025 the Basicmath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![expect(missing_docs, reason = "criterion emits undocumented functions")]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use basicmath::usqrt;

fn bench_usqrt(cc: &mut Criterion) {
    cc.bench_function("usqrt", |bb| bb.iter(|| usqrt(black_box(0x3fed_0169))));
    cc.bench_function("usqrt 1000", |bb| {
        bb.iter(|| {
            let mut acc = 0_u32;
            for x in 0..1000 {
                acc = acc.wrapping_add(usqrt(black_box(x * 4093)).root);
            }
            acc
        });
    });
}

criterion_group!(benches, bench_usqrt);
criterion_main!(benches);
