// Copyright (c) 2025 the intcheck developers.
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

use criterion::{criterion_group, criterion_main, Criterion};
use intcheck::{add, cast, left_shift, modulus, multiply};
use std::hint::black_box;

fn bench_cast(c: &mut Criterion) {
    c.bench_function("cast/u8_from_i32", |b| {
        b.iter(|| cast::<u8, _>(black_box(200i32)))
    });
    c.bench_function("cast/i64_from_u64", |b| {
        b.iter(|| cast::<i64, _>(black_box(u64::MAX / 3)))
    });
}

fn bench_arithmetic(c: &mut Criterion) {
    c.bench_function("add/i32", |b| {
        b.iter(|| add::<i32, _, _>(black_box(1_234_567i32), black_box(7_654_321i32)))
    });
    c.bench_function("multiply/i64_promoted", |b| {
        b.iter(|| multiply::<i64, _, _>(black_box(912_382_123i64), black_box(18_412i64)))
    });
    c.bench_function("multiply/i128_division_checked", |b| {
        b.iter(|| multiply::<i128, _, _>(black_box(912_382_123i128), black_box(18_412i128)))
    });
    c.bench_function("modulus/i64", |b| {
        b.iter(|| modulus::<i64, _, _>(black_box(-912_382_123i64), black_box(-18_412i64)))
    });
}

fn bench_shift(c: &mut Criterion) {
    c.bench_function("left_shift/u64", |b| {
        b.iter(|| left_shift::<u64, _, _>(black_box(0xFFu64), black_box(24u32)))
    });
}

criterion_group!(benches, bench_cast, bench_arithmetic, bench_shift);
criterion_main!(benches);
