// SPDX-License-Identifier: MIT
//
// Copyright 2016-2025, Johann Tuffe.

use criterion::{criterion_group, criterion_main, Criterion};
use sparsegrid::SparseMatrix;
use std::hint::black_box;

const SIDE: i64 = 300;

fn filled() -> SparseMatrix<i64> {
    let mut matrix = SparseMatrix::new(0);
    for i in 0..SIDE {
        for j in (0..SIDE).step_by(3) {
            matrix.set((i, j), i * SIDE + j + 1);
        }
    }
    matrix
}

fn bench_set(c: &mut Criterion) {
    c.bench_function("set", |b| b.iter(|| black_box(filled()).len()));
}

fn bench_accessor(c: &mut Criterion) {
    c.bench_function("accessor_write_then_reset", |b| {
        let mut matrix = filled();
        b.iter(|| {
            for i in 0..SIDE {
                matrix.row(i).col(i).assign(black_box(-1));
                matrix.row(i).col(i).assign(black_box(0));
            }
        })
    });
}

fn bench_read(c: &mut Criterion) {
    let matrix = filled();
    c.bench_function("get", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..SIDE {
                for j in 0..SIDE {
                    sum += *matrix.get(black_box((i, j)));
                }
            }
            sum
        })
    });
    c.bench_function("cells", |b| b.iter(|| matrix.cells().count()));
    c.bench_function("range", |b| {
        b.iter(|| {
            matrix
                .range((0, 0), (SIDE - 1, SIDE - 1))
                .map(|r| r.used_cells().count())
        })
    });
}

criterion_group!(benches, bench_set, bench_accessor, bench_read);
criterion_main!(benches);
