// SPDX-License-Identifier: MIT
//
// Copyright 2016-2025, Johann Tuffe.

//! Fills the two diagonals of a 10x10 block, then prints the stored cells
//! and the dense 8x8 interior.
//!
//! Run with `RUST_LOG=trace cargo run --example diagonals` to see every
//! physical write.

use sparsegrid::{errors::Error, SparseMatrix};

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut matrix = SparseMatrix::new(0);

    assert_eq!(matrix.len(), 0);
    let a = matrix.row(0).col(0).get_value();
    assert_eq!(a, 0);
    assert_eq!(matrix.len(), 0);
    matrix.row(100).col(100).assign(314);
    assert!(matrix.row(100).col(100) == 314);
    assert_eq!(matrix.len(), 1);
    matrix.row(100).col(100).assign(0);
    assert!(matrix.row(100).col(100) == 0);
    assert_eq!(matrix.len(), 0);

    for i in 0..10 {
        matrix.row(i).col(i).assign(i);
    }
    for (i, j) in (0..10).zip((0..10).rev()) {
        matrix.row(i).col(j).assign(j);
    }

    println!("size: {}", matrix.len());

    for (x, y, v) in &matrix {
        println!("[{}][{}] value: {}", x, y, v);
    }

    let window = matrix.range((1, 1), (8, 8))?;
    for row in window.rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
