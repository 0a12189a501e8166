// SPDX-License-Identifier: MIT
//
// Copyright 2016-2025, Johann Tuffe.

//! Sparse two dimensional matrix
//!
//! # Status
//!
//! **sparsegrid** stores only the cells of a matrix which differ from a
//! default value chosen at construction. Every other position, over the
//! whole `i64` plane, reads back as that default.
//!
//! Writing the default value into a cell removes it from storage, so
//! `len()` always counts the non default cells only.
//!
//! # Examples
//! ```
//! use sparsegrid::SparseMatrix;
//!
//! let mut matrix = SparseMatrix::new(0);
//! assert_eq!(matrix.row(0).col(0).get_value(), 0);
//! assert_eq!(matrix.len(), 0);
//!
//! // main diagonal and anti diagonal
//! for i in 0..10 {
//!     matrix.row(i).col(i).assign(i);
//!     matrix.row(i).col(9 - i).assign(9 - i);
//! }
//! // (0, 0) and (9, 0) hold the default and are not stored
//! assert_eq!(matrix.len(), 18);
//!
//! for (row, col, value) in &matrix {
//!     println!("[{}][{}] value: {}", row, col, value);
//! }
//!
//! // dense snapshot of a window, e.g. for printing
//! let window = matrix.range((1, 1), (8, 8)).expect("valid window");
//! for row in window.rows() {
//!     let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
//!     println!("{}", line.join(" "));
//! }
//! ```
#![deny(missing_docs)]

mod accessor;
mod iter;
mod matrix;
#[cfg(feature = "serde")]
mod serialize;

pub mod errors;

use std::ops::Index;

pub use accessor::{CellAccessor, RowAccessor};
pub use errors::Error;
pub use iter::{Cells, IntoCells, RowCells};
pub use matrix::SparseMatrix;

/// A (row, column) position
pub type Coordinate = (i64, i64);

/// A trait to constrain cells
pub trait CellType: Clone + PartialEq {}
impl<T: Clone + PartialEq> CellType for T {}

/// A struct to hold cell position and value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell<T: CellType> {
    /// Position for the cell (row, column)
    pos: Coordinate,
    /// Value for the cell
    val: T,
}

impl<T: CellType> Cell<T> {
    /// Creates a new `Cell`
    pub fn new(position: Coordinate, value: T) -> Cell<T> {
        Cell {
            pos: position,
            val: value,
        }
    }

    /// Gets `Cell` position
    pub fn get_position(&self) -> Coordinate {
        self.pos
    }

    /// Gets `Cell` value
    pub fn get_value(&self) -> &T {
        &self.val
    }
}

/// A dense, owned copy of a rectangle of a `SparseMatrix`
///
/// Built with `SparseMatrix::range`. Positions passed to `get` and `Index`
/// are relative to `start`, positions passed to `get_value` are absolute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Range<T: CellType> {
    start: Coordinate,
    end: Coordinate,
    default: T,
    inner: Vec<T>,
}

impl<T: CellType> Range<T> {
    /// `inner` must hold exactly `height * width` cells, row by row
    pub(crate) fn from_parts(
        start: Coordinate,
        end: Coordinate,
        default: T,
        inner: Vec<T>,
    ) -> Self {
        Range {
            start,
            end,
            default,
            inner,
        }
    }

    /// Get top left cell position (row, column)
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Get bottom right cell position (row, column)
    pub fn end(&self) -> Coordinate {
        self.end
    }

    /// Get column width
    pub fn width(&self) -> usize {
        self.end.1.wrapping_sub(self.start.1) as u64 as usize + 1
    }

    /// Get row height
    pub fn height(&self) -> usize {
        self.end.0.wrapping_sub(self.start.0) as u64 as usize + 1
    }

    /// Get size in (height, width) format
    pub fn get_size(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Get the default value of the matrix this range was copied from
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Get cell value from relative position, `None` if out of the range
    pub fn get(&self, relative_position: (usize, usize)) -> Option<&T> {
        let (row, col) = relative_position;
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.inner.get(row * self.width() + col)
    }

    /// Get cell value from absolute position, `None` if out of the range
    pub fn get_value(&self, absolute_position: Coordinate) -> Option<&T> {
        let (row, col) = absolute_position;
        if row < self.start.0 || row > self.end.0 || col < self.start.1 || col > self.end.1 {
            return None;
        }
        self.get((
            row.wrapping_sub(self.start.0) as u64 as usize,
            col.wrapping_sub(self.start.1) as u64 as usize,
        ))
    }

    /// Get an iterator over inner rows
    pub fn rows(&self) -> Rows<'_, T> {
        Rows {
            inner: self.inner.chunks(self.width()),
        }
    }

    /// Get an iterator over non default cells only, with relative positions
    pub fn used_cells(&self) -> UsedCells<'_, T> {
        UsedCells {
            width: self.width(),
            default: &self.default,
            inner: self.inner.iter().enumerate(),
        }
    }
}

impl<T: CellType> Index<usize> for Range<T> {
    type Output = [T];
    fn index(&self, index: usize) -> &[T] {
        let width = self.width();
        &self.inner[index * width..(index + 1) * width]
    }
}

impl<T: CellType> Index<(usize, usize)> for Range<T> {
    type Output = T;
    fn index(&self, index: (usize, usize)) -> &T {
        assert!(index.1 < self.width(), "column {} out of range", index.1);
        &self.inner[index.0 * self.width() + index.1]
    }
}

/// A struct to iterate over used cells
#[derive(Debug)]
pub struct UsedCells<'a, T: 'a + CellType> {
    width: usize,
    default: &'a T,
    inner: std::iter::Enumerate<std::slice::Iter<'a, T>>,
}

impl<'a, T: 'a + CellType> Iterator for UsedCells<'a, T> {
    type Item = (usize, usize, &'a T);
    fn next(&mut self) -> Option<Self::Item> {
        let default = self.default;
        self.inner
            .by_ref()
            .find(|&(_, v)| v != default)
            .map(|(i, v)| {
                let row = i / self.width;
                let col = i % self.width;
                (row, col, v)
            })
    }
}

/// An iterator to read `Range` struct row by row
#[derive(Debug)]
pub struct Rows<'a, T: 'a + CellType> {
    inner: std::slice::Chunks<'a, T>,
}

impl<'a, T: 'a + CellType> Iterator for Rows<'a, T> {
    type Item = &'a [T];
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Range<u8> {
        let mut m = SparseMatrix::new(0u8);
        m.set((10, 20), 1);
        m.set((11, 22), 2);
        m.range((10, 20), (11, 22)).unwrap()
    }

    #[test]
    fn test_range_positions() {
        let r = window();
        assert_eq!(r.start(), (10, 20));
        assert_eq!(r.end(), (11, 22));
        assert_eq!(r.get_size(), (2, 3));
        assert_eq!(r.get((1, 2)), Some(&2));
        assert_eq!(r.get((0, 3)), None);
        assert_eq!(r.get_value((10, 20)), Some(&1));
        assert_eq!(r.get_value((9, 20)), None);
        assert_eq!(&r[1], &[0, 0, 2]);
    }

    #[test]
    fn test_used_cells() {
        let r = window();
        assert_eq!(
            r.used_cells().collect::<Vec<_>>(),
            vec![(0, 0, &1), (1, 2, &2)]
        );
        assert_eq!(r.rows().count(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_range_json_layout() {
        let mut m = SparseMatrix::new(0);
        m.set((0, 1), 5);
        let r = m.range((0, 0), (0, 1)).unwrap();
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"start":[0,0],"end":[0,1],"default":0,"inner":[0,5]}"#
        );
    }
}
