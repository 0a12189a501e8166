// SPDX-License-Identifier: MIT
//
// Copyright 2016-2025, Johann Tuffe.

//! Iterators over stored cells
//!
//! All of them yield `(row, column, value)` ordered by row then column.
//! Borrowing iterators hold a shared borrow of the matrix, which rules out
//! mutation while iterating.

use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::{CellType, Coordinate};

/// An iterator over every stored cell of a `SparseMatrix`
#[derive(Debug, Clone)]
pub struct Cells<'a, T: 'a + CellType> {
    inner: btree_map::Iter<'a, Coordinate, T>,
}

impl<'a, T: 'a + CellType> Cells<'a, T> {
    pub(crate) fn new(inner: btree_map::Iter<'a, Coordinate, T>) -> Self {
        Cells { inner }
    }
}

impl<'a, T: 'a + CellType> Iterator for Cells<'a, T> {
    type Item = (i64, i64, &'a T);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&(r, c), v)| (r, c, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: 'a + CellType> DoubleEndedIterator for Cells<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&(r, c), v)| (r, c, v))
    }
}

impl<'a, T: 'a + CellType> ExactSizeIterator for Cells<'a, T> {}
impl<'a, T: 'a + CellType> FusedIterator for Cells<'a, T> {}

/// An iterator over the stored cells of a single row
#[derive(Debug, Clone)]
pub struct RowCells<'a, T: 'a + CellType> {
    inner: btree_map::Range<'a, Coordinate, T>,
}

impl<'a, T: 'a + CellType> RowCells<'a, T> {
    pub(crate) fn new(inner: btree_map::Range<'a, Coordinate, T>) -> Self {
        RowCells { inner }
    }
}

impl<'a, T: 'a + CellType> Iterator for RowCells<'a, T> {
    type Item = (i64, i64, &'a T);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&(r, c), v)| (r, c, v))
    }
}

impl<'a, T: 'a + CellType> DoubleEndedIterator for RowCells<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&(r, c), v)| (r, c, v))
    }
}

/// An owning iterator over the stored cells of a `SparseMatrix`
#[derive(Debug)]
pub struct IntoCells<T: CellType> {
    inner: btree_map::IntoIter<Coordinate, T>,
}

impl<T: CellType> IntoCells<T> {
    pub(crate) fn new(inner: btree_map::IntoIter<Coordinate, T>) -> Self {
        IntoCells { inner }
    }
}

impl<T: CellType> Iterator for IntoCells<T> {
    type Item = (i64, i64, T);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|((r, c), v)| (r, c, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: CellType> ExactSizeIterator for IntoCells<T> {}
