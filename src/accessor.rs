// SPDX-License-Identifier: MIT
//
// Copyright 2016-2025, Johann Tuffe.

//! Chained `matrix.row(r).col(c)` access
//!
//! A `RowAccessor` only records the row. Supplying the column resolves the
//! position and fetches its current value into a `CellAccessor`, which is
//! then either read or assigned. Both borrow the matrix mutably, so none of
//! them can outlive it, and nothing else can touch the matrix meanwhile.

use std::fmt;

use crate::{CellType, Coordinate, SparseMatrix};

/// A row bound to a matrix, waiting for its column
#[derive(Debug)]
pub struct RowAccessor<'a, T: CellType> {
    matrix: &'a mut SparseMatrix<T>,
    row: i64,
}

impl<'a, T: CellType> RowAccessor<'a, T> {
    pub(crate) fn new(matrix: &'a mut SparseMatrix<T>, row: i64) -> Self {
        RowAccessor { matrix, row }
    }

    /// Gets the bound row
    pub fn row_index(&self) -> i64 {
        self.row
    }

    /// Resolves the cell at column `col` and caches its current value
    pub fn col(self, col: i64) -> CellAccessor<'a, T> {
        let pos = (self.row, col);
        let value = self.matrix.get(pos).clone();
        CellAccessor {
            matrix: self.matrix,
            pos,
            value,
        }
    }
}

/// A resolved cell of a matrix.
///
/// # Examples
/// ```
/// use sparsegrid::SparseMatrix;
///
/// let mut matrix = SparseMatrix::new(0);
/// let mut cell = matrix.row(2).col(3);
/// assert_eq!(cell.get_value(), 0);
/// cell.assign(42);
/// assert_eq!(cell, 42);
/// assert_eq!(matrix.get((2, 3)), &42);
/// ```
#[derive(Debug)]
pub struct CellAccessor<'a, T: CellType> {
    matrix: &'a mut SparseMatrix<T>,
    pos: Coordinate,
    value: T,
}

impl<T: CellType> CellAccessor<'_, T> {
    /// Gets the resolved (row, column) position
    pub fn position(&self) -> Coordinate {
        self.pos
    }

    /// Gets the cached value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Gets a copy of the cached value
    pub fn get_value(&self) -> T {
        self.value.clone()
    }

    /// Does the cell hold the matrix default value
    pub fn is_default(&self) -> bool {
        self.value == *self.matrix.default_value()
    }

    /// Writes `value` back to the matrix.
    ///
    /// Assigning the default removes the cell, unless it was already unset.
    pub fn assign(&mut self, value: T) {
        if value == *self.matrix.default_value() {
            if !self.is_default() {
                self.matrix.remove(self.pos);
            }
        } else {
            self.matrix.set(self.pos, value.clone());
        }
        self.value = value;
    }
}

impl<T: CellType> PartialEq<T> for CellAccessor<'_, T> {
    fn eq(&self, other: &T) -> bool {
        self.value == *other
    }
}

impl<T: CellType + fmt::Display> fmt::Display for CellAccessor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_does_not_touch_storage() {
        let mut m = SparseMatrix::new(0);
        let row = m.row(7);
        assert_eq!(row.row_index(), 7);
        assert!(m.is_empty());
    }

    #[test]
    fn test_read_caches_resolved_value() {
        let mut m = SparseMatrix::new(String::new());
        m.set((1, 1), "x".to_string());
        let cell = m.row(1).col(1);
        assert_eq!(cell.position(), (1, 1));
        assert_eq!(cell.value(), "x");
        assert!(!cell.is_default());
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_assign_default_on_unset_is_noop() {
        let mut m = SparseMatrix::new(0);
        m.row(4).col(4).assign(0);
        assert!(m.is_empty());
    }

    #[test]
    fn test_repeated_assign() {
        let mut m = SparseMatrix::new(0);
        let mut cell = m.row(0).col(0);
        cell.assign(1);
        cell.assign(0);
        assert!(cell.is_default());
        cell.assign(0);
        cell.assign(2);
        assert_eq!(cell, 2);
        assert_eq!(m.cells().collect::<Vec<_>>(), vec![(0, 0, &2)]);
    }

    #[test]
    fn test_display() {
        let mut m = SparseMatrix::new(0);
        m.set((3, 1), 9);
        assert_eq!(m.row(3).col(1).to_string(), "9");
        assert_eq!(m.row(3).col(2).to_string(), "0");
    }
}
