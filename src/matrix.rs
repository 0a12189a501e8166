// SPDX-License-Identifier: MIT
//
// Copyright 2016-2025, Johann Tuffe.

//! Sparse storage engine

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Index;

use log::{debug, trace};

use crate::accessor::RowAccessor;
use crate::errors::{Error, Result};
use crate::iter::{Cells, IntoCells, RowCells};
use crate::{Cell, CellType, Coordinate, Range};

/// A two dimensional matrix of unbounded extent which only stores cells
/// that differ from its default value.
///
/// Every position which has never been written (or has been written back
/// to the default) reads as the default value.
///
/// # Examples
/// ```
/// use sparsegrid::SparseMatrix;
///
/// let mut matrix = SparseMatrix::new(0);
/// assert_eq!(matrix.get((0, 0)), &0);
/// matrix.row(100).col(100).assign(314);
/// assert_eq!(matrix[(100, 100)], 314);
/// assert_eq!(matrix.len(), 1);
/// matrix.row(100).col(100).assign(0);
/// assert!(matrix.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T: CellType> {
    default: T,
    cells: BTreeMap<Coordinate, T>,
}

impl<T: CellType> SparseMatrix<T> {
    /// Creates an empty matrix where every cell reads as `default`
    pub fn new(default: T) -> SparseMatrix<T> {
        SparseMatrix {
            default,
            cells: BTreeMap::new(),
        }
    }

    /// Creates a matrix from a coordinate list of `Cell`s.
    ///
    /// Cells holding the default value are skipped. When a position
    /// appears more than once, the last cell wins.
    pub fn from_cells(default: T, cells: Vec<Cell<T>>) -> SparseMatrix<T> {
        debug!("build matrix from {} cells", cells.len());
        let mut matrix = SparseMatrix::new(default);
        for c in cells {
            matrix.set(c.pos, c.val);
        }
        matrix
    }

    /// Same as `from_cells` but fails if a position appears more than once
    ///
    /// # Examples
    /// ```
    /// use sparsegrid::{Cell, SparseMatrix, errors::Error};
    ///
    /// let cells = vec![Cell::new((1, 1), 'a'), Cell::new((1, 1), 'b')];
    /// assert_eq!(
    ///     SparseMatrix::try_from_cells(' ', cells),
    ///     Err(Error::DuplicateCell { pos: (1, 1) })
    /// );
    /// ```
    pub fn try_from_cells(default: T, cells: Vec<Cell<T>>) -> Result<SparseMatrix<T>> {
        let mut seen = BTreeSet::new();
        if let Some(c) = cells.iter().find(|c| !seen.insert(c.pos)) {
            return Err(Error::DuplicateCell { pos: c.pos });
        }
        Ok(SparseMatrix::from_cells(default, cells))
    }

    /// Gets the value every unset cell reads as
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Gets the value at `pos`, or the default value if nothing is stored there
    pub fn get(&self, pos: Coordinate) -> &T {
        self.cells.get(&pos).unwrap_or(&self.default)
    }

    /// Is a non default value stored at `pos`
    pub fn contains(&self, pos: Coordinate) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Sets the value at `pos`
    ///
    /// Writing the default value removes the cell instead of storing it.
    pub fn set(&mut self, pos: Coordinate, value: T) {
        if value == self.default {
            self.remove(pos);
        } else {
            trace!("store cell {:?}", pos);
            self.cells.insert(pos, value);
        }
    }

    /// Removes the value stored at `pos` and returns it.
    ///
    /// Removing an unset position is a no-op and returns `None`.
    pub fn remove(&mut self, pos: Coordinate) -> Option<T> {
        let removed = self.cells.remove(&pos);
        if removed.is_some() {
            trace!("remove cell {:?}", pos);
        }
        removed
    }

    /// Removes every stored cell. The default value is kept.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of stored (non default) cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Is no cell stored
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Starts a chained `matrix.row(r).col(c)` access.
    ///
    /// Binding the row does not touch storage.
    pub fn row(&mut self, row: i64) -> RowAccessor<'_, T> {
        RowAccessor::new(self, row)
    }

    /// Gets an iterator over stored cells, as `(row, column, &value)`,
    /// ordered by row then column
    pub fn cells(&self) -> Cells<'_, T> {
        Cells::new(self.cells.iter())
    }

    /// Gets an iterator over the stored cells of a single row
    pub fn row_cells(&self, row: i64) -> RowCells<'_, T> {
        RowCells::new(self.cells.range((row, i64::MIN)..=(row, i64::MAX)))
    }

    /// Consumes the matrix into an iterator of `(row, column, value)`
    pub fn into_cells(self) -> IntoCells<T> {
        IntoCells::new(self.cells.into_iter())
    }

    /// Gets the smallest (top left, bottom right) rectangle holding every
    /// stored cell, or `None` if the matrix is empty
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let row_start = self.cells.keys().next()?.0;
        let row_end = self.cells.keys().next_back()?.0;
        let mut col_start = i64::MAX;
        let mut col_end = i64::MIN;
        for c in self.cells.keys().map(|p| p.1) {
            if c < col_start {
                col_start = c;
            }
            if c > col_end {
                col_end = c;
            }
        }
        Some(((row_start, col_start), (row_end, col_end)))
    }

    /// Copies the rectangle from `start` to `end` (both inclusive) into a
    /// dense `Range`.
    ///
    /// The `Range` is a snapshot: later writes to the matrix do not affect it.
    ///
    /// # Examples
    /// ```
    /// use sparsegrid::SparseMatrix;
    ///
    /// let mut matrix = SparseMatrix::new(0);
    /// matrix.set((1, 2), 7);
    /// let range = matrix.range((0, 0), (2, 2)).unwrap();
    /// assert_eq!(range.get_size(), (3, 3));
    /// assert_eq!(range[(1, 2)], 7);
    /// assert_eq!(range[(0, 0)], 0);
    /// ```
    pub fn range(&self, start: Coordinate, end: Coordinate) -> Result<Range<T>> {
        if start.0 > end.0 || start.1 > end.1 {
            return Err(Error::InvalidWindow { start, end });
        }
        let too_large = || Error::WindowTooLarge { start, end };
        let span = |a: i64, b: i64| {
            usize::try_from(i128::from(b) - i128::from(a) + 1).map_err(|_| too_large())
        };
        let height = span(start.0, end.0)?;
        let width = span(start.1, end.1)?;
        let len = height.checked_mul(width).ok_or_else(too_large)?;
        debug!("snapshot window {:?} to {:?} ({} cells)", start, end, len);

        let mut inner = Vec::new();
        inner.try_reserve_exact(len).map_err(|_| too_large())?;
        inner.resize(len, self.default.clone());
        for (&(row, col), val) in self.cells.range(start..=end) {
            if col < start.1 || col > end.1 {
                continue;
            }
            let idx = row.wrapping_sub(start.0) as u64 as usize * width
                + col.wrapping_sub(start.1) as u64 as usize;
            inner[idx] = val.clone();
        }
        Ok(Range::from_parts(start, end, self.default.clone(), inner))
    }
}

impl<T: CellType + Default> Default for SparseMatrix<T> {
    fn default() -> Self {
        SparseMatrix::new(T::default())
    }
}

impl<T: CellType> Index<Coordinate> for SparseMatrix<T> {
    type Output = T;
    fn index(&self, pos: Coordinate) -> &T {
        self.get(pos)
    }
}

impl<T: CellType> Extend<(i64, i64, T)> for SparseMatrix<T> {
    fn extend<I: IntoIterator<Item = (i64, i64, T)>>(&mut self, iter: I) {
        for (row, col, val) in iter {
            self.set((row, col), val);
        }
    }
}

impl<'a, T: CellType> IntoIterator for &'a SparseMatrix<T> {
    type Item = (i64, i64, &'a T);
    type IntoIter = Cells<'a, T>;
    fn into_iter(self) -> Cells<'a, T> {
        self.cells()
    }
}

impl<T: CellType> IntoIterator for SparseMatrix<T> {
    type Item = (i64, i64, T);
    type IntoIter = IntoCells<T>;
    fn into_iter(self) -> IntoCells<T> {
        self.into_cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_default_removes() {
        let mut m = SparseMatrix::new(-1);
        m.set((3, 4), 5);
        assert!(m.contains((3, 4)));
        m.set((3, 4), -1);
        assert!(!m.contains((3, 4)));
        assert!(m.is_empty());
    }

    #[test]
    fn test_remove_absent() {
        let mut m = SparseMatrix::new(0u8);
        assert_eq!(m.remove((i64::MIN, i64::MAX)), None);
        m.set((0, 0), 1);
        assert_eq!(m.remove((0, 0)), Some(1));
        assert_eq!(m.remove((0, 0)), None);
    }

    #[test]
    fn test_bounds() {
        let mut m = SparseMatrix::new(0);
        assert_eq!(m.bounds(), None);
        m.set((-2, 7), 1);
        m.set((5, -3), 1);
        m.set((1, 10), 1);
        assert_eq!(m.bounds(), Some(((-2, -3), (5, 10))));
    }

    #[test]
    fn test_range_errors() {
        let m = SparseMatrix::new(0);
        assert_eq!(
            m.range((2, 0), (1, 5)),
            Err(Error::InvalidWindow {
                start: (2, 0),
                end: (1, 5)
            })
        );
        assert_eq!(
            m.range((i64::MIN, i64::MIN), (i64::MAX, i64::MAX)),
            Err(Error::WindowTooLarge {
                start: (i64::MIN, i64::MIN),
                end: (i64::MAX, i64::MAX)
            })
        );
    }

    #[test]
    fn test_range_skips_outside_columns() {
        let mut m = SparseMatrix::new(0);
        m.set((1, 0), 9);
        m.set((1, 5), 9);
        m.set((1, 2), 3);
        let r = m.range((0, 1), (2, 3)).unwrap();
        assert_eq!(r.used_cells().collect::<Vec<_>>(), vec![(1, 1, &3)]);
    }
}
