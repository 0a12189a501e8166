// SPDX-License-Identifier: MIT
//
// Copyright 2016-2025, Johann Tuffe.

//! Serde support for `SparseMatrix`
//!
//! A matrix is written as its default value and the list of stored cells:
//! `{"default": 0, "cells": [[row, col, value], ...]}`.
//! Reading goes through `SparseMatrix::set`, so cells holding the default
//! are dropped rather than stored.

use log::debug;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{CellType, SparseMatrix};

struct CellsSer<'a, T: CellType>(&'a SparseMatrix<T>);

impl<T: CellType + Serialize> Serialize for CellsSer<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.cells())
    }
}

impl<T: CellType + Serialize> Serialize for SparseMatrix<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("SparseMatrix", 2)?;
        s.serialize_field("default", self.default_value())?;
        s.serialize_field("cells", &CellsSer(self))?;
        s.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "SparseMatrix")]
struct MatrixRepr<T> {
    default: T,
    #[serde(default = "Vec::new")]
    cells: Vec<(i64, i64, T)>,
}

impl<'de, T: CellType + Deserialize<'de>> Deserialize<'de> for SparseMatrix<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::<T>::deserialize(deserializer)?;
        debug!("deserialize matrix with {} cells", repr.cells.len());
        let mut matrix = SparseMatrix::new(repr.default);
        matrix.extend(repr.cells);
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_layout() {
        let mut m = SparseMatrix::new(0);
        m.set((1, 2), 3);
        m.set((0, 5), 4);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"default":0,"cells":[[0,5,4],[1,2,3]]}"#);
    }

    #[test]
    fn test_default_cells_are_dropped() {
        let m: SparseMatrix<i32> =
            serde_json::from_str(r#"{"default":-1,"cells":[[0,0,-1],[2,2,7]]}"#).unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.get((2, 2)), &7);
        assert_eq!(m.get((0, 0)), &-1);
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    enum Tile {
        Wall,
        Floor,
    }

    #[test]
    fn test_value_without_default_impl() {
        let m: SparseMatrix<Tile> =
            serde_json::from_str(r#"{"default":"Floor","cells":[[1,1,"Wall"],[2,2,"Floor"]]}"#)
                .unwrap();
        assert_eq!(m.len(), 1);
        assert_eq!(m.get((1, 1)), &Tile::Wall);
        assert_eq!(m.get((2, 2)), &Tile::Floor);

        let m: SparseMatrix<Tile> = serde_json::from_str(r#"{"default":"Wall"}"#).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.default_value(), &Tile::Wall);
    }

    #[test]
    fn test_missing_cells() {
        let m: SparseMatrix<String> = serde_json::from_str(r#"{"default":"-"}"#).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.default_value(), "-");
    }
}
