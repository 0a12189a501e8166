// SPDX-License-Identifier: MIT
//
// Copyright 2016-2025, Johann Tuffe.

//! `Error` management module
//!
//! Reads, writes and removals on a `SparseMatrix` never fail. Errors only
//! come from bulk construction and from dense window snapshots.
//! Also provides `Result` as an alias of `Result<_, Error>`.

use std::fmt;

use crate::Coordinate;

/// An error produced by a fallible `SparseMatrix` operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The same position appears twice in a coordinate list
    DuplicateCell {
        /// Offending position (row, column)
        pos: Coordinate,
    },
    /// A window whose start is not the top left corner of its end
    InvalidWindow {
        /// Requested top left position
        start: Coordinate,
        /// Requested bottom right position
        end: Coordinate,
    },
    /// A window with more cells than can be addressed in memory
    WindowTooLarge {
        /// Requested top left position
        start: Coordinate,
        /// Requested bottom right position
        end: Coordinate,
    },
}

/// Result type
pub type Result<T> = ::std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::DuplicateCell { pos } => {
                write!(f, "cell at position '{:?}' is defined more than once", pos)
            }
            Error::InvalidWindow { start, end } => write!(
                f,
                "invalid window: start '{:?}' is not above and left of end '{:?}'",
                start, end
            ),
            Error::WindowTooLarge { start, end } => write!(
                f,
                "window from '{:?}' to '{:?}' has too many cells",
                start, end
            ),
        }
    }
}

impl ::std::error::Error for Error {}
