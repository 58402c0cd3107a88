//! Errors reported by board construction, parsing and solving.
#[cfg(doc)]
use crate::{Board, Dims};

/// Error for [`Dims::new`]
///
/// A board side length must be positive and have an integer square root,
/// otherwise the grid cannot be partitioned into square blocks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("board side length must be a positive perfect square, got {0}")]
pub struct InvalidSizeError(pub usize);

/// Error for [`Board::from_values`]
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum FromValuesError {
    /// Slice length is not the number of cells of the board
    #[error("value slice should have length {expected} for a {size}x{size} board, found {found}")]
    WrongLength {
        /// Side length of the board the values were meant for
        size: usize,
        /// Number of cells of that board
        expected: usize,
        /// Length of the supplied slice
        found: usize,
    },
    /// A value lies outside `0..=size` (`0` marks an empty cell)
    #[error("cell {cell} holds {value}, valid values are 1..={max} and 0 for an empty cell")]
    ValueOutOfRange {
        /// Index of the offending cell, row-major from the top left
        cell: usize,
        /// The out of range value
        value: u32,
        /// Largest digit the board accepts, i.e. its side length
        max: usize,
    },
}

/// Error for [`Board::from_str_grid`]
///
/// The expected format is one whitespace-separated row per line, with
/// `0`, `.` or `_` for empty cells. The side length is inferred from the
/// first row.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum GridParseError {
    /// Input contains no rows
    #[error("input contains no rows")]
    Empty,
    /// The inferred side length is not a positive perfect square
    #[error(transparent)]
    InvalidSize(#[from] InvalidSizeError),
    /// A row contains more or fewer entries than the first row
    #[error("row {row} has {found} entries, expected {expected}")]
    WrongRowLength {
        /// Row index from 0, topmost row is 0
        row: usize,
        /// Entry count of the first row
        expected: usize,
        /// Entry count of the offending row
        found: usize,
    },
    /// Input ends before every row of the grid was supplied
    #[error("found {found} rows, expected {expected}")]
    NotEnoughRows {
        /// Number of rows encountered
        found: usize,
        /// Side length inferred from the first row
        expected: usize,
    },
    /// A non-empty line follows the completed grid
    #[error("too many rows, expected {expected}")]
    TooManyRows {
        /// Side length inferred from the first row
        expected: usize,
    },
    /// An entry is neither a number nor an empty-cell placeholder
    #[error("row {row} contains invalid entry {token:?}")]
    InvalidEntry {
        /// Row index from 0, topmost row is 0
        row: usize,
        /// The offending token
        token: String,
    },
    /// An entry is a number greater than the side length
    #[error("row {row}: value {value} exceeds the maximum digit {max}")]
    ValueOutOfRange {
        /// Row index from 0, topmost row is 0
        row: usize,
        /// The out of range value
        value: u32,
        /// Largest digit the board accepts, i.e. its side length
        max: usize,
    },
}

/// Error for [`Board::solve`]
///
/// Both variants leave the board exactly as it was passed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SolveError {
    /// The starting board already violates a row, column or block rule
    #[error("the starting board already violates a row, column or block rule")]
    InitiallyInconsistent,
    /// Every candidate placement was exhausted without completing the grid
    #[error("the board has no solution")]
    Unsolvable,
}

/// Error when deserializing a [`Board`] from its raw representation
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardDecodeError {
    /// The stored side length is invalid
    #[error(transparent)]
    InvalidSize(#[from] InvalidSizeError),
    /// The stored cell values do not fit the stored side length
    #[error(transparent)]
    InvalidValues(#[from] FromValuesError),
}
