#![warn(missing_docs)]
//! The ndoku library
//!
//! ## Overview
//!
//! ndoku solves sudoku boards of any side length by exhaustive
//! backtracking search. The side length `n` must be a positive perfect
//! square; its square root is the dimension of the blocks that, like the
//! rows and columns, must not contain a repeated digit.
//!
//! ## Example
//!
//! ```
//! use ndoku::{Board, Dims};
//!
//! let grid = "\
//! 1 2 _ _
//! 3 4 _ _
//! _ _ 1 2
//! _ _ 3 4";
//!
//! // Boards can be created from text grids or from rows of values,
//! // with 0 denoting an empty cell.
//! let mut board = Board::from_str_grid(grid).unwrap();
//! let same_board = Board::from_values(
//!     Dims::new(4).unwrap(),
//!     &[1, 2, 0, 0, 3, 4, 0, 0, 0, 0, 1, 2, 0, 0, 3, 4],
//! )
//! .unwrap();
//! assert_eq!(board, same_board);
//!
//! // Solving fills the board in place.
//! board.solve().unwrap();
//! assert!(board.is_filled() && board.is_consistent());
//! println!("{}", board);
//! ```
//!
//! Solving reports failure as a value, not a panic: an over-constrained
//! board yields [`SolveError::Unsolvable`] and a board whose clues already
//! clash yields [`SolveError::InitiallyInconsistent`], in both cases
//! leaving the board untouched.

mod board;
mod checker;
mod errors;
mod locator;
mod solve;

pub use crate::board::{Block, Board, Cell, CellState, Col, Digit, Dims, Row};
#[cfg(feature = "serde")]
pub use crate::errors::BoardDecodeError;
pub use crate::errors::{
    FromValuesError, GridParseError, InvalidSizeError, SolveError,
};
