//! Types for the board, its cells and their positions
mod board;
mod cell_state;
mod digit;
mod dims;
pub mod position;

pub use self::{
    board::Board,
    cell_state::CellState,
    digit::Digit,
    dims::Dims,
    position::{Block, Cell, Col, Row},
};
