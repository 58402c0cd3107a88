//! Locating the next cell for the solver to resolve.
use crate::board::{Board, Cell};

/// Returns the position of the first empty cell in row-major order, or
/// `None` if the board is completely filled.
///
/// The scan order fixes the shape of the search tree and thereby which
/// solution is found first when several exist.
pub(crate) fn first_empty(board: &Board) -> Option<Cell> {
    Cell::all(board.dims()).find(|&cell| board.state(cell).is_empty())
}
