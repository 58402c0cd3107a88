//! Depth-first backtracking search.
//!
//! The search repeatedly resolves the first empty cell by trialing the
//! digits in ascending order: write, check the affected units, recurse on
//! success, revert on failure. A branch that exhausts all digits reports
//! failure to its caller, which reverts its own placement in turn.
use crate::board::Board;
use crate::errors::SolveError;
use crate::{checker, locator};

/// Tries to complete `board`, leaving the first solution in search order
/// in place.
///
/// The starting board is validated up front: the per-placement checks
/// only ever look at units touched by a write, so a pre-existing conflict
/// between clues must be caught here or it could go unnoticed.
pub(crate) fn solve(board: &mut Board) -> Result<(), SolveError> {
    if !checker::is_consistent(board) {
        return Err(SolveError::InitiallyInconsistent);
    }
    if fill_next(board) {
        Ok(())
    } else {
        Err(SolveError::Unsolvable)
    }
}

// One level of the search: resolve the first empty cell, or report
// success if none remains. Every write on a failing branch is reverted
// before returning, so the board is unchanged whenever this returns false.
fn fill_next(board: &mut Board) -> bool {
    let cell = match locator::first_empty(board) {
        Some(cell) => cell,
        // all placements were checked when they were made
        None => return true,
    };

    for digit in board.dims().digits() {
        board.place(cell, digit);
        if checker::consistent_around(board, cell) && fill_next(board) {
            return true;
        }
        board.clear(cell);
    }

    false
}
