//! Duplicate checks over the three unit families of a board.
//!
//! A unit (row, column or block) is consistent if its placed digits
//! contain no repeats; empty cells impose no constraint. Each check copies
//! the unit's digits into a scratch vector, sorts it and scans adjacent
//! pairs for an equal pair.
use crate::board::{Board, Cell, Digit};

pub(crate) fn rows_consistent(board: &Board) -> bool {
    let dims = board.dims();
    dims.rows().all(|row| unit_consistent(board, row.cells(dims)))
}

pub(crate) fn cols_consistent(board: &Board) -> bool {
    let dims = board.dims();
    dims.cols().all(|col| unit_consistent(board, col.cells(dims)))
}

pub(crate) fn blocks_consistent(board: &Board) -> bool {
    let dims = board.dims();
    dims.blocks()
        .all(|block| unit_consistent(board, block.cells(dims)))
}

pub(crate) fn is_consistent(board: &Board) -> bool {
    rows_consistent(board) && cols_consistent(board) && blocks_consistent(board)
}

/// Checks only the row, column and block containing `cell`.
///
/// If the board was consistent before the last write to `cell`, these
/// three units are the only ones that can have become inconsistent, so
/// this check reaches the same verdict as [`is_consistent`].
pub(crate) fn consistent_around(board: &Board, cell: Cell) -> bool {
    let dims = board.dims();
    unit_consistent(board, cell.row(dims).cells(dims))
        && unit_consistent(board, cell.col(dims).cells(dims))
        && unit_consistent(board, cell.block(dims).cells(dims))
}

fn unit_consistent(board: &Board, cells: impl Iterator<Item = Cell>) -> bool {
    let mut digits: Vec<Digit> = cells.filter_map(|cell| board.state(cell).digit()).collect();
    digits.sort_unstable();
    digits.windows(2).all(|pair| pair[0] != pair[1])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Dims;

    fn board4(values: [u32; 16]) -> Board {
        Board::from_values(Dims::new(4).unwrap(), &values).unwrap()
    }

    #[test]
    fn empty_board_is_consistent() {
        let board = Board::new(Dims::new(9).unwrap());
        assert!(is_consistent(&board));
    }

    #[test]
    fn duplicate_in_row() {
        let board = board4([1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(!rows_consistent(&board));
        assert!(cols_consistent(&board));
        assert!(blocks_consistent(&board));
        assert!(!is_consistent(&board));
    }

    #[test]
    fn duplicate_in_col() {
        let board = board4([2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0]);
        assert!(rows_consistent(&board));
        assert!(!cols_consistent(&board));
        assert!(blocks_consistent(&board));
    }

    #[test]
    fn duplicate_in_block_only() {
        // 3s share the top left block but neither a row nor a column
        let board = board4([3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(rows_consistent(&board));
        assert!(cols_consistent(&board));
        assert!(!blocks_consistent(&board));
        assert!(!is_consistent(&board));
    }

    #[test]
    fn repeated_empty_cells_are_no_conflict() {
        let board = board4([1, 2, 3, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(is_consistent(&board));
    }

    #[test]
    fn localized_check_agrees_with_full_check() {
        let boards = [
            [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0],
            [3, 0, 0, 0, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            [1, 2, 3, 4, 3, 4, 1, 2, 2, 1, 4, 3, 4, 3, 2, 1],
            [0; 16],
        ];
        // every unit contains some cell, so the conjunction over all cells
        // covers the whole board
        for values in &boards {
            let board = board4(*values);
            let dims = board.dims();
            let all_local = Cell::all(dims).all(|cell| consistent_around(&board, cell));
            assert_eq!(all_local, is_consistent(&board));
        }
    }
}
