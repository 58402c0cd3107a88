use std::fmt;

use crate::board::{Cell, CellState, Digit, Dims};
use crate::errors::{FromValuesError, GridParseError, SolveError};
use crate::{checker, solve};

/// The main structure exposing all the functionality of the library
///
/// A `Board` owns a contiguous row-major grid of [`CellState`]s together
/// with its validated [`Dims`]. Cells are addressed either by
/// `(row, col)` coordinates or by a linear [`Cell`] position.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoard", into = "RawBoard"))]
pub struct Board {
    dims: Dims,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates a completely empty board of the given dimensions.
    pub fn new(dims: Dims) -> Board {
        Board {
            dims,
            cells: vec![CellState::Empty; dims.n_cells()],
        }
    }

    /// Creates a board from a row-major slice of cell values, where `0`
    /// denotes an empty cell and `1..=n` a placed digit.
    ///
    /// This mirrors the input convention of pen-and-paper puzzle listings;
    /// inside the library a cell is always a tagged [`CellState`].
    pub fn from_values(dims: Dims, values: &[u32]) -> Result<Board, FromValuesError> {
        let size = dims.size();
        if values.len() != dims.n_cells() {
            return Err(FromValuesError::WrongLength {
                size,
                expected: dims.n_cells(),
                found: values.len(),
            });
        }
        let mut cells = Vec::with_capacity(values.len());
        for (cell, &value) in values.iter().enumerate() {
            match Digit::new_checked(value) {
                None => cells.push(CellState::Empty),
                Some(digit) if digit.fits(size) => cells.push(CellState::Filled(digit)),
                Some(_) => {
                    return Err(FromValuesError::ValueOutOfRange {
                        cell,
                        value,
                        max: size,
                    })
                }
            }
        }
        Ok(Board { dims, cells })
    }

    /// The dimensions of this board.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns the state of the cell at the given coordinates.
    ///
    /// # Panic
    /// Panics, if `row` or `col` lie outside the board.
    pub fn get(&self, row: usize, col: usize) -> CellState {
        self.state(Cell::from_coords(row, col, self.dims))
    }

    /// Writes the state of the cell at the given coordinates.
    ///
    /// # Panic
    /// Panics, if `row` or `col` lie outside the board or a placed digit
    /// exceeds the side length.
    pub fn set(&mut self, row: usize, col: usize, state: CellState) {
        if let CellState::Filled(digit) = state {
            assert!(digit.fits(self.dims.size()));
        }
        let cell = Cell::from_coords(row, col, self.dims);
        self.cells[cell.as_index()] = state;
    }

    /// Returns the state of the cell at the given position.
    ///
    /// # Panic
    /// Panics, if `cell` stems from a larger board.
    #[inline]
    pub fn state(&self, cell: Cell) -> CellState {
        self.cells[cell.as_index()]
    }

    // Solver writes bypass the digit range assert: candidates come from
    // `Dims::digits` of this very board.
    #[inline]
    pub(crate) fn place(&mut self, cell: Cell, digit: Digit) {
        self.cells[cell.as_index()] = CellState::Filled(digit);
    }

    #[inline]
    pub(crate) fn clear(&mut self, cell: Cell) {
        self.cells[cell.as_index()] = CellState::Empty;
    }

    /// Returns an iterator over the board, going from left to right, top
    /// to bottom.
    pub fn iter(&self) -> impl Iterator<Item = CellState> + '_ {
        self.cells.iter().copied()
    }

    /// Number of cells holding a digit.
    pub fn n_clues(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether every cell holds a digit.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Row-major cell values with `0` for empty cells, the inverse of
    /// [`Board::from_values`].
    pub fn to_values(&self) -> Vec<u32> {
        self.iter()
            .map(|state| state.digit().map_or(0, Digit::get))
            .collect()
    }

    /// Whether no row contains a repeated digit.
    pub fn rows_consistent(&self) -> bool {
        checker::rows_consistent(self)
    }

    /// Whether no column contains a repeated digit.
    pub fn cols_consistent(&self) -> bool {
        checker::cols_consistent(self)
    }

    /// Whether no block contains a repeated digit.
    pub fn blocks_consistent(&self) -> bool {
        checker::blocks_consistent(self)
    }

    /// Whether no row, column or block contains a repeated digit. Empty
    /// cells impose no constraint.
    pub fn is_consistent(&self) -> bool {
        checker::is_consistent(self)
    }

    /// Tries to complete the board by depth-first backtracking search.
    ///
    /// On success the board holds the completed grid. On failure the board
    /// is left exactly as it was: the starting clues are never moved and
    /// every trial placement of a failed branch is reverted.
    pub fn solve(&mut self) -> Result<(), SolveError> {
        solve::solve(self)
    }

    /// Creates a board from a text grid: one whitespace-separated row per
    /// line, `0`, `.` or `_` for empty cells. Blank lines are ignored, the
    /// side length is inferred from the first row.
    pub fn from_str_grid(s: &str) -> Result<Board, GridParseError> {
        let mut rows = s.lines().map(str::trim).filter(|line| !line.is_empty());

        let first = rows.next().ok_or(GridParseError::Empty)?;
        let first: Vec<&str> = first.split_whitespace().collect();
        let dims = Dims::new(first.len())?;
        let size = dims.size();

        let mut values = Vec::with_capacity(dims.n_cells());
        parse_row(&first, 0, size, &mut values)?;
        for row_nr in 1..size {
            let row: Vec<&str> = rows
                .next()
                .ok_or(GridParseError::NotEnoughRows {
                    found: row_nr,
                    expected: size,
                })?
                .split_whitespace()
                .collect();
            parse_row(&row, row_nr, size, &mut values)?;
        }
        if rows.next().is_some() {
            return Err(GridParseError::TooManyRows { expected: size });
        }

        // only range errors remain possible, parse_row already screened the values
        Board::from_values(dims, &values).map_err(|err| match err {
            FromValuesError::ValueOutOfRange { cell, value, .. } => {
                GridParseError::ValueOutOfRange {
                    row: cell / size,
                    value,
                    max: size,
                }
            }
            FromValuesError::WrongLength { .. } => unreachable!("row lengths already checked"),
        })
    }
}

fn parse_row(
    tokens: &[&str],
    row: usize,
    size: usize,
    values: &mut Vec<u32>,
) -> Result<(), GridParseError> {
    if tokens.len() != size {
        return Err(GridParseError::WrongRowLength {
            row,
            expected: size,
            found: tokens.len(),
        });
    }
    for &token in tokens {
        let value = match token {
            "_" | "." => 0,
            _ => token
                .parse::<u32>()
                .map_err(|_| GridParseError::InvalidEntry {
                    row,
                    token: token.to_string(),
                })?,
        };
        values.push(value);
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.dims.size();
        let block = self.dims.block();
        let width = self.dims.size().to_string().len();
        for (idx, state) in self.iter().enumerate() {
            let (row, col) = (idx / size, idx % size);
            match (row, col) {
                (0, 0) => {}
                (row, 0) if row % block == 0 => write!(f, "\n\n")?, // separate block bands
                (_, 0) => writeln!(f)?,
                (_, col) if col % block == 0 => write!(f, "  ")?, // separate block stacks
                _ => write!(f, " ")?,
            }
            match state.digit() {
                Some(digit) => write!(f, "{:>width$}", digit.get(), width = width)?,
                None => write!(f, "{:>width$}", "_", width = width)?,
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename = "Board")]
struct RawBoard {
    size: usize,
    values: Vec<u32>,
}

#[cfg(feature = "serde")]
impl std::convert::TryFrom<RawBoard> for Board {
    type Error = crate::errors::BoardDecodeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let dims = Dims::new(raw.size)?;
        Ok(Board::from_values(dims, &raw.values)?)
    }
}

#[cfg(feature = "serde")]
impl From<Board> for RawBoard {
    fn from(board: Board) -> RawBoard {
        RawBoard {
            size: board.dims().size(),
            values: board.to_values(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn dims4() -> Dims {
        Dims::new(4).unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(dims4());
        assert_eq!(board.n_clues(), 0);
        assert!(!board.is_filled());
        assert!(board.iter().all(CellState::is_empty));
    }

    #[test]
    fn from_values_roundtrip() {
        let values = [1, 2, 0, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0];
        let board = Board::from_values(dims4(), &values).unwrap();
        assert_eq!(board.n_clues(), 4);
        assert_eq!(board.to_values(), values);
    }

    #[test]
    fn from_values_wrong_length() {
        assert_eq!(
            Board::from_values(dims4(), &[0; 15]),
            Err(FromValuesError::WrongLength {
                size: 4,
                expected: 16,
                found: 15,
            })
        );
    }

    #[test]
    fn from_values_out_of_range() {
        let mut values = [0; 16];
        values[7] = 5;
        assert_eq!(
            Board::from_values(dims4(), &values),
            Err(FromValuesError::ValueOutOfRange {
                cell: 7,
                value: 5,
                max: 4,
            })
        );
    }

    #[test]
    fn get_and_set() {
        let mut board = Board::new(dims4());
        assert_eq!(board.get(2, 3), CellState::Empty);
        board.set(2, 3, CellState::Filled(Digit::new(4)));
        assert_eq!(board.get(2, 3), CellState::Filled(Digit::new(4)));
        board.set(2, 3, CellState::Empty);
        assert_eq!(board.get(2, 3), CellState::Empty);
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds() {
        let board = Board::new(dims4());
        board.get(0, 4);
    }

    #[test]
    #[should_panic]
    fn set_digit_out_of_range() {
        let mut board = Board::new(dims4());
        board.set(0, 0, CellState::Filled(Digit::new(5)));
    }

    #[test]
    fn parse_grid() {
        let board = Board::from_str_grid(
            "1 2 _ _\n\
             _ _ . 0\n\
             3 4 1 2\n\
             _ _ _ _",
        )
        .unwrap();
        assert_eq!(
            board.to_values(),
            [1, 2, 0, 0, 0, 0, 0, 0, 3, 4, 1, 2, 0, 0, 0, 0]
        );
    }

    #[test]
    fn parse_ignores_blank_lines() {
        let board = Board::from_str_grid("1 2  3 4\n3 4  1 2\n\n2 1  4 3\n4 3  2 1").unwrap();
        assert!(board.is_filled());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Board::from_str_grid("  \n"), Err(GridParseError::Empty));
        assert!(matches!(
            Board::from_str_grid("1 2 3\n4 5 6\n7 8 9"),
            Err(GridParseError::InvalidSize(_))
        ));
        assert_eq!(
            Board::from_str_grid("1 2 3 4\n1 2 3"),
            Err(GridParseError::WrongRowLength {
                row: 1,
                expected: 4,
                found: 3,
            })
        );
        assert_eq!(
            Board::from_str_grid("1 2 3 4\n4 3 2 1"),
            Err(GridParseError::NotEnoughRows {
                found: 2,
                expected: 4,
            })
        );
        assert_eq!(
            Board::from_str_grid("_ _ _ _\n_ _ _ _\n_ _ _ _\n_ _ _ _\n_ _ _ _"),
            Err(GridParseError::TooManyRows { expected: 4 })
        );
        assert_eq!(
            Board::from_str_grid("1 2 3 4\n_ _ _ x\n_ _ _ _\n_ _ _ _"),
            Err(GridParseError::InvalidEntry {
                row: 1,
                token: "x".to_string(),
            })
        );
        assert_eq!(
            Board::from_str_grid("1 2 3 4\n_ _ _ _\n_ 7 _ _\n_ _ _ _"),
            Err(GridParseError::ValueOutOfRange {
                row: 2,
                value: 7,
                max: 4,
            })
        );
    }

    #[test]
    fn display_reparses() {
        let board = Board::from_str_grid(
            "1 2 _ _\n\
             3 4 _ _\n\
             _ _ 1 2\n\
             _ _ 3 4",
        )
        .unwrap();
        let displayed = board.to_string();
        assert_eq!(Board::from_str_grid(&displayed).unwrap(), board);
    }

    #[test]
    fn display_format_4x4() {
        let board = Board::from_str_grid("1 2 _ _\n3 4 _ _\n_ _ 1 2\n_ _ 3 4").unwrap();
        assert_eq!(
            board.to_string(),
            "1 2  _ _\n3 4  _ _\n\n_ _  1 2\n_ _  3 4"
        );
    }
}
