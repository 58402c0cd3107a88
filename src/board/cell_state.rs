use crate::board::Digit;

/// Contains either a placed digit or nothing for an empty cell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// No digit has been placed in the cell
    Empty,
    /// The cell holds a digit
    Filled(Digit),
}

impl CellState {
    /// The placed digit, if any.
    #[inline]
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Filled(digit) => Some(digit),
            CellState::Empty => None,
        }
    }

    /// Whether no digit has been placed.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}
