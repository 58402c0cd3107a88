use crate::board::{Block, Col, Digit, Row};
use crate::errors::InvalidSizeError;

/// Validated dimensions of a board: the side length and the block
/// dimension, its integer square root.
///
/// A `Dims` can only be obtained through [`Dims::new`], so holding one
/// proves the side length is a positive perfect square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct Dims {
    size: usize,
    block: usize,
}

impl Dims {
    /// Validates a side length and computes the block dimension.
    ///
    /// Returns an error if `size` is zero, has no integer square root or
    /// does not fit the digit range.
    pub fn new(size: usize) -> Result<Self, InvalidSizeError> {
        // digits are stored as u32
        if size == 0 || size > u32::MAX as usize {
            return Err(InvalidSizeError(size));
        }
        let block = isqrt(size);
        if block * block != size {
            return Err(InvalidSizeError(size));
        }
        Ok(Dims { size, block })
    }

    /// Side length of the board, i.e. the number of rows, columns and
    /// blocks, and the largest digit.
    #[inline]
    pub fn size(self) -> usize {
        self.size
    }

    /// Side length of a block, the integer square root of [`size`](Self::size).
    #[inline]
    pub fn block(self) -> usize {
        self.block
    }

    /// Total number of cells of the board.
    #[inline]
    pub fn n_cells(self) -> usize {
        self.size * self.size
    }

    /// Returns an iterator over all digits in ascending order.
    pub fn digits(self) -> impl Iterator<Item = Digit> {
        (1..=self.size as u32).map(Digit::new)
    }

    /// Returns an iterator over all rows, top to bottom.
    pub fn rows(self) -> impl Iterator<Item = Row> {
        (0..self.size).map(Row)
    }

    /// Returns an iterator over all columns, left to right.
    pub fn cols(self) -> impl Iterator<Item = Col> {
        (0..self.size).map(Col)
    }

    /// Returns an iterator over all blocks, left to right, top to bottom.
    pub fn blocks(self) -> impl Iterator<Item = Block> {
        (0..self.size).map(Block)
    }
}

impl std::convert::TryFrom<usize> for Dims {
    type Error = InvalidSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Dims::new(size)
    }
}

impl From<Dims> for usize {
    fn from(dims: Dims) -> usize {
        dims.size
    }
}

// float sqrt can land next to the true root for large inputs,
// walk to the exact floor
fn isqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
