//! Board square representation.

use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;

/// The four diagonal steps as `(row, col)` deltas, in scan order.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A square on the 8x8 board, indexed 0-63.
///
/// Squares are indexed row-major: `(0, 0)` = 0, `(0, 7)` = 7, `(7, 7)` = 63.
/// Row 0 is Black's home edge, row 7 is Red's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column.
    ///
    /// Coordinates must be in 0-7; anything else is a caller bug.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Creates a square from row and column, or `None` if either is off the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square(row as u8 * 8 + col as u8))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns true if pieces may stand on this square (`row + col` is odd).
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Returns the square `steps` diagonal steps away in direction `(dr, dc)`.
    #[inline]
    pub const fn offset(self, dir: (i8, i8), steps: i8) -> Option<Self> {
        Self::try_new(
            self.row() as i8 + dir.0 * steps,
            self.col() as i8 + dir.1 * steps,
        )
    }

    /// Returns a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> u64 {
        1u64 << self.0
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row(), self.col())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.row())?;
        tuple.serialize_element(&self.col())?;
        tuple.end()
    }
}
