//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two sides in checkers.
///
/// Red starts on rows 5-7 and moves toward row 0; Black starts on rows 0-2
/// and moves toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// Both colors, Red first (Red moves first).
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Returns the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row step of a forward move for this color (-1 for Red, +1 for Black).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Red => -1,
            Color::Black => 1,
        }
    }

    /// Returns the row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => 7,
        }
    }

    /// Returns the row this color starts nearest to.
    #[inline]
    pub const fn home_row(self) -> u8 {
        self.opposite().promotion_row()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_color() {
        assert_eq!(Color::Red.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::Red);
    }

    #[test]
    fn forward_points_at_promotion_row() {
        for color in Color::ALL {
            let home = color.home_row() as i8;
            let target = color.promotion_row() as i8;
            assert_eq!((target - home).signum(), color.forward());
        }
    }

    #[test]
    fn rows() {
        assert_eq!(Color::Red.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
        assert_eq!(Color::Red.home_row(), 7);
        assert_eq!(Color::Black.home_row(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::Red), "Red");
        assert_eq!(format!("{}", Color::Black), "Black");
    }
}
