//! Checkers piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The rank of a checkers piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Man = 0,
    King = 1,
}

/// A piece on the board: a color and a rank.
///
/// Pieces carry no identity; two red men are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a man of the given color.
    #[inline]
    pub const fn man(color: Color) -> Self {
        Piece {
            color,
            kind: PieceKind::Man,
        }
    }

    /// Creates a king of the given color.
    #[inline]
    pub const fn king(color: Color) -> Self {
        Piece {
            color,
            kind: PieceKind::King,
        }
    }

    /// Returns true if this piece is a king.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Returns this piece in king form.
    #[inline]
    pub const fn crowned(self) -> Self {
        Piece::king(self.color)
    }

    /// Returns the diagram character for this piece.
    ///
    /// Men are lowercase, kings uppercase: `r`, `R`, `b`, `B`.
    pub const fn to_char(self) -> char {
        match (self.color, self.kind) {
            (Color::Red, PieceKind::Man) => 'r',
            (Color::Red, PieceKind::King) => 'R',
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
        }
    }

    /// Parses a diagram character into a piece.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Piece::man(Color::Red)),
            'R' => Some(Piece::king(Color::Red)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            PieceKind::Man => "man",
            PieceKind::King => "king",
        };
        write!(f, "{} {}", self.color, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_chars() {
        assert_eq!(Piece::man(Color::Red).to_char(), 'r');
        assert_eq!(Piece::king(Color::Red).to_char(), 'R');
        assert_eq!(Piece::man(Color::Black).to_char(), 'b');
        assert_eq!(Piece::king(Color::Black).to_char(), 'B');
        assert_eq!(Piece::from_char('B'), Some(Piece::king(Color::Black)));
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('.'), None);
    }

    #[test]
    fn crowning_keeps_color() {
        let man = Piece::man(Color::Black);
        assert!(!man.is_king());
        let king = man.crowned();
        assert!(king.is_king());
        assert_eq!(king.color, Color::Black);
        assert_eq!(king.crowned(), king);
    }

    #[test]
    fn display() {
        assert_eq!(Piece::king(Color::Red).to_string(), "Red king");
    }
}
