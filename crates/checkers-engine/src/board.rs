//! Board model: piece placement on the 8x8 grid.

use checkers_core::{Color, DiagramError, DiagramParser, Piece, PieceKind, Square};
use std::fmt;

use crate::Bitboard;

/// The 8x8 checkers grid.
///
/// Stored as three bitboards (red, black, kings), so a board is a 24-byte
/// `Copy` value and cheap to snapshot. Only playable squares are occupied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares occupied by each color, indexed by [`Color::index`].
    colors: [Bitboard; 2],
    /// Squares holding a king of either color.
    kings: Bitboard,
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board {
            colors: [Bitboard::EMPTY; 2],
            kings: Bitboard::EMPTY,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let mut board = Self::empty();
        board.populate_start_position();
        board
    }

    /// Places men on the playable squares of the three rows nearest each
    /// edge: black on rows 0-2, red on rows 5-7. Rows 3-4 are left as they are.
    pub fn populate_start_position(&mut self) {
        let black = Bitboard::rows(0, 2) & Bitboard::PLAYABLE;
        let red = Bitboard::rows(5, 7) & Bitboard::PLAYABLE;
        for sq in black {
            self.set(sq, Piece::man(Color::Black));
        }
        for sq in red {
            self.set(sq, Piece::man(Color::Red));
        }
    }

    /// Creates a board from a diagram string.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let parsed = DiagramParser::parse(diagram)?;
        let mut board = Self::empty();
        for (sq, piece) in parsed.placements {
            board.set(sq, piece);
        }
        Ok(board)
    }

    /// Converts the board to a diagram string.
    pub fn to_diagram(&self) -> String {
        let mut cells = [None; 64];
        for sq in self.occupied() {
            cells[sq.index() as usize] = self.piece_at(sq);
        }
        DiagramParser::format(&cells)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let color = if self.colors[Color::Red.index()].contains(sq) {
            Color::Red
        } else if self.colors[Color::Black.index()].contains(sq) {
            Color::Black
        } else {
            return None;
        };
        let kind = if self.kings.contains(sq) {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Piece { color, kind })
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }

    /// Places a piece, replacing whatever was on the square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        debug_assert!(sq.is_playable(), "piece placed on unplayable {sq}");
        self.clear(sq);
        self.colors[piece.color.index()].set(sq);
        if piece.is_king() {
            self.kings.set(sq);
        }
    }

    /// Empties the square, returning the piece that was on it.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq);
        self.colors[0].clear(sq);
        self.colors[1].clear(sq);
        self.kings.clear(sq);
        piece
    }

    /// Returns a bitboard of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    /// Returns a bitboard of the squares occupied by the given color.
    #[inline]
    pub fn pieces(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    /// Returns a bitboard of the given color's kings.
    #[inline]
    pub fn kings(&self, color: Color) -> Bitboard {
        self.colors[color.index()] & self.kings
    }

    /// Returns a bitboard of the given color's men.
    #[inline]
    pub fn men(&self, color: Color) -> Bitboard {
        self.colors[color.index()] & !self.kings
    }

    /// Returns how many pieces the given color has left.
    #[inline]
    pub fn piece_count(&self, color: Color) -> u32 {
        self.colors[color.index()].count()
    }
}

/// Returns the piece as it stands after arriving on `sq`: a man reaching its
/// promotion row is crowned, anything else is unchanged.
#[inline]
pub fn crown_on_arrival(piece: Piece, sq: Square) -> Piece {
    if !piece.is_king() && sq.row() == piece.color.promotion_row() {
        piece.crowned()
    } else {
        piece
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_diagram())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for row in 0..8u8 {
            write!(f, "{}", row)?;
            for col in 0..8u8 {
                let c = match self.piece_at(Square::new(row, col)) {
                    Some(piece) => piece.to_char(),
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert!(board.occupied().is_empty());
        for index in 0..64 {
            let sq = Square::from_index(index).unwrap();
            assert_eq!(board.piece_at(sq), None);
        }
    }

    #[test]
    fn startpos_layout() {
        let board = Board::startpos();
        assert_eq!(board.piece_count(Color::Red), 12);
        assert_eq!(board.piece_count(Color::Black), 12);
        assert!(board.kings(Color::Red).is_empty());
        assert!(board.kings(Color::Black).is_empty());
        for sq in board.occupied() {
            assert!(sq.is_playable());
            let piece = board.piece_at(sq).unwrap();
            match piece.color {
                Color::Black => assert!(sq.row() <= 2),
                Color::Red => assert!(sq.row() >= 5),
            }
        }
        assert_eq!(board.to_diagram(), DiagramParser::STARTPOS);
    }

    #[test]
    fn set_replaces_and_clear_returns() {
        let mut board = Board::empty();
        let sq = Square::new(4, 3);
        board.set(sq, Piece::king(Color::Black));
        assert_eq!(board.piece_at(sq), Some(Piece::king(Color::Black)));
        board.set(sq, Piece::man(Color::Red));
        assert_eq!(board.piece_at(sq), Some(Piece::man(Color::Red)));
        assert!(board.kings(Color::Black).is_empty());
        assert_eq!(board.clear(sq), Some(Piece::man(Color::Red)));
        assert!(board.is_vacant(sq));
        assert_eq!(board.clear(sq), None);
    }

    #[test]
    fn men_and_kings_partition_color() {
        let board = Board::from_diagram("8/8/8/2b5/3R4/8/8/8").unwrap();
        assert_eq!(board.men(Color::Black).count(), 1);
        assert_eq!(board.kings(Color::Red).count(), 1);
        assert!(board.men(Color::Red).is_empty());
    }

    #[test]
    fn crowning() {
        let red = Piece::man(Color::Red);
        assert_eq!(crown_on_arrival(red, Square::new(0, 3)), red.crowned());
        assert_eq!(crown_on_arrival(red, Square::new(7, 2)), red);
        let black = Piece::man(Color::Black);
        assert_eq!(crown_on_arrival(black, Square::new(7, 2)), black.crowned());
        let king = Piece::king(Color::Red);
        assert_eq!(crown_on_arrival(king, Square::new(7, 2)), king);
    }

    #[test]
    fn display_grid() {
        let board = Board::from_diagram("8/8/8/8/8/8/8/r7").unwrap();
        let text = board.to_string();
        assert!(text.starts_with("  0 1 2 3 4 5 6 7\n"));
        assert!(text.ends_with("7 r . . . . . . .\n"));
    }
}
