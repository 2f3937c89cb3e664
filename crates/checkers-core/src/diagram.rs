//! Board diagram parsing and serialization.
//!
//! A diagram lists the eight rows from row 0 to row 7, separated by `/`.
//! Within a row, `r`/`b` are red/black men, `R`/`B` are kings, and a digit
//! 1-8 stands for that many empty squares (as in FEN).

use crate::{CaptureList, Color, Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("row {row} has {width} squares, expected 8")]
    InvalidRowWidth { row: usize, width: usize },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { ch: char, row: usize },

    #[error("piece on non-playable square {0}")]
    UnplayableSquare(Square),

    #[error("uncrowned man on its promotion row at {0}")]
    ManOnPromotionRow(Square),

    #[error("{color} has {count} pieces, at most 12 allowed")]
    TooManyPieces { color: Color, count: usize },
}

/// A parsed diagram: the pieces it places, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramParser {
    pub placements: Vec<(Square, Piece)>,
}

impl DiagramParser {
    /// The standard starting position: black men on rows 0-2, red men on rows 5-7.
    pub const STARTPOS: &'static str =
        "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1";

    /// The empty board.
    pub const EMPTY: &'static str = "8/8/8/8/8/8/8/8";

    /// Pieces one side may have; a move can never capture more.
    pub const MAX_PIECES: usize = CaptureList::MAX_CAPTURES;

    /// Parses a diagram string.
    ///
    /// Surrounding whitespace and whitespace between rows is ignored, so
    /// diagrams may be written one row per line.
    pub fn parse(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = diagram.split('/').map(str::trim).collect();
        if rows.len() != 8 {
            return Err(DiagramError::InvalidRowCount(rows.len()));
        }

        let mut placements = Vec::new();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run as usize;
                } else if ch == '.' {
                    col += 1;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if col < 8 {
                        let sq = Square::new(row as u8, col as u8);
                        Self::validate_placement(sq, piece)?;
                        placements.push((sq, piece));
                    }
                    col += 1;
                } else {
                    return Err(DiagramError::InvalidCharacter { ch, row });
                }
            }
            if col != 8 {
                return Err(DiagramError::InvalidRowWidth { row, width: col });
            }
        }

        for color in Color::ALL {
            let count = placements.iter().filter(|(_, p)| p.color == color).count();
            if count > Self::MAX_PIECES {
                return Err(DiagramError::TooManyPieces { color, count });
            }
        }

        Ok(DiagramParser { placements })
    }

    fn validate_placement(sq: Square, piece: Piece) -> Result<(), DiagramError> {
        if !sq.is_playable() {
            return Err(DiagramError::UnplayableSquare(sq));
        }
        if !piece.is_king() && sq.row() == piece.color.promotion_row() {
            return Err(DiagramError::ManOnPromotionRow(sq));
        }
        Ok(())
    }

    /// Writes a diagram for the given cell contents, indexed by [`Square::index`].
    pub fn format(cells: &[Option<Piece>; 64]) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..8u8 {
            let mut empty = 0;
            for col in 0..8u8 {
                match cells[Square::new(row, col).index() as usize] {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}
