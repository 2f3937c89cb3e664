//! Static evaluation.
//!
//! Scores are in half-points so that a king's point and a half stays an
//! integer.

use checkers_core::Color;
use checkers_engine::Board;

/// A man is worth one point.
pub const MAN_VALUE: i32 = 2;
/// A king is worth a point and a half.
pub const KING_VALUE: i32 = 3;

/// Returns the material of `color` in half-points.
pub fn material(board: &Board, color: Color) -> i32 {
    board.men(color).count() as i32 * MAN_VALUE + board.kings(color).count() as i32 * KING_VALUE
}

/// Returns the material balance from `ai_color`'s side: its material minus
/// the opponent's. Positive is good for the AI.
pub fn evaluate_state(board: &Board, ai_color: Color) -> i32 {
    material(board, ai_color) - material(board, ai_color.opposite())
}
