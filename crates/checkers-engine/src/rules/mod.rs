//! Rule set abstraction.
//!
//! The [`RuleSet`] trait gathers the questions the game state asks about a
//! board: which moves a piece has, which captures continue a chain, and
//! whether the game is over. [`Checkers`] answers them for the flying-king
//! rules this crate plays.

mod standard;

pub use standard::Checkers;

use crate::{Board, MoveList};
use checkers_core::{Color, Square};
use serde::{Deserialize, Serialize};

/// How capture trees are offered as moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureChains {
    /// Every node of the capture tree is a move of its own, so a whole
    /// multi-jump sequence can be played at once.
    #[default]
    Expanded,
    /// Only single jumps are moves; longer sequences are played jump by jump
    /// while the chain stays open.
    Stepwise,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinReason {
    /// The loser has no pieces left.
    NoPieces,
    /// The loser was to move and had no legal move.
    NoMoves,
}

/// Result of a finished game. Checkers as played here has no draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Color,
    pub reason: WinReason,
}

impl GameResult {
    /// Returns the winning color.
    #[inline]
    pub fn winner(&self) -> Color {
        self.winner
    }

    /// Returns the losing color.
    #[inline]
    pub fn loser(&self) -> Color {
        self.winner.opposite()
    }
}

/// Trait for the rules of a checkers variant.
///
/// # Example
///
/// ```
/// use checkers_engine::rules::{Checkers, RuleSet};
/// use checkers_core::Color;
///
/// let rules = Checkers::default();
/// let board = rules.initial_board();
/// assert_eq!(rules.side_moves(&board, Color::Red).len(), 7);
/// ```
pub trait RuleSet {
    /// Returns the starting board.
    fn initial_board(&self) -> Board;

    /// Returns the legal moves of the piece on `from` at the start of a turn.
    fn valid_moves(&self, board: &Board, from: Square) -> MoveList;

    /// Returns the capture moves of the piece on `from`.
    fn piece_captures(&self, board: &Board, from: Square) -> MoveList;

    /// Returns the moves that continue an open capture chain on `from`.
    fn chain_continuations(&self, board: &Board, from: Square) -> MoveList;

    /// Returns every legal move of `color`.
    fn side_moves(&self, board: &Board, color: Color) -> MoveList;

    /// Returns true if `color` has at least one legal move.
    fn has_any_valid_moves(&self, board: &Board, color: Color) -> bool;

    /// Returns the game result if the game is over with `to_move` on move.
    ///
    /// A color with no pieces loses first; otherwise the side to move loses
    /// when it cannot move.
    fn game_result(&self, board: &Board, to_move: Color) -> Option<GameResult>;

    /// Returns true if the game is over.
    fn is_game_over(&self, board: &Board, to_move: Color) -> bool {
        self.game_result(board, to_move).is_some()
    }
}
