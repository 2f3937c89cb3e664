//! Flying-king checkers with optional captures.

use super::{CaptureChains, GameResult, RuleSet, WinReason};
use crate::movegen;
use crate::{Board, MoveList};
use checkers_core::{Color, Square};
use serde::{Deserialize, Serialize};

/// The rules played by this crate.
///
/// - Men step diagonally forward and capture in all four directions.
/// - Kings fly along diagonals, both when moving and when capturing.
/// - Capturing is never compulsory, and partial capture chains are legal.
/// - A man is crowned on its promotion row, also in the middle of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Checkers {
    #[serde(default)]
    pub capture_chains: CaptureChains,
}

impl Checkers {
    /// Creates the rules with the given capture-chain mode.
    pub const fn new(capture_chains: CaptureChains) -> Self {
        Checkers { capture_chains }
    }
}

impl RuleSet for Checkers {
    fn initial_board(&self) -> Board {
        Board::startpos()
    }

    fn valid_moves(&self, board: &Board, from: Square) -> MoveList {
        movegen::valid_moves(board, from, self.capture_chains)
    }

    fn piece_captures(&self, board: &Board, from: Square) -> MoveList {
        movegen::piece_captures(board, from, self.capture_chains)
    }

    fn chain_continuations(&self, board: &Board, from: Square) -> MoveList {
        movegen::chain_continuations(board, from, self.capture_chains)
    }

    fn side_moves(&self, board: &Board, color: Color) -> MoveList {
        movegen::side_moves(board, color, self.capture_chains)
    }

    fn has_any_valid_moves(&self, board: &Board, color: Color) -> bool {
        movegen::has_any_valid_moves(board, color)
    }

    fn game_result(&self, board: &Board, to_move: Color) -> Option<GameResult> {
        for color in Color::ALL {
            if board.piece_count(color) == 0 {
                return Some(GameResult {
                    winner: color.opposite(),
                    reason: WinReason::NoPieces,
                });
            }
        }

        if !self.has_any_valid_moves(board, to_move) {
            return Some(GameResult {
                winner: to_move.opposite(),
                reason: WinReason::NoMoves,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_board() {
        let board = Checkers::default().initial_board();
        assert_eq!(board, Board::startpos());
    }

    #[test]
    fn no_result_at_start() {
        let rules = Checkers::default();
        let board = rules.initial_board();
        assert_eq!(rules.game_result(&board, Color::Red), None);
        assert_eq!(rules.game_result(&board, Color::Black), None);
    }

    #[test]
    fn empty_side_loses_regardless_of_turn() {
        let rules = Checkers::default();
        let board = Board::from_diagram("8/8/8/8/8/8/8/r7").unwrap();
        for to_move in Color::ALL {
            assert_eq!(
                rules.game_result(&board, to_move),
                Some(GameResult {
                    winner: Color::Red,
                    reason: WinReason::NoPieces,
                })
            );
        }
    }

    #[test]
    fn side_without_moves_loses() {
        let rules = Checkers::default();
        let board = Board::from_diagram("1b6/R1R5/3R4/8/8/8/8/8").unwrap();
        let result = rules.game_result(&board, Color::Black).unwrap();
        assert_eq!(result.winner(), Color::Red);
        assert_eq!(result.loser(), Color::Black);
        assert_eq!(result.reason, WinReason::NoMoves);
        // Red to move is not stuck.
        assert_eq!(rules.game_result(&board, Color::Red), None);
    }

    #[test]
    fn capture_chain_mode_changes_captures() {
        let board = Board::from_diagram("8/8/8/8/3b4/8/1b6/r7").unwrap();
        let from = Square::new(7, 0);
        let expanded = Checkers::new(CaptureChains::Expanded);
        let stepwise = Checkers::new(CaptureChains::Stepwise);
        assert_eq!(expanded.piece_captures(&board, from).len(), 2);
        assert_eq!(stepwise.piece_captures(&board, from).len(), 1);
    }
}
