//! Turn state: the board plus whose move it is and whether a capture chain
//! is open.

use checkers_core::{Color, Move, Square};

use crate::board::crown_on_arrival;
use crate::movegen::can_jump;
use crate::rules::{Checkers, GameResult, RuleSet};
use crate::{Board, MoveList};

/// An open capture chain: the capturing piece must keep jumping from
/// `square`, and nothing else may move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaptureChain {
    /// Where the capturing piece now stands.
    pub square: Square,
    /// The largest capture count offered to the piece when it was selected.
    pub max_captures: u8,
}

/// What happened to the turn after a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The side to move has changed.
    TurnEnded,
    /// The same piece must continue capturing.
    ChainContinues,
}

/// The moves of one source square together with the largest capture count
/// among them, which decides whether a capture may open a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGroup {
    pub from: Square,
    pub moves: MoveList,
    pub max_captures: u8,
}

/// A complete game state without any selection or UI bookkeeping.
///
/// `Position` is `Copy`, so search can branch by value and never touches
/// the session it started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    chain: Option<CaptureChain>,
    result: Option<GameResult>,
    rules: Checkers,
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Checkers::default())
    }
}

impl Position {
    /// Creates the starting position, red to move.
    pub fn new(rules: Checkers) -> Self {
        Position {
            board: rules.initial_board(),
            side_to_move: Color::Red,
            chain: None,
            result: None,
            rules,
        }
    }

    /// Creates a position from an arbitrary board.
    ///
    /// The terminal check runs immediately, so a board that is already lost
    /// for one side comes back finished.
    pub fn from_board(board: Board, side_to_move: Color, rules: Checkers) -> Self {
        Position {
            board,
            side_to_move,
            chain: None,
            result: rules.game_result(&board, side_to_move),
            rules,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the open capture chain, if any.
    #[inline]
    pub fn chain(&self) -> Option<CaptureChain> {
        self.chain
    }

    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[inline]
    pub fn rules(&self) -> Checkers {
        self.rules
    }

    /// Returns the legal moves of the piece on `from`.
    ///
    /// While a chain is open only the chain square has moves, and those are
    /// captures.
    pub fn moves_from(&self, from: Square) -> MoveList {
        if self.is_game_over() {
            return MoveList::new();
        }
        match self.chain {
            Some(chain) if chain.square == from => {
                self.rules.chain_continuations(&self.board, from)
            }
            Some(_) => MoveList::new(),
            None => match self.board.piece_at(from) {
                Some(piece) if piece.color == self.side_to_move => {
                    self.rules.valid_moves(&self.board, from)
                }
                _ => MoveList::new(),
            },
        }
    }

    /// Returns the candidate moves of the side to move, grouped by source
    /// square in row-major order.
    pub fn move_groups(&self) -> Vec<MoveGroup> {
        if self.is_game_over() {
            return Vec::new();
        }
        if let Some(chain) = self.chain {
            let moves = self.rules.chain_continuations(&self.board, chain.square);
            return vec![MoveGroup {
                from: chain.square,
                moves,
                max_captures: chain.max_captures,
            }];
        }

        self.board
            .pieces(self.side_to_move)
            .into_iter()
            .filter_map(|from| {
                let moves = self.rules.valid_moves(&self.board, from);
                if moves.is_empty() {
                    return None;
                }
                let max_captures = moves.max_capture_count();
                Some(MoveGroup {
                    from,
                    moves,
                    max_captures,
                })
            })
            .collect()
    }

    /// Returns every legal move of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for group in self.move_groups() {
            moves.append(group.moves);
        }
        moves
    }

    /// Applies a move and settles the turn.
    ///
    /// `max_captures` is the largest capture count that was on offer when the
    /// piece was selected; an open chain carries its own value instead. The
    /// chain stays open only if the move captured, captured at least
    /// `max_captures` pieces, and the piece can jump again from where it
    /// landed. Otherwise the turn passes. The terminal check runs either way.
    ///
    /// The move is trusted to be legal.
    pub fn apply(&mut self, mv: Move, max_captures: u8) -> Continuation {
        let max_captures = self.chain.map_or(max_captures, |chain| chain.max_captures);
        let Some(piece) = self.board.clear(mv.from()) else {
            debug_assert!(false, "no piece on {}", mv.from());
            return Continuation::TurnEnded;
        };

        for &sq in mv.captured() {
            self.board.clear(sq);
        }
        self.board.set(mv.to(), crown_on_arrival(piece, mv.to()));

        let continues = mv.is_capture()
            && mv.capture_count() >= max_captures
            && can_jump(&self.board, mv.to());

        let continuation = if continues {
            self.chain = Some(CaptureChain {
                square: mv.to(),
                max_captures,
            });
            Continuation::ChainContinues
        } else {
            self.chain = None;
            self.side_to_move = self.side_to_move.opposite();
            Continuation::TurnEnded
        };

        self.result = self.rules.game_result(&self.board, self.side_to_move);
        continuation
    }

    /// Applies a move, taking the chain threshold from the moves its source
    /// square has right now.
    pub fn play(&mut self, mv: Move) -> Continuation {
        let max_captures = match self.chain {
            Some(chain) => chain.max_captures,
            None => self
                .rules
                .valid_moves(&self.board, mv.from())
                .max_capture_count(),
        };
        self.apply(mv, max_captures)
    }
}
