//! The interactive game session.
//!
//! [`GameSession`] wraps a [`Position`] with what a front end needs between
//! clicks: the selected piece, its cached legal moves, the snapshot taken at
//! selection time, and the last move played. Every operation is total:
//! input that does not fit the current state is ignored and reported with
//! `false`.

use checkers_core::{Color, Move, Square};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::movegen::has_captures_available;
use crate::position::{Continuation, Position};
use crate::rules::{Checkers, GameResult, WinReason};
use crate::{Board, MoveList};

/// Where the session stands between inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing is selected.
    AwaitingSelection,
    /// A piece is selected and its moves are cached.
    PieceSelected,
    /// A capture chain is open; only the chain piece may continue capturing.
    CaptureChain,
    /// The game is over.
    GameOver,
}

/// A snapshot of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub current_player: Color,
    pub phase: Phase,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub win_reason: Option<WinReason>,
    pub selected: Option<Square>,
    pub legal_moves: Vec<Move>,
    pub must_capture: bool,
    pub last_move: Option<(Square, Square)>,
}

/// A game in progress, driven by selections and moves.
#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    selected: Option<Square>,
    valid_moves: MoveList,
    /// The selected piece's moves as they were when it was selected.
    snapshot: MoveList,
    last_move: Option<(Square, Square)>,
    must_capture: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Starts a game from the standard position with the default rules.
    pub fn new() -> Self {
        Self::with_rules(Checkers::default())
    }

    /// Starts a game from the standard position.
    pub fn with_rules(rules: Checkers) -> Self {
        Self::from_position(Position::new(rules))
    }

    /// Starts a session from an arbitrary position.
    ///
    /// If the position has an open capture chain, the chain piece comes
    /// selected with its continuations cached.
    pub fn from_position(position: Position) -> Self {
        let must_capture = has_captures_available(position.board(), position.side_to_move());
        let (selected, valid_moves) = match position.chain() {
            Some(chain) => (Some(chain.square), position.moves_from(chain.square)),
            None => (None, MoveList::new()),
        };
        GameSession {
            position,
            selected,
            snapshot: valid_moves.clone(),
            valid_moves,
            last_move: None,
            must_capture,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn current_player(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn rules(&self) -> Checkers {
        self.position.rules()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the cached legal moves of the selected piece.
    pub fn valid_moves(&self) -> &MoveList {
        &self.valid_moves
    }

    /// Returns the moves the selected piece had when it was selected.
    pub fn snapshot(&self) -> &MoveList {
        &self.snapshot
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Returns true if the side to move has a capture somewhere.
    ///
    /// Advisory only: captures are never forced.
    pub fn must_capture(&self) -> bool {
        self.must_capture
    }

    pub fn result(&self) -> Option<GameResult> {
        self.position.result()
    }

    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.position.result().map(|r| r.winner)
    }

    pub fn phase(&self) -> Phase {
        if self.position.is_game_over() {
            Phase::GameOver
        } else if self.position.chain().is_some() {
            Phase::CaptureChain
        } else if self.selected.is_some() {
            Phase::PieceSelected
        } else {
            Phase::AwaitingSelection
        }
    }

    /// Selects the piece on `sq`.
    ///
    /// Succeeds only with nothing selected, on a piece of the side to move
    /// that has at least one legal move.
    pub fn select(&mut self, sq: Square) -> bool {
        if self.phase() != Phase::AwaitingSelection {
            trace!(%sq, phase = ?self.phase(), "selection ignored");
            return false;
        }

        let moves = self.position.moves_from(sq);
        if moves.is_empty() {
            trace!(%sq, player = %self.current_player(), "nothing to select");
            return false;
        }

        trace!(%sq, moves = moves.len(), "piece selected");
        self.selected = Some(sq);
        self.snapshot = moves.clone();
        self.valid_moves = moves;
        self.must_capture = has_captures_available(self.board(), self.current_player());
        true
    }

    /// Clears the selection. Not allowed while a capture chain is open.
    pub fn deselect(&mut self) -> bool {
        if self.phase() != Phase::PieceSelected {
            return false;
        }
        self.clear_selection();
        true
    }

    /// Plays the cached move of the selected piece that lands on `to`.
    pub fn apply_chosen_destination(&mut self, to: Square) -> bool {
        match self.valid_moves.find_destination(to) {
            Some(&mv) => self.apply_move(mv),
            None => false,
        }
    }

    /// Plays `mv`, which must be one of the selected piece's cached moves.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        if self.is_game_over()
            || self.selected != Some(mv.from())
            || !self.valid_moves.contains(&mv)
        {
            trace!(%mv, "move rejected");
            return false;
        }

        let mover = self.current_player();
        let max_captures = self.snapshot.max_capture_count();
        let continuation = self.position.apply(mv, max_captures);
        self.last_move = Some((mv.from(), mv.to()));
        debug!(%mv, player = %mover, ?continuation, "move applied");

        match continuation {
            Continuation::ChainContinues => {
                self.selected = Some(mv.to());
                self.valid_moves = self.position.moves_from(mv.to());
            }
            Continuation::TurnEnded => {
                self.clear_selection();
                self.must_capture =
                    has_captures_available(self.board(), self.current_player());
            }
        }

        if let Some(result) = self.position.result() {
            info!(winner = %result.winner, reason = ?result.reason, "game over");
            self.clear_selection();
        }
        true
    }

    /// Handles a click on `sq` the way a board UI would.
    ///
    /// With nothing selected the click selects. With a piece selected, a
    /// click on one of its destinations plays that move and any other click
    /// drops the selection. During a capture chain only destinations count.
    pub fn click(&mut self, sq: Square) -> bool {
        match self.phase() {
            Phase::GameOver => false,
            Phase::AwaitingSelection => self.select(sq),
            Phase::PieceSelected => {
                if self.apply_chosen_destination(sq) {
                    true
                } else {
                    self.deselect()
                }
            }
            Phase::CaptureChain => self.apply_chosen_destination(sq),
        }
    }

    /// Returns the renderer's view of the session.
    pub fn status(&self) -> SessionStatus {
        let result = self.position.result();
        SessionStatus {
            current_player: self.current_player(),
            phase: self.phase(),
            game_over: result.is_some(),
            winner: result.map(|r| r.winner),
            win_reason: result.map(|r| r.reason),
            selected: self.selected,
            legal_moves: self.valid_moves.as_slice().to_vec(),
            must_capture: self.must_capture,
            last_move: self.last_move,
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
        self.snapshot.clear();
    }
}
