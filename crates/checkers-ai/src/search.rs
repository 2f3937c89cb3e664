//! Fixed-depth minimax.
//!
//! Every node is a copy of the parent [`Position`] with one move applied, so
//! the search never mutates the state it was started from. There is no
//! pruning: each line is searched to the full depth.

use checkers_core::{Color, Move};
use checkers_engine::{MoveGroup, Position};
use std::time::{Duration, Instant};

use crate::evaluation::evaluate_state;

/// Statistics of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Positions visited, the root included.
    pub nodes: u64,
    pub depth: u8,
    /// Score of the chosen line from the AI's side.
    pub score: i32,
    pub elapsed: Duration,
}

/// Search state.
#[derive(Debug)]
pub struct Searcher {
    ai_color: Color,
    nodes: u64,
}

impl Searcher {
    /// Creates a searcher that maximizes for `ai_color`.
    pub fn new(ai_color: Color) -> Self {
        Searcher { ai_color, nodes: 0 }
    }

    pub fn ai_color(&self) -> Color {
        self.ai_color
    }

    /// Returns how many positions have been visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `position` to `depth` plies and returns the best score with
    /// the move that reaches it.
    ///
    /// A node maximizes when the AI is to move and minimizes otherwise, so a
    /// capture chain that keeps the same side on move stays on the same side
    /// of the tree. At depth 0, at a finished game, or with no moves the
    /// static evaluation is returned with no move.
    pub fn minimax(&mut self, position: &Position, depth: u8) -> (i32, Option<Move>) {
        self.nodes += 1;
        if depth == 0 || position.is_game_over() {
            return (self.evaluate(position), None);
        }
        let groups = position.move_groups();
        self.search_moves(position, &groups, depth)
    }

    /// Searches the given candidate moves of `position` to `depth` plies.
    ///
    /// The caller supplies the root candidates, for example the cached moves
    /// of a piece that is already selected. Ties go to the earliest move.
    pub fn search_moves(
        &mut self,
        position: &Position,
        groups: &[MoveGroup],
        depth: u8,
    ) -> (i32, Option<Move>) {
        if depth == 0 || groups.iter().all(|g| g.moves.is_empty()) {
            return (self.evaluate(position), None);
        }

        let maximizing = position.side_to_move() == self.ai_color;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for group in groups {
            for &mv in &group.moves {
                let mut child = *position;
                child.apply(mv, group.max_captures);
                let (score, _) = self.minimax(&child, depth - 1);

                let better = if maximizing {
                    score > best_score
                } else {
                    score < best_score
                };
                if better {
                    best_score = score;
                    best_move = Some(mv);
                }
            }
        }

        (best_score, best_move)
    }

    /// Runs a full search from `position` and reports the result.
    pub fn search(&mut self, position: &Position, depth: u8) -> (Option<Move>, SearchStats) {
        let groups = position.move_groups();
        self.search_root(position, &groups, depth)
    }

    /// Like [`search`](Self::search), with explicit root candidates.
    pub fn search_root(
        &mut self,
        position: &Position,
        groups: &[MoveGroup],
        depth: u8,
    ) -> (Option<Move>, SearchStats) {
        let start = Instant::now();
        let nodes_before = self.nodes;
        self.nodes += 1;
        let (score, best) = self.search_moves(position, groups, depth);
        let stats = SearchStats {
            nodes: self.nodes - nodes_before,
            depth,
            score,
            elapsed: start.elapsed(),
        };
        (best, stats)
    }

    fn evaluate(&self, position: &Position) -> i32 {
        evaluate_state(position.board(), self.ai_color)
    }
}
