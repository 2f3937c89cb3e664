//! Driving the computer's turn through a [`GameSession`].

use checkers_core::Move;
use checkers_engine::{GameConfig, GameSession, MoveGroup, Phase};
use tracing::{debug, info, warn};

use crate::search::{SearchStats, Searcher};

/// Searches the session's position for the side to move.
///
/// If a piece is already selected, or a capture chain is open, only that
/// piece's cached moves are candidates at the root. The session itself is
/// not touched.
pub fn search_session(session: &GameSession, depth: u8) -> (Option<Move>, SearchStats) {
    let position = session.position();
    let groups = match session.selected() {
        Some(from) => vec![MoveGroup {
            from,
            moves: session.valid_moves().clone(),
            max_captures: session.snapshot().max_capture_count(),
        }],
        None => position.move_groups(),
    };

    let mut searcher = Searcher::new(session.current_player());
    let (best, stats) = searcher.search_root(position, &groups, depth);
    debug!(
        nodes = stats.nodes,
        depth = stats.depth,
        score = stats.score,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "search finished"
    );
    (best, stats)
}

/// Returns the best move for the side to move, searched `depth` plies deep.
pub fn compute_ai_move(session: &GameSession, depth: u8) -> Option<Move> {
    search_session(session, depth).0
}

/// Plays `mv` through the same select-then-apply path as a human.
///
/// A different piece that happens to be selected is deselected first.
/// Returns false if the session refuses the move.
pub fn apply_ai_move(session: &mut GameSession, mv: Move) -> bool {
    if session.selected() != Some(mv.from()) {
        if session.phase() == Phase::PieceSelected {
            session.deselect();
        }
        if !session.select(mv.from()) {
            return false;
        }
    }
    session.apply_move(mv)
}

/// Plays the computer's whole turn, including every jump of an open capture
/// chain. Returns how many moves were applied.
///
/// Does nothing unless `config.ai_color` is to move. If the search finds no
/// move the turn is skipped.
pub fn take_ai_turn(session: &mut GameSession, config: &GameConfig) -> usize {
    let mut applied = 0;
    while !session.is_game_over() && session.current_player() == config.ai_color {
        let Some(mv) = compute_ai_move(session, config.ai_difficulty) else {
            warn!(player = %config.ai_color, "AI found no move, skipping turn");
            break;
        };
        if !apply_ai_move(session, mv) {
            warn!(%mv, "AI move rejected, skipping turn");
            break;
        }
        info!(%mv, player = %config.ai_color, "AI moved");
        applied += 1;

        if session.phase() != Phase::CaptureChain {
            break;
        }
    }
    applied
}
