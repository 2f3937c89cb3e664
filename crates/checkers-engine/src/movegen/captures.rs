//! Capture generation: single jumps and multi-jump chains.
//!
//! Men capture one square diagonally in any direction. Kings fly: they may
//! cross any number of empty squares, jump exactly one opponent piece, and
//! land on any empty square beyond it before the next occupied square.

use crate::board::crown_on_arrival;
use crate::Board;
use checkers_core::{CaptureList, Move, Piece, Square, DIAGONALS};

use super::MoveList;

/// Calls `f(landing, jumped)` for every single jump `piece` can make from `from`.
///
/// Jumps are visited in [`DIAGONALS`] order; a king's landings along one
/// diagonal are visited nearest first.
pub fn for_each_jump(
    board: &Board,
    from: Square,
    piece: Piece,
    mut f: impl FnMut(Square, Square),
) {
    for dir in DIAGONALS {
        if piece.is_king() {
            let mut jumped = None;
            let mut step = 1;
            while let Some(sq) = from.offset(dir, step) {
                match board.piece_at(sq) {
                    None => {
                        if let Some(over) = jumped {
                            f(sq, over);
                        }
                    }
                    Some(other) if other.color == piece.color => break,
                    Some(_) => {
                        if jumped.is_some() {
                            break;
                        }
                        jumped = Some(sq);
                    }
                }
                step += 1;
            }
        } else {
            let (Some(over), Some(landing)) = (from.offset(dir, 1), from.offset(dir, 2)) else {
                continue;
            };
            let opponent = board
                .piece_at(over)
                .is_some_and(|other| other.color != piece.color);
            if opponent && board.is_vacant(landing) {
                f(landing, over);
            }
        }
    }
}

/// Returns true if the piece on `from` has at least one jump.
pub fn can_jump(board: &Board, from: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    let mut found = false;
    for_each_jump(board, from, piece, |_, _| found = true);
    found
}

/// Pushes one capture move per single jump of the piece on `from`.
pub fn single_jumps(board: &Board, from: Square, moves: &mut MoveList) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    for_each_jump(board, from, piece, |landing, over| {
        moves.push(Move::capture(from, landing, CaptureList::new().with(over)));
    });
}

/// Pushes every node of the capture tree rooted at `from`.
///
/// Each jump is played on a scratch copy of the board (jumped piece removed,
/// mover relocated and crowned if it reached its promotion row) and the
/// search continues from the landing square. Partial chains are emitted as
/// moves of their own, before their extensions.
pub fn capture_chains(board: &Board, from: Square, moves: &mut MoveList) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };
    extend_chain(board, from, from, piece, CaptureList::new(), moves);
}

fn extend_chain(
    board: &Board,
    origin: Square,
    at: Square,
    piece: Piece,
    taken: CaptureList,
    moves: &mut MoveList,
) {
    for_each_jump(board, at, piece, |landing, over| {
        let captured = taken.with(over);
        moves.push(Move::capture(origin, landing, captured));

        let mut next = *board;
        next.clear(at);
        next.clear(over);
        let piece = crown_on_arrival(piece, landing);
        next.set(landing, piece);
        extend_chain(&next, origin, landing, piece, captured, moves);
    });
}
