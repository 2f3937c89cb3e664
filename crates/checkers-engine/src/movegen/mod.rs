//! Move generation.
//!
//! Moves are generated per source square. The legal list for a piece is its
//! plain moves followed by its captures; capturing is never compulsory.

mod captures;

use crate::rules::CaptureChains;
use crate::Board;
use checkers_core::{Color, Move, Square, DIAGONALS};

pub use captures::{can_jump, capture_chains, for_each_jump, single_jumps};

/// An ordered list of candidate moves.
///
/// Capture trees with flying kings have no small fixed bound, so the list
/// grows on the heap.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Returns true if the list holds this exact move.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Returns the first move landing on `to`.
    pub fn find_destination(&self, to: Square) -> Option<&Move> {
        self.moves.iter().find(|m| m.to() == to)
    }

    /// Returns the largest capture count in the list (0 if nothing captures).
    pub fn max_capture_count(&self) -> u8 {
        self.moves
            .iter()
            .map(Move::capture_count)
            .max()
            .unwrap_or(0)
    }

    /// Appends every move of `other` whose destination is not already listed.
    pub fn extend_new_destinations(&mut self, other: MoveList) {
        for m in other.moves {
            if self.find_destination(m.to()).is_none() {
                self.moves.push(m);
            }
        }
    }

    /// Appends every move of `other`.
    pub fn append(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }

    /// Returns an iterator over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl From<Vec<Move>> for MoveList {
    fn from(moves: Vec<Move>) -> Self {
        MoveList { moves }
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Pushes the non-capturing moves of the piece on `from`.
///
/// A man steps one square diagonally forward. A king slides any distance
/// along each diagonal until the first occupied square or the edge.
pub fn plain_moves(board: &Board, from: Square, moves: &mut MoveList) {
    let Some(piece) = board.piece_at(from) else {
        return;
    };

    if piece.is_king() {
        for dir in DIAGONALS {
            let mut step = 1;
            while let Some(to) = from.offset(dir, step) {
                if !board.is_vacant(to) {
                    break;
                }
                moves.push(Move::plain(from, to));
                step += 1;
            }
        }
    } else {
        let forward = piece.color.forward();
        for dc in [-1, 1] {
            if let Some(to) = from.offset((forward, dc), 1) {
                if board.is_vacant(to) {
                    moves.push(Move::plain(from, to));
                }
            }
        }
    }
}

/// Returns the capture moves of the piece on `from`.
///
/// With [`CaptureChains::Expanded`] every node of the capture tree is a
/// move; with [`CaptureChains::Stepwise`] only single jumps are.
pub fn piece_captures(board: &Board, from: Square, chains: CaptureChains) -> MoveList {
    let mut moves = MoveList::new();
    match chains {
        CaptureChains::Expanded => capture_chains(board, from, &mut moves),
        CaptureChains::Stepwise => single_jumps(board, from, &mut moves),
    }
    moves
}

/// Returns the legal moves of the piece on `from` when it starts a turn.
///
/// Plain moves come first. Captures follow, skipping any whose destination
/// is already listed, so each destination maps to a single move.
pub fn valid_moves(board: &Board, from: Square, chains: CaptureChains) -> MoveList {
    let mut moves = MoveList::new();
    plain_moves(board, from, &mut moves);
    moves.extend_new_destinations(piece_captures(board, from, chains));
    moves
}

/// Returns the moves that continue an active capture chain from `from`.
///
/// Only captures are allowed mid-chain, and no destination deduplication
/// is applied.
pub fn chain_continuations(board: &Board, from: Square, chains: CaptureChains) -> MoveList {
    piece_captures(board, from, chains)
}

/// Returns every legal move for `color`, scanning the board row by row.
pub fn side_moves(board: &Board, color: Color, chains: CaptureChains) -> MoveList {
    let mut moves = MoveList::new();
    for from in board.pieces(color) {
        moves.append(valid_moves(board, from, chains));
    }
    moves
}

/// Returns true if any piece of `color` can capture.
///
/// Informational only: capturing is never forced.
pub fn has_captures_available(board: &Board, color: Color) -> bool {
    board.pieces(color).into_iter().any(|sq| can_jump(board, sq))
}

/// Returns true if any piece of `color` has a legal move.
pub fn has_any_valid_moves(board: &Board, color: Color) -> bool {
    board.pieces(color).into_iter().any(|from| {
        let mut plain = MoveList::new();
        plain_moves(board, from, &mut plain);
        !plain.is_empty() || can_jump(board, from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::Piece;

    const EXPANDED: CaptureChains = CaptureChains::Expanded;

    #[test]
    fn man_moves_forward_only() {
        let board = Board::from_diagram("8/8/8/8/8/4r3/8/8").unwrap();
        let mut moves = MoveList::new();
        plain_moves(&board, Square::new(5, 4), &mut moves);
        let targets: Vec<Square> = moves.iter().map(|m| m.to()).collect();
        assert_eq!(targets, vec![Square::new(4, 3), Square::new(4, 5)]);

        let board = Board::from_diagram("8/8/3b4/8/8/8/8/8").unwrap();
        let mut moves = MoveList::new();
        plain_moves(&board, Square::new(2, 3), &mut moves);
        let targets: Vec<Square> = moves.iter().map(|m| m.to()).collect();
        assert_eq!(targets, vec![Square::new(3, 2), Square::new(3, 4)]);
    }

    #[test]
    fn man_on_edge_has_one_step() {
        let board = Board::from_diagram("8/8/8/8/8/r7/8/8").unwrap();
        let moves = valid_moves(&board, Square::new(5, 0), EXPANDED);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), Square::new(4, 1));
    }

    #[test]
    fn king_slides_until_blocked() {
        // King at (4,3); own man at (2,1) blocks up-left after one square.
        let board = Board::from_diagram("8/8/1r6/8/3R4/8/8/8").unwrap();
        let mut moves = MoveList::new();
        plain_moves(&board, Square::new(4, 3), &mut moves);
        let targets: Vec<Square> = moves.iter().map(|m| m.to()).collect();
        assert_eq!(
            targets,
            vec![
                Square::new(3, 2),
                Square::new(3, 4),
                Square::new(2, 5),
                Square::new(1, 6),
                Square::new(0, 7),
                Square::new(5, 2),
                Square::new(6, 1),
                Square::new(7, 0),
                Square::new(5, 4),
                Square::new(6, 5),
                Square::new(7, 6),
            ]
        );
    }

    #[test]
    fn valid_moves_plain_then_captures() {
        let board = Board::from_diagram("8/8/8/8/3b4/4r3/8/8").unwrap();
        let moves = valid_moves(&board, Square::new(5, 4), EXPANDED);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], Move::plain(Square::new(5, 4), Square::new(4, 5)));
        assert!(moves[1].is_capture());
        assert_eq!(moves[1].to(), Square::new(3, 2));
        assert_eq!(moves.max_capture_count(), 1);
    }

    #[test]
    fn valid_moves_deduplicate_destinations() {
        // The red king on (4,3) can slide to (2,5), and can also end a
        // three-piece chain (3,2) -> (1,2) -> (1,4) on (2,5).
        let board = Board::from_diagram("8/2b1b3/8/2b5/3R4/8/8/8").unwrap();
        let from = Square::new(4, 3);

        let captures = piece_captures(&board, from, EXPANDED);
        assert_eq!(captures.len(), 6);
        assert!(captures
            .iter()
            .any(|m| m.to() == Square::new(2, 5) && m.capture_count() == 3));

        let moves = valid_moves(&board, from, EXPANDED);
        assert_eq!(moves.len(), 10 + 5);
        let to_target: Vec<&Move> = moves
            .iter()
            .filter(|m| m.to() == Square::new(2, 5))
            .collect();
        assert_eq!(to_target.len(), 1);
        assert!(!to_target[0].is_capture());
        assert_eq!(moves.max_capture_count(), 3);

        // Mid-chain lists keep every capture.
        assert_eq!(chain_continuations(&board, from, EXPANDED).len(), 6);
    }

    #[test]
    fn chain_continuations_are_captures_only() {
        let board = Board::from_diagram("8/8/8/8/3b4/4r3/8/8").unwrap();
        let moves = chain_continuations(&board, Square::new(5, 4), EXPANDED);
        assert_eq!(moves.len(), 1);
        assert!(moves.iter().all(Move::is_capture));
    }

    #[test]
    fn stepwise_offers_single_jumps() {
        let board = Board::from_diagram("8/8/8/8/3b4/8/1b6/r7").unwrap();
        let from = Square::new(7, 0);
        let expanded = piece_captures(&board, from, CaptureChains::Expanded);
        let stepwise = piece_captures(&board, from, CaptureChains::Stepwise);
        assert_eq!(expanded.len(), 2);
        assert_eq!(stepwise.len(), 1);
        assert_eq!(stepwise[0], expanded[0]);
    }

    #[test]
    fn side_moves_cover_every_piece() {
        let board = Board::startpos();
        let red = side_moves(&board, Color::Red, EXPANDED);
        // Only row 5 men can move: (5,0) has one step, the other three have two.
        assert_eq!(red.len(), 7);
        assert!(red.iter().all(|m| m.from().row() == 5));
        let black = side_moves(&board, Color::Black, EXPANDED);
        assert_eq!(black.len(), 7);
    }

    #[test]
    fn no_captures_from_startpos() {
        let board = Board::startpos();
        for sq in board.occupied() {
            assert!(piece_captures(&board, sq, EXPANDED).is_empty());
        }
        assert!(!has_captures_available(&board, Color::Red));
        assert!(!has_captures_available(&board, Color::Black));
    }

    #[test]
    fn blocked_side_has_no_moves() {
        // Black man on (0,1) is boxed in by red men that it cannot jump.
        let board = Board::from_diagram("1b6/R1R5/3R4/8/8/8/8/8").unwrap();
        assert!(!has_any_valid_moves(&board, Color::Black));
        assert!(has_any_valid_moves(&board, Color::Red));
    }

    #[test]
    fn empty_square_yields_nothing() {
        let board = Board::startpos();
        let sq = Square::new(4, 3);
        assert_eq!(board.piece_at(sq), None::<Piece>);
        assert!(valid_moves(&board, sq, EXPANDED).is_empty());
    }
}
