//! Property tests over random games played through the session.

use checkers_core::{Color, Square};
use checkers_engine::{Board, CaptureChains, Checkers, GameSession, Phase};
use proptest::prelude::*;

fn assert_board_invariants(board: &Board) {
    for sq in board.occupied() {
        assert!(sq.is_playable(), "piece on unplayable {sq}");
    }
    for color in Color::ALL {
        for sq in board.men(color) {
            assert_ne!(
                sq.row(),
                color.promotion_row(),
                "uncrowned {color} man on {sq}"
            );
        }
    }
}

/// Plays `choices` as indices into the candidate pieces and moves, checking
/// the per-move properties after every move.
fn play_out(chains: CaptureChains, choices: &[usize]) {
    let mut game = GameSession::with_rules(Checkers::new(chains));

    for &choice in choices {
        match game.phase() {
            Phase::GameOver => break,
            Phase::AwaitingSelection => {
                let groups = game.position().move_groups();
                assert!(!groups.is_empty(), "side to move is stuck but game not over");
                let from = groups[choice % groups.len()].from;
                assert!(game.select(from));
            }
            Phase::PieceSelected | Phase::CaptureChain => {}
        }

        let mv = game.valid_moves()[choice % game.valid_moves().len()];
        let mover = game.current_player();
        let before = *game.board();
        assert!(game.apply_move(mv));
        let after = *game.board();

        assert_board_invariants(&after);

        // Exactly the listed squares are emptied, and only opponent pieces.
        for &sq in mv.captured() {
            assert_eq!(before.piece_at(sq).map(|p| p.color), Some(mover.opposite()));
            assert!(after.is_vacant(sq));
        }
        assert_eq!(
            before.piece_count(mover.opposite()) - after.piece_count(mover.opposite()),
            u32::from(mv.capture_count())
        );
        assert_eq!(before.piece_count(mover), after.piece_count(mover));
        for index in 0..64 {
            let sq = Square::from_index(index).unwrap();
            if sq == mv.from() || sq == mv.to() || mv.captured().contains(&sq) {
                continue;
            }
            assert_eq!(before.piece_at(sq), after.piece_at(sq));
        }

        // A move either keeps the chain open for the same side or passes
        // the turn, never both.
        match game.phase() {
            Phase::CaptureChain => {
                assert_eq!(game.current_player(), mover);
                assert_eq!(game.selected(), Some(mv.to()));
                assert!(!game.valid_moves().is_empty());
                assert!(game.valid_moves().iter().all(|m| m.is_capture()));
            }
            Phase::AwaitingSelection => {
                assert_eq!(game.current_player(), mover.opposite());
                assert_eq!(game.selected(), None);
                assert!(game.valid_moves().is_empty());
            }
            Phase::GameOver => {
                assert!(game.winner().is_some());
                assert_eq!(game.selected(), None);
            }
            Phase::PieceSelected => panic!("selection survived a move"),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn expanded_playouts_hold_invariants(choices in prop::collection::vec(0usize..1000, 1..120)) {
        play_out(CaptureChains::Expanded, &choices);
    }

    #[test]
    fn stepwise_playouts_hold_invariants(choices in prop::collection::vec(0usize..1000, 1..120)) {
        play_out(CaptureChains::Stepwise, &choices);
    }
}
