//! AI against itself.

use checkers_ai::{apply_ai_move, search_session};
use checkers_core::{Color, Move};
use checkers_engine::{CaptureChains, GameConfig, WinReason};
use serde::Serialize;

/// One move of a self-play game with the search behind it.
#[derive(Serialize)]
struct PlyRecord {
    ply: u32,
    player: Color,
    #[serde(rename = "move")]
    mv: Move,
    score: i32,
    nodes: u64,
}

/// A finished self-play game.
#[derive(Serialize)]
struct GameRecord {
    difficulty: u8,
    capture_chains: CaptureChains,
    plies: Vec<PlyRecord>,
    winner: Option<Color>,
    reason: Option<WinReason>,
    final_board: String,
}

pub fn run(config: &GameConfig, max_plies: u32, json: bool) -> anyhow::Result<()> {
    let mut game = config.new_session();
    let mut plies = Vec::new();

    for ply in 1..=max_plies {
        if game.is_game_over() {
            break;
        }
        let player = game.current_player();
        let (best, stats) = search_session(&game, config.ai_difficulty);
        let Some(mv) = best else {
            tracing::warn!(%player, "no move found, stopping");
            break;
        };
        if !apply_ai_move(&mut game, mv) {
            anyhow::bail!("session rejected searched move {mv}");
        }
        tracing::debug!(ply, %player, %mv, score = stats.score, "played");
        plies.push(PlyRecord {
            ply,
            player,
            mv,
            score: stats.score,
            nodes: stats.nodes,
        });
    }

    let result = game.result();
    if json {
        let record = GameRecord {
            difficulty: config.ai_difficulty,
            capture_chains: config.capture_chains,
            plies,
            winner: result.map(|r| r.winner),
            reason: result.map(|r| r.reason),
            final_board: game.board().to_diagram(),
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", game.board());
        match result {
            Some(result) => println!(
                "{} wins ({:?}) after {} moves",
                result.winner,
                result.reason,
                plies.len()
            ),
            None => println!("No result after {} moves", plies.len()),
        }
    }
    Ok(())
}
