//! Humans at the terminal, one typed click at a time, against the AI or
//! each other.

use checkers_ai::take_ai_turn;
use checkers_core::{Color, Square};
use checkers_engine::{GameConfig, GameSession, Phase};
use std::io::{self, BufRead, Write};

/// Plays on stdin and stdout. With `ai` set the AI takes that side,
/// otherwise both sides are typed in.
pub fn run(config: GameConfig, ai: Option<Color>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(config, ai, stdin.lock(), stdout.lock())?;
    Ok(())
}

fn play<R: BufRead, W: Write>(
    config: GameConfig,
    ai: Option<Color>,
    input: R,
    mut out: W,
) -> anyhow::Result<GameSession> {
    let config = GameConfig {
        ai_color: ai.unwrap_or(config.ai_color),
        ..config
    };
    let mut game = config.new_session();
    let mut lines = input.lines();

    match ai {
        Some(ai) => writeln!(out, "You play {}.", ai.opposite())?,
        None => writeln!(out, "Red and Black take turns.")?,
    }
    writeln!(out, "Enter squares as `row col`, `q` to quit.")?;
    loop {
        if let Some(result) = game.result() {
            write!(out, "{}", game.board())?;
            writeln!(out, "{} wins ({:?})", result.winner, result.reason)?;
            return Ok(game);
        }

        if ai == Some(game.current_player()) {
            if take_ai_turn(&mut game, &config) == 0 {
                writeln!(out, "The AI has no move.")?;
                return Ok(game);
            }
            continue;
        }

        print_prompt(&game, &mut out)?;
        let Some(line) = lines.next() else {
            return Ok(game);
        };
        let line = line?;
        let line = line.trim();
        if line == "q" {
            return Ok(game);
        }

        match parse_square(line) {
            Some(sq) => {
                if !game.click(sq) {
                    writeln!(out, "Nothing to do on {sq}.")?;
                }
            }
            None => writeln!(out, "Expected `row col` with both in 0-7.")?,
        }
    }
}

fn print_prompt<W: Write>(game: &GameSession, out: &mut W) -> io::Result<()> {
    write!(out, "{}", game.board())?;
    if let Some((from, to)) = game.last_move() {
        writeln!(out, "Last move: {from} -> {to}")?;
    }
    match game.phase() {
        Phase::PieceSelected | Phase::CaptureChain => {
            let targets: Vec<String> = game
                .valid_moves()
                .iter()
                .map(|m| m.to().to_string())
                .collect();
            if let Some(sq) = game.selected() {
                writeln!(out, "Selected {sq}, moves to: {}", targets.join(" "))?;
            }
            if game.phase() == Phase::CaptureChain {
                writeln!(out, "Keep capturing.")?;
            }
        }
        Phase::AwaitingSelection if game.must_capture() => {
            writeln!(out, "A capture is available.")?;
        }
        _ => {}
    }
    write!(out, "{}> ", game.current_player())?;
    out.flush()
}

fn parse_square(line: &str) -> Option<Square> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',');
    let mut next = || parts.find(|p| !p.is_empty())?.parse::<i8>().ok();
    let row = next()?;
    let col = next()?;
    Square::try_new(row, col)
}
