//! Checkers in the terminal.
//!
//! `selfplay` lets the AI play both sides; `play` pits a human, typing the
//! squares they would click, against the AI; `versus` is two humans at one
//! terminal.

mod play;
mod selfplay;

use checkers_core::Color;
use checkers_engine::{CaptureChains, GameConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Checkers against a minimax AI")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "checkers.toml")]
    config: PathBuf,

    /// AI search depth (1-5), overrides the config file
    #[arg(short, long)]
    difficulty: Option<u8>,

    /// How capture chains are offered, overrides the config file
    #[arg(long, value_enum)]
    chains: Option<ChainsArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the AI play both sides
    Selfplay {
        /// Stop after this many moves
        #[arg(long, default_value = "300")]
        max_plies: u32,
        /// Print the game record as JSON instead of the final board
        #[arg(long)]
        json: bool,
    },
    /// Play against the AI
    Play {
        /// The side you play
        #[arg(long, value_enum, default_value = "red")]
        side: SideArg,
    },
    /// Two players at the same terminal
    Versus,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChainsArg {
    Expanded,
    Stepwise,
}

impl From<ChainsArg> for CaptureChains {
    fn from(arg: ChainsArg) -> Self {
        match arg {
            ChainsArg::Expanded => CaptureChains::Expanded,
            ChainsArg::Stepwise => CaptureChains::Stepwise,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Red,
    Black,
}

impl From<SideArg> for Color {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Red => Color::Red,
            SideArg::Black => Color::Black,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let mut config = GameConfig::load(&cli.config)?;
    if let Some(difficulty) = cli.difficulty {
        config.set_ai_difficulty(difficulty)?;
    }
    if let Some(chains) = cli.chains {
        config.capture_chains = chains.into();
    }
    tracing::info!(
        difficulty = config.ai_difficulty,
        chains = ?config.capture_chains,
        "configuration loaded"
    );

    match cli.command {
        Commands::Selfplay { max_plies, json } => selfplay::run(&config, max_plies, json),
        Commands::Play { side } => play::run(config, Some(Color::from(side).opposite())),
        Commands::Versus => play::run(config, None),
    }
}
