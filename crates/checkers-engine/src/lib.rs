//! Checkers rules engine with bitboard representation.
//!
//! This crate provides:
//! - [`Bitboard`] and [`Board`] - the 8x8 grid as three 64-bit masks
//! - [`movegen`] - plain moves, flying-king captures and capture chains
//! - [`RuleSet`] and [`Checkers`] - the rules the game state consults
//! - [`Position`] - copyable turn state, used directly by search
//! - [`GameSession`] - the selection-driven state machine a front end talks to
//! - [`GameConfig`] - settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use checkers_engine::{GameSession, Phase};
//! use checkers_core::{Color, Square};
//!
//! let mut game = GameSession::new();
//! assert!(game.select(Square::new(5, 2)));
//! assert!(game.apply_chosen_destination(Square::new(4, 3)));
//! assert_eq!(game.current_player(), Color::Black);
//! assert_eq!(game.phase(), Phase::AwaitingSelection);
//! ```

mod bitboard;
mod board;
pub mod config;
mod game;
pub mod movegen;
mod position;
pub mod rules;

pub use bitboard::Bitboard;
pub use board::{crown_on_arrival, Board};
pub use config::{ConfigError, GameConfig};
pub use game::{GameSession, Phase, SessionStatus};
pub use movegen::{
    chain_continuations, has_any_valid_moves, has_captures_available, piece_captures,
    side_moves, valid_moves, MoveList,
};
pub use position::{CaptureChain, Continuation, MoveGroup, Position};
pub use rules::{CaptureChains, Checkers, GameResult, RuleSet, WinReason};
