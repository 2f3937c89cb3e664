//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the engine:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] and [`CaptureList`] for move representation
//! - Board diagram parsing and serialization

mod color;
mod diagram;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use diagram::{DiagramError, DiagramParser};
pub use mov::{CaptureList, Move, MoveKind};
pub use piece::{Piece, PieceKind};
pub use square::{Square, DIAGONALS};
