//! Computer opponent for the checkers engine.
//!
//! The AI is a plain minimax search to a fixed depth over the engine's own
//! move generation, scored by material alone:
//! - [`evaluate_state`] - material balance from the AI's point of view
//! - [`Searcher`] - exhaustive fixed-depth minimax, no pruning
//! - [`compute_ai_move`], [`apply_ai_move`], [`take_ai_turn`] - the driver a
//!   game loop calls on the computer's turn
//!
//! # Example
//!
//! ```
//! use checkers_ai::compute_ai_move;
//! use checkers_engine::GameSession;
//!
//! let game = GameSession::new();
//! let mv = compute_ai_move(&game, 2).expect("the opening has moves");
//! assert_eq!(mv.from().row(), 5);
//! ```

mod driver;
mod evaluation;
mod search;

pub use driver::{apply_ai_move, compute_ai_move, search_session, take_ai_turn};
pub use evaluation::{evaluate_state, material, KING_VALUE, MAN_VALUE};
pub use search::{SearchStats, Searcher};
